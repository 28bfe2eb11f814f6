//! services/app/src/adapters/vision_mock.rs
//!
//! The simulated AI categorization step of the upload pipeline. Implements
//! the `ImageAnalysisService` port by sleeping through the "processing" time
//! and suggesting the same defaults for every photo.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use wardrobe_core::domain::{Category, ImageUpload, ItemMetadata, Occasion, Season};
use wardrobe_core::ports::{ImageAnalysisService, PortResult};

#[derive(Clone)]
pub struct MockVisionAdapter {
    latency: Duration,
}

impl MockVisionAdapter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl ImageAnalysisService for MockVisionAdapter {
    async fn analyze(&self, upload: &ImageUpload) -> PortResult<ItemMetadata> {
        debug!(file = %upload.file_name, bytes = upload.content.len(), "analyzing upload");
        tokio::time::sleep(self.latency).await;

        Ok(ItemMetadata {
            image_url: None,
            category: Some(Category::Tops),
            sub_category: None,
            color: Some("unknown".to_string()),
            season: Some(vec![Season::Spring]),
            occasion: Some(vec![Occasion::Casual]),
            tags: Some(Vec::new()),
            favorite: Some(false),
        })
    }
}
