use crate::domain::model::{GenerationRequest, ImageSource};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for generated images. `write_file` returns the location written.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// A hosted text-to-image service.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<ImageSource>>;
}
