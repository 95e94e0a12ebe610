use crate::core::generator::ImageGenerator;
use crate::core::{ImageProvider, Storage};
use crate::utils::error::Result;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generates visuals for a single description and writes all of them to storage.
pub struct HeadlessRun<'a, P: ImageProvider, S: Storage> {
    generator: &'a ImageGenerator<P>,
    storage: S,
    file_stem: String,
}

impl<'a, P: ImageProvider, S: Storage> HeadlessRun<'a, P, S> {
    pub fn new(generator: &'a ImageGenerator<P>, storage: S) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self {
            generator,
            storage,
            file_stem: format!("visual-{}-{}", millis, std::process::id()),
        }
    }

    pub fn with_file_stem(mut self, file_stem: impl Into<String>) -> Self {
        self.file_stem = file_stem.into();
        self
    }

    /// Returns the locations of the written files.
    pub async fn run(&self, visual_description: &str) -> Result<Vec<String>> {
        tracing::info!("Generating visual(s) without the web interface");
        let images = self.generator.fetch_images(visual_description).await?;

        let mut written = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let name = format!(
                "{}-{}.{}",
                self.file_stem,
                index + 1,
                image.format.extension()
            );
            let location = self.storage.write_file(&name, &image.bytes).await?;
            tracing::info!("Saved visual to {} ({} bytes)", location, image.bytes.len());
            written.push(location);
        }

        Ok(written)
    }
}
