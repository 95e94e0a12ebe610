use crate::config::params::Params;
use crate::core::{GeneratedImage, GenerationRequest, ImageDimension, ImageProvider, ImageSource};
use crate::utils::error::{DesignerError, Result};
use crate::utils::validation::Validate;
use reqwest::Client;
use std::time::Duration;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Turns a free-text description into images through an [`ImageProvider`].
pub struct ImageGenerator<P: ImageProvider> {
    provider: P,
    client: Client,
    model: String,
    quality: String,
    n: u32,
    dim: ImageDimension,
}

impl<P: ImageProvider> ImageGenerator<P> {
    /// Fails if `dim` is not one of the sizes in [`ImageDimension::ALLOWED`].
    pub fn new(
        provider: P,
        model: impl Into<String>,
        quality: impl Into<String>,
        n: u32,
        dim: &str,
    ) -> Result<Self> {
        let dim: ImageDimension = dim.parse()?;
        Ok(Self {
            provider,
            client: Client::new(),
            model: model.into(),
            quality: quality.into(),
            n,
            dim,
        })
    }

    /// Validates the parameter file values before building the generator.
    pub fn from_params(provider: P, params: &Params) -> Result<Self> {
        params.validate()?;
        Self::new(
            provider,
            params.image_model.clone(),
            params.image_quality.clone(),
            params.n_image,
            &params.image_dim,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn dim(&self) -> ImageDimension {
        self.dim
    }

    pub fn build_prompt(visual_description: &str) -> String {
        format!(
            "Create a visual following this description: {}",
            visual_description
        )
    }

    /// Asks the provider for `n` images matching the description.
    pub async fn generate_visual(&self, visual_description: &str) -> Result<Vec<ImageSource>> {
        if visual_description.trim().is_empty() {
            return Err(DesignerError::ValidationError {
                message: "Visual description cannot be empty".to_string(),
            });
        }

        let request = GenerationRequest {
            model: self.model.clone(),
            prompt: Self::build_prompt(visual_description.trim()),
            size: self.dim,
            quality: self.quality.clone(),
            n: self.n,
        };

        let sources = self.provider.generate(&request).await?;
        tracing::info!(
            "Generated {} visual(s) for a {}-character description",
            sources.len(),
            visual_description.chars().count()
        );
        Ok(sources)
    }

    /// Downloads the raw bytes behind an image URL.
    pub async fn get_image_from_url(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Downloading generated image from {}", url);
        let response = self
            .client
            .get(url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Generates visuals and downloads every one of them, in provider order.
    pub async fn fetch_images(&self, visual_description: &str) -> Result<Vec<GeneratedImage>> {
        let sources = self.generate_visual(visual_description).await?;

        let mut images = Vec::with_capacity(sources.len());
        for source in sources {
            let bytes = match source {
                ImageSource::Url(url) => self.get_image_from_url(&url).await?,
                ImageSource::Inline(bytes) => bytes,
            };
            images.push(GeneratedImage::from_bytes(bytes)?);
        }
        Ok(images)
    }

    /// Returns the first generated visual.
    pub async fn get_images(&self, visual_description: &str) -> Result<GeneratedImage> {
        self.fetch_images(visual_description)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DesignerError::GenerationError {
                message: "the image service returned no images".to_string(),
            })
    }
}
