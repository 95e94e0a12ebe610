use crate::domain::model::{GenerationRequest, ImageSource};
use crate::domain::ports::ImageProvider;
use crate::utils::error::{DesignerError, Result};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

// Image generation routinely takes tens of seconds.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
    b64_json: Option<String>,
    revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for the `/images/generations` endpoint of an OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(GENERATION_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_base: api_base.into(),
            api_key: api_key.into(),
        })
    }

    /// Builds a client using the key from `OPENAI_API_KEY`.
    pub fn from_env(api_base: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let api_key = validate_required_field(API_KEY_ENV, &api_key)?;
        Self::new(api_base, api_key.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}/images/generations", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl ImageProvider for OpenAiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<ImageSource>> {
        let endpoint = self.endpoint();
        tracing::debug!(
            "Requesting {} image(s) of size {} from {} using model {}",
            request.n,
            request.size,
            endpoint,
            request.model
        );

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Image API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| {
                    if body.is_empty() {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    } else {
                        body
                    }
                });
            return Err(DesignerError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ImagesResponse = response.json().await?;

        payload
            .data
            .into_iter()
            .map(|datum| {
                if let Some(revised) = &datum.revised_prompt {
                    tracing::debug!("Prompt revised by the model: {}", revised);
                }
                match (datum.url, datum.b64_json) {
                    (Some(url), _) => Ok(ImageSource::Url(url)),
                    (None, Some(encoded)) => Ok(ImageSource::Inline(STANDARD.decode(encoded)?)),
                    (None, None) => Err(DesignerError::GenerationError {
                        message: "image entry carries neither url nor b64_json".to_string(),
                    }),
                }
            })
            .collect()
    }
}
