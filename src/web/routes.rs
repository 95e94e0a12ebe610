//! Route definitions and handlers.

use crate::core::generator::ImageGenerator;
use crate::core::{GeneratedImage, ImageProvider};
use crate::web::error::HttpError;
use crate::web::page::{self, PageView};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub struct AppState<P: ImageProvider> {
    pub generator: Arc<ImageGenerator<P>>,
}

impl<P: ImageProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateInput {
    #[serde(default)]
    pub description: String,
}

pub fn create_router<P: ImageProvider + 'static>(generator: Arc<ImageGenerator<P>>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/generate", post(generate_page::<P>))
        .route("/api/generate", post(generate_api::<P>))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { generator })
}

async fn health() -> &'static str {
    "OK"
}

async fn index() -> Html<String> {
    Html(page::render(&PageView::default()))
}

fn data_uri(image: &GeneratedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.format.mime_type(),
        STANDARD.encode(&image.bytes)
    )
}

async fn generate_page<P: ImageProvider + 'static>(
    State(state): State<AppState<P>>,
    Form(input): Form<GenerateInput>,
) -> (StatusCode, Html<String>) {
    let mut view = PageView {
        description: input.description,
        ..PageView::default()
    };

    let result = state.generator.get_images(&view.description).await;
    match result {
        Ok(image) => {
            view.image_data_uri = Some(data_uri(&image));
            (StatusCode::OK, Html(page::render(&view)))
        }
        Err(e) => {
            tracing::warn!("Generation failed: {} ({})", e, e.recovery_suggestion());
            let http_error = HttpError::from(e);
            view.error = Some(http_error.message().to_string());
            (http_error.status(), Html(page::render(&view)))
        }
    }
}

async fn generate_api<P: ImageProvider + 'static>(
    State(state): State<AppState<P>>,
    Json(input): Json<GenerateInput>,
) -> Result<Response, HttpError> {
    let image = state.generator.get_images(&input.description).await.map_err(|e| {
        tracing::warn!("Generation failed: {} ({})", e, e.recovery_suggestion());
        HttpError::from(e)
    })?;

    Ok((
        [(header::CONTENT_TYPE, image.format.mime_type())],
        image.bytes,
    )
        .into_response())
}
