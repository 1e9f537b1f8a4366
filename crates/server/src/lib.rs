//! # gridnorm-server
//!
//! HTTP API around the gridnorm normalizer.
//!
//! - `POST /upload` takes a multipart form with a `file` (CSV or Excel
//!   workbook), an optional `headerLabels` JSON object, and the
//!   `considerFirstAsData` / `trimData` flags. It answers with a JSON array of
//!   records.
//! - `GET /output/all` returns the records of the last successful upload.
//! - `GET /ping` and `GET /health` are liveness checks.

pub mod config;
mod error;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use gridnorm_core::{
    normalize_grid_observed, HeaderOverrides, NormalizeOptions, Record, TracingObserver,
};
use gridnorm_sheet::SourceFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared state: the records produced by the most recent successful upload.
#[derive(Clone, Default)]
pub struct AppState {
    last_output: Arc<RwLock<Vec<Record>>>,
}

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// Server status ("ok" when healthy).
    pub status: String,
    /// Server version from Cargo.toml.
    pub version: String,
}

/// Health check endpoint handler.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Ping endpoint handler.
pub async fn ping() -> Json<&'static str> {
    Json("PING ACTIVE")
}

/// Records from the last successful upload (empty before the first one).
pub async fn output_all(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.last_output.read().await.clone())
}

struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

/// Fields of the upload form.
#[derive(Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    header_labels: Option<String>,
    consider_first_as_data: bool,
    trim_data: bool,
}

impl UploadForm {
    async fn read(multipart: &mut Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    form.file = Some(UploadedFile {
                        name: file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                "headerLabels" => form.header_labels = Some(field.text().await?),
                "considerFirstAsData" => form.consider_first_as_data = field.text().await? == "true",
                "trimData" => form.trim_data = field.text().await? == "true",
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }
        Ok(form)
    }

    /// Overrides from `headerLabels`; a missing, blank or `null` field means none.
    fn overrides(&self) -> Result<HeaderOverrides, ApiError> {
        match self.header_labels.as_deref().map(str::trim) {
            None | Some("") => Ok(HeaderOverrides::new()),
            Some(json) => HeaderOverrides::from_json_str(json).map_err(ApiError::InvalidHeaderLabels),
        }
    }

    fn options(&self) -> NormalizeOptions {
        NormalizeOptions::default()
            .with_first_row_as_data(self.consider_first_as_data)
            .with_trim_data(self.trim_data)
    }
}

/// Upload endpoint handler: decode, normalize and remember the result.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<Record>>, ApiError> {
    let mut form = UploadForm::read(&mut multipart).await?;
    let file = form.file.take().ok_or(ApiError::MissingFile)?;
    let overrides = form.overrides()?;
    let options = form.options();
    let format = SourceFormat::from_path(&file.name).map_err(|_| ApiError::UnsupportedFileType)?;

    let records = tokio::task::spawn_blocking(move || {
        let grid = gridnorm_sheet::decode(format, &file.bytes).map_err(ApiError::Decode)?;
        let observer = TracingObserver::with_source(file.name);
        let normalized = normalize_grid_observed(&grid, &overrides, options, &observer);
        Ok::<_, ApiError>(normalized.records())
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    state.last_output.write().await.clone_from(&records);
    Ok(Json(records))
}

/// Create the application router.
///
/// This is separated from `main()` to allow testing.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ping", get(ping))
        .route("/output/all", get(output_all))
        .route("/upload", post(upload))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
