//! Upload handler.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::{debug, info};

use crate::server::error::UploadError;
use crate::server::pages;
use crate::server::state::AppState;

/// Multipart field holding the file.
pub const FILE_FIELD: &str = "datafile";

/// A file pulled out of the form.
struct UploadedFile {
    name: String,
    contents: Vec<u8>,
}

/// `POST /upload`
///
/// Runs the pipeline on the blocking pool and renders the result page.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, UploadError> {
    // A body that is not multipart at all has no file part either.
    let multipart = multipart.map_err(|e| {
        debug!(error = %e, "request is not multipart");
        UploadError::MissingField
    })?;
    let file = read_file(multipart, state.config.max_upload_mb()).await?;

    info!(file = %file.name, bytes = file.contents.len(), "received upload");

    let tabscope = state.tabscope.clone();
    let report = tokio::task::spawn_blocking(move || {
        tabscope.analyze_bytes(&file.name, &file.contents)
    })
    .await
    .map_err(|e| UploadError::Internal(e.to_string()))??;

    Ok(Html(pages::result_page(&report)))
}

async fn read_file(mut multipart: Multipart, limit_mb: usize) -> Result<UploadedFile, UploadError> {
    let multipart_error = |e: axum::extract::multipart::MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge { limit_mb }
        } else {
            UploadError::Multipart(e.body_text())
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        if name.is_empty() {
            return Err(UploadError::NoFileSelected);
        }

        let contents = field.bytes().await.map_err(multipart_error)?;
        return Ok(UploadedFile {
            name,
            contents: contents.to_vec(),
        });
    }

    Err(UploadError::MissingField)
}
