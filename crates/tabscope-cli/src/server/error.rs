//! Upload error types and handling.
//!
//! Anything wrong with the submitted file sends the user back to the upload
//! form with a warning. Only faults on our side become a 5xx page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{error, warn};

use tabscope::TabscopeError;

use super::pages;

/// Why an upload could not be turned into a result page.
#[derive(Debug)]
pub enum UploadError {
    /// The form had no `datafile` field.
    MissingField,
    /// The field was present but no file was chosen.
    NoFileSelected,
    /// The body exceeded the configured size limit.
    TooLarge { limit_mb: usize },
    /// The multipart body itself was malformed.
    Multipart(String),
    /// The file could not be parsed as a table.
    Unreadable(TabscopeError),
    /// The pipeline task died.
    Internal(String),
}

impl UploadError {
    /// Message shown on the upload form.
    pub fn warning(&self) -> String {
        match self {
            UploadError::MissingField => "No file part in the request.".to_string(),
            UploadError::NoFileSelected => "No file selected.".to_string(),
            UploadError::TooLarge { limit_mb } => {
                format!("Error reading file: upload exceeds the {} MB limit", limit_mb)
            }
            UploadError::Multipart(msg) => format!("Error reading file: {}", msg),
            UploadError::Unreadable(e) => format!("Error reading file: {}", e),
            UploadError::Internal(msg) => format!("Internal error: {}", msg),
        }
    }
}

/// Location of the upload form carrying `warning`.
pub fn warning_location(warning: &str) -> String {
    format!("/?warning={}", utf8_percent_encode(warning, NON_ALPHANUMERIC))
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let warning = self.warning();
        match self {
            UploadError::Internal(_) => {
                error!(%warning, "upload failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(pages::error_page(&warning)),
                )
                    .into_response()
            }
            _ => {
                warn!(%warning, "upload rejected");
                Redirect::to(&warning_location(&warning)).into_response()
            }
        }
    }
}

impl From<TabscopeError> for UploadError {
    fn from(err: TabscopeError) -> Self {
        if err.is_input_error() {
            UploadError::Unreadable(err)
        } else {
            UploadError::Internal(err.to_string())
        }
    }
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.warning())
    }
}

impl std::error::Error for UploadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_location_is_percent_encoded() {
        assert_eq!(
            warning_location("No file selected."),
            "/?warning=No%20file%20selected%2E"
        );
    }

    #[test]
    fn test_input_errors_redirect() {
        let err = UploadError::from(TabscopeError::EmptyData("no rows".into()));
        assert!(matches!(err, UploadError::Unreadable(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()["location"].to_str().unwrap();
        assert!(location.starts_with("/?warning=Error%20reading%20file"));
    }

    #[test]
    fn test_internal_errors_are_server_errors() {
        let response = UploadError::Internal("task panicked".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
