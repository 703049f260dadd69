//! Upload form handler.

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use crate::server::pages;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Warning carried over from a rejected upload.
    pub warning: Option<String>,
}

/// `GET /`
pub async fn index(Query(query): Query<IndexQuery>) -> Html<String> {
    Html(pages::index_page(query.warning.as_deref()))
}
