//! Home route handler.

use axum::response::Html;

use crate::report::INDEX_TEXT;

/// Handle GET / requests with the list of available routes
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_TEXT)
}
