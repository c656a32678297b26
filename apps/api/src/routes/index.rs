use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Serves the bundled single-page form for trying the parser in a browser.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
