use axum::response::Html;

pub const LANDING_PAGE: &str = "<h1>Incident Admin API</h1>";

pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
