use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../../templates/index.html");

/// GET /
pub async fn home_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
