//! Admin endpoints
//!
//! Report and reset the file server visit counter.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::AppState;

/// Admin page showing the current visit count
pub fn render_metrics_page(hits: u64) -> String {
    format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>"#
    )
}

/// GET /admin/metrics
pub async fn metrics_report(State(state): State<AppState>) -> Html<String> {
    Html(render_metrics_page(state.hits.read()))
}

/// POST /admin/reset
pub async fn reset_metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.hits.reset();
    tracing::info!("File server hit counter reset");

    (StatusCode::OK, "Hits reset to 0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_page_embeds_count() {
        let page = render_metrics_page(42);
        assert!(page.contains("<p>Chirpy has been visited 42 times!</p>"));
        assert!(page.contains("<h1>Welcome, Chirpy Admin</h1>"));
    }
}
