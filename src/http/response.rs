//! View rendering to HTTP responses.
//!
//! # Responsibilities
//! - Turn a route resolution into an HTML response
//! - Map the not-found view to HTTP 404, everything else to 200

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::routing::{Params, Resolution};
use crate::views::View;

/// Render a resolved route to an HTTP response.
pub fn render(resolution: &Resolution<'_, View>) -> Response {
    let status = if resolution.view.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Html(resolution.view.render(&resolution.params))).into_response()
}

/// Render the not-found view directly, for paths that never reach the
/// route table (e.g. outside the configured base path).
pub fn render_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(View::NotFound.render(&Params::new())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::route_table;

    #[test]
    fn test_status_mapping() {
        let router = route_table().unwrap();

        let home = router.resolve("/").unwrap();
        assert_eq!(render(&home).status(), StatusCode::OK);

        let missing = router.resolve("/nope").unwrap();
        assert_eq!(render(&missing).status(), StatusCode::NOT_FOUND);

        assert_eq!(render_not_found().status(), StatusCode::NOT_FOUND);
    }
}
