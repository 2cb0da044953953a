//! Application views and the route table wiring them to paths.
//!
//! # Responsibilities
//! - Define the renderable views (home, learn, test, not-found)
//! - Declare the application route table
//!
//! # Design Decisions
//! - Views render server-side to plain HTML documents
//! - Path parameter values are HTML-escaped before interpolation
//! - `/test/404` is a reserved alias for the not-found view; specificity
//!   ranking makes it win over the parameterized test route

use crate::routing::{Params, Router, RouterError};

/// A renderable view component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Learn,
    Test,
    NotFound,
}

impl View {
    /// Render the view to an HTML document.
    ///
    /// The test view interpolates the `testID` path parameter.
    pub fn render(&self, params: &Params) -> String {
        match self {
            View::Home => page("Home", "<h1>Home</h1>\n<p>Welcome.</p>"),
            View::Learn => page("Learn", "<h1>Learn</h1>\n<p>Study material lives here.</p>"),
            View::Test => {
                let test_id = escape_html(params.get("testID").unwrap_or_default());
                page(
                    &format!("Test {test_id}"),
                    &format!("<h1>Test {test_id}</h1>\n<p>Running test {test_id}.</p>"),
                )
            }
            View::NotFound => page("Not Found", "<h1>404</h1>\n<p>Page not found.</p>"),
        }
    }

    /// Whether this view represents an unmatched navigation.
    pub fn is_not_found(&self) -> bool {
        matches!(self, View::NotFound)
    }
}

/// Build the application route table.
///
/// The wildcard fallback handles every path not matched by a more
/// specific rule.
pub fn route_table() -> Result<Router<View>, RouterError> {
    Router::builder()
        .route("/", "home", View::Home)
        .route("/learn", "learn", View::Learn)
        .route("/test/{testID}", "test", View::Test)
        .route("/test/404", "404", View::NotFound)
        .route("/{*path}", "not-found", View::NotFound)
        .build()
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
