//! Single-page application shell with a startup-compiled route table.
//!
//! The route table maps URL paths to named, renderable views: an ordered
//! list of route definitions compiled and validated once at startup,
//! immutable thereafter, with unmatched paths falling through to a
//! wildcard not-found route. An axum server hosts the table and renders
//! the matched view for every request.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Params, Resolution, Router, RouterBuilder};
pub use views::View;
