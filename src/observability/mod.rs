//! Observability subsystem.
//!
//! Structured logging via the tracing crate; request-level fields
//! (request ID, path, matched route) are attached at the navigation
//! handler.

pub mod logging;

pub use logging::init_logging;
