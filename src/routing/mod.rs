//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Table Construction (at startup):
//!     RouterBuilder::route(pattern, name, view) ...
//!     → Compile patterns (literal / param / wildcard segments)
//!     → Validate (syntax, unique names)
//!     → Rank by specificity
//!     → Freeze as immutable Router
//!
//! Navigation (per request):
//!     path
//!     → router.rs (ordered lookup)
//!     → pattern.rs (match, bind params)
//!     → Return: Resolution { name, view, params } or no-match
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in the hot path (segment matching only)
//! - Deterministic: same path always resolves to the same route
//! - Most-specific match wins; declaration order breaks ties

pub mod pattern;
pub mod router;

pub use pattern::{Params, PathPattern, PatternError};
pub use router::{Resolution, Router, RouterBuilder, RouterError};
