//! HTTP API surface
//!
//! Binds the portal core onto a JSON-over-HTTP router. Stateless beyond
//! the shared [`crate::portal::Portal`]; domain failures are mapped to 400
//! (missing client input) or 500 (everything else) with structured bodies.

mod error;
mod handlers;
mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::create_router;
