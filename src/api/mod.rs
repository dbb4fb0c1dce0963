//! API Module
//!
//! HTTP handlers and routing for the analysis REST API.
//!
//! # Endpoints
//! - `POST /api/{tool}` - Deterministic tool report, cached per tool
//! - `GET /stats` - Per-tool cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
