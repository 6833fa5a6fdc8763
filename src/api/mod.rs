//! HTTP API module for the rental pricing engine.
//!
//! This module provides the REST endpoint for quoting rentals.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, PriceResponse, RejectionBody};
pub use state::AppState;
