//! HTTP API module for the cabin pricing engine.
//!
//! This module provides the REST endpoints that wrap the engine:
//! `POST /price` and `GET /availability`.

mod handlers;
mod occupancy;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use occupancy::{InMemoryOccupancy, OccupancySource};
pub use request::{AvailabilityQuery, PriceRequest};
pub use response::{ApiError, ApiErrorResponse, PriceResponse};
pub use state::AppState;
