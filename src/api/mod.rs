//! HTTP API module for the freight engine.
//!
//! This module provides the REST endpoints for rate quotes, margins,
//! distances and carrier matching.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{Coordinate, DistanceRequest, MarginRequest, MatchRequest, QuoteRequest};
pub use response::{ApiError, DistanceResponse, MatchResponse};
pub use state::AppState;
