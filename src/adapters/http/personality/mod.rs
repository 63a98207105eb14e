//! Personality HTTP adapter module.
//!
//! Provides REST API endpoints for the question bank, type descriptors and scoring.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{PersonalityApiError, PersonalityAppState};
pub use routes::personality_routes;
