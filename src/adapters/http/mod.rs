//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod personality;
mod router;

// Re-export key types for convenience
pub use personality::personality_routes;
pub use personality::PersonalityAppState;
pub use router::build_router;
