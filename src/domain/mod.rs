//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (percentages, errors)
//! - `personality` - Catalogs and the pure scoring pipeline

pub mod foundation;
pub mod personality;
