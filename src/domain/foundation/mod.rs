//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! personality domain.

mod errors;
mod percentage;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
