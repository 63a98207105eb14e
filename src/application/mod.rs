//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (scoring) from query handlers
//! (catalog reads).

pub mod handlers;

pub use handlers::personality::{
    GetQuestionsHandler, GetTypeDescriptorHandler, GetTypeDescriptorQuery, ListTypesHandler,
    ScoreAnswersCommand, ScoreAnswersHandler, ScoreAnswersResult,
};
