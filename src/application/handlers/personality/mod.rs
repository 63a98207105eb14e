//! Personality handlers.

mod get_questions;
mod get_type_descriptor;
mod list_types;
mod score_answers;

pub use get_questions::GetQuestionsHandler;
pub use get_type_descriptor::{GetTypeDescriptorHandler, GetTypeDescriptorQuery};
pub use list_types::ListTypesHandler;
pub use score_answers::{ScoreAnswersCommand, ScoreAnswersHandler, ScoreAnswersResult};
