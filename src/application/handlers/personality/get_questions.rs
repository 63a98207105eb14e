//! GetQuestionsHandler - Query handler for the question catalog.

use std::sync::Arc;

use crate::domain::personality::{PersonalityEngine, Question};

/// Handler returning the questions a client must answer, in scoring order.
pub struct GetQuestionsHandler {
    engine: Arc<PersonalityEngine>,
}

impl GetQuestionsHandler {
    pub fn new(engine: Arc<PersonalityEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self) -> Vec<Question> {
        self.engine.questions().questions().to_vec()
    }
}
