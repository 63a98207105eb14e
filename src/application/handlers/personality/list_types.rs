//! ListTypesHandler - Query handler for every type descriptor.

use std::sync::Arc;

use crate::domain::personality::{PersonalityEngine, TypeDescriptor};

/// Handler returning all descriptors in code order.
pub struct ListTypesHandler {
    engine: Arc<PersonalityEngine>,
}

impl ListTypesHandler {
    pub fn new(engine: Arc<PersonalityEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self) -> Vec<TypeDescriptor> {
        self.engine.types().iter().cloned().collect()
    }
}
