//! GetTypeDescriptorHandler - Query handler for a single type descriptor.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::personality::{PersonalityEngine, PersonalityTypeCode, TypeDescriptor};

/// Query for the descriptor of one type code.
#[derive(Debug, Clone)]
pub struct GetTypeDescriptorQuery {
    /// Four-letter code, case-insensitive.
    pub code: String,
}

/// Handler for looking up a type descriptor.
pub struct GetTypeDescriptorHandler {
    engine: Arc<PersonalityEngine>,
}

impl GetTypeDescriptorHandler {
    pub fn new(engine: Arc<PersonalityEngine>) -> Self {
        Self { engine }
    }

    /// # Errors
    /// - `InvalidTypeCode` when the code is not one of the 16 combinations
    /// - `TypeNotFound` when the catalog has no descriptor for it
    pub fn handle(&self, query: GetTypeDescriptorQuery) -> Result<TypeDescriptor, DomainError> {
        let code: PersonalityTypeCode = query.code.parse().map_err(|e| {
            DomainError::new(ErrorCode::InvalidTypeCode, format!("{}", e))
                .with_detail("type", query.code.clone())
        })?;

        self.engine
            .types()
            .lookup(code)
            .cloned()
            .map_err(|_| {
                DomainError::new(ErrorCode::TypeNotFound, format!("No descriptor for type {}", code))
                    .with_detail("type", code.to_string())
            })
    }
}
