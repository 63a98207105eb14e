//! Human-readable descriptors for the sixteen personality types.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;

use super::{CatalogError, PersonalityTypeCode, ScoringError};

/// Display information for one personality type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub code: PersonalityTypeCode,
    pub name: String,
    pub description: String,
    pub traits: Vec<String>,
}

impl TypeDescriptor {
    pub fn new(
        code: PersonalityTypeCode,
        name: impl Into<String>,
        description: impl Into<String>,
        traits: Vec<String>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            description: description.into(),
            traits,
        }
    }
}

/// Read-only mapping from type code to descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    descriptors: BTreeMap<PersonalityTypeCode, TypeDescriptor>,
}

impl TypeCatalog {
    /// Builds a catalog holding at most one descriptor per code.
    pub fn new(descriptors: Vec<TypeDescriptor>) -> Result<Self, CatalogError> {
        let mut by_code = BTreeMap::new();
        for descriptor in descriptors {
            if descriptor.name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("types[{}].name", descriptor.code)).into());
            }
            let code = descriptor.code;
            if by_code.insert(code, descriptor).is_some() {
                return Err(CatalogError::DuplicateType(code));
            }
        }
        Ok(Self { descriptors: by_code })
    }

    /// Returns the descriptor for `code`.
    ///
    /// # Errors
    /// `ScoringError::UnknownType` when the catalog has no entry for the code.
    pub fn lookup(&self, code: PersonalityTypeCode) -> Result<&TypeDescriptor, ScoringError> {
        self.descriptors
            .get(&code)
            .ok_or(ScoringError::UnknownType(code))
    }

    /// Codes the resolver can produce that have no descriptor.
    pub fn missing_codes(&self) -> Vec<PersonalityTypeCode> {
        PersonalityTypeCode::all()
            .into_iter()
            .filter(|code| !self.descriptors.contains_key(code))
            .collect()
    }

    /// Fails unless all sixteen codes have a descriptor.
    pub fn ensure_complete(&self) -> Result<(), CatalogError> {
        let missing = self.missing_codes();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::IncompleteTypes(missing))
        }
    }

    /// Descriptors in code order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.descriptors.values()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
