//! Built-in catalogs compiled into the binary.

use async_trait::async_trait;

use crate::domain::personality::{CatalogError, QuestionCatalog, TypeCatalog};
use crate::ports::CatalogSource;

use super::records::{parse_questions, parse_types, CatalogFormat};

const QUESTIONS_JSON: &str = include_str!("data/questions.json");
const TYPES_JSON: &str = include_str!("data/types.json");

/// The default 16-question inventory and the 16 type descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogSource;

impl EmbeddedCatalogSource {
    pub fn new() -> Self {
        Self
    }

    /// Parses the built-in question bank.
    pub fn questions() -> Result<QuestionCatalog, CatalogError> {
        parse_questions(QUESTIONS_JSON, CatalogFormat::Json)
    }

    /// Parses the built-in type descriptors.
    pub fn types() -> Result<TypeCatalog, CatalogError> {
        parse_types(TYPES_JSON, CatalogFormat::Json)
    }
}

#[async_trait]
impl CatalogSource for EmbeddedCatalogSource {
    async fn load_questions(&self) -> Result<QuestionCatalog, CatalogError> {
        Self::questions()
    }

    async fn load_types(&self) -> Result<TypeCatalog, CatalogError> {
        Self::types()
    }
}
