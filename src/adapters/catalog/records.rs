//! On-disk catalog records and their conversion into domain catalogs.
//!
//! These types decouple the file format from domain types.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::personality::{
    AnswerOption, CatalogError, Dimension, PersonalityTypeCode, Question, QuestionCatalog,
    TypeCatalog, TypeDescriptor, DEFAULT_WEIGHT,
};

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(&self, content: &str) -> Result<T, CatalogError> {
        match self {
            CatalogFormat::Json => {
                serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))
            }
            CatalogFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub question: String,
    pub options: Vec<OptionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionRecord {
    pub answer: String,
    pub dimension: Dimension,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(rename = "type")]
    pub code: PersonalityTypeCode,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        let options = record
            .options
            .into_iter()
            .map(|o| AnswerOption::weighted(o.answer, o.dimension, o.weight))
            .collect();
        Question::new(record.id, record.question, options)
    }
}

impl From<TypeRecord> for TypeDescriptor {
    fn from(record: TypeRecord) -> Self {
        TypeDescriptor::new(record.code, record.name, record.description, record.traits)
    }
}

/// Parses and validates a question catalog document.
pub fn parse_questions(content: &str, format: CatalogFormat) -> Result<QuestionCatalog, CatalogError> {
    let records: Vec<QuestionRecord> = format.parse(content)?;
    QuestionCatalog::new(records.into_iter().map(Question::from).collect())
}

/// Parses and validates a type catalog document.
pub fn parse_types(content: &str, format: CatalogFormat) -> Result<TypeCatalog, CatalogError> {
    let records: Vec<TypeRecord> = format.parse(content)?;
    TypeCatalog::new(records.into_iter().map(TypeDescriptor::from).collect())
}
