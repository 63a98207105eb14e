//! File-backed catalog source (JSON or YAML).

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::personality::{CatalogError, QuestionCatalog, TypeCatalog};
use crate::ports::CatalogSource;

use super::records::{parse_questions, parse_types, CatalogFormat};
use super::EmbeddedCatalogSource;

/// Loads catalogs from files, falling back to the embedded catalog for any
/// file that is not configured.
#[derive(Debug, Clone, Default)]
pub struct FileCatalogSource {
    questions_path: Option<PathBuf>,
    types_path: Option<PathBuf>,
}

impl FileCatalogSource {
    pub fn new(questions_path: Option<PathBuf>, types_path: Option<PathBuf>) -> Self {
        Self {
            questions_path,
            types_path,
        }
    }

    async fn read(path: &Path) -> Result<(String, CatalogFormat), CatalogError> {
        let format = CatalogFormat::from_path(path)?;
        let content = fs::read_to_string(path).await.map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok((content, format))
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load_questions(&self) -> Result<QuestionCatalog, CatalogError> {
        match &self.questions_path {
            Some(path) => {
                tracing::debug!("Loading question catalog from {}", path.display());
                let (content, format) = Self::read(path).await?;
                parse_questions(&content, format)
            }
            None => EmbeddedCatalogSource::questions(),
        }
    }

    async fn load_types(&self) -> Result<TypeCatalog, CatalogError> {
        match &self.types_path {
            Some(path) => {
                tracing::debug!("Loading type catalog from {}", path.display());
                let (content, format) = Self::read(path).await?;
                parse_types(&content, format)
            }
            None => EmbeddedCatalogSource::types(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const QUESTIONS_YAML: &str = r#"
- id: 10
  question: Pick one
  options:
    - answer: Plan
      dimension: J
    - answer: Improvise
      dimension: P
- id: 11
  question: Pick another
  options:
    - answer: Logic
      dimension: T
      weight: 2
    - answer: Values
      dimension: F
"#;

    #[tokio::test]
    async fn loads_questions_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("questions.yaml");
        std::fs::write(&path, QUESTIONS_YAML).unwrap();

        let source = FileCatalogSource::new(Some(path), None);
        let catalog = source.load_questions().await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.questions()[1].options[0].weight, 2);
    }

    #[tokio::test]
    async fn loads_types_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("types.json");
        std::fs::write(
            &path,
            r#"[{"type": "INFJ", "name": "Advocate", "description": "Idealists", "traits": ["insightful"]}]"#,
        )
        .unwrap();

        let source = FileCatalogSource::new(None, Some(path));
        let catalog = source.load_types().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.ensure_complete().is_err());
    }

    #[tokio::test]
    async fn unconfigured_paths_fall_back_to_embedded() {
        let source = FileCatalogSource::default();
        assert_eq!(source.load_questions().await.unwrap().len(), 16);
        assert_eq!(source.load_types().await.unwrap().len(), 16);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = FileCatalogSource::new(Some(dir.path().join("absent.json")), None);
        let err = source.load_questions().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn unsupported_extension_is_rejected_before_reading() {
        let source = FileCatalogSource::new(Some(PathBuf::from("/nonexistent/questions.toml")), None);
        let err = source.load_questions().await.unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("types.json");
        std::fs::write(&path, "{ not json").unwrap();

        let source = FileCatalogSource::new(None, Some(path));
        assert!(matches!(source.load_types().await, Err(CatalogError::Parse(_))));
    }
}
