//! Service startup: tracing, catalog loading and engine construction.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{ConfigError, ValidationError};
use crate::domain::personality::{CatalogError, PersonalityEngine};
use crate::ports::CatalogSource;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter when set. With `json`, events
/// are written as one JSON object per line.
pub fn init_tracing(default_filter: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = fmt().with_env_filter(filter).with_target(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Loads both catalogs from `source` and builds the engine.
///
/// With `require_complete_types`, a type catalog missing any of the sixteen
/// codes is rejected here instead of failing later at lookup time.
pub async fn build_engine(
    source: &dyn CatalogSource,
    require_complete_types: bool,
) -> Result<PersonalityEngine, CatalogError> {
    let questions = source.load_questions().await?;
    let types = source.load_types().await?;

    match types.ensure_complete() {
        Err(err) if require_complete_types => return Err(err),
        Err(err) => {
            tracing::warn!("{}; scoring may fail for some answer vectors", err);
        }
        Ok(()) => {}
    }

    tracing::info!(
        questions = questions.len(),
        types = types.len(),
        "Loaded personality catalogs"
    );

    Ok(PersonalityEngine::new(Arc::new(questions), Arc::new(types)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::{EmbeddedCatalogSource, FileCatalogSource};
    use tempfile::TempDir;

    fn partial_types_source(dir: &TempDir) -> FileCatalogSource {
        let path = dir.path().join("types.json");
        std::fs::write(
            &path,
            r#"[{"type": "ESTJ", "name": "Executive", "description": "Administrators"}]"#,
        )
        .unwrap();
        FileCatalogSource::new(None, Some(path))
    }

    #[tokio::test]
    async fn builds_engine_from_embedded_catalogs() {
        let engine = build_engine(&EmbeddedCatalogSource::new(), true).await.unwrap();
        assert_eq!(engine.questions().len(), 16);
        assert_eq!(engine.types().len(), 16);
    }

    #[tokio::test]
    async fn incomplete_types_rejected_when_required() {
        let dir = TempDir::new().unwrap();
        let err = build_engine(&partial_types_source(&dir), true).await.unwrap_err();
        assert!(matches!(err, CatalogError::IncompleteTypes(missing) if missing.len() == 15));
    }

    #[tokio::test]
    async fn incomplete_types_allowed_when_not_required() {
        let dir = TempDir::new().unwrap();
        let engine = build_engine(&partial_types_source(&dir), false).await.unwrap();
        assert_eq!(engine.types().len(), 1);
        assert!(engine.score(&[0; 16]).is_ok());
    }
}
