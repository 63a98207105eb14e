//! Catalog configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the question bank and type descriptors come from.
///
/// Unset paths use the catalogs built into the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Question catalog file (.json, .yaml, .yml)
    pub questions_path: Option<PathBuf>,

    /// Type descriptor catalog file (.json, .yaml, .yml)
    pub types_path: Option<PathBuf>,

    /// Refuse to start unless every type code has a descriptor
    #[serde(default = "default_require_complete_types")]
    pub require_complete_types: bool,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for path in [&self.questions_path, &self.types_path].into_iter().flatten() {
            check_catalog_path(path)?;
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            questions_path: None,
            types_path: None,
            require_complete_types: default_require_complete_types(),
        }
    }
}

fn check_catalog_path(path: &Path) -> Result<(), ValidationError> {
    let supported = matches!(
        path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()),
        Some(ref e) if e == "json" || e == "yaml" || e == "yml"
    );
    if !supported {
        return Err(ValidationError::UnsupportedCatalogFormat(
            path.display().to_string(),
        ));
    }
    if !path.is_file() {
        return Err(ValidationError::CatalogFileMissing(path.display().to_string()));
    }
    Ok(())
}

fn default_require_complete_types() -> bool {
    true
}
