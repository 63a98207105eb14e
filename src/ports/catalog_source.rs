use async_trait::async_trait;

use crate::domain::personality::{CatalogError, QuestionCatalog, TypeCatalog};

/// Read-only port supplying the question bank and type descriptors.
///
/// Loaded once at startup; the engine never calls back into the source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads the ordered question catalog.
    async fn load_questions(&self) -> Result<QuestionCatalog, CatalogError>;

    /// Loads the type descriptor catalog.
    async fn load_types(&self) -> Result<TypeCatalog, CatalogError>;
}
