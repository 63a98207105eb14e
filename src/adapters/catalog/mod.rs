//! Catalog adapters - implementations of the `CatalogSource` port.

mod embedded;
mod filesystem;
mod records;

pub use embedded::EmbeddedCatalogSource;
pub use filesystem::FileCatalogSource;
pub use records::{
    parse_questions, parse_types, CatalogFormat, OptionRecord, QuestionRecord, TypeRecord,
};
