use thiserror::Error;

use crate::model::OptionCategory;

/// Errors emitted while building or loading an option catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog IO failed")]
    Io(#[from] std::io::Error),
    #[error("catalog JSON failed")]
    Json(#[from] serde_json::Error),
    #[error("catalog has no `{0}` options")]
    EmptyCategory(OptionCategory),
    #[error("default `{category}` value `{value}` is not in the catalog")]
    UnknownDefault {
        category: OptionCategory,
        value: String,
    },
}

/// Error returned when a category key does not name one of the five
/// option categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option category `{0}`")]
pub struct ParseCategoryError(pub String);
