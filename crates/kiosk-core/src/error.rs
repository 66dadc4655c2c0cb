//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Option name is required")]
    EmptyOption,

    #[error("Category is required")]
    EmptyCategory,

    #[error("This option already exists in {category}")]
    Duplicate { category: String, option: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("No updates provided")]
    NoFieldsProvided,

    #[error("Unknown modifier category: {0}")]
    UnknownModifierCategory(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn menu_item_not_found(id: Uuid) -> Self {
        DomainError::NotFound { entity: "Menu item", id }
    }

    pub fn modifier_not_found(id: Uuid) -> Self {
        DomainError::NotFound { entity: "Modifier", id }
    }

    /// Stable kind name callers branch on; the display text is for humans only.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::EmptyOption => "EmptyOption",
            DomainError::EmptyCategory => "EmptyCategory",
            DomainError::Duplicate { .. } => "Duplicate",
            DomainError::NotFound { .. } => "NotFound",
            DomainError::NoFieldsProvided => "NoFieldsProvided",
            DomainError::UnknownModifierCategory(_) => "UnknownModifierCategory",
            DomainError::Store(_) => "StoreError",
        }
    }

    /// Only store failures may succeed on a retry with the same input.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Store(_))
    }
}
