// ============================================================================
// Kiosk Core - Consistency Validator
// File: crates/kiosk-core/src/validation/consistency.rs
// ============================================================================
//! Pure checks deciding whether a proposed catalog mutation may proceed.
//!
//! Nothing here touches a store. Callers load the rows a rule needs and pass
//! them in, which keeps every rule testable on plain slices.

use uuid::Uuid;

use crate::domain::{MenuItemUpdate, Modifier, ModifierChanges, ModifierConfig};
use crate::error::DomainError;

/// Trim an option value, rejecting it when nothing is left.
pub fn trim_option(option: &str) -> Result<String, DomainError> {
    let trimmed = option.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyOption);
    }
    Ok(trimmed.to_string())
}

pub fn normalize_category(category: &str) -> Result<String, DomainError> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyCategory);
    }
    Ok(trimmed.to_string())
}

/// Validate an option for a new modifier in `category`.
///
/// Returns the trimmed option. Rows from other categories in
/// `existing_in_category` are ignored.
pub fn validate_new_modifier(
    category: &str,
    option: &str,
    existing_in_category: &[Modifier],
) -> Result<String, DomainError> {
    let trimmed = trim_option(option)?;
    ensure_unique(category, &trimmed, existing_in_category, None)?;
    Ok(trimmed)
}

/// Same rule as [`validate_new_modifier`], except the row being renamed never
/// counts as its own duplicate.
pub fn validate_modifier_rename(
    id: Uuid,
    category: &str,
    new_option: &str,
    existing_in_category: &[Modifier],
) -> Result<String, DomainError> {
    let trimmed = trim_option(new_option)?;
    ensure_unique(category, &trimmed, existing_in_category, Some(id))?;
    Ok(trimmed)
}

fn ensure_unique(
    category: &str,
    option: &str,
    existing: &[Modifier],
    exclude: Option<Uuid>,
) -> Result<(), DomainError> {
    let clash = existing
        .iter()
        .filter(|m| m.category == category)
        .filter(|m| Some(m.id) != exclude)
        .any(|m| m.matches_option(option));

    if clash {
        return Err(DomainError::Duplicate {
            category: category.to_string(),
            option: option.to_string(),
        });
    }
    Ok(())
}

/// Order for a row appended to a category: one past the current maximum,
/// or 0 when the category has no rows at all.
pub fn next_display_order(existing_max: Option<i32>) -> i32 {
    existing_max.map_or(0, |max| max + 1)
}

pub fn validate_menu_item_update(update: MenuItemUpdate) -> Result<MenuItemUpdate, DomainError> {
    if update.is_empty() {
        return Err(DomainError::NoFieldsProvided);
    }
    Ok(update)
}

pub fn validate_modifier_changes(changes: ModifierChanges) -> Result<ModifierChanges, DomainError> {
    if changes.is_empty() {
        return Err(DomainError::NoFieldsProvided);
    }
    Ok(changes)
}

/// Every key of `config` must name a category that exists in the modifier rows.
pub fn validate_modifier_config_keys(
    config: &ModifierConfig,
    known_categories: &[String],
) -> Result<(), DomainError> {
    match config
        .keys()
        .find(|key| !known_categories.iter().any(|known| known == *key))
    {
        Some(unknown) => Err(DomainError::UnknownModifierCategory(unknown.clone())),
        None => Ok(()),
    }
}
