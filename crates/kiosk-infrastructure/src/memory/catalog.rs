//! Menu item and modifier relations held in memory.
//!
//! Query semantics mirror the PostgreSQL adapters: the same filters and the
//! same sort keys, with insertion order breaking ties.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use kiosk_core::domain::{MenuItem, MenuItemUpdate, Modifier, ModifierChanges, NewModifier};
use kiosk_core::error::DomainError;
use kiosk_core::repositories::{MenuItemRepository, ModifierRepository};
use kiosk_shared::new_id;

use super::{read, write};

#[derive(Default)]
pub struct InMemoryMenuItemRepository {
    items: RwLock<Vec<MenuItem>>,
}

impl InMemoryMenuItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuItemRepository {
    async fn list(&self, include_inactive: bool) -> Result<Vec<MenuItem>, DomainError> {
        let mut items: Vec<MenuItem> = read(&self.items)?
            .iter()
            .filter(|item| include_inactive || item.is_active)
            .cloned()
            .collect();
        items.sort_by_key(|item| item.display_order);
        Ok(items)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        Ok(read(&self.items)?.iter().find(|item| item.id == *id).cloned())
    }

    async fn update(&self, id: &Uuid, update: &MenuItemUpdate) -> Result<Option<MenuItem>, DomainError> {
        let mut items = write(&self.items)?;
        Ok(items.iter_mut().find(|item| item.id == *id).map(|item| {
            item.apply(update);
            item.clone()
        }))
    }
}

#[derive(Default)]
pub struct InMemoryModifierRepository {
    rows: RwLock<Vec<Modifier>>,
}

impl InMemoryModifierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modifiers(rows: Vec<Modifier>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

fn clashes(rows: &[Modifier], category: &str, option: &str, exclude: Option<Uuid>) -> bool {
    rows.iter()
        .filter(|m| m.category == category && Some(m.id) != exclude)
        .any(|m| m.matches_option(option))
}

#[async_trait]
impl ModifierRepository for InMemoryModifierRepository {
    async fn list(&self, include_inactive: bool) -> Result<Vec<Modifier>, DomainError> {
        let mut rows: Vec<Modifier> = read(&self.rows)?
            .iter()
            .filter(|m| include_inactive || m.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then(a.display_order.cmp(&b.display_order))
        });
        Ok(rows)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Modifier>, DomainError> {
        let mut rows: Vec<Modifier> = read(&self.rows)?
            .iter()
            .filter(|m| m.category == category)
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.display_order);
        Ok(rows)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Modifier>, DomainError> {
        Ok(read(&self.rows)?.iter().find(|m| m.id == *id).cloned())
    }

    async fn max_display_order(&self, category: &str) -> Result<Option<i32>, DomainError> {
        Ok(read(&self.rows)?
            .iter()
            .filter(|m| m.category == category)
            .map(|m| m.display_order)
            .max())
    }

    async fn insert(&self, modifier: &NewModifier) -> Result<Modifier, DomainError> {
        let mut rows = write(&self.rows)?;
        if clashes(&rows, &modifier.category, &modifier.option, None) {
            return Err(DomainError::Duplicate {
                category: modifier.category.clone(),
                option: modifier.option.clone(),
            });
        }

        let row = Modifier {
            id: new_id(),
            category: modifier.category.clone(),
            option: modifier.option.clone(),
            is_active: true,
            display_order: modifier.display_order,
        };
        rows.push(row.clone());
        debug!("In-memory modifier inserted: {}", row.id);
        Ok(row)
    }

    async fn update(&self, id: &Uuid, changes: &ModifierChanges) -> Result<Option<Modifier>, DomainError> {
        let mut rows = write(&self.rows)?;
        let Some(position) = rows.iter().position(|m| m.id == *id) else {
            return Ok(None);
        };

        if let Some(option) = &changes.option {
            let category = rows[position].category.clone();
            if clashes(&rows, &category, option, Some(*id)) {
                return Err(DomainError::Duplicate {
                    category,
                    option: option.clone(),
                });
            }
        }

        rows[position].apply(changes);
        Ok(Some(rows[position].clone()))
    }

    async fn categories(&self) -> Result<Vec<String>, DomainError> {
        let mut categories: Vec<String> = read(&self.rows)?
            .iter()
            .map(|m| m.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, option: &str, display_order: i32, is_active: bool) -> Modifier {
        Modifier {
            id: new_id(),
            category: category.to_string(),
            option: option.to_string(),
            is_active,
            display_order,
        }
    }

    #[tokio::test]
    async fn test_modifier_listing_order_and_filter() {
        let repo = InMemoryModifierRepository::with_modifiers(vec![
            row("temperature", "Iced", 1, true),
            row("milk", "Oat", 1, true),
            row("temperature", "Hot", 0, true),
            row("milk", "Whole", 0, false),
        ]);

        let all: Vec<_> = repo
            .list(true)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.option)
            .collect();
        assert_eq!(all, vec!["Whole", "Oat", "Hot", "Iced"]);

        let active = repo.list(false).await.unwrap();
        assert!(active.iter().all(|m| m.is_active));
        assert_eq!(active.len(), 3);
    }

    #[tokio::test]
    async fn test_max_display_order_per_category() {
        let repo = InMemoryModifierRepository::with_modifiers(vec![
            row("milk", "Whole", 0, true),
            row("milk", "Oat", 3, false),
            row("temperature", "Hot", 7, true),
        ]);

        assert_eq!(repo.max_display_order("milk").await.unwrap(), Some(3));
        assert_eq!(repo.max_display_order("syrup").await.unwrap(), None);
        assert_eq!(repo.categories().await.unwrap(), vec!["milk", "temperature"]);
    }

    #[tokio::test]
    async fn test_menu_items_filtered_and_sorted() {
        let mut hidden = MenuItem::new("Seasonal", "Signature", 0);
        hidden.is_active = false;
        let repo = InMemoryMenuItemRepository::with_items(vec![
            MenuItem::new("Mocha", "Classics", 2),
            hidden,
            MenuItem::new("Latte", "Classics", 1),
        ]);

        let names: Vec<_> = repo
            .list(false)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Latte", "Mocha"]);
        assert_eq!(repo.list(true).await.unwrap()[0].name, "Seasonal");
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let repo = InMemoryMenuItemRepository::new();
        let update = MenuItemUpdate {
            is_active: Some(true),
            modifier_config: None,
        };
        assert!(repo.update(&new_id(), &update).await.unwrap().is_none());
    }
}
