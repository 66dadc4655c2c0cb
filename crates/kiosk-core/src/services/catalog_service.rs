// ============================================================================
// Kiosk Core - Catalog Service
// File: crates/kiosk-core/src/services/catalog_service.rs
// ============================================================================
//! Validated catalog mutations and listings for the admin and ordering screens

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{
    Customization, CustomizationCategory, MenuItem, MenuItemUpdate, Modifier, ModifierChanges,
    NewModifier, OrderingMenu,
};
use crate::error::DomainError;
use crate::repositories::{MenuItemRepository, ModifierRepository};
use crate::validation;

/// Catalog service composing the consistency rules with the store adapters
pub struct CatalogService {
    menu_items: Arc<dyn MenuItemRepository>,
    modifiers: Arc<dyn ModifierRepository>,
}

impl CatalogService {
    pub fn new(
        menu_items: Arc<dyn MenuItemRepository>,
        modifiers: Arc<dyn ModifierRepository>,
    ) -> Self {
        Self { menu_items, modifiers }
    }

    pub async fn list_menu_items(&self, include_inactive: bool) -> Result<Vec<MenuItem>, DomainError> {
        self.menu_items.list(include_inactive).await
    }

    pub async fn list_modifiers(&self, include_inactive: bool) -> Result<Vec<Modifier>, DomainError> {
        self.modifiers.list(include_inactive).await
    }

    /// Apply a partial admin update to a menu item
    pub async fn update_menu_item(
        &self,
        id: Uuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, DomainError> {
        let update = validation::validate_menu_item_update(update).inspect_err(|_| {
            warn!("Menu item update rejected: no fields provided for {}", id);
        })?;

        if let Some(config) = &update.modifier_config {
            let known = self.modifiers.categories().await?;
            validation::validate_modifier_config_keys(config, &known).inspect_err(|e| {
                warn!("Menu item update rejected for {}: {}", id, e);
            })?;
        }

        let item = self
            .menu_items
            .update(&id, &update)
            .await?
            .ok_or_else(|| {
                warn!("Menu item update failed: {} not found", id);
                DomainError::menu_item_not_found(id)
            })?;

        info!("Menu item updated: {} ({})", item.name, item.id);
        Ok(item)
    }

    /// Create a new, active modifier appended to the end of its category.
    ///
    /// The next order is read and the row written in two separate store calls,
    /// so two concurrent creations in one category can land on the same order.
    pub async fn create_modifier(&self, category: &str, option: &str) -> Result<Modifier, DomainError> {
        let category = validation::normalize_category(category)?;

        let existing = self.modifiers.list_by_category(&category).await?;
        let option = validation::validate_new_modifier(&category, option, &existing)
            .inspect_err(|e| warn!("Modifier creation rejected in {}: {}", category, e))?;

        let max_order = self.modifiers.max_display_order(&category).await?;
        let display_order = validation::next_display_order(max_order);
        debug!("Next display order for {}: {}", category, display_order);

        let created = self
            .modifiers
            .insert(&NewModifier {
                category,
                option,
                display_order,
            })
            .await?;

        info!(
            "Modifier created: {}/{} at order {}",
            created.category, created.option, created.display_order
        );
        Ok(created)
    }

    /// Rename and/or toggle a modifier. Category never changes.
    pub async fn update_modifier(
        &self,
        id: Uuid,
        changes: ModifierChanges,
    ) -> Result<Modifier, DomainError> {
        let mut changes = validation::validate_modifier_changes(changes).inspect_err(|_| {
            warn!("Modifier update rejected: no fields provided for {}", id);
        })?;

        if let Some(raw) = changes.option.take() {
            validation::trim_option(&raw)?;

            let current = self
                .modifiers
                .find_by_id(&id)
                .await?
                .ok_or_else(|| DomainError::modifier_not_found(id))?;

            let siblings = self.modifiers.list_by_category(&current.category).await?;
            let option = validation::validate_modifier_rename(id, &current.category, &raw, &siblings)
                .inspect_err(|e| warn!("Modifier rename rejected for {}: {}", id, e))?;
            changes.option = Some(option);
        }

        let updated = self
            .modifiers
            .update(&id, &changes)
            .await?
            .ok_or_else(|| {
                warn!("Modifier update failed: {} not found", id);
                DomainError::modifier_not_found(id)
            })?;

        info!("Modifier updated: {}/{} ({})", updated.category, updated.option, updated.id);
        Ok(updated)
    }

    /// Active drinks and active options for the ordering screen
    pub async fn ordering_menu(&self) -> Result<OrderingMenu, DomainError> {
        let items = self.menu_items.list(false).await?;
        let modifiers = self.modifiers.list(false).await?;

        Ok(OrderingMenu {
            items,
            modifiers_by_category: OrderingMenu::group_modifiers(modifiers),
        })
    }

    /// Modifier categories that apply to one active drink, with defaults preselected
    pub async fn customization_for(&self, item_id: Uuid) -> Result<Customization, DomainError> {
        let item = self
            .menu_items
            .find_by_id(&item_id)
            .await?
            .filter(|item| item.is_active)
            .ok_or_else(|| DomainError::menu_item_not_found(item_id))?;

        let grouped = OrderingMenu::group_modifiers(self.modifiers.list(false).await?);

        let categories = grouped
            .into_iter()
            .filter(|(category, options)| item.accepts_modifier(category) && !options.is_empty())
            .map(|(category, options)| CustomizationCategory {
                selected: item.default_for(&category).map(str::to_string),
                category,
                options,
            })
            .collect();

        Ok(Customization { item, categories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockMenuItemRepository, MockModifierRepository};
    use crate::domain::ModifierConfig;

    fn modifier(category: &str, option: &str, display_order: i32) -> Modifier {
        Modifier {
            id: Uuid::new_v4(),
            category: category.to_string(),
            option: option.to_string(),
            is_active: true,
            display_order,
        }
    }

    fn service(menu: MockMenuItemRepository, mods: MockModifierRepository) -> CatalogService {
        CatalogService::new(Arc::new(menu), Arc::new(mods))
    }

    #[tokio::test]
    async fn test_empty_menu_item_update_performs_no_write() {
        let mut menu = MockMenuItemRepository::new();
        menu.expect_update().never();
        let mut mods = MockModifierRepository::new();
        mods.expect_categories().never();

        let err = service(menu, mods)
            .update_menu_item(Uuid::new_v4(), MenuItemUpdate::default())
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::NoFieldsProvided);
    }

    #[tokio::test]
    async fn test_menu_item_update_unknown_id() {
        let mut menu = MockMenuItemRepository::new();
        menu.expect_update().times(1).returning(|_, _| Ok(None));

        let id = Uuid::new_v4();
        let err = service(menu, MockModifierRepository::new())
            .update_menu_item(
                id,
                MenuItemUpdate {
                    is_active: Some(false),
                    modifier_config: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::menu_item_not_found(id));
    }

    #[tokio::test]
    async fn test_menu_item_config_with_unknown_category_rejected() {
        let mut menu = MockMenuItemRepository::new();
        menu.expect_update().never();
        let mut mods = MockModifierRepository::new();
        mods.expect_categories()
            .returning(|| Ok(vec!["milk".to_string()]));

        let mut config = ModifierConfig::new();
        config.insert("sweetener".to_string(), true);

        let err = service(menu, mods)
            .update_menu_item(
                Uuid::new_v4(),
                MenuItemUpdate {
                    is_active: None,
                    modifier_config: Some(config),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "UnknownModifierCategory");
    }

    #[tokio::test]
    async fn test_create_modifier_appends_after_max() {
        let mut mods = MockModifierRepository::new();
        mods.expect_list_by_category()
            .returning(|_| Ok(vec![modifier("milk", "Whole", 0), modifier("milk", "Oat", 4)]));
        mods.expect_max_display_order()
            .withf(|category| category == "milk")
            .returning(|_| Ok(Some(4)));
        mods.expect_insert()
            .withf(|new| new.display_order == 5 && new.option == "Almond" && new.category == "milk")
            .times(1)
            .returning(|new| {
                Ok(Modifier {
                    id: Uuid::new_v4(),
                    category: new.category.clone(),
                    option: new.option.clone(),
                    is_active: true,
                    display_order: new.display_order,
                })
            });

        let created = service(MockMenuItemRepository::new(), mods)
            .create_modifier("milk", "  Almond ")
            .await
            .unwrap();

        assert_eq!(created.display_order, 5);
        assert!(created.is_active);
    }

    #[tokio::test]
    async fn test_create_modifier_in_empty_category_starts_at_zero() {
        let mut mods = MockModifierRepository::new();
        mods.expect_list_by_category().returning(|_| Ok(vec![]));
        mods.expect_max_display_order().returning(|_| Ok(None));
        mods.expect_insert()
            .withf(|new| new.display_order == 0)
            .returning(|new| {
                Ok(Modifier {
                    id: Uuid::new_v4(),
                    category: new.category.clone(),
                    option: new.option.clone(),
                    is_active: true,
                    display_order: new.display_order,
                })
            });

        let created = service(MockMenuItemRepository::new(), mods)
            .create_modifier("syrup", "Vanilla")
            .await
            .unwrap();

        assert_eq!(created.display_order, 0);
    }

    #[tokio::test]
    async fn test_create_duplicate_modifier_performs_no_write() {
        let mut mods = MockModifierRepository::new();
        mods.expect_list_by_category()
            .returning(|_| Ok(vec![modifier("milk", "Oat", 0)]));
        mods.expect_max_display_order().never();
        mods.expect_insert().never();

        let err = service(MockMenuItemRepository::new(), mods)
            .create_modifier("milk", "OAT")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "Duplicate");
        assert_eq!(err.to_string(), "This option already exists in milk");
    }

    #[tokio::test]
    async fn test_update_modifier_without_fields() {
        let mut mods = MockModifierRepository::new();
        mods.expect_update().never();

        let err = service(MockMenuItemRepository::new(), mods)
            .update_modifier(Uuid::new_v4(), ModifierChanges::default())
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::NoFieldsProvided);
    }

    #[tokio::test]
    async fn test_rename_checks_current_category() {
        let target = modifier("temperature", "Hot", 0);
        let target_id = target.id;
        let lookup = target.clone();

        let mut mods = MockModifierRepository::new();
        mods.expect_find_by_id()
            .returning(move |_| Ok(Some(lookup.clone())));
        mods.expect_list_by_category()
            .withf(|category| category == "temperature")
            .returning(|_| Ok(vec![modifier("temperature", "Iced", 1)]));
        mods.expect_update()
            .withf(|_, changes| changes.option.as_deref() == Some("Warm"))
            .returning(move |_, changes| {
                let mut row = target.clone();
                row.apply(changes);
                Ok(Some(row))
            });

        let updated = service(MockMenuItemRepository::new(), mods)
            .update_modifier(
                target_id,
                ModifierChanges {
                    option: Some(" Warm ".to_string()),
                    is_active: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.option, "Warm");
        assert_eq!(updated.category, "temperature");
    }

    #[tokio::test]
    async fn test_rename_of_missing_modifier() {
        let mut mods = MockModifierRepository::new();
        mods.expect_find_by_id().returning(|_| Ok(None));
        mods.expect_update().never();

        let id = Uuid::new_v4();
        let err = service(MockMenuItemRepository::new(), mods)
            .update_modifier(
                id,
                ModifierChanges {
                    option: Some("Oat".to_string()),
                    is_active: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::modifier_not_found(id));
    }

    #[tokio::test]
    async fn test_toggle_skips_validation() {
        let row = modifier("milk", "Soy", 2);
        let mut mods = MockModifierRepository::new();
        mods.expect_find_by_id().never();
        mods.expect_list_by_category().never();
        mods.expect_update().returning(move |_, changes| {
            let mut updated = row.clone();
            updated.apply(changes);
            Ok(Some(updated))
        });

        let updated = service(MockMenuItemRepository::new(), mods)
            .update_modifier(
                Uuid::new_v4(),
                ModifierChanges {
                    option: None,
                    is_active: Some(false),
                },
            )
            .await
            .unwrap();

        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn test_customization_only_shows_applicable_categories() {
        let item = MenuItem::new("Latte", "Classics", 0)
            .with_modifier("milk", Some("Oat"))
            .with_modifier("syrup", None);
        let item_id = item.id;

        let mut menu = MockMenuItemRepository::new();
        menu.expect_find_by_id()
            .returning(move |_| Ok(Some(item.clone())));
        let mut mods = MockModifierRepository::new();
        mods.expect_list().withf(|include| !include).returning(|_| {
            Ok(vec![
                modifier("milk", "Whole", 0),
                modifier("milk", "Oat", 1),
                modifier("temperature", "Hot", 0),
            ])
        });

        let view = service(menu, mods).customization_for(item_id).await.unwrap();

        // syrup applies but has no active options; temperature is not applicable
        assert_eq!(view.categories.len(), 1);
        assert_eq!(view.categories[0].category, "milk");
        assert_eq!(view.categories[0].options.len(), 2);
        assert_eq!(view.categories[0].selected.as_deref(), Some("Oat"));
    }

    #[tokio::test]
    async fn test_customization_of_inactive_item() {
        let mut item = MenuItem::new("Chai", "Classics", 1);
        item.is_active = false;

        let mut menu = MockMenuItemRepository::new();
        menu.expect_find_by_id()
            .returning(move |_| Ok(Some(item.clone())));
        let mut mods = MockModifierRepository::new();
        mods.expect_list().never();

        let err = service(menu, mods)
            .customization_for(Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "NotFound");
    }
}
