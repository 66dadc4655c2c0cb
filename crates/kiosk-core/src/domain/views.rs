//! Customer-facing catalog views composed from active rows.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{MenuItem, Modifier};

/// What the ordering screen renders: active drinks and active options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderingMenu {
    pub items: Vec<MenuItem>,
    pub modifiers_by_category: BTreeMap<String, Vec<Modifier>>,
}

impl OrderingMenu {
    /// Group modifiers by category, keeping the incoming order within each group.
    pub fn group_modifiers(modifiers: Vec<Modifier>) -> BTreeMap<String, Vec<Modifier>> {
        let mut grouped: BTreeMap<String, Vec<Modifier>> = BTreeMap::new();
        for modifier in modifiers {
            grouped
                .entry(modifier.category.clone())
                .or_default()
                .push(modifier);
        }
        grouped
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomizationCategory {
    pub category: String,
    pub options: Vec<Modifier>,
    /// Preselected option taken from the item's defaults
    pub selected: Option<String>,
}

/// Customization screen for a single drink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customization {
    pub item: MenuItem,
    pub categories: Vec<CustomizationCategory>,
}

impl Customization {
    pub fn has_options(&self) -> bool {
        !self.categories.is_empty()
    }
}
