//! Read models produced by the stats aggregator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Order counts for one partition of the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: u64,
    pub placed: u64,
    pub ready: u64,
    pub canceled: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionShare {
    pub option: String,
    pub count: u64,
    /// Rounded share of the category total. Shares in a category may not sum to 100.
    pub percentage: u32,
}

/// Modifier category -> options ranked by count.
pub type ModifierBreakdown = BTreeMap<String, Vec<OptionShare>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub today: StatusCounts,
    pub all_time: StatusCounts,
    pub popular_drinks: Vec<DrinkCount>,
    pub modifier_breakdown: ModifierBreakdown,
}
