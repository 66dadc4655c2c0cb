//! Dashboard analytics computed from the raw order log.
//!
//! Every call recomputes from scratch; nothing is cached between calls.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use kiosk_shared::constants::POPULAR_DRINKS_LIMIT;
use kiosk_shared::utc_day_key;

use crate::domain::{
    DashboardStats, DrinkCount, ModifierBreakdown, OptionShare, Order, OrderStatus, StatusCounts,
};

/// Build the full dashboard from `orders` as seen at `now`.
///
/// "Today" is the UTC calendar date of `now`; an order belongs to it when the
/// UTC date of its `created_at` is the same `YYYY-MM-DD` string.
pub fn aggregate(orders: &[Order], now: DateTime<Utc>) -> DashboardStats {
    let today_key = utc_day_key(&now);
    let today = count_by_status(
        orders
            .iter()
            .filter(|order| utc_day_key(&order.created_at) == today_key),
    );

    DashboardStats {
        today,
        all_time: count_by_status(orders.iter()),
        popular_drinks: popular_drinks(orders, POPULAR_DRINKS_LIMIT),
        modifier_breakdown: modifier_breakdown(orders),
    }
}

pub fn count_by_status<'a>(orders: impl Iterator<Item = &'a Order>) -> StatusCounts {
    orders.fold(StatusCounts::default(), |mut acc, order| {
        acc.total += 1;
        match order.known_status() {
            Some(OrderStatus::Placed) => acc.placed += 1,
            Some(OrderStatus::Ready) => acc.ready += 1,
            Some(OrderStatus::Canceled) => acc.canceled += 1,
            None => {}
        }
        acc
    })
}

/// Drinks ranked by order count. Equal counts keep first-seen order.
pub fn popular_drinks(orders: &[Order], limit: usize) -> Vec<DrinkCount> {
    let mut ranked = tally(orders.iter().map(|order| order.item.as_str()))
        .into_iter()
        .map(|(name, count)| DrinkCount { name, count })
        .collect::<Vec<_>>();

    // sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Per-category option counts with each option's rounded share of its own
/// category total. Missing and empty selections are not counted anywhere.
pub fn modifier_breakdown(orders: &[Order]) -> ModifierBreakdown {
    let mut selections: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for order in orders {
        for (category, option) in &order.modifiers {
            let Some(option) = option.as_deref().filter(|o| !o.is_empty()) else {
                continue;
            };
            selections.entry(category.as_str()).or_default().push(option);
        }
    }

    selections
        .into_iter()
        .map(|(category, picks)| {
            let category_total = picks.len() as u64;
            let mut shares = tally(picks.into_iter())
                .into_iter()
                .map(|(option, count)| OptionShare {
                    percentage: percentage(count, category_total),
                    option,
                    count,
                })
                .collect::<Vec<_>>();
            shares.sort_by(|a, b| b.count.cmp(&a.count));
            (category.to_string(), shares)
        })
        .collect()
}

/// `round(count / total * 100)`, rounding halves up. Not adjusted so a
/// category's shares add up to 100.
fn percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

/// Count occurrences, returning entries in first-seen order.
fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts
}
