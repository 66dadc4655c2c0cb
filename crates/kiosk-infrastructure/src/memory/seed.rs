//! Demo catalog for the in-memory backend.

use chrono::{DateTime, Duration, Utc};

use kiosk_core::domain::{MenuItem, Modifier, Order, OrderStatus};
use kiosk_shared::new_id;

const MILK: &str = "milk";
const TEMPERATURE: &str = "temperature";

pub fn demo_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Honey Lavender Latte", "Signature", 0)
            .with_modifier(MILK, Some("Oat"))
            .with_modifier(TEMPERATURE, Some("Hot")),
        MenuItem::new("Brown Sugar Cold Brew", "Signature", 1)
            .with_modifier(MILK, None)
            .with_modifier(TEMPERATURE, Some("Iced")),
        MenuItem::new("Latte", "Classics", 2)
            .with_modifier(MILK, Some("Whole"))
            .with_modifier(TEMPERATURE, Some("Hot")),
        MenuItem::new("Mocha", "Classics", 3)
            .with_modifier(MILK, Some("Whole"))
            .with_modifier(TEMPERATURE, None),
        MenuItem::new("Americano", "Classics", 4).with_modifier(TEMPERATURE, Some("Hot")),
        MenuItem::new("Espresso", "Classics", 5),
    ]
}

pub fn demo_modifiers() -> Vec<Modifier> {
    let milk = ["Whole", "Oat", "Almond", "Skim"];
    let temperature = ["Hot", "Iced"];

    milk.iter()
        .enumerate()
        .map(|(i, option)| (MILK, i, option))
        .chain(temperature.iter().enumerate().map(|(i, option)| (TEMPERATURE, i, option)))
        .map(|(category, i, option)| Modifier {
            id: new_id(),
            category: category.to_string(),
            option: option.to_string(),
            is_active: true,
            display_order: i as i32,
        })
        .collect()
}

/// A handful of orders spread over today and yesterday.
pub fn demo_orders(now: DateTime<Utc>) -> Vec<Order> {
    let yesterday = now - Duration::days(1);
    vec![
        Order::new("Maya", "Latte", OrderStatus::Ready, yesterday)
            .with_modifier(MILK, Some("Oat"))
            .with_modifier(TEMPERATURE, Some("Hot")),
        Order::new("Theo", "Honey Lavender Latte", OrderStatus::Canceled, yesterday)
            .with_modifier(MILK, Some("Almond")),
        Order::new("Priya", "Latte", OrderStatus::Ready, now)
            .with_modifier(MILK, Some("Whole"))
            .with_modifier(TEMPERATURE, Some("Iced")),
        Order::new("Sam", "Brown Sugar Cold Brew", OrderStatus::Placed, now)
            .with_modifier(MILK, None)
            .with_modifier(TEMPERATURE, Some("Iced")),
        Order::new("Lena", "Espresso", OrderStatus::Placed, now),
    ]
}
