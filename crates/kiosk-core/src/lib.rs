//! # Kiosk Core
//!
//! Catalog consistency engine and order-statistics aggregator: domain
//! entities, repository traits, validation rules, and services.

pub mod domain;
pub mod error;
pub mod optimistic;
pub mod repositories;
pub mod services;
pub mod validation;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
