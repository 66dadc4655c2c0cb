//! Application-wide constants

/// Number of entries kept in the popular drinks ranking.
pub const POPULAR_DRINKS_LIMIT: usize = 20;

pub const STATUS_PLACED: &str = "placed";
pub const STATUS_READY: &str = "ready";
pub const STATUS_CANCELED: &str = "canceled";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
