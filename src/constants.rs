//! Application constants and configuration

pub const APP_NAME: &str = "List Performance Demo";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "list-performance-demo.log";
pub const DEFAULT_LOG_FILTER: &str = "info,list_performance_demo=debug";

/// Number of products seeded at startup (ids 1..=SEED_COUNT)
pub const SEED_COUNT: u32 = 50;
/// Seed price is `SEED_BASE_PRICE + id`
pub const SEED_BASE_PRICE: f64 = 9.99;
/// Amount added by the per-row "bump price" action
pub const PRICE_BUMP: f64 = 1.0;
