// Core logic: payload normalization, tiers, endpoint and config handling

pub mod config;
pub mod endpoint;
pub mod fetch;
pub mod metrics;
pub mod threshold;

// Re-export commonly used items
pub use config::Config;
pub use endpoint::{resolve_endpoint, Mode};
pub use fetch::MetricsFetcher;
pub use threshold::{classify, Category, Tier};
