// Blinky Library - Public API

// Re-export error types
pub mod error;
pub use error::{BlinkyError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use self::core::config::Config;
pub use self::core::metrics::{normalize, NormalizationError, NormalizedHost};
pub use ui::compose::{compose, render_payload, RenderOptions};
pub use ui::report::Report;

// Initialize logging
//
// The dashboard redraws the whole screen every cycle, so anything below
// `warn` stays hidden unless RUST_LOG asks for it.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
