// Command handlers module
pub mod completions;
pub mod watch;

// Re-exports for cleaner imports
pub use completions::execute as completions;
pub use watch::execute as watch;
