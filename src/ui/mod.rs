// Report model, rendering and terminal output

pub mod compose;
pub mod formatters;
pub mod limits;
pub mod palette;
pub mod progress;
pub mod report;
pub mod system_formatters;
pub mod terminal;

// Re-export commonly used items for cleaner imports
pub use compose::{compose, render_payload, RenderOptions};
pub use formatters::{format_bytes, format_celsius, format_count_rate, format_rate, format_uptime};
pub use palette::paint;
pub use progress::PercentBar;
pub use report::{Line, Report, Section, Segment, Style};
pub use terminal::TerminalSink;
