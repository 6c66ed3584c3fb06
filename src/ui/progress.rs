// Percentage bars for usage metrics

use crate::core::threshold::{classify, Category, Tier};
use std::fmt;

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';

/// Default bar width for usage lines
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// A usage bar: `filled` glyphs, then `empty` glyphs, then the value
///
/// # Arguments
/// * `value` - Percentage to display (not clamped; only the bar is)
/// * `width` - Total number of glyphs in the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentBar {
    pub value: f64,
    pub filled: usize,
    pub empty: usize,
    pub tier: Tier,
}

impl PercentBar {
    pub fn new(value: f64, width: usize) -> Self {
        let raw = (width as f64 * value / 100.0).floor();
        let filled = if raw.is_finite() {
            raw.clamp(0.0, width as f64) as usize
        } else {
            0
        };

        Self {
            value,
            filled,
            empty: width - filled,
            tier: classify(Category::Usage, value),
        }
    }

    /// The glyph run without the trailing value
    pub fn glyphs(&self) -> String {
        let mut bar = String::with_capacity((self.filled + self.empty) * 3);
        bar.extend(std::iter::repeat(FILLED_GLYPH).take(self.filled));
        bar.extend(std::iter::repeat(EMPTY_GLYPH).take(self.empty));
        bar
    }

    /// The trailing value, e.g. ` 92.3%`
    pub fn label(&self) -> String {
        format!(" {:.1}%", self.value)
    }
}

impl fmt::Display for PercentBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.glyphs(), self.label())
    }
}
