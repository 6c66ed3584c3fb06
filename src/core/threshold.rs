//! Severity tiers for metric values.
//!
//! Maps a value and its metric category to a tier. Tiers are opaque to the
//! classifier; the palette in `ui::palette` decides how each one looks.

/// Severity tier, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Normal,
    Warning,
    Critical,
    Severe,
}

/// Metric categories with numeric breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Percentages: CPU, memory, disk usage
    Usage,
    /// Hardware sensor readings in °C
    Temperature,
    /// Drive temperature reported by a storage self-test, in °C
    DriveTemperature,
}

/// Lower bounds (inclusive) of each tier above `Normal`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub warning: f64,
    pub critical: f64,
    pub severe: Option<f64>,
}

impl Category {
    pub const fn breakpoints(self) -> Breakpoints {
        match self {
            Category::Usage => Breakpoints {
                warning: 50.0,
                critical: 80.0,
                severe: None,
            },
            Category::Temperature => Breakpoints {
                warning: 50.0,
                critical: 70.0,
                severe: Some(85.0),
            },
            Category::DriveTemperature => Breakpoints {
                warning: 45.0,
                critical: 55.0,
                severe: None,
            },
        }
    }
}

/// Classify a numeric value
///
/// NaN is `Normal`. Infinities follow the ordering, so `+inf` lands in the
/// category's top tier and `-inf` in `Normal`.
pub fn classify(category: Category, value: f64) -> Tier {
    if value.is_nan() {
        return Tier::Normal;
    }

    let bp = category.breakpoints();
    match bp.severe {
        Some(severe) if value >= severe => Tier::Severe,
        _ if value >= bp.critical => Tier::Critical,
        _ if value >= bp.warning => Tier::Warning,
        _ => Tier::Normal,
    }
}

/// Binary health check (storage self-test): no warning tier
pub fn classify_health(passed: bool) -> Tier {
    if passed {
        Tier::Normal
    } else {
        Tier::Critical
    }
}

/// Binary run state (container running, service active, host online)
pub fn classify_state(up: bool) -> Tier {
    classify_health(up)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_monotonic(category: Category) {
        let mut previous = Tier::Normal;
        let mut value = -20.0;
        while value <= 150.0 {
            let tier = classify(category, value);
            assert!(
                tier >= previous,
                "{:?} tier dropped from {:?} to {:?} at {}",
                category,
                previous,
                tier,
                value
            );
            previous = tier;
            value += 0.5;
        }
    }

    #[test]
    fn test_usage_breakpoints() {
        assert_eq!(classify(Category::Usage, 0.0), Tier::Normal);
        assert_eq!(classify(Category::Usage, 49.9), Tier::Normal);
        assert_eq!(classify(Category::Usage, 50.0), Tier::Warning);
        assert_eq!(classify(Category::Usage, 79.9), Tier::Warning);
        assert_eq!(classify(Category::Usage, 80.0), Tier::Critical);
        assert_eq!(classify(Category::Usage, 100.0), Tier::Critical);
    }

    #[test]
    fn test_temperature_has_severe_tier() {
        assert_eq!(classify(Category::Temperature, 45.0), Tier::Normal);
        assert_eq!(classify(Category::Temperature, 69.0), Tier::Warning);
        assert_eq!(classify(Category::Temperature, 70.0), Tier::Critical);
        assert_eq!(classify(Category::Temperature, 84.9), Tier::Critical);
        assert_eq!(classify(Category::Temperature, 85.0), Tier::Severe);
    }

    #[test]
    fn test_drive_temperature_breakpoints() {
        assert_eq!(classify(Category::DriveTemperature, 40.0), Tier::Normal);
        assert_eq!(classify(Category::DriveTemperature, 50.0), Tier::Warning);
        assert_eq!(classify(Category::DriveTemperature, 55.0), Tier::Critical);
    }

    #[test]
    fn test_classification_is_monotonic() {
        assert_monotonic(Category::Usage);
        assert_monotonic(Category::Temperature);
        assert_monotonic(Category::DriveTemperature);
    }

    #[test]
    fn test_binary_health_skips_warning() {
        assert_eq!(classify_health(true), Tier::Normal);
        assert_eq!(classify_health(false), Tier::Critical);
        assert_eq!(classify_state(false), Tier::Critical);
    }

    #[test]
    fn test_nan_is_normal() {
        assert_eq!(classify(Category::Usage, f64::NAN), Tier::Normal);
        assert_eq!(classify(Category::Temperature, f64::NAN), Tier::Normal);
    }

    #[test]
    fn test_infinities_keep_the_ordering() {
        assert_eq!(classify(Category::Usage, f64::INFINITY), Tier::Critical);
        assert_eq!(classify(Category::Temperature, f64::INFINITY), Tier::Severe);
        assert_eq!(classify(Category::DriveTemperature, f64::INFINITY), Tier::Critical);
        assert_eq!(classify(Category::Temperature, f64::NEG_INFINITY), Tier::Normal);

        for category in [Category::Usage, Category::Temperature, Category::DriveTemperature] {
            assert!(classify(category, f64::INFINITY) >= classify(category, 150.0));
        }
    }
}
