// Truncation policy for list sections

/// Default number of entries shown per list section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub disks: usize,
    pub network: usize,
    pub containers: usize,
    pub temperatures: usize,
    pub systemd: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            disks: 3,
            network: 5,
            containers: 10,
            temperatures: 10,
            systemd: 5,
        }
    }
}

/// Show-all mode lifts every cap
pub fn effective_limit(cap: usize, show_all: bool) -> usize {
    if show_all {
        usize::MAX
    } else {
        cap
    }
}

/// The visible slice of a list plus how many entries were cut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a, T> {
    pub shown: &'a [T],
    pub hidden: usize,
}

pub fn window<T>(items: &[T], cap: usize, show_all: bool) -> Window<'_, T> {
    let limit = effective_limit(cap, show_all).min(items.len());
    Window {
        shown: &items[..limit],
        hidden: items.len() - limit,
    }
}

impl<T> Window<'_, T> {
    /// `... and {n} more`, only when something was cut
    pub fn trailer(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("... and {} more", self.hidden))
    }
}
