// Terminal colors for report style markers

use crate::core::threshold::Tier;
use crate::ui::report::{Line, Report, Section, Segment, Style};
use colored::{ColoredString, Colorize};

/// Render a report with ANSI colors
///
/// Respects `colored::control`, so with colors disabled this is the same
/// text as `Report::plain`.
pub fn paint(report: &Report) -> String {
    report
        .lines()
        .iter()
        .map(paint_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn paint_line(line: &Line) -> String {
    line.segments.iter().map(|s| paint_segment(s).to_string()).collect()
}

fn paint_segment(segment: &Segment) -> ColoredString {
    let text = segment.text.as_str();
    match segment.style {
        Style::Plain => text.normal(),
        Style::Tier(tier) => tier_color(text, tier),
        Style::Heading(section) => heading_color(text, section),
        Style::Label => text.bold(),
        Style::Muted => text.dimmed(),
        Style::Banner => text.cyan().bold(),
    }
}

pub fn tier_color(text: &str, tier: Tier) -> ColoredString {
    match tier {
        Tier::Normal => text.green(),
        Tier::Warning => text.yellow(),
        Tier::Critical => text.red(),
        Tier::Severe => text.bright_red().bold(),
    }
}

fn heading_color(text: &str, section: Section) -> ColoredString {
    match section {
        Section::SystemInfo | Section::Containers => text.cyan().bold(),
        Section::Cpu | Section::Temperatures => text.yellow().bold(),
        Section::Memory | Section::Kubernetes => text.magenta().bold(),
        Section::Disks | Section::Systemd => text.blue().bold(),
        Section::Network | Section::StorageStatus => text.green().bold(),
        Section::StorageWarnings => text.red().bold(),
    }
}
