//! Full-report assembly: banner, per-host blocks, footer.

use crate::core::metrics::{normalize, NormalizationError, NormalizedHost};
use crate::core::threshold::{classify_health, classify_state, Tier};
use crate::ui::report::{Line, Report, Style};
use crate::ui::system_formatters::SectionRenderer;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// Inner width of the banner box and the host separators
pub const REPORT_WIDTH: usize = 64;

const TITLE: &str = "BLINKY METRICS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_all: bool,
    /// Header time, already formatted by the caller
    pub timestamp: String,
}

impl RenderOptions {
    pub fn new(show_all: bool, timestamp: impl Into<String>) -> Self {
        Self {
            show_all,
            timestamp: timestamp.into(),
        }
    }
}

/// Normalize a raw payload and compose its report
pub fn render_payload(raw: &Value, options: &RenderOptions) -> Report {
    compose(&normalize(raw), options)
}

pub fn compose(
    outcome: &Result<Vec<NormalizedHost>, NormalizationError>,
    options: &RenderOptions,
) -> Report {
    let mut report = Report::new();
    report.extend(banner());
    report.blank();

    let hosts = match outcome {
        Ok(hosts) => hosts,
        Err(err) => {
            report.push(Line::styled(
                format!("✗ Error: {}", err),
                Style::Tier(classify_health(false)),
            ));
            return report;
        }
    };

    if hosts.is_empty() {
        report.push(Line::styled("⚠ No hosts connected", Style::Tier(Tier::Warning)));
        return report;
    }

    report.push(Line::styled("Time:", Style::Label).push(format!(" {}", options.timestamp), Style::Plain));
    if hosts.len() > 1 {
        report.push(Line::styled("Hosts:", Style::Label).push(format!(" {}", hosts.len()), Style::Plain));
    }

    let renderer = SectionRenderer::new(options.show_all);
    for host in hosts {
        report.blank();
        compose_host(&mut report, host, &renderer);
    }

    report.blank();
    report.push(separator());
    let hint = if options.show_all {
        "Showing all details"
    } else {
        "Use --all for more details"
    };
    report.push(Line::styled(hint, Style::Muted));

    report
}

fn compose_host(report: &mut Report, host: &NormalizedHost, renderer: &SectionRenderer) {
    report.push(separator());

    let status = if host.online { "[ONLINE]" } else { "[OFFLINE]" };
    report.push(
        Line::styled("HOST:", Style::Label)
            .push(format!(" {} ", host.hostname), Style::Plain)
            .push(status, Style::Tier(classify_state(host.online))),
    );

    // A mismatch is always shown, even without a known version
    if host.agent_version.is_some() || host.version_mismatch {
        let version = host.agent_version.as_deref().unwrap_or("unknown");
        let mut line = Line::styled("Agent Version:", Style::Label).push(format!(" {}", version), Style::Plain);
        if host.version_mismatch {
            line = line.push(" [VERSION MISMATCH]", Style::Tier(Tier::Warning));
        }
        report.push(line);
    }

    if !host.has_metrics() {
        report.blank();
        report.push(Line::styled("  No metrics available", Style::Muted));
        return;
    }

    for section in renderer.render_all(&host.metrics) {
        report.blank();
        report.extend(section);
    }
}

fn banner() -> Vec<Line> {
    let rule = "═".repeat(REPORT_WIDTH);
    vec![
        Line::styled(format!("╔{}╗", rule), Style::Banner),
        Line::styled(format!("║{}║", center(TITLE, REPORT_WIDTH)), Style::Banner),
        Line::styled(format!("╚{}╝", rule), Style::Banner),
    ]
}

fn separator() -> Line {
    Line::styled("─".repeat(REPORT_WIDTH), Style::Muted)
}

/// Pad `text` with spaces to `width` columns, extra space going right
fn center(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
