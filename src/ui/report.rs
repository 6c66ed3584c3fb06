//! Styled text produced by the report composer.
//!
//! A report is plain text split into segments, each tagged with a style
//! marker. Markers say what a segment *is* (a tier, a section heading, a
//! label); `ui::palette` decides what it looks like on a terminal.

use crate::core::threshold::Tier;
use std::fmt;

/// Report sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SystemInfo,
    Cpu,
    Memory,
    Disks,
    Network,
    Containers,
    Kubernetes,
    Temperatures,
    StorageWarnings,
    StorageStatus,
    Systemd,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::SystemInfo => "SYSTEM INFO",
            Section::Cpu => "CPU",
            Section::Memory => "MEMORY",
            Section::Disks => "DISKS",
            Section::Network => "NETWORK",
            Section::Containers => "CONTAINERS",
            Section::Kubernetes => "KUBERNETES",
            Section::Temperatures => "TEMPERATURES",
            Section::StorageWarnings => "SMART WARNINGS",
            Section::StorageStatus => "SMART STATUS",
            Section::Systemd => "SYSTEMD SERVICES",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Tier(Tier),
    Heading(Section),
    /// Field names such as `Host:`
    Label,
    /// Separators and hints
    Muted,
    Banner,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().push(text, Style::Plain)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new().push(text, style)
    }

    pub fn push(mut self, text: impl Into<String>, style: Style) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            style,
        });
        self
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line>) {
        self.lines.extend(lines);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::new());
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Marker-free text, one line per `\n`
    pub fn plain(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Segments carrying the given style, in order
    pub fn segments_with(&self, style: Style) -> impl Iterator<Item = &Segment> {
        self.lines
            .iter()
            .flat_map(|line| line.segments.iter())
            .filter(move |segment| segment.style == style)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}
