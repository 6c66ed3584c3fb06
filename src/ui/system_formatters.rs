//! Per-category report sections.
//!
//! Each renderer returns the lines for one section, heading included, or
//! nothing when the section has nothing to show. Optional per-entry details
//! (rates, errors, limits) only appear when they are non-zero.

use crate::core::metrics::*;
use crate::core::threshold::{classify, classify_health, classify_state, Category};
use crate::ui::formatters::{format_bytes, format_celsius, format_count_rate, format_rate, format_uptime};
use crate::ui::limits::{window, Limits, Window};
use crate::ui::progress::{PercentBar, DEFAULT_BAR_WIDTH};
use crate::ui::report::{Line, Section, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest entry name (image, sensor label) before it is cut with `...`
pub const MAX_NAME_WIDTH: usize = 56;

const DOT: &str = "●";

/// Renders sections for one host in a given display mode
#[derive(Debug, Clone, Copy)]
pub struct SectionRenderer {
    pub show_all: bool,
    pub limits: Limits,
}

impl SectionRenderer {
    pub fn new(show_all: bool) -> Self {
        Self {
            show_all,
            limits: Limits::default(),
        }
    }

    /// All sections in display order; empty sections are left out
    pub fn render_all(&self, metrics: &NormalizedMetrics) -> Vec<Vec<Line>> {
        let sections = vec![
            self.system_info(metrics.system_info.as_ref(), metrics.uptime_seconds),
            metrics.cpu.as_ref().map(|c| self.cpu(c)).unwrap_or_default(),
            metrics.memory.as_ref().map(|m| self.memory(m)).unwrap_or_default(),
            self.disks(metrics.disks.as_deref().unwrap_or_default()),
            self.network(metrics.network.as_deref().unwrap_or_default()),
            self.containers(metrics.containers.as_deref().unwrap_or_default()),
            metrics.kubernetes.as_ref().map(|k| self.kubernetes(k)).unwrap_or_default(),
            self.temperatures(metrics.temperatures.as_deref().unwrap_or_default()),
            self.storage_health(metrics.storage_health.as_deref().unwrap_or_default()),
            self.systemd(metrics.systemd_services.as_deref().unwrap_or_default()),
        ];

        sections.into_iter().filter(|s| !s.is_empty()).collect()
    }

    pub fn system_info(&self, info: Option<&SystemInfo>, uptime: Option<u64>) -> Vec<Line> {
        let mut lines = Vec::new();

        if let Some(info) = info {
            let os = [info.os_name.as_str(), info.os_version.as_str()]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            if !os.is_empty() {
                lines.push(Line::plain(format!("  OS:           {}", os)));
            }
            if !info.kernel.is_empty() {
                lines.push(Line::plain(format!("  Kernel:       {}", info.kernel)));
            }
            if !info.architecture.is_empty() {
                lines.push(Line::plain(format!("  Architecture: {}", info.architecture)));
            }
            if !info.cpu_model.is_empty() {
                lines.push(Line::plain(format!("  CPU Model:    {}", info.cpu_model)));
            }
            // Both counts must be plausible, or neither is shown
            if let (Some(cores), Some(threads)) = (info.cpu_cores, info.cpu_threads) {
                lines.push(Line::plain(format!(
                    "  CPU:          {} cores / {} threads",
                    cores, threads
                )));
            }
            if info.total_memory_bytes > 0 {
                lines.push(Line::plain(format!(
                    "  Total Memory: {}",
                    format_bytes(info.total_memory_bytes as f64)
                )));
            }
        }

        if let Some(seconds) = uptime {
            lines.push(Line::plain(format!(
                "  Uptime:       {}",
                format_uptime(seconds.min(i64::MAX as u64) as i64)
            )));
        }

        with_heading(Section::SystemInfo, lines)
    }

    pub fn cpu(&self, cpu: &CpuMetrics) -> Vec<Line> {
        let (load_1, load_5, load_15) = cpu.load_average;
        let mut lines = vec![
            usage_line("  Usage:  ", cpu.usage_percent),
            Line::plain(format!(
                "  Load:   {:.2} / {:.2} / {:.2}",
                load_1, load_5, load_15
            )),
        ];
        if let Some(cores) = cpu.core_count {
            lines.push(Line::plain(format!("  Cores:  {}", cores)));
        }

        with_heading(Section::Cpu, lines)
    }

    pub fn memory(&self, mem: &MemoryMetrics) -> Vec<Line> {
        let mut lines = vec![
            usage_line("  Usage:  ", mem.usage_percent),
            Line::plain(format!(
                "  Used:   {} / {}",
                format_bytes(mem.used_bytes as f64),
                format_bytes(mem.total_bytes as f64)
            )),
            Line::plain(format!(
                "  Free:   {}",
                format_bytes(mem.available_bytes as f64)
            )),
        ];
        if mem.cached_bytes > 0 {
            lines.push(Line::plain(format!(
                "  Cached: {}",
                format_bytes(mem.cached_bytes as f64)
            )));
        }

        with_heading(Section::Memory, lines)
    }

    pub fn disks(&self, disks: &[DiskMetrics]) -> Vec<Line> {
        let shown = window(disks, self.limits.disks, self.show_all);
        let mut lines = Vec::new();

        for disk in shown.shown {
            lines.push(Line::plain(format!(
                "  {} ({})",
                disk.mount_point,
                or_unknown(&disk.device)
            )));
            lines.push(usage_line("    Usage: ", disk.usage_percent));
            lines.push(Line::plain(format!(
                "    Space: {} / {}",
                format_bytes(disk.used_bytes as f64),
                format_bytes(disk.total_bytes as f64)
            )));

            // Show I/O stats if available
            if disk.read_bytes_per_sec > 0.0 || disk.write_bytes_per_sec > 0.0 {
                lines.push(Line::plain(format!(
                    "    I/O:   Read {} | Write {}",
                    format_rate(disk.read_bytes_per_sec),
                    format_rate(disk.write_bytes_per_sec)
                )));
            }
            if disk.read_ops_per_sec > 0.0 || disk.write_ops_per_sec > 0.0 {
                lines.push(Line::plain(format!(
                    "    IOPS:  Read {} | Write {}",
                    format_count_rate(disk.read_ops_per_sec),
                    format_count_rate(disk.write_ops_per_sec)
                )));
            }
        }
        push_trailer(&mut lines, &shown, "  ");

        with_heading(Section::Disks, lines)
    }

    pub fn network(&self, interfaces: &[NetworkMetrics]) -> Vec<Line> {
        let shown = window(interfaces, self.limits.network, self.show_all);
        let mut lines = Vec::new();

        for iface in shown.shown {
            lines.push(Line::plain(format!("  {}", or_unknown(&iface.interface))));
            lines.push(Line::plain(format!(
                "    Total:     RX {} | TX {}",
                format_bytes(iface.rx_bytes as f64),
                format_bytes(iface.tx_bytes as f64)
            )));

            if iface.rx_bytes_per_sec > 0.0 || iface.tx_bytes_per_sec > 0.0 {
                lines.push(Line::plain(format!(
                    "    Bandwidth: RX {} | TX {}",
                    format_rate(iface.rx_bytes_per_sec),
                    format_rate(iface.tx_bytes_per_sec)
                )));
            }
            if iface.rx_packets_per_sec > 0.0 || iface.tx_packets_per_sec > 0.0 {
                lines.push(Line::plain(format!(
                    "    Packets:   RX {} | TX {}",
                    format_count_rate(iface.rx_packets_per_sec),
                    format_count_rate(iface.tx_packets_per_sec)
                )));
            }
            if iface.rx_errors > 0 || iface.tx_errors > 0 {
                lines.push(Line::plain("    ").push(
                    format!("Errors:    RX {} | TX {}", iface.rx_errors, iface.tx_errors),
                    Style::Tier(classify_health(false)),
                ));
            }
        }
        push_trailer(&mut lines, &shown, "  ");

        with_heading(Section::Network, lines)
    }

    pub fn containers(&self, containers: &[ContainerMetrics]) -> Vec<Line> {
        let shown = window(containers, self.limits.containers, self.show_all);
        let mut lines = Vec::new();

        for container in shown.shown {
            let name = if !container.name.is_empty() {
                container.name.clone()
            } else if !container.id.is_empty() {
                container.id.chars().take(12).collect()
            } else {
                "unknown".to_string()
            };

            lines.push(
                Line::plain("  ")
                    .push(DOT, Style::Tier(classify_state(container.is_running())))
                    .push(
                        format!(" {} ({})", name, or_unknown(&container.runtime)),
                        Style::Plain,
                    ),
            );

            if !container.image.is_empty() {
                lines.push(Line::plain(format!(
                    "    Image: {}",
                    fit_width(&container.image, MAX_NAME_WIDTH)
                )));
            }

            if container.cpu_percent > 0.0 || container.memory_bytes > 0 {
                let mut memory = format_bytes(container.memory_bytes as f64);
                if container.memory_limit > 0 {
                    memory.push_str(&format!(
                        " / {} ({:.1}%)",
                        format_bytes(container.memory_limit as f64),
                        container.memory_percent
                    ));
                }
                lines.push(Line::plain(format!(
                    "    CPU: {:.1}%  |  Memory: {}",
                    container.cpu_percent, memory
                )));
            }

            if container.network_rx_bytes_per_sec > 0.0 || container.network_tx_bytes_per_sec > 0.0 {
                lines.push(Line::plain(format!(
                    "    Network: RX {} | TX {}",
                    format_rate(container.network_rx_bytes_per_sec),
                    format_rate(container.network_tx_bytes_per_sec)
                )));
            }

            if container.block_read_bytes_per_sec > 0.0 || container.block_write_bytes_per_sec > 0.0 {
                lines.push(Line::plain(format!(
                    "    Disk I/O: Read {} | Write {}",
                    format_rate(container.block_read_bytes_per_sec),
                    format_rate(container.block_write_bytes_per_sec)
                )));
            }

            if container.pids > 0 {
                lines.push(Line::plain(format!("    PIDs: {}", container.pids)));
            }
        }
        push_trailer(&mut lines, &shown, "  ");

        with_heading(Section::Containers, lines)
    }

    pub fn kubernetes(&self, k8s: &KubernetesMetrics) -> Vec<Line> {
        if !k8s.detected {
            return Vec::new();
        }

        let mut lines = vec![
            Line::plain(format!("  Type:       {}", or_unknown(&k8s.cluster_type))),
            Line::plain(format!("  Pods:       {}", k8s.pod_count)),
            Line::plain(format!("  Nodes:      {}", k8s.node_count)),
            Line::plain(format!("  Namespaces: {}", k8s.namespaces.len())),
        ];
        if self.show_all && !k8s.namespaces.is_empty() {
            lines.push(Line::plain(format!(
                "  Namespace list: {}",
                k8s.namespaces.join(", ")
            )));
        }

        with_heading(Section::Kubernetes, lines)
    }

    pub fn temperatures(&self, readings: &[TemperatureReading]) -> Vec<Line> {
        let shown = window(readings, self.limits.temperatures, self.show_all);
        let mut lines = Vec::new();

        for reading in shown.shown {
            let sensor = if reading.sensor.is_empty() {
                "Unknown"
            } else {
                reading.sensor.as_str()
            };
            let name = if reading.label.is_empty() {
                sensor.to_string()
            } else {
                format!("{} ({})", sensor, reading.label)
            };

            let mut line = Line::plain(format!("  {}: ", fit_width(&name, MAX_NAME_WIDTH))).push(
                format_celsius(reading.celsius),
                Style::Tier(classify(Category::Temperature, reading.celsius)),
            );

            // Critical threshold wins over max when both are known
            if reading.critical > 0.0 {
                line = line.push(format!(" (crit: {:.0}°C)", reading.critical), Style::Plain);
            } else if reading.max > 0.0 {
                line = line.push(format!(" (max: {:.0}°C)", reading.max), Style::Plain);
            }
            lines.push(line);
        }
        push_trailer(&mut lines, &shown, "  ");

        with_heading(Section::Temperatures, lines)
    }

    /// Failed drives always render; healthy drives only in show-all mode
    pub fn storage_health(&self, drives: &[StorageHealth]) -> Vec<Line> {
        let (failed, healthy): (Vec<&StorageHealth>, Vec<&StorageHealth>) =
            drives.iter().partition(|d| !d.passed);
        let mut lines = Vec::new();

        let mut warnings = Vec::new();
        for drive in &failed {
            let status = if drive.health_status.is_empty() {
                "UNKNOWN"
            } else {
                drive.health_status.as_str()
            };
            warnings.push(
                Line::plain("  ")
                    .push("✗", Style::Tier(classify_health(false)))
                    .push(format!(" {}: {}", or_unknown(&drive.device), status), Style::Plain),
            );
            if drive.temperature > 50.0 {
                warnings.push(Line::plain(format!("    Temp: {:.0}°C", drive.temperature)));
            }
            if drive.reallocated_sectors > 0 {
                warnings.push(Line::plain(format!(
                    "    Reallocated sectors: {}",
                    drive.reallocated_sectors
                )));
            }
            if drive.pending_sectors > 0 {
                warnings.push(Line::plain(format!(
                    "    Pending sectors: {}",
                    drive.pending_sectors
                )));
            }
        }
        lines.extend(with_heading(Section::StorageWarnings, warnings));

        if self.show_all {
            let mut status = Vec::new();
            for drive in &healthy {
                let health = if drive.health_status.is_empty() {
                    "OK"
                } else {
                    drive.health_status.as_str()
                };
                let mut line = Line::plain("  ")
                    .push("✓", Style::Tier(classify_health(true)))
                    .push(format!(" {}: {} ", or_unknown(&drive.device), health), Style::Plain)
                    .push(
                        format!("({:.0}°C)", drive.temperature),
                        Style::Tier(classify(Category::DriveTemperature, drive.temperature)),
                    );
                if drive.power_on_hours > 0 {
                    line = line.push(format!("  {}h powered on", drive.power_on_hours), Style::Muted);
                }
                status.push(line);
            }

            let status = with_heading(Section::StorageStatus, status);
            if !lines.is_empty() && !status.is_empty() {
                lines.push(Line::new());
            }
            lines.extend(status);
        }

        lines
    }

    /// Counts plus the inactive list; active services only in show-all mode
    pub fn systemd(&self, services: &[SystemdService]) -> Vec<Line> {
        if services.is_empty() {
            return Vec::new();
        }

        let (active, inactive): (Vec<&SystemdService>, Vec<&SystemdService>) =
            services.iter().partition(|s| s.active);
        let mut lines = vec![Line::plain(format!(
            "  {} active / {} inactive",
            active.len(),
            inactive.len()
        ))];

        if !inactive.is_empty() {
            lines.push(Line::plain("  Inactive services:"));
            let shown = window(&inactive, self.limits.systemd, self.show_all);
            for service in shown.shown {
                lines.push(service_line(service, false));
            }
            push_trailer(&mut lines, &shown, "    ");
        }

        if self.show_all && !active.is_empty() {
            lines.push(Line::plain("  Active services:"));
            for service in &active {
                lines.push(service_line(service, true));
            }
        }

        with_heading(Section::Systemd, lines)
    }
}

fn service_line(service: &SystemdService, active: bool) -> Line {
    let state = match (service.state.as_str(), service.sub_state.as_str()) {
        ("", "") => "unknown".to_string(),
        (state, "") => state.to_string(),
        ("", sub) => sub.to_string(),
        (state, sub) => format!("{}/{}", state, sub),
    };
    Line::plain("    ")
        .push(DOT, Style::Tier(classify_state(active)))
        .push(format!(" {} ({})", or_unknown(&service.name), state), Style::Plain)
}

fn with_heading(section: Section, lines: Vec<Line>) -> Vec<Line> {
    if lines.is_empty() {
        return lines;
    }
    let mut out = Vec::with_capacity(lines.len() + 1);
    out.push(Line::styled(format!("▶ {}", section.title()), Style::Heading(section)));
    out.extend(lines);
    out
}

fn usage_line(label: &str, value: f64) -> Line {
    let bar = PercentBar::new(value, DEFAULT_BAR_WIDTH);
    Line::plain(label)
        .push(bar.glyphs(), Style::Tier(bar.tier))
        .push(bar.label(), Style::Plain)
}

fn push_trailer<T>(lines: &mut Vec<Line>, shown: &Window<'_, T>, indent: &str) {
    if let Some(trailer) = shown.trailer() {
        lines.push(Line::styled(format!("{}{}", indent, trailer), Style::Muted));
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "unknown"
    } else {
        value
    }
}

/// Cut `text` to `max` terminal columns, ending in `...` when cut
pub fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}
