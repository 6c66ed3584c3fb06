use blinky::core::threshold::Tier;
use blinky::ui::report::{Section, Style};
use blinky::{render_payload, RenderOptions};
use serde_json::json;

fn options(show_all: bool) -> RenderOptions {
    RenderOptions::new(show_all, "2024-05-01 08:30:00")
}

#[test]
fn test_agent_cpu_only_report() {
    let payload = json!({"hostname": "web1", "cpu": {"usage_percent": 92.3, "core_count": 4}});
    let report = render_payload(&payload, &options(false));
    let plain = report.plain();

    assert!(plain.contains("Time: 2024-05-01 08:30:00"));
    assert!(plain.contains("HOST: web1 [ONLINE]"));
    assert!(plain.contains("▶ CPU"));
    assert!(plain.contains("92.3%"));
    assert!(plain.contains("Cores:  4"));
    assert!(!plain.contains("▶ DISKS"));
    assert!(!plain.contains("▶ NETWORK"));
    assert!(!plain.contains("Hosts:"));

    // 92.3% of a 50-wide bar is 46 filled cells, classified critical
    let bar: Vec<&str> = report
        .segments_with(Style::Tier(Tier::Critical))
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(bar.len(), 1);
    assert_eq!(bar[0].chars().filter(|c| *c == '█').count(), 46);
    assert_eq!(bar[0].chars().count(), 50);
}

#[test]
fn test_empty_collector_shows_notice_only() {
    let plain = render_payload(&json!({"hosts": []}), &options(false)).plain();

    assert!(plain.contains("BLINKY METRICS"));
    assert!(plain.ends_with("⚠ No hosts connected"));
    assert!(!plain.contains("HOST:"));
    assert!(!plain.contains("Time:"));
}

#[test]
fn test_error_shows_banner_and_message_only() {
    let report = render_payload(&json!({"error": "connection refused"}), &options(true));
    let plain = report.plain();

    assert!(plain.contains("BLINKY METRICS"));
    assert!(plain.ends_with("✗ Error: connection refused"));
    assert!(!plain.contains("Time:"));
    assert!(!plain.contains("details"));
}

#[test]
fn test_sections_follow_fixed_order() {
    let payload = json!({
        "hostname": "web1",
        "uptime": 3600,
        "systemd": [{"name": "nginx.service", "state": "failed", "active": false}],
        "temperatures": [{"sensor": "coretemp", "temp": 45.0}],
        "network": [{"interface": "eth0", "rx_bytes": 1024}],
        "disks": [{"mount_point": "/", "usage_percent": 10.0}],
        "memory": {"usage_percent": 30.0, "total_bytes": 2048},
        "cpu": {"usage_percent": 5.0}
    });
    let plain = render_payload(&payload, &options(false)).plain();

    let order = [
        "▶ SYSTEM INFO",
        "▶ CPU",
        "▶ MEMORY",
        "▶ DISKS",
        "▶ NETWORK",
        "▶ TEMPERATURES",
        "▶ SYSTEMD SERVICES",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|heading| plain.find(heading).unwrap_or_else(|| panic!("missing {}", heading)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_show_all_reveals_truncated_entries() {
    let disks: Vec<_> = (0..7)
        .map(|i| json!({"mount_point": format!("/mnt/d{}", i), "usage_percent": 10.0}))
        .collect();
    let payload = json!({"hostname": "store1", "disks": disks});

    let brief = render_payload(&payload, &options(false)).plain();
    assert!(brief.contains("... and 4 more"));
    assert!(!brief.contains("/mnt/d3"));
    assert!(brief.ends_with("Use --all for more details"));

    let full = render_payload(&payload, &options(true)).plain();
    assert!(full.contains("/mnt/d6"));
    assert!(!full.contains("more"));
    assert!(full.ends_with("Showing all details"));
}

#[test]
fn test_multi_host_collector_report() {
    let payload = json!({
        "hosts": [
            {"hostname": "a", "online": true, "agent_version": "1.0.0",
             "metrics": {"memory": {"usage": 55.0, "total": 4096, "used": 2048}}},
            {"hostname": "b", "online": false, "agent_version": "0.9.0", "version_mismatch": true}
        ]
    });
    let report = render_payload(&payload, &options(false));
    let plain = report.plain();

    assert!(plain.contains("Hosts: 2"));
    assert!(plain.contains("HOST: a [ONLINE]"));
    assert!(plain.contains("HOST: b [OFFLINE]"));
    assert!(plain.contains("Agent Version: 0.9.0 [VERSION MISMATCH]"));
    assert!(plain.contains("No metrics available"));
    assert_eq!(report.segments_with(Style::Heading(Section::Memory)).count(), 1);
}

#[test]
fn test_collector_host_without_version_still_reports_mismatch() {
    let payload = json!({
        "hosts": [{"hostname": "a", "online": true, "version_mismatch": true,
                   "metrics": {"cpu": {"usage": 5.0}}}]
    });
    let plain = render_payload(&payload, &options(false)).plain();

    assert!(plain.contains("HOST: a [ONLINE]"));
    assert!(plain.contains("Agent Version: unknown [VERSION MISMATCH]"));
    assert!(plain.contains("▶ CPU"));
}
