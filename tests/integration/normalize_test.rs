use blinky::core::metrics::{normalize, NormalizationError};
use serde_json::json;

#[test]
fn test_empty_collector_is_ok_and_empty() {
    assert_eq!(normalize(&json!({"hosts": []})), Ok(vec![]));
}

#[test]
fn test_agent_without_hostname_is_unknown() {
    let hosts = normalize(&json!({"cpu": {"usage_percent": 10.0}})).unwrap();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].hostname, "unknown");
    assert!(hosts[0].online);
}

#[test]
fn test_error_payload_is_fetch_error() {
    let err = normalize(&json!({"error": "connection refused"})).unwrap_err();
    assert_eq!(err, NormalizationError::Fetch("connection refused".to_string()));
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn test_non_object_payload_is_malformed() {
    assert!(matches!(
        normalize(&json!([1, 2, 3])),
        Err(NormalizationError::Malformed(_))
    ));
    assert!(matches!(
        normalize(&json!({"hosts": "nope"})),
        Err(NormalizationError::Malformed(_))
    ));
}

#[test]
fn test_collector_and_agent_flavors_agree() {
    let agent = json!({
        "hostname": "web1",
        "cpu": {"usage_percent": 42.5, "core_count": 8},
        "memory": {"usage_percent": 61.0, "total_bytes": 1024, "used_bytes": 600},
        "disks": [{"mount_point": "/data", "device": "sdb1", "usage_percent": 71.0}],
        "smart_data": [{"device": "/dev/sdb", "health_status": "PASSED", "temperature": 35}]
    });
    let collector = json!({
        "hosts": [{
            "hostname": "web1",
            "online": true,
            "agent_version": "1.4.0",
            "metrics": {
                "cpu": {"usage": 42.5, "cores": 8},
                "memory": {"usage": 61.0, "total": 1024, "used": 600},
                "disks": [{"mount": "/data", "device": "sdb1", "usage": 71.0}],
                "smart": [{"device": "/dev/sdb", "health": "PASSED", "temperature": 35}]
            }
        }]
    });

    let from_agent = normalize(&agent).unwrap();
    let from_collector = normalize(&collector).unwrap();
    assert_eq!(from_agent[0].metrics, from_collector[0].metrics);
    assert_eq!(from_collector[0].agent_version.as_deref(), Some("1.4.0"));
}

#[test]
fn test_collector_host_fields() {
    let hosts = normalize(&json!({
        "hosts": [
            {"hostname": "a", "online": true, "version_mismatch": true, "metrics": {"cpu": {"usage": 5}}},
            {"hostname": "b", "online": false},
            "garbage"
        ]
    }))
    .unwrap();

    assert_eq!(hosts.len(), 2);
    assert!(hosts[0].version_mismatch);
    assert!(hosts[0].has_metrics());
    assert!(!hosts[1].online);
    assert!(!hosts[1].has_metrics());
}

#[test]
fn test_implausible_counts_are_dropped() {
    let hosts = normalize(&json!({
        "system_info": {"os_name": "Linux", "cpu_cores": 4096, "cpu_threads": 0},
        "cpu": {"usage_percent": 5.0, "core_count": 1000}
    }))
    .unwrap();
    let metrics = &hosts[0].metrics;

    let info = metrics.system_info.as_ref().unwrap();
    assert_eq!(info.cpu_cores, None);
    assert_eq!(info.cpu_threads, None);
    assert_eq!(metrics.cpu.as_ref().unwrap().core_count, None);
}

#[test]
fn test_missing_and_empty_categories_are_none() {
    let hosts = normalize(&json!({
        "hostname": "web1",
        "cpu": {"usage_percent": 92.3, "core_count": 4},
        "disks": [],
        "memory": {}
    }))
    .unwrap();
    let metrics = &hosts[0].metrics;

    assert!(metrics.cpu.is_some());
    assert!(metrics.memory.is_none());
    assert!(metrics.disks.is_none());
    assert!(metrics.network.is_none());
}

#[test]
fn test_storage_passed_defaults() {
    let hosts = normalize(&json!({
        "smart_data": [
            {"device": "/dev/sda"},
            {"device": "/dev/sdb", "health_status": "FAILED"},
            {"device": "/dev/sdc", "health_status": "FAILED", "passed": true}
        ]
    }))
    .unwrap();
    let drives = hosts[0].metrics.storage_health.as_ref().unwrap();

    assert!(drives[0].passed);
    assert!(!drives[1].passed);
    assert!(drives[2].passed);
}

#[test]
fn test_normalize_is_deterministic() {
    let payload = json!({
        "hostname": "web1",
        "temperatures": [{"sensor": "coretemp", "temp": 55.0}],
        "systemd": [{"name": "nginx.service", "active": true}]
    });
    assert_eq!(normalize(&payload), normalize(&payload));
}
