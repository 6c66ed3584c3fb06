//! Payload shape detection and per-category extraction.

use serde_json::Value;
use thiserror::Error;

use super::model::*;
use super::schema::{self, Record};

/// Core and thread counts at or above this are sensor garbage
pub const MAX_PLAUSIBLE_COUNT: u64 = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    /// The fetch layer reported a failure as data (`{"error": ...}`)
    #[error("{0}")]
    Fetch(String),

    #[error("Unrecognized payload: {0}")]
    Malformed(String),
}

/// Top-level payload variants, resolved once at the boundary
#[derive(Debug, Clone)]
pub enum Payload<'a> {
    /// Single host, metrics at top level
    Agent(Record<'a>),
    /// Collector response: one entry per host
    Collector(&'a [Value]),
    Error(String),
}

impl<'a> Payload<'a> {
    pub fn detect(raw: &'a Value) -> Result<Self, NormalizationError> {
        let record = Record::from_value(raw).ok_or_else(|| {
            NormalizationError::Malformed(format!("expected a JSON object, got {}", kind(raw)))
        })?;

        if let Some(error) = record.raw(schema::payload::ERROR) {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(Payload::Error(message));
        }

        if let Some(hosts) = record.raw(schema::payload::HOSTS) {
            return match hosts.as_array() {
                Some(entries) => Ok(Payload::Collector(entries)),
                None => Err(NormalizationError::Malformed(format!(
                    "`hosts` must be an array, got {}",
                    kind(hosts)
                ))),
            };
        }

        Ok(Payload::Agent(record))
    }
}

/// Normalize a raw agent or collector payload into a host list
///
/// An empty collector host list is a valid, empty result.
pub fn normalize(raw: &Value) -> Result<Vec<NormalizedHost>, NormalizationError> {
    match Payload::detect(raw)? {
        Payload::Error(message) => Err(NormalizationError::Fetch(message)),
        Payload::Agent(record) => Ok(vec![agent_host(record)]),
        Payload::Collector(entries) => Ok(entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match Record::from_value(entry) {
                Some(record) => Some(collector_host(record)),
                None => {
                    log::warn!("Skipping collector host #{}: not an object", index);
                    None
                }
            })
            .collect()),
    }
}

fn agent_host(record: Record<'_>) -> NormalizedHost {
    let hostname = record
        .opt_text(schema::host::HOSTNAME)
        .or_else(|| {
            record
                .object(schema::bundle::SYSTEM_INFO)
                .and_then(|info| info.opt_text(schema::host::HOSTNAME))
        })
        .unwrap_or_else(|| schema::host::HOSTNAME.default.to_string());

    NormalizedHost {
        hostname,
        online: true,
        agent_version: record.opt_text(schema::host::AGENT_VERSION),
        version_mismatch: record.flag(schema::host::VERSION_MISMATCH),
        metrics: extract_metrics(record),
    }
}

fn collector_host(record: Record<'_>) -> NormalizedHost {
    let metrics = record
        .object(schema::host::METRICS)
        .map(extract_metrics)
        .unwrap_or_default();

    NormalizedHost {
        hostname: record
            .opt_text(schema::host::HOSTNAME)
            .unwrap_or_else(|| schema::host::HOSTNAME.default.to_string()),
        online: record.flag(schema::host::ONLINE),
        agent_version: Some(record.text(schema::host::AGENT_VERSION)),
        version_mismatch: record.flag(schema::host::VERSION_MISMATCH),
        metrics,
    }
}

/// Extract every category from a metrics bundle
///
/// Category objects whose fields are all defaults, and empty lists, come
/// out as `None` exactly like absent categories.
pub fn extract_metrics(bundle: Record<'_>) -> NormalizedMetrics {
    use schema::bundle::*;

    NormalizedMetrics {
        uptime_seconds: Some(bundle.count(UPTIME)).filter(|s| *s > 0),
        system_info: single(bundle, SYSTEM_INFO, system_info),
        cpu: single(bundle, CPU, cpu),
        memory: single(bundle, MEMORY, memory),
        disks: many(bundle, DISKS, disk),
        network: many(bundle, NETWORK, network),
        containers: many(bundle, CONTAINERS, container),
        kubernetes: single(bundle, KUBERNETES, kubernetes),
        temperatures: many(bundle, TEMPERATURES, temperature),
        storage_health: many(bundle, STORAGE_HEALTH, storage_health),
        systemd_services: many(bundle, SYSTEMD, systemd_service),
    }
}

fn single<T>(bundle: Record<'_>, field: schema::Nested, extract: fn(Record<'_>) -> T) -> Option<T>
where
    T: Default + PartialEq,
{
    bundle
        .object(field)
        .map(extract)
        .filter(|record| *record != T::default())
}

fn many<T>(bundle: Record<'_>, field: schema::Nested, extract: fn(Record<'_>) -> T) -> Option<Vec<T>> {
    let items: Vec<T> = bundle
        .list(field)
        .iter()
        .filter_map(Record::from_value)
        .map(extract)
        .collect();
    (!items.is_empty()).then_some(items)
}

/// `None` for zero or implausibly large counts
pub fn plausible_count(value: u64) -> Option<u64> {
    (1..MAX_PLAUSIBLE_COUNT).contains(&value).then_some(value)
}

fn system_info(r: Record<'_>) -> SystemInfo {
    use schema::system_info::*;

    SystemInfo {
        os_name: r.text(OS_NAME),
        os_version: r.text(OS_VERSION),
        kernel: r.text(KERNEL),
        architecture: r.text(ARCHITECTURE),
        cpu_model: r.text(CPU_MODEL),
        cpu_cores: plausible_count(r.count(CPU_CORES)),
        cpu_threads: plausible_count(r.count(CPU_THREADS)),
        total_memory_bytes: r.count(TOTAL_MEMORY),
    }
}

fn cpu(r: Record<'_>) -> CpuMetrics {
    use schema::cpu::*;

    CpuMetrics {
        usage_percent: r.num(USAGE),
        load_average: (r.num(LOAD_1), r.num(LOAD_5), r.num(LOAD_15)),
        core_count: plausible_count(r.count(CORES)),
    }
}

fn memory(r: Record<'_>) -> MemoryMetrics {
    use schema::memory::*;

    MemoryMetrics {
        usage_percent: r.num(USAGE),
        total_bytes: r.count(TOTAL),
        used_bytes: r.count(USED),
        available_bytes: r.count(AVAILABLE),
        cached_bytes: r.count(CACHED),
    }
}

fn disk(r: Record<'_>) -> DiskMetrics {
    use schema::disk::*;

    DiskMetrics {
        mount_point: r.text(MOUNT),
        device: r.text(DEVICE),
        usage_percent: r.num(USAGE),
        total_bytes: r.count(TOTAL),
        used_bytes: r.count(USED),
        available_bytes: r.count(AVAILABLE),
        read_bytes_per_sec: r.num(READ_RATE),
        write_bytes_per_sec: r.num(WRITE_RATE),
        read_ops_per_sec: r.num(READ_OPS),
        write_ops_per_sec: r.num(WRITE_OPS),
    }
}

fn network(r: Record<'_>) -> NetworkMetrics {
    use schema::network::*;

    NetworkMetrics {
        interface: r.text(INTERFACE),
        rx_bytes: r.count(RX_BYTES),
        tx_bytes: r.count(TX_BYTES),
        rx_errors: r.count(RX_ERRORS),
        tx_errors: r.count(TX_ERRORS),
        rx_bytes_per_sec: r.num(RX_RATE),
        tx_bytes_per_sec: r.num(TX_RATE),
        rx_packets_per_sec: r.num(RX_PACKET_RATE),
        tx_packets_per_sec: r.num(TX_PACKET_RATE),
    }
}

fn container(r: Record<'_>) -> ContainerMetrics {
    use schema::container::*;

    ContainerMetrics {
        id: r.text(ID),
        name: r.text(NAME),
        runtime: r.text(RUNTIME),
        state: r.text(STATE),
        image: r.text(IMAGE),
        cpu_percent: r.num(CPU),
        memory_bytes: r.count(MEMORY),
        memory_limit: r.count(MEMORY_LIMIT),
        memory_percent: r.num(MEMORY_PERCENT),
        network_rx_bytes_per_sec: r.num(NET_RX_RATE),
        network_tx_bytes_per_sec: r.num(NET_TX_RATE),
        block_read_bytes_per_sec: r.num(BLOCK_READ_RATE),
        block_write_bytes_per_sec: r.num(BLOCK_WRITE_RATE),
        pids: r.count(PIDS),
    }
}

fn kubernetes(r: Record<'_>) -> KubernetesMetrics {
    use schema::kubernetes::*;

    KubernetesMetrics {
        detected: r.flag(DETECTED),
        cluster_type: r.text(CLUSTER_TYPE),
        pod_count: r.count(PODS),
        node_count: r.count(NODES),
        namespaces: r.strings(NAMESPACES),
    }
}

fn temperature(r: Record<'_>) -> TemperatureReading {
    use schema::temperature::*;

    TemperatureReading {
        sensor: r.text(SENSOR),
        label: r.text(LABEL),
        sensor_type: r.text(SENSOR_TYPE),
        celsius: r.num(CELSIUS),
        max: r.num(MAX),
        critical: r.num(CRITICAL),
    }
}

fn storage_health(r: Record<'_>) -> StorageHealth {
    use schema::storage::*;

    let health_status = r.text(HEALTH);
    StorageHealth {
        passed: drive_passed(&r, &health_status),
        device: r.text(DEVICE),
        health_status,
        temperature: r.num(TEMPERATURE),
        power_on_hours: r.count(POWER_ON_HOURS),
        reallocated_sectors: r.count(REALLOCATED),
        pending_sectors: r.count(PENDING),
    }
}

// Explicit flag first, then the health string, then the schema default
fn drive_passed(r: &Record<'_>, health_status: &str) -> bool {
    r.opt_flag(schema::storage::PASSED)
        .or_else(|| {
            let health = health_status.trim();
            (!health.is_empty())
                .then(|| health.eq_ignore_ascii_case("PASSED") || health.eq_ignore_ascii_case("OK"))
        })
        .unwrap_or(schema::storage::PASSED.default)
}

fn systemd_service(r: Record<'_>) -> SystemdService {
    use schema::systemd::*;

    SystemdService {
        name: r.text(NAME),
        state: r.text(STATE),
        sub_state: r.text(SUB_STATE),
        active: r.flag(ACTIVE),
        enabled: r.flag(ENABLED),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
