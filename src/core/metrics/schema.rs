//! Field schema for agent and collector payloads.
//!
//! Every optional field is declared once here with the keys it may appear
//! under (agent flavor first, collector flavor second) and the default used
//! when none of them is present. Readers never index the JSON directly.

use serde_json::{Map, Value};

/// Numeric field read as `f64`
#[derive(Debug, Clone, Copy)]
pub struct Num {
    pub keys: &'static [&'static str],
    pub default: f64,
}

/// Non-negative integer field read as `u64`
#[derive(Debug, Clone, Copy)]
pub struct Count {
    pub keys: &'static [&'static str],
    pub default: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct Text {
    pub keys: &'static [&'static str],
    pub default: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Flag {
    pub keys: &'static [&'static str],
    pub default: bool,
}

/// Array or object field; absent means empty
#[derive(Debug, Clone, Copy)]
pub struct Nested {
    pub keys: &'static [&'static str],
}

const fn num(keys: &'static [&'static str]) -> Num {
    Num { keys, default: 0.0 }
}

const fn count(keys: &'static [&'static str]) -> Count {
    Count { keys, default: 0 }
}

const fn text(keys: &'static [&'static str]) -> Text {
    Text { keys, default: "" }
}

const fn flag(keys: &'static [&'static str]) -> Flag {
    Flag {
        keys,
        default: false,
    }
}

const fn nested(keys: &'static [&'static str]) -> Nested {
    Nested { keys }
}

/// Top-level payload keys
pub mod payload {
    use super::*;

    pub const ERROR: Nested = nested(&["error"]);
    pub const HOSTS: Nested = nested(&["hosts"]);
}

/// Collector host entry
pub mod host {
    use super::*;

    pub const HOSTNAME: Text = Text {
        keys: &["hostname"],
        default: "unknown",
    };
    pub const ONLINE: Flag = flag(&["online"]);
    /// Collector hosts always report a version, `unknown` when the agent sent none
    pub const AGENT_VERSION: Text = Text {
        keys: &["agent_version", "version"],
        default: "unknown",
    };
    pub const VERSION_MISMATCH: Flag = flag(&["version_mismatch"]);
    pub const METRICS: Nested = nested(&["metrics"]);
}

/// Metrics bundle (agent top level or collector `metrics` object)
pub mod bundle {
    use super::*;

    pub const UPTIME: Count = count(&["uptime", "uptime_seconds"]);
    pub const SYSTEM_INFO: Nested = nested(&["system_info"]);
    pub const CPU: Nested = nested(&["cpu"]);
    pub const MEMORY: Nested = nested(&["memory"]);
    pub const DISKS: Nested = nested(&["disks"]);
    pub const NETWORK: Nested = nested(&["network"]);
    pub const CONTAINERS: Nested = nested(&["containers"]);
    pub const KUBERNETES: Nested = nested(&["kubernetes"]);
    pub const TEMPERATURES: Nested = nested(&["temperatures"]);
    pub const STORAGE_HEALTH: Nested = nested(&["smart_data", "smart"]);
    pub const SYSTEMD: Nested = nested(&["systemd", "systemd_services"]);
}

pub mod system_info {
    use super::*;

    pub const OS_NAME: Text = text(&["os_name"]);
    pub const OS_VERSION: Text = text(&["os_version"]);
    pub const KERNEL: Text = text(&["kernel", "kernel_version"]);
    pub const ARCHITECTURE: Text = text(&["architecture"]);
    pub const CPU_MODEL: Text = text(&["cpu_model"]);
    pub const CPU_CORES: Count = count(&["cpu_cores"]);
    pub const CPU_THREADS: Count = count(&["cpu_threads"]);
    pub const TOTAL_MEMORY: Count = count(&["total_memory", "total_memory_bytes"]);
}

pub mod cpu {
    use super::*;

    pub const USAGE: Num = num(&["usage_percent", "usage"]);
    pub const LOAD_1: Num = num(&["load_1min", "load_1"]);
    pub const LOAD_5: Num = num(&["load_5min", "load_5"]);
    pub const LOAD_15: Num = num(&["load_15min", "load_15"]);
    pub const CORES: Count = count(&["core_count", "cores"]);
}

pub mod memory {
    use super::*;

    pub const USAGE: Num = num(&["usage_percent", "usage"]);
    pub const TOTAL: Count = count(&["total_bytes", "total"]);
    pub const USED: Count = count(&["used_bytes", "used"]);
    pub const AVAILABLE: Count = count(&["available_bytes", "available"]);
    pub const CACHED: Count = count(&["cached_bytes", "cached"]);
}

pub mod disk {
    use super::*;

    pub const MOUNT: Text = Text {
        keys: &["mount_point", "mount"],
        default: "/",
    };
    pub const DEVICE: Text = text(&["device"]);
    pub const USAGE: Num = num(&["usage_percent", "usage"]);
    pub const TOTAL: Count = count(&["total_bytes", "total"]);
    pub const USED: Count = count(&["used_bytes", "used"]);
    pub const AVAILABLE: Count = count(&["available_bytes", "available"]);
    pub const READ_RATE: Num = num(&["read_bytes_per_sec"]);
    pub const WRITE_RATE: Num = num(&["write_bytes_per_sec"]);
    pub const READ_OPS: Num = num(&["read_ops_per_sec"]);
    pub const WRITE_OPS: Num = num(&["write_ops_per_sec"]);
}

pub mod network {
    use super::*;

    pub const INTERFACE: Text = text(&["interface"]);
    pub const RX_BYTES: Count = count(&["rx_bytes"]);
    pub const TX_BYTES: Count = count(&["tx_bytes"]);
    pub const RX_ERRORS: Count = count(&["rx_errors"]);
    pub const TX_ERRORS: Count = count(&["tx_errors"]);
    pub const RX_RATE: Num = num(&["rx_bytes_per_sec"]);
    pub const TX_RATE: Num = num(&["tx_bytes_per_sec"]);
    pub const RX_PACKET_RATE: Num = num(&["rx_packets_per_sec"]);
    pub const TX_PACKET_RATE: Num = num(&["tx_packets_per_sec"]);
}

pub mod container {
    use super::*;

    pub const ID: Text = text(&["id"]);
    pub const NAME: Text = text(&["name"]);
    pub const RUNTIME: Text = text(&["runtime"]);
    pub const STATE: Text = text(&["state"]);
    pub const IMAGE: Text = text(&["image"]);
    pub const CPU: Num = num(&["cpu_percent", "cpu"]);
    pub const MEMORY: Count = count(&["memory_bytes", "memory"]);
    pub const MEMORY_LIMIT: Count = count(&["memory_limit"]);
    pub const MEMORY_PERCENT: Num = num(&["memory_percent"]);
    pub const NET_RX_RATE: Num = num(&["network_rx_bytes_per_sec"]);
    pub const NET_TX_RATE: Num = num(&["network_tx_bytes_per_sec"]);
    pub const BLOCK_READ_RATE: Num = num(&["block_read_bytes_per_sec"]);
    pub const BLOCK_WRITE_RATE: Num = num(&["block_write_bytes_per_sec"]);
    pub const PIDS: Count = count(&["pids"]);
}

pub mod kubernetes {
    use super::*;

    pub const DETECTED: Flag = flag(&["detected"]);
    pub const CLUSTER_TYPE: Text = text(&["cluster_type", "type"]);
    pub const PODS: Count = count(&["pod_count", "pods"]);
    pub const NODES: Count = count(&["node_count", "nodes"]);
    pub const NAMESPACES: Nested = nested(&["namespaces"]);
}

pub mod temperature {
    use super::*;

    pub const SENSOR: Text = text(&["sensor"]);
    pub const LABEL: Text = text(&["label"]);
    pub const SENSOR_TYPE: Text = text(&["type"]);
    pub const CELSIUS: Num = num(&["temp", "temperature"]);
    pub const MAX: Num = num(&["max"]);
    pub const CRITICAL: Num = num(&["critical"]);
}

pub mod storage {
    use super::*;

    pub const DEVICE: Text = text(&["device"]);
    pub const HEALTH: Text = text(&["health_status", "health"]);
    /// Read as optional; see `normalize::drive_passed` for the fallback
    pub const PASSED: Flag = Flag {
        keys: &["passed"],
        default: true,
    };
    pub const TEMPERATURE: Num = num(&["temperature"]);
    pub const POWER_ON_HOURS: Count = count(&["power_on_hours"]);
    pub const REALLOCATED: Count = count(&["reallocated_sectors"]);
    pub const PENDING: Count = count(&["pending_sectors"]);
}

pub mod systemd {
    use super::*;

    pub const NAME: Text = text(&["name"]);
    pub const STATE: Text = text(&["state"]);
    pub const SUB_STATE: Text = text(&["sub_state"]);
    pub const ACTIVE: Flag = flag(&["active"]);
    pub const ENABLED: Flag = flag(&["enabled"]);
}

/// Read-only view over one JSON object, resolving fields through the schema
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    obj: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    pub fn new(obj: &'a Map<String, Value>) -> Self {
        Self { obj }
    }

    /// `None` unless the value is a JSON object
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    // First non-null value under any of the keys
    fn lookup(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .find_map(|key| self.obj.get(*key).filter(|v| !v.is_null()))
    }

    pub fn has(&self, field: Nested) -> bool {
        self.lookup(field.keys).is_some()
    }

    pub fn raw(&self, field: Nested) -> Option<&'a Value> {
        self.lookup(field.keys)
    }

    pub fn num(&self, field: Num) -> f64 {
        self.lookup(field.keys)
            .and_then(as_number)
            .filter(|v| v.is_finite())
            .unwrap_or(field.default)
    }

    pub fn count(&self, field: Count) -> u64 {
        self.lookup(field.keys)
            .and_then(|v| match v.as_u64() {
                Some(n) => Some(n),
                None => as_number(v)
                    .filter(|n| n.is_finite() && *n >= 0.0)
                    .map(|n| n as u64),
            })
            .unwrap_or(field.default)
    }

    pub fn text(&self, field: Text) -> String {
        self.lookup(field.keys)
            .and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| field.default.to_string())
    }

    /// Text field, `None` when absent or empty
    pub fn opt_text(&self, field: Text) -> Option<String> {
        let value = self.text(Text { default: "", ..field });
        (!value.is_empty()).then_some(value)
    }

    pub fn flag(&self, field: Flag) -> bool {
        self.opt_flag(field).unwrap_or(field.default)
    }

    /// Flag field, `None` when absent or not boolean-like
    pub fn opt_flag(&self, field: Flag) -> Option<bool> {
        self.lookup(field.keys).and_then(|v| match v {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|n| n != 0.0),
            _ => None,
        })
    }

    pub fn object(&self, field: Nested) -> Option<Record<'a>> {
        self.lookup(field.keys).and_then(Record::from_value)
    }

    /// Array field; anything but an array reads as empty
    pub fn list(&self, field: Nested) -> &'a [Value] {
        self.lookup(field.keys)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Array of strings; non-string items are skipped
    pub fn strings(&self, field: Nested) -> Vec<String> {
        self.list(field)
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

// Agents occasionally quote numbers; accept both
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
