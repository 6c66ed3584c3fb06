use serde::{Deserialize, Serialize};

/// One host after normalization, whatever the payload shape was
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedHost {
    pub hostname: String,
    pub online: bool,
    pub agent_version: Option<String>,
    pub version_mismatch: bool,
    pub metrics: NormalizedMetrics,
}

impl NormalizedHost {
    /// Whether per-category sections should be rendered for this host
    pub fn has_metrics(&self) -> bool {
        self.online && !self.metrics.is_empty()
    }
}

/// Complete metrics bundle; every category is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMetrics {
    pub uptime_seconds: Option<u64>,
    pub system_info: Option<SystemInfo>,
    pub cpu: Option<CpuMetrics>,
    pub memory: Option<MemoryMetrics>,
    pub disks: Option<Vec<DiskMetrics>>,
    pub network: Option<Vec<NetworkMetrics>>,
    pub containers: Option<Vec<ContainerMetrics>>,
    pub kubernetes: Option<KubernetesMetrics>,
    pub temperatures: Option<Vec<TemperatureReading>>,
    pub storage_health: Option<Vec<StorageHealth>>,
    pub systemd_services: Option<Vec<SystemdService>>,
}

impl NormalizedMetrics {
    pub fn is_empty(&self) -> bool {
        *self == NormalizedMetrics::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os_name: String,
    pub os_version: String,
    pub kernel: String,
    pub architecture: String,
    pub cpu_model: String,
    /// `None` when missing or implausible
    pub cpu_cores: Option<u64>,
    /// `None` when missing or implausible
    pub cpu_threads: Option<u64>,
    pub total_memory_bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuMetrics {
    pub usage_percent: f64,
    pub load_average: (f64, f64, f64), // 1, 5, 15 min
    pub core_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub usage_percent: f64,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub cached_bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskMetrics {
    pub mount_point: String,
    pub device: String,
    pub usage_percent: f64,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub read_bytes_per_sec: f64,
    pub write_bytes_per_sec: f64,
    pub read_ops_per_sec: f64,
    pub write_ops_per_sec: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub interface: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_errors: u64,
    pub tx_errors: u64,
    pub rx_bytes_per_sec: f64,
    pub tx_bytes_per_sec: f64,
    pub rx_packets_per_sec: f64,
    pub tx_packets_per_sec: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub id: String,
    pub name: String,
    pub runtime: String,
    pub state: String,
    pub image: String,
    pub cpu_percent: f64,
    pub memory_bytes: u64,
    pub memory_limit: u64,
    pub memory_percent: f64,
    pub network_rx_bytes_per_sec: f64,
    pub network_tx_bytes_per_sec: f64,
    pub block_read_bytes_per_sec: f64,
    pub block_write_bytes_per_sec: f64,
    pub pids: u64,
}

impl ContainerMetrics {
    pub fn is_running(&self) -> bool {
        self.state == "running"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubernetesMetrics {
    pub detected: bool,
    pub cluster_type: String,
    pub pod_count: u64,
    pub node_count: u64,
    pub namespaces: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub sensor: String,
    pub label: String,
    pub sensor_type: String,
    pub celsius: f64,
    pub max: f64,
    pub critical: f64,
}

/// Storage self-test result for one drive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageHealth {
    pub device: String,
    pub health_status: String,
    pub passed: bool,
    pub temperature: f64,
    pub power_on_hours: u64,
    pub reallocated_sectors: u64,
    pub pending_sectors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemdService {
    pub name: String,
    pub state: String,
    pub sub_state: String,
    pub active: bool,
    pub enabled: bool,
}
