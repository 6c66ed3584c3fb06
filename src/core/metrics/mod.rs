//! Metrics payload normalization.
//!
//! Turns agent-direct and collector JSON responses into one shape-agnostic
//! host list that the report renderer consumes.

mod model;
pub mod normalize;
pub mod schema;

pub use model::{
    ContainerMetrics, CpuMetrics, DiskMetrics, KubernetesMetrics, MemoryMetrics, NetworkMetrics,
    NormalizedHost, NormalizedMetrics, StorageHealth, SystemInfo, SystemdService,
    TemperatureReading,
};
pub use normalize::{normalize, plausible_count, NormalizationError, Payload};
