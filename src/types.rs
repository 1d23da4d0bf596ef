//! Core types shared across the application
//! This module contains pure data types describing cluster state

use serde::{Deserialize, Serialize};

/// One worker cell's load at a point in time.
///
/// Snapshots are immutable once produced; every poll builds a fresh list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub cell_id: String,
    /// The cell failed to report in the last poll.
    pub missing: bool,
    pub running_instances: usize,
    pub claimed_instances: usize,
}

/// Ordered list of cell snapshots; order determines vertical render order.
pub type ClusterSnapshot = Vec<CellSnapshot>;

/// Lifecycle state of a single app instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstanceState {
    Running,
    Claimed,
    Crashed,
    #[serde(other)]
    Unknown,
}

impl InstanceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceState::Running => "RUNNING",
            InstanceState::Claimed => "CLAIMED",
            InstanceState::Crashed => "CRASHED",
            InstanceState::Unknown => "UNKNOWN",
        }
    }
}

/// A host-port to container-port mapping on one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub host_port: u16,
    pub container_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

/// One actual (placed) instance of an app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub index: usize,
    pub state: InstanceState,
    pub instance_guid: String,
    pub cell_id: String,
    pub ip: String,
    pub ports: Vec<PortMapping>,
    /// Epoch timestamp at which the instance entered its current state.
    pub since: i64,
}

/// Everything the status surface knows about one deployed app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub process_guid: String,
    pub desired_instances: usize,
    pub actual_running_instances: usize,
    pub stack: String,
    pub start_timeout: u64,
    pub disk_mb: u64,
    pub memory_mb: u64,
    pub cpu_weight: u32,
    pub ports: Vec<u16>,
    pub routes: Vec<String>,
    pub log_guid: String,
    pub log_source: String,
    pub annotation: String,
    pub environment_variables: Vec<EnvironmentVariable>,
    pub actual_instances: Vec<InstanceInfo>,
}
