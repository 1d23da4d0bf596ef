//! Cluster data source: the query seam between the views and the platform.
//!
//! The views only depend on the `AppExaminer` trait. `RemoteExaminer` is the
//! production implementation: a line-delimited JSON request/response exchange
//! with the platform's status endpoint over TCP.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::types::{AppInfo, ClusterSnapshot};

/// Read access to cluster state.
///
/// Every call performs a fresh query; nothing is cached between calls.
/// Failures are reported to the user inline and are never fatal.
pub trait AppExaminer {
    fn list_apps(&self) -> Result<Vec<AppInfo>>;
    fn app_status(&self, app_name: &str) -> Result<AppInfo>;
    fn list_cells(&self) -> Result<ClusterSnapshot>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExaminerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ExaminerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8887,
        }
    }
}

/// Queries the status endpoint with one request line per call.
pub struct RemoteExaminer {
    config: ExaminerConfig,
}

#[derive(Serialize)]
struct Request<'a> {
    #[serde(rename = "type")]
    msg_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_name: Option<&'a str>,
}

impl RemoteExaminer {
    pub fn new(config: ExaminerConfig) -> Self {
        Self { config }
    }

    fn exchange(&self, request: &Request) -> Result<serde_json::Value> {
        let mut stream = TcpStream::connect((self.config.host.as_str(), self.config.port))
            .map_err(|e| {
                anyhow!(
                    "connect {}:{} failed: {}",
                    self.config.host,
                    self.config.port,
                    e
                )
            })?;
        stream.set_nodelay(true)?;

        let line = serde_json::to_string(request)?;
        stream.write_all(line.as_bytes())?;
        stream.write_all(b"\n")?;
        stream.flush()?;

        let mut reader = BufReader::new(stream);
        let mut response = String::new();
        reader.read_line(&mut response)?;
        if response.trim().is_empty() {
            return Err(anyhow!("status endpoint closed without a response"));
        }

        let value: serde_json::Value = serde_json::from_str(&response)
            .map_err(|e| anyhow!("invalid response json: {}", e))?;
        if value.get("type").and_then(|v| v.as_str()) == Some("error") {
            let message = value
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("unspecified error");
            return Err(anyhow!("{}", message));
        }
        Ok(value)
    }
}

impl AppExaminer for RemoteExaminer {
    fn list_apps(&self) -> Result<Vec<AppInfo>> {
        let value = self.exchange(&Request {
            msg_type: "list_apps",
            app_name: None,
        })?;
        let apps = value
            .get("apps")
            .cloned()
            .ok_or_else(|| anyhow!("response missing apps field"))?;
        Ok(serde_json::from_value(apps)?)
    }

    fn app_status(&self, app_name: &str) -> Result<AppInfo> {
        let value = self.exchange(&Request {
            msg_type: "app_status",
            app_name: Some(app_name),
        })?;
        let app = value
            .get("app")
            .cloned()
            .ok_or_else(|| anyhow!("response missing app field"))?;
        Ok(serde_json::from_value(app)?)
    }

    fn list_cells(&self) -> Result<ClusterSnapshot> {
        let value = self.exchange(&Request {
            msg_type: "list_cells",
            app_name: None,
        })?;
        let cells = value
            .get("cells")
            .cloned()
            .ok_or_else(|| anyhow!("response missing cells field"))?;
        Ok(serde_json::from_value(cells)?)
    }
}
