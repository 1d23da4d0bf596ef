//! Command-line parsing for the `cellview` binary.
//!
//! Usage errors are rejected here, before any output is produced.

use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::examiner::ExaminerConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `list`: table of all deployed apps.
    ListApps,
    /// `status <app>`: detailed report for one app.
    AppStatus { app_name: String },
    /// `visualize [--rate <duration>]`: cell distribution, optionally live.
    Visualize { rate: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub examiner: ExaminerConfig,
    pub command: Command,
}

pub const USAGE: &str = "usage: cellview [--target <host:port>] <list | status <app> | visualize [--rate <duration>]>";

pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut examiner = ExaminerConfig::default();
    let mut i = 0usize;

    while i < args.len() {
        match args[i].as_str() {
            "--target" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --target"))?;
                examiner = parse_target(value)?;
                i += 1;
            }
            _ => break,
        }
    }

    let command = match args.get(i).map(String::as_str) {
        Some("list") => {
            reject_extra_args(&args[i + 1..])?;
            Command::ListApps
        }
        Some("status") => {
            let app_name = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("status: App Name required"))?
                .clone();
            reject_extra_args(&args[i + 2..])?;
            Command::AppStatus { app_name }
        }
        Some("visualize") => parse_visualize_args(&args[i + 1..])?,
        Some(other) => return Err(anyhow!("unknown command: {}\n{}", other, USAGE)),
        None => return Err(anyhow!("{}", USAGE)),
    };

    Ok(CliConfig { examiner, command })
}

fn parse_visualize_args(args: &[String]) -> Result<Command> {
    let mut rate = Duration::ZERO;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--rate" | "-r" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow!("visualize: missing value for --rate"))?;
                rate = parse_rate(value)?;
            }
            other => {
                return Err(anyhow!("visualize: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(Command::Visualize { rate })
}

/// Parse a refresh rate: `2s`, `500ms`, or a bare number of seconds.
pub fn parse_rate(value: &str) -> Result<Duration> {
    let parsed = if let Some(millis) = value.strip_suffix("ms") {
        millis.parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(secs) = value.strip_suffix('s') {
        secs.parse::<u64>().ok().map(Duration::from_secs)
    } else {
        value.parse::<u64>().ok().map(Duration::from_secs)
    };
    parsed.ok_or_else(|| anyhow!("visualize: invalid --rate value: {}", value))
}

fn reject_extra_args(rest: &[String]) -> Result<()> {
    if let Some(extra) = rest.first() {
        return Err(anyhow!("unexpected argument: {}", extra));
    }
    Ok(())
}

fn parse_target(value: &str) -> Result<ExaminerConfig> {
    let (host, port) = value
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("invalid --target value (expected host:port): {}", value))?;
    let port = port
        .parse::<u16>()
        .map_err(|_| anyhow!("invalid --target port: {}", port))?;
    if host.is_empty() {
        return Err(anyhow!("invalid --target host: {}", value));
    }
    Ok(ExaminerConfig {
        host: host.to_string(),
        port,
    })
}
