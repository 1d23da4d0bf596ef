//! Per-app status report: configuration, environment, and one section per
//! placed instance.

use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};

use crate::examiner::AppExaminer;
use crate::types::{InstanceInfo, InstanceState};
use crate::ui::color_instances;

const RULE_WIDTH: usize = 80;
const KEY_WIDTH: usize = 14;
const HEADING_INDENT: usize = KEY_WIDTH / 2;

/// Print the detailed status report for one app. Data-source failures are
/// reported inline, never propagated.
pub fn app_status<E, W>(examiner: &E, out: &mut W, app_name: &str) -> io::Result<()>
where
    E: AppExaminer + ?Sized,
    W: Write,
{
    let app = match examiner.app_status(app_name) {
        Ok(app) => app,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(());
        }
    };

    title_bar(out, format!("{}", app_name.bold()))?;

    row(out, "Instances", color_instances(&app))?;
    row(out, "Stack", &app.stack)?;
    row(out, "Start Timeout", app.start_timeout)?;
    row(out, "DiskMB", app.disk_mb)?;
    row(out, "MemoryMB", app.memory_mb)?;
    row(out, "CPUWeight", app.cpu_weight)?;

    let ports: Vec<String> = app.ports.iter().map(u16::to_string).collect();
    row(out, "Ports", ports.join(","))?;
    row(out, "Routes", app.routes.join(" "))?;
    row(out, "LogGuid", &app.log_guid)?;
    row(out, "LogSource", &app.log_source)?;
    row(out, "Annotation", &app.annotation)?;

    horizontal_rule(out, '-')?;
    writeln!(out, "Environment")?;
    writeln!(out)?;
    for env_var in &app.environment_variables {
        writeln!(out, "{}=\"{}\"", env_var.name, env_var.value)?;
    }
    writeln!(out)?;
    horizontal_rule(out, '=')?;

    for instance in &app.actual_instances {
        instance_section(out, instance)?;
    }

    Ok(())
}

fn instance_section<W: Write>(out: &mut W, instance: &InstanceInfo) -> io::Result<()> {
    writeln!(
        out,
        "{}Instance {}  [{}]",
        " ".repeat(HEADING_INDENT),
        instance.index,
        color_state(instance.state),
    )?;
    horizontal_rule(out, '-')?;

    row(out, "InstanceGuid", &instance.instance_guid)?;
    row(out, "Cell ID", &instance.cell_id)?;
    row(out, "Ip", &instance.ip)?;

    let ports: Vec<String> = instance
        .ports
        .iter()
        .map(|mapping| format!("{}:{}", mapping.host_port, mapping.container_port))
        .collect();
    row(out, "Ports", ports.join(";"))?;
    row(out, "Since", instance.since)?;

    horizontal_rule(out, '-')?;
    Ok(())
}

fn color_state(state: InstanceState) -> StyledContent<&'static str> {
    match state {
        InstanceState::Running => state.as_str().green(),
        InstanceState::Claimed => state.as_str().yellow(),
        InstanceState::Crashed | InstanceState::Unknown => state.as_str().red(),
    }
}

fn title_bar<W: Write>(out: &mut W, title: String) -> io::Result<()> {
    horizontal_rule(out, '=')?;
    writeln!(out, "{}{}", " ".repeat(HEADING_INDENT), title)?;
    horizontal_rule(out, '-')?;
    Ok(())
}

fn horizontal_rule<W: Write>(out: &mut W, pattern: char) -> io::Result<()> {
    writeln!(out, "{}", String::from(pattern).repeat(RULE_WIDTH))
}

fn row<W: Write, V: std::fmt::Display>(out: &mut W, key: &str, value: V) -> io::Result<()> {
    writeln!(out, "{:<width$}{}", key, value, width = KEY_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppInfo, ClusterSnapshot};
    use crate::ui::test_fixtures::app;
    use anyhow::anyhow;

    struct StubExaminer(Result<AppInfo, String>);

    impl AppExaminer for StubExaminer {
        fn list_apps(&self) -> anyhow::Result<Vec<AppInfo>> {
            unimplemented!("not used by the status view")
        }

        fn app_status(&self, _app_name: &str) -> anyhow::Result<AppInfo> {
            match &self.0 {
                Ok(app) => Ok(app.clone()),
                Err(msg) => Err(anyhow!(msg.clone())),
            }
        }

        fn list_cells(&self) -> anyhow::Result<ClusterSnapshot> {
            unimplemented!("not used by the status view")
        }
    }

    fn render(examiner: &StubExaminer, name: &str) -> String {
        let mut out = Vec::new();
        app_status(examiner, &mut out, name).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn status_report_contains_config_environment_and_instances() {
        let examiner = StubExaminer(Ok(app("cart", 2, 2)));
        let text = render(&examiner, "cart");

        assert!(text.contains("cart"));
        assert!(text.contains("Stack"));
        assert!(text.contains("lucid64"));
        assert!(text.contains("RAILS_ENV=\"production\""));
        assert!(text.contains("Instance 0"));
        assert!(text.contains("cart-instance-0"));
        assert!(text.contains("61001:8080"));
        assert!(text.contains(&"=".repeat(RULE_WIDTH)));
    }

    #[test]
    fn instance_state_coloring() {
        assert_eq!(
            format!("{}", color_state(InstanceState::Running)),
            format!("{}", "RUNNING".green())
        );
        assert_eq!(
            format!("{}", color_state(InstanceState::Claimed)),
            format!("{}", "CLAIMED".yellow())
        );
        assert_eq!(
            format!("{}", color_state(InstanceState::Crashed)),
            format!("{}", "CRASHED".red())
        );
    }

    #[test]
    fn data_source_error_is_reported_inline() {
        let examiner = StubExaminer(Err("App not found.".to_string()));
        assert_eq!(render(&examiner, "ghost"), "App not found.\n");
    }

    #[test]
    fn rows_are_key_value_aligned() {
        let mut out = Vec::new();
        row(&mut out, "Stack", "lucid64").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Stack         lucid64\n");
    }
}
