//! One-shot table views: the app list and the per-app status report.
//!
//! These are plain formatting passes over a single query result; only the
//! visualization in `viz` has any temporal behavior.

pub mod app_list;
pub mod app_status;

pub use app_list::list_apps;
pub use app_status::app_status;

use crossterm::style::{StyledContent, Stylize};

use crate::types::AppInfo;

/// The `running/desired` instance summary, uncolored.
pub(crate) fn instance_summary(app: &AppInfo) -> String {
    format!("{}/{}", app.actual_running_instances, app.desired_instances)
}

/// Color health-dependent text: green when fully running, red when nothing
/// runs, yellow in between. Takes the text separately so callers can pad the
/// plain string before the invisible color bytes are added.
pub(crate) fn health_colored(app: &AppInfo, text: String) -> StyledContent<String> {
    if app.actual_running_instances == app.desired_instances {
        text.green()
    } else if app.actual_running_instances == 0 {
        text.red()
    } else {
        text.yellow()
    }
}

/// Color the instance summary itself.
pub(crate) fn color_instances(app: &AppInfo) -> StyledContent<String> {
    health_colored(app, instance_summary(app))
}
