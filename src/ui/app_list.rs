//! App list table: one aligned row per deployed app.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::examiner::AppExaminer;
use crate::types::AppInfo;
use crate::ui::{health_colored, instance_summary};

const COLUMN_GAP: usize = 2;
const HEADERS: [&str; 5] = ["App Name", "Instances", "DiskMB", "MemoryMB", "Routes"];

/// Print the app table, or a one-line report when there is nothing to show.
/// Data-source failures are reported inline, never propagated.
pub fn list_apps<E, W>(examiner: &E, out: &mut W) -> io::Result<()>
where
    E: AppExaminer + ?Sized,
    W: Write,
{
    let apps = match examiner.list_apps() {
        Ok(apps) => apps,
        Err(err) => {
            writeln!(out, "Error listing apps: {err}")?;
            return Ok(());
        }
    };
    if apps.is_empty() {
        writeln!(out, "No apps to display.")?;
        return Ok(());
    }

    let widths = column_widths(&apps);

    for (i, header) in HEADERS.iter().enumerate() {
        write!(out, "{}", padded(header, widths[i]).bold())?;
    }
    writeln!(out)?;

    for app in &apps {
        let routes = app.routes.join(" ");
        write!(out, "{}", padded(&app.process_guid, widths[0]).bold())?;
        // Pad the plain summary first so the invisible color bytes do not
        // throw off column alignment.
        let summary = padded(&instance_summary(app), widths[1]);
        write!(out, "{}", health_colored(app, summary))?;
        write!(out, "{}", padded(&app.disk_mb.to_string(), widths[2]))?;
        write!(out, "{}", padded(&app.memory_mb.to_string(), widths[3]))?;
        writeln!(out, "{}", routes.cyan())?;
    }
    Ok(())
}

fn padded(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Width of each column: the longest visible cell, plus a fixed gap.
fn column_widths(apps: &[AppInfo]) -> [usize; 5] {
    let mut widths = HEADERS.map(str::len);
    for app in apps {
        widths[0] = widths[0].max(app.process_guid.len());
        widths[1] = widths[1].max(instance_summary(app).len());
        widths[2] = widths[2].max(app.disk_mb.to_string().len());
        widths[3] = widths[3].max(app.memory_mb.to_string().len());
    }
    for width in widths.iter_mut().take(4) {
        *width += COLUMN_GAP;
    }
    widths
}
