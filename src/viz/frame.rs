//! Frame renderer: one cluster snapshot in, one block of terminal lines out.
//!
//! Rendering is pure with respect to the sink: the same snapshot always
//! produces the same bytes. The returned line count is the only state the
//! refresh loop carries between frames.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType},
};

use crate::examiner::AppExaminer;
use crate::types::CellSnapshot;

/// One glyph per instance in the load bars.
pub const INSTANCE_GLYPH: char = '•';

const FALLBACK_WIDTH: u16 = 80;
const MISSING_MARKER: &str = " [MISSING]";

/// Current terminal width, with a fixed fallback when there is no tty.
pub fn terminal_width() -> u16 {
    terminal::size().map(|(w, _)| w).unwrap_or(FALLBACK_WIDTH)
}

/// Render one frame of the cell distribution.
///
/// Writes one line per cell in snapshot order, or a single error line when
/// the data source fails, and returns the number of lines written. Each line
/// ends with clear-to-end-of-line, and the frame ends with
/// clear-to-end-of-display, so a shorter frame fully erases a longer
/// predecessor. The caller is responsible for flushing.
pub fn print_distribution<E, W>(examiner: &E, out: &mut W, width: u16) -> io::Result<usize>
where
    E: AppExaminer + ?Sized,
    W: Write,
{
    let cells = match examiner.list_cells() {
        Ok(cells) => cells,
        Err(err) => {
            queue!(
                out,
                Print(format!("Error visualizing: {err}")),
                Clear(ClearType::UntilNewLine),
                Print("\n"),
                Clear(ClearType::FromCursorDown),
            )?;
            return Ok(1);
        }
    };

    for cell in &cells {
        print_cell_line(out, cell, width)?;
    }
    queue!(out, Clear(ClearType::FromCursorDown))?;

    Ok(cells.len())
}

fn print_cell_line<W: Write>(out: &mut W, cell: &CellSnapshot, width: u16) -> io::Result<()> {
    queue!(out, Print(&cell.cell_id))?;
    if cell.missing {
        queue!(out, PrintStyledContent(MISSING_MARKER.red()))?;
    }
    queue!(out, Print(": "))?;

    let (running, claimed) = bar_widths(cell, width);
    if running > 0 {
        queue!(
            out,
            PrintStyledContent(String::from(INSTANCE_GLYPH).repeat(running).green())
        )?;
    }
    if claimed > 0 {
        queue!(
            out,
            PrintStyledContent(String::from(INSTANCE_GLYPH).repeat(claimed).yellow())
        )?;
    }

    queue!(out, Clear(ClearType::UntilNewLine), Print("\n"))?;
    Ok(())
}

/// Truncate the load bars so the line never exceeds the terminal width.
/// Running instances get priority; claimed instances take what is left.
fn bar_widths(cell: &CellSnapshot, width: u16) -> (usize, usize) {
    let mut prefix = cell.cell_id.chars().count() + 2;
    if cell.missing {
        prefix += MISSING_MARKER.chars().count();
    }

    let budget = (width as usize).saturating_sub(prefix);
    let running = cell.running_instances.min(budget);
    let claimed = cell.claimed_instances.min(budget - running);
    (running, claimed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use crate::types::{AppInfo, ClusterSnapshot};

    struct FixedExaminer(Result<ClusterSnapshot, String>);

    impl AppExaminer for FixedExaminer {
        fn list_apps(&self) -> anyhow::Result<Vec<AppInfo>> {
            unimplemented!("not used by the frame renderer")
        }

        fn app_status(&self, _app_name: &str) -> anyhow::Result<AppInfo> {
            unimplemented!("not used by the frame renderer")
        }

        fn list_cells(&self) -> anyhow::Result<ClusterSnapshot> {
            match &self.0 {
                Ok(cells) => Ok(cells.clone()),
                Err(msg) => Err(anyhow!(msg.clone())),
            }
        }
    }

    fn cell(id: &str, missing: bool, running: usize, claimed: usize) -> CellSnapshot {
        CellSnapshot {
            cell_id: id.to_string(),
            missing,
            running_instances: running,
            claimed_instances: claimed,
        }
    }

    fn render(examiner: &FixedExaminer, width: u16) -> (Vec<u8>, usize) {
        let mut out = Vec::new();
        let lines = print_distribution(examiner, &mut out, width).unwrap();
        (out, lines)
    }

    #[test]
    fn line_count_matches_cell_count() {
        for n in 0..5usize {
            let cells: ClusterSnapshot = (0..n)
                .map(|i| cell(&format!("cell-{i}"), false, 1, 0))
                .collect();
            let examiner = FixedExaminer(Ok(cells));
            let (out, lines) = render(&examiner, 80);
            assert_eq!(lines, n);
            let newlines = out.iter().filter(|&&b| b == b'\n').count();
            assert_eq!(newlines, n, "one newline per cell");
        }
    }

    #[test]
    fn data_source_error_renders_exactly_one_line() {
        let examiner = FixedExaminer(Err("cluster unreachable".to_string()));
        let (out, lines) = render(&examiner, 80);
        assert_eq!(lines, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error visualizing: cluster unreachable"));
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn rendering_is_deterministic() {
        let examiner = FixedExaminer(Ok(vec![
            cell("cell-1", false, 3, 1),
            cell("cell-2", true, 0, 0),
        ]));
        let (first, _) = render(&examiner, 80);
        let (second, _) = render(&examiner, 80);
        assert_eq!(first, second);
    }

    #[test]
    fn example_snapshot_renders_bars_and_missing_marker() {
        let examiner = FixedExaminer(Ok(vec![
            cell("cell-1", false, 3, 1),
            cell("cell-2", true, 0, 0),
        ]));
        let (out, lines) = render(&examiner, 80);
        assert_eq!(lines, 2);

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.split('\n').collect();
        assert!(rows[0].starts_with("cell-1: "));
        assert_eq!(rows[0].matches(INSTANCE_GLYPH).count(), 4);
        assert!(rows[1].contains("cell-2"));
        assert!(rows[1].contains("[MISSING]"));
        assert_eq!(rows[1].matches(INSTANCE_GLYPH).count(), 0);
    }

    #[test]
    fn running_and_claimed_bars_use_distinct_styles() {
        let examiner = FixedExaminer(Ok(vec![cell("c", false, 2, 2)]));
        let (out, _) = render(&examiner, 80);
        let text = String::from_utf8(out).unwrap();

        let green = format!("{}", "••".green());
        let yellow = format!("{}", "••".yellow());
        assert!(text.contains(&green), "running bar is green");
        assert!(text.contains(&yellow), "claimed bar is yellow");
        let green_at = text.find(&green).unwrap();
        let yellow_at = text.find(&yellow).unwrap();
        assert!(green_at < yellow_at, "running bar comes first");
    }

    #[test]
    fn bars_truncate_to_terminal_width() {
        // "wide: " is 6 columns, leaving 4 for glyphs on a 10-column terminal.
        let c = cell("wide", false, 3, 5);
        assert_eq!(bar_widths(&c, 10), (3, 1));

        // Running instances alone overflow: claimed gets nothing.
        let c = cell("wide", false, 9, 2);
        assert_eq!(bar_widths(&c, 10), (4, 0));

        // The missing marker eats into the budget.
        let c = cell("wide", true, 3, 3);
        assert_eq!(bar_widths(&c, 18), (2, 0));
    }

    #[test]
    fn empty_snapshot_renders_zero_lines() {
        let examiner = FixedExaminer(Ok(Vec::new()));
        let (out, lines) = render(&examiner, 80);
        assert_eq!(lines, 0);
        assert_eq!(String::from_utf8(out).unwrap().matches('\n').count(), 0);
    }
}
