//! Refresh loop: renders the distribution, then re-renders in place on a
//! fixed interval until an external cancellation arrives.
//!
//! Single-threaded and cooperative: the only suspension point is the wait
//! for the next tick, and cancellation is observed there, never mid-render.
//! The one-shot stop signal travels over an mpsc channel fed by the exit
//! notifier; waiting with `recv_timeout` makes the tick the timeout case, so
//! a pending cancellation always wins over a simultaneously-due tick.

use std::io::Write;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor, execute, queue,
    style::{PrintStyledContent, Stylize},
};

use crate::examiner::AppExaminer;
use crate::exit::ExitNotifier;
use crate::viz::frame;

/// Run the cell-distribution visualization.
///
/// Renders one frame immediately. With a zero refresh rate that is the whole
/// job: no cursor hiding, no cancellation registration, immediate return.
/// Otherwise the cursor is hidden, a stop callback is registered with the
/// notifier, and the loop re-renders once per interval until cancelled,
/// restoring cursor visibility exactly once on the way out.
pub fn visualize<E, W>(
    examiner: &E,
    out: &mut W,
    rate: Duration,
    notifier: &dyn ExitNotifier,
) -> Result<()>
where
    E: AppExaminer + ?Sized,
    W: Write,
{
    queue!(out, PrintStyledContent("Distribution\n".bold()))?;
    let mut lines_written = frame::print_distribution(examiner, out, frame::terminal_width())?;
    out.flush()?;

    if rate.is_zero() {
        return Ok(());
    }

    queue!(out, cursor::Hide)?;
    out.flush()?;

    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    notifier.on_exit(Box::new(move || {
        let _ = stop_tx.send(());
    }));

    loop {
        match stop_rx.recv_timeout(rate) {
            Err(RecvTimeoutError::Timeout) => {
                queue!(out, cursor::MoveUp(clamp_lines(lines_written)))?;
                lines_written =
                    frame::print_distribution(examiner, out, frame::terminal_width())?;
                out.flush()?;
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    execute!(out, cursor::Show)?;
    Ok(())
}

fn clamp_lines(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_lines_saturates_at_u16_max() {
        assert_eq!(clamp_lines(3), 3);
        assert_eq!(clamp_lines(usize::from(u16::MAX) + 10), u16::MAX);
    }
}
