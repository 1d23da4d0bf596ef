//! Exit notification: converts operator interrupts into a one-shot callback.
//!
//! The refresh loop registers a callback here instead of handling signals
//! itself. The production notifier also restores cursor visibility on its
//! own, so an interrupt never leaves the terminal without a cursor even if
//! the loop does not get to run its shutdown path.

use std::io;

use crossterm::{cursor, execute};

/// External exit/interrupt source. Registration must not block, and the
/// callback is invoked at most once.
pub trait ExitNotifier {
    fn on_exit(&self, callback: Box<dyn FnOnce() + Send>);
}

/// Notifier backed by OS termination signals (SIGINT/SIGTERM/SIGHUP).
pub struct SignalNotifier;

impl ExitNotifier for SignalNotifier {
    #[cfg(unix)]
    fn on_exit(&self, callback: Box<dyn FnOnce() + Send>) {
        use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let mut signals = match Signals::new([SIGINT, SIGTERM, SIGHUP]) {
            Ok(signals) => signals,
            Err(_) => {
                // Keep the callback alive: dropping it would close the
                // loop's stop channel and read as an immediate cancellation.
                std::mem::forget(callback);
                return;
            }
        };

        std::thread::spawn(move || {
            if signals.forever().next().is_some() {
                callback();
                show_cursor_best_effort();
            }
        });
    }

    #[cfg(not(unix))]
    fn on_exit(&self, callback: Box<dyn FnOnce() + Send>) {
        // No signal delivery on this platform; hold the callback so the
        // loop's stop channel stays open.
        std::mem::forget(callback);
    }
}

/// Restore cursor visibility on the real terminal, ignoring failures.
pub fn show_cursor_best_effort() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show);
}
