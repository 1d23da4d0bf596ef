//! cellview: terminal status surface for a distributed application platform.
//!
//! Renders a table of deployed apps, a detailed per-instance status view for
//! a single app, and a live, periodically-refreshing visualization of how
//! app instances are distributed across worker cells. The live view redraws
//! in place by repositioning the terminal cursor over the previous frame.

pub mod cli;
pub mod examiner;
pub mod exit;
pub mod types;
pub mod ui;
pub mod viz;
