//! Live cell-distribution visualization.
//!
//! `frame` turns one cluster snapshot into terminal lines; `refresh` drives
//! the poll/redraw loop that overwrites the previous frame in place.

pub mod frame;
pub mod refresh;

pub use frame::print_distribution;
pub use refresh::visualize;
