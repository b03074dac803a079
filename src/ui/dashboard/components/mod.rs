//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod calendar;
pub mod chart;
pub mod footer;
pub mod header;
pub mod logs;
pub mod signals;
pub mod stats;
