//! Typed records for the backend's JSON payloads

pub mod calendar;
pub mod decode;
pub mod signal;
pub mod stats;
pub mod symbols;
pub mod timestamp;

pub use calendar::CalendarEvent;
pub use decode::Decoded;
pub use signal::{Side, Signal};
pub use stats::Stats;
