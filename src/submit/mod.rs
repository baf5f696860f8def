//! Submission boundary: where validated payloads leave the form

mod log_sink;
mod traits;

pub use log_sink::*;
pub use traits::*;
