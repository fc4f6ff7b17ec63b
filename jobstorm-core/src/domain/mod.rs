//! Domain types
//!
//! Structure only. Socket handling lives in `jobstorm-client`.

pub mod job;
pub mod probe;
pub mod reply;
