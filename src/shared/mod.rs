//! Types shared across thread boundaries.

pub mod messages;
pub mod snapshot;
