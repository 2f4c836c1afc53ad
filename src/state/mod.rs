//! State management module.
//!
//! - `GameEngine` - active gameplay (notes, judging, spawning)
//! - `SessionState` - reducer-style score/stat aggregate
//!
//! The logic thread owns both and serializes every mutation.

pub mod game;
pub mod session;

pub use game::GameEngine;
pub use session::{SessionState, SessionSummary};
