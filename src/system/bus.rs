//! Shared channel infrastructure between threads.
//!
//! The `GameBus` is the central hub for inter-thread communication,
//! using lock-free channels for message passing between the input,
//! logic and main threads.

use crate::shared::messages::{KeyPress, SessionCommand, SessionUpdate};
use crate::shared::snapshot::GameplaySnapshot;
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};

/// Aggregates the cross-thread communication channels.
#[derive(Clone)]
pub struct GameBus {
    /// Input → Logic: raw key presses.
    pub key_tx: Sender<KeyPress>,
    pub key_rx: Receiver<KeyPress>,

    /// Main → Logic: session lifecycle commands.
    pub cmd_tx: Sender<SessionCommand>,
    pub cmd_rx: Receiver<SessionCommand>,

    /// Logic → Main: engine events and the end-of-session summary.
    pub update_tx: Sender<SessionUpdate>,
    pub update_rx: Receiver<SessionUpdate>,

    /// Logic → Presentation: state snapshots.
    pub snapshot_tx: Sender<GameplaySnapshot>,
    pub snapshot_rx: Receiver<GameplaySnapshot>,
}

impl GameBus {
    /// Creates a new bus with all channels initialized.
    pub fn new() -> Self {
        let (key_tx, key_rx) = unbounded();
        let (cmd_tx, cmd_rx) = unbounded();
        let (update_tx, update_rx) = unbounded();

        // Bounded snapshot channel: max 2 frames queued to limit latency.
        let (snapshot_tx, snapshot_rx) = bounded(2);

        Self {
            key_tx,
            key_rx,
            cmd_tx,
            cmd_rx,
            update_tx,
            update_rx,
            snapshot_tx,
            snapshot_rx,
        }
    }
}

impl Default for GameBus {
    fn default() -> Self {
        Self::new()
    }
}
