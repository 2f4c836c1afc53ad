//! Input thread: forwards raw terminal keys to the logic thread.
//!
//! Keys are sent unvalidated; the engine normalizes and checks them
//! against the lane bindings (an unbound key is ignored, not an error).

use crate::shared::messages::KeyPress;
use crate::system::bus::GameBus;
use std::io::BufRead;
use std::thread;

/// Spawns the stdin reader thread.
///
/// Terminal input is line buffered, so keys arrive in bursts after
/// Enter. Good enough for a headless harness; a real front end would
/// push presses on the same channel as they happen.
pub fn start_thread(bus: GameBus) {
    thread::Builder::new()
        .name("Input Thread".to_string())
        .spawn(move || {
            log::info!("INPUT: Thread started, reading keys from stdin");
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                for key in line.chars().filter(|c| !c.is_whitespace()) {
                    let _ = bus.key_tx.send(KeyPress { key });
                }
            }
            log::info!("INPUT: stdin closed");
        })
        .expect("Failed to spawn Input thread");
}
