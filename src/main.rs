//! Application entry point and thread bootstrapper.

mod input;
mod logic;
mod system;

mod core;
mod models;
mod shared;
mod state;

use crate::models::settings::GameConfig;
use crate::shared::messages::{SessionCommand, SessionUpdate};
use crate::system::bus::GameBus;
use std::path::Path;

fn main() {
    unsafe {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    log::info!("MAIN: Booting notefall...");

    let config = GameConfig::load(Path::new("notefall.toml"));
    let keys: String = config.keys.iter().collect();

    let bus = GameBus::new();

    input::start_thread(bus.clone());
    let logic_handle = logic::start_thread(bus.clone(), config.clone());

    // The terminal has no measurable play area; use a fixed width so
    // the spawner has an entry edge.
    let _ = bus.cmd_tx.send(SessionCommand::Resize { width: 1000.0 });

    log::info!(
        "MAIN: Session starting - press [{}] + Enter when a note reaches the line",
        keys
    );
    let _ = bus.cmd_tx.send(SessionCommand::Start);

    // Drain updates until the session finishes.
    loop {
        match bus.update_rx.recv() {
            Ok(SessionUpdate::Event(event)) => log::debug!("MAIN: {:?}", event),
            Ok(SessionUpdate::Finished(summary)) => {
                log::info!(
                    "MAIN: Final score {} | accuracy {:.1}% | perfect {} good {} bad {} miss {}",
                    summary.score,
                    summary.accuracy,
                    summary.stats.perfect,
                    summary.stats.good,
                    summary.stats.bad,
                    summary.stats.miss
                );
                break;
            }
            Err(_) => break,
        }

        // Headless "renderer": drain snapshots and report at debug level.
        while let Ok(snapshot) = bus.snapshot_rx.try_recv() {
            log::debug!(
                "VIEW: t={:.2}s left={:.1}s score={} acc={:.1}% notes={} judged={}",
                snapshot.clock,
                snapshot.time_left,
                snapshot.score,
                snapshot.accuracy,
                snapshot.visible_notes.len(),
                snapshot.stats.total()
            );
            for marker in &snapshot.feedback {
                log::debug!("VIEW: {} on lane {}", marker.judgement, marker.lane);
            }
            if let Some(next) = snapshot
                .visible_notes
                .iter()
                .min_by(|a, b| a.position_x.total_cmp(&b.position_x))
            {
                log::trace!(
                    "VIEW: next note #{} lane {} at x={:.0}",
                    next.id,
                    next.lane,
                    next.position_x
                );
            }
        }
    }

    let _ = bus.cmd_tx.send(SessionCommand::Shutdown);
    let _ = logic_handle.join();
}
