//! Logic thread: the game loop.
//!
//! One thread owns the engine and the session aggregate, so the two
//! periodic activities (variable-delta motion tick, fixed-interval
//! spawn tick) and key presses are all funneled onto one execution
//! sequence. Each handler runs to completion before the next; no
//! mutation of the note collection is ever interleaved.
//!
//! Stopping a session drops the engine together with its spawn
//! accumulator, so both activities halt deterministically and no event
//! is emitted after session end.

use crate::core::input::LaneBindings;
use crate::models::settings::GameConfig;
use crate::shared::messages::{SessionCommand, SessionUpdate};
use crate::shared::snapshot::GameplaySnapshot;
use crate::state::game::spawner::NoteSpawner;
use crate::state::{GameEngine, SessionState};
use crate::system::bus::GameBus;
use std::thread;
use std::time::{Duration, Instant};

/// A running session: engine, aggregate and the two timers.
struct ActiveSession {
    engine: GameEngine,
    session: SessionState,
    /// Seconds since the session started.
    elapsed: f64,
    /// Accumulated time towards the next spawn tick. Kept separate
    /// from the motion clock so spawn cadence never couples to frame
    /// timing.
    spawn_accumulator: f64,
}

impl ActiveSession {
    fn new(config: &GameConfig) -> Self {
        let bindings = LaneBindings::from_config(&config.keys);
        let spawner = NoteSpawner::new(bindings.lane_count());
        Self {
            engine: GameEngine::new(config, bindings, spawner),
            session: SessionState::new(),
            elapsed: 0.0,
            spawn_accumulator: 0.0,
        }
    }

    fn snapshot(&self, duration: f64) -> GameplaySnapshot {
        GameplaySnapshot {
            clock: self.engine.clock(),
            time_left: (duration - self.elapsed).max(0.0),
            visible_notes: self.engine.visible_notes(),
            feedback: self.engine.feedback().to_vec(),
            score: self.session.score,
            stats: self.session.stats.clone(),
            accuracy: self.session.stats.calculate_accuracy(),
        }
    }
}

/// Spawns the logic thread.
///
/// The loop runs as often as the scheduler allows (an animation-style
/// clock with measured delta time) and drives spawning from its own
/// accumulator at the configured fixed interval.
pub fn start_thread(bus: GameBus, config: GameConfig) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("Logic Thread".to_string())
        .spawn(move || {
            log::info!("LOGIC: Thread started");

            let spawn_interval = config.spawn_interval_ms as f64 / 1000.0;
            let duration = config.session_duration_secs;

            let mut active: Option<ActiveSession> = None;
            // Remembered across sessions so a session started after the
            // play area was measured spawns immediately.
            let mut known_width: Option<f32> = None;
            let mut last_time = Instant::now();

            loop {
                // 1. Session commands
                while let Ok(cmd) = bus.cmd_rx.try_recv() {
                    match cmd {
                        SessionCommand::Start => {
                            // A restart ends the replaced session like a
                            // Stop would, so every started session gets
                            // exactly one Finished.
                            if let Some(replaced) = active.take() {
                                log::info!("LOGIC: Session restarted");
                                let _ = bus
                                    .update_tx
                                    .send(SessionUpdate::Finished(replaced.session.summary()));
                            }
                            log::info!("LOGIC: Session started ({}s)", duration);
                            let mut fresh = ActiveSession::new(&config);
                            if let Some(width) = known_width {
                                fresh.engine.set_play_width(width);
                            }
                            active = Some(fresh);
                        }
                        SessionCommand::Stop => {
                            if let Some(stopped) = active.take() {
                                log::info!("LOGIC: Session stopped early");
                                let _ = bus
                                    .update_tx
                                    .send(SessionUpdate::Finished(stopped.session.summary()));
                            }
                        }
                        SessionCommand::Resize { width } => {
                            known_width = Some(width);
                            if let Some(a) = &mut active {
                                a.engine.set_play_width(width);
                            }
                        }
                        SessionCommand::Shutdown => {
                            log::info!("LOGIC: Shutdown received");
                            return;
                        }
                    }
                }

                // 2. Key presses, judged against the state as of the
                //    most recent completed tick.
                while let Ok(press) = bus.key_rx.try_recv() {
                    if let Some(a) = &mut active {
                        for event in a.engine.on_key_press(press.key) {
                            a.session.apply(event);
                            let _ = bus.update_tx.send(SessionUpdate::Event(event));
                        }
                    }
                }

                // 3. Motion tick with measured delta time.
                let now = Instant::now();
                let dt = (now - last_time).as_secs_f64();
                last_time = now;

                let mut finished = None;
                if let Some(a) = &mut active {
                    for event in a.engine.tick(dt) {
                        a.session.apply(event);
                        let _ = bus.update_tx.send(SessionUpdate::Event(event));
                    }

                    // 4. Fixed-interval spawning, on its own accumulator.
                    a.spawn_accumulator += dt;
                    while a.spawn_accumulator >= spawn_interval {
                        a.engine.handle_spawn_tick();
                        a.spawn_accumulator -= spawn_interval;
                    }

                    // 5. Session timer
                    a.elapsed += dt;
                    if a.elapsed >= duration {
                        finished = Some(a.session.summary());
                    } else {
                        let _ = bus.snapshot_tx.try_send(a.snapshot(duration));
                    }
                }

                if let Some(summary) = finished {
                    active = None;
                    log::info!(
                        "LOGIC: Session finished - score {} accuracy {:.1}%",
                        summary.score,
                        summary.accuracy
                    );
                    let _ = bus.update_tx.send(SessionUpdate::Finished(summary));
                }

                thread::sleep(Duration::from_millis(1));
            }
        })
        .expect("Failed to spawn Logic thread")
}
