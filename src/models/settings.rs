//! Game configuration, loaded from an optional TOML file.

use crate::models::hit_window::HitWindow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for a session. Every field has a default so a partial (or
/// absent) config file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Note travel speed in units per second.
    #[serde(default = "default_note_speed")]
    pub note_speed: f32,
    /// Interval between spawns in milliseconds.
    #[serde(default = "default_spawn_interval_ms")]
    pub spawn_interval_ms: u64,
    /// Fixed position of the target line from the left edge.
    #[serde(default = "default_target_x")]
    pub target_x: f32,
    /// Off-screen threshold past which resolved notes are dropped.
    #[serde(default = "default_despawn_x")]
    pub despawn_x: f32,
    /// Session length in seconds.
    #[serde(default = "default_session_duration_secs")]
    pub session_duration_secs: f64,
    /// Lifetime of an on-hit feedback marker in seconds.
    #[serde(default = "default_feedback_duration_secs")]
    pub feedback_duration_secs: f64,
    /// One key per lane, in lane order.
    #[serde(default = "default_keys")]
    pub keys: Vec<char>,
    #[serde(default)]
    pub windows: HitWindow,
}

fn default_note_speed() -> f32 {
    200.0
}
fn default_spawn_interval_ms() -> u64 {
    500
}
fn default_target_x() -> f32 {
    50.0
}
fn default_despawn_x() -> f32 {
    -50.0
}
fn default_session_duration_secs() -> f64 {
    30.0
}
fn default_feedback_duration_secs() -> f64 {
    0.5
}
fn default_keys() -> Vec<char> {
    vec!['a', 's', 'd', 'f']
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            note_speed: default_note_speed(),
            spawn_interval_ms: default_spawn_interval_ms(),
            target_x: default_target_x(),
            despawn_x: default_despawn_x(),
            session_duration_secs: default_session_duration_secs(),
            feedback_duration_secs: default_feedback_duration_secs(),
            keys: default_keys(),
            windows: HitWindow::new(),
        }
    }
}

impl GameConfig {
    /// Loads the config from `path`, falling back to defaults if the
    /// file is missing or fails to parse. A broken config is never
    /// fatal.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("CONFIG: {:?} not found, using defaults", path);
            return Self::default();
        }
        match load_toml::<Self>(path) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::error!("CONFIG: Failed to load {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Replaces unusable sections with their defaults, the same
    /// warn-and-fallback treatment the lane bindings get.
    fn sanitized(mut self) -> Self {
        if !self.windows.is_valid() {
            log::warn!(
                "CONFIG: Hit windows must satisfy perfect < good < bad with slack >= 0, using defaults"
            );
            self.windows = HitWindow::new();
        }
        self
    }
}

/// Load a TOML file and deserialize it.
fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    toml::from_str(&content).map_err(|e| e.to_string())
}
