//! Domain data models: notes, hit windows, judgements and configuration.

pub mod hit_window;
pub mod note;
pub mod settings;
pub mod stats;

pub use hit_window::HitWindow;
pub use note::{Note, NoteStatus};
pub use settings::GameConfig;
pub use stats::{HitStats, Judgement};
