//! Skyflap - a side-scrolling flap-to-fly arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, game state)
//! - `tuning`: Data-driven game balance, validated at startup
//! - `highscores`: Best-score record and the new-best rule
//! - `persistence`: Best-score storage collaborators
//! - `audio`: Sound-effect sink interface for the presentation layer

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod sim;
pub mod tuning;

pub use highscores::BestScore;
pub use tuning::{Tuning, TuningError};

/// Fixed world geometry. Gameplay balance lives in [`Tuning`] instead.
pub mod consts {
    /// Playfield width in world units
    pub const CANVAS_WIDTH: f32 = 640.0;
    /// Playfield height in world units
    pub const CANVAS_HEIGHT: f32 = 960.0;
    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 224.0;

    /// The bird never moves horizontally - the world scrolls instead
    pub const BIRD_X: f32 = 100.0;
    /// Vertical start position for a fresh run
    pub const BIRD_START_Y: f32 = CANVAS_HEIGHT / 3.0 - 12.0;
    /// Bird sprite extent
    pub const BIRD_WIDTH: f32 = 68.0;
    pub const BIRD_HEIGHT: f32 = 48.0;
    /// Hitbox inset on every side, more forgiving than the sprite
    pub const HITBOX_INSET: f32 = 5.0;

    /// Wing animation frames and the tick cadence between them
    pub const BIRD_FRAME_COUNT: u8 = 3;
    pub const BIRD_FRAME_DELAY: u8 = 5;

    /// Reference frame duration (60 Hz); physics deltas are expressed in
    /// multiples of this
    pub const FRAME_TIME_MS: f32 = 1000.0 / 60.0;
    /// Elapsed time per tick is clamped to this to bound integration error
    pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

    /// Number of cosmetic color scheme variants
    pub const SCHEME_COUNT: usize = 7;
}
