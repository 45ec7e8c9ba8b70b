//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clamped elapsed-time deltas only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies; side effects surface as
//!   drainable [`GameEvent`]s

pub mod ambient;
pub mod clock;
pub mod collision;
pub mod pipes;
pub mod state;
pub mod tick;

pub use ambient::Ambient;
pub use clock::FrameClock;
pub use collision::{Rect, bird_collides, rects_overlap};
pub use state::{Bird, GameEvent, GamePhase, GameState, Pipe, RunContext};
pub use tick::{TickInput, tick};
