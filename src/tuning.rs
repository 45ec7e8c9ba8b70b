//! Data-driven game balance
//!
//! All gameplay numbers that are balance rather than world geometry live
//! here. Defaults match the classic feel; a `Tuning` must be validated once
//! before it reaches the simulation, so the spawner never sees a degenerate
//! configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{CANVAS_HEIGHT, GROUND_HEIGHT};

/// Configuration errors, fatal at startup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// `pipe_gap` plus margins does not fit the playfield, leaving no valid
    /// spawn range
    #[error("no valid pipe spawn range: min_pipe_height {min} > max height {max}")]
    DegenerateSpawnRange { min: f32, max: f32 },
    /// A dimension that must be strictly positive is not
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Gameplay balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration per reference frame (velocity units / frame)
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward); overrides, never adds
    pub flap_force: f32,
    /// Horizontal pipe travel per tick (frame-coupled, not dt-scaled)
    pub pipe_speed: f32,
    /// Pipe barrier width
    pub pipe_width: f32,
    /// Vertical gap between the top and bottom barriers of a pair
    pub pipe_gap: f32,
    /// Smallest allowed barrier segment height
    pub min_pipe_height: f32,
    /// Steady-state interval between pipe spawns (accumulated elapsed time)
    pub spawn_interval_ms: f32,
    /// Delay before the first pipe of a run, giving an unobstructed start
    pub first_spawn_delay_ms: f32,
    /// Post-start window during which collisions are ignored
    pub grace_period_ms: f32,
    /// Day-night cycle progress per millisecond
    pub day_night_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            flap_force: -9.0,
            pipe_speed: 4.0,
            pipe_width: 104.0,
            pipe_gap: 240.0,
            min_pipe_height: 100.0,
            spawn_interval_ms: 1500.0,
            first_spawn_delay_ms: 1500.0,
            grace_period_ms: 1000.0,
            day_night_speed: 0.000_02,
        }
    }
}

impl Tuning {
    /// The inclusive range of valid `top_height` values for a spawned pipe.
    /// Both barrier segments keep at least `min_pipe_height` and the gap
    /// never overlaps the ground region.
    pub fn spawn_range(&self) -> (f32, f32) {
        let max = CANVAS_HEIGHT - GROUND_HEIGHT - self.pipe_gap - self.min_pipe_height;
        (self.min_pipe_height, max)
    }

    /// Validate once at configuration time. The simulation refuses to start
    /// on error; per-spawn checks would be too late.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("pipe_gap", self.pipe_gap),
            ("pipe_width", self.pipe_width),
            ("min_pipe_height", self.min_pipe_height),
            ("pipe_speed", self.pipe_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("gravity", self.gravity),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NonPositive { name, value });
            }
        }

        let (min, max) = self.spawn_range();
        if max < min {
            return Err(TuningError::DegenerateSpawnRange { min, max });
        }

        Ok(())
    }
}
