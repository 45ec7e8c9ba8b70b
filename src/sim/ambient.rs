//! Always-on cosmetic drivers: day-night cycle, cloud parallax, ground
//! scroll and color scheme variants
//!
//! None of this has gameplay consequence, so it draws from its own RNG
//! stream; cosmetic updates can never perturb pipe placement. Day-night and
//! clouds advance every tick regardless of phase; the ground scroll tracks
//! pipe speed and therefore only moves while a run is active.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_TIME_MS, SCHEME_COUNT};
use crate::tuning::Tuning;

/// Offset XORed into the seed for the cosmetic RNG stream
const COSMETIC_SEED: u64 = 0xc105_0dd5;

/// Cloud x-distance past the left edge before wrap-around
const CLOUD_WRAP_MARGIN: f32 = 100.0;
/// Ground detail pattern repeats every this many units
const GROUND_PATTERN_WIDTH: f32 = 80.0;

/// Names of the cosmetic color scheme variants, index-aligned with
/// [`Ambient::scheme`]
pub const SCHEME_NAMES: [&str; SCHEME_COUNT] = [
    "Original",
    "Monochromatic",
    "Analogous",
    "Complementary",
    "Triadic",
    "Split-complementary",
    "Tetradic",
];

/// A single background cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: f32,
}

/// One parallax layer; higher speed reads as closer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudLayer {
    pub speed: f32,
    pub clouds: Vec<Cloud>,
}

impl CloudLayer {
    fn new(speed: f32, clouds: &[(f32, f32, f32)]) -> Self {
        Self {
            speed,
            clouds: clouds
                .iter()
                .map(|&(x, y, size)| Cloud {
                    pos: Vec2::new(x, y),
                    size,
                })
                .collect(),
        }
    }
}

/// State of the cosmetic drivers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ambient {
    /// 0 = day, 1 = night, in between is the transition
    pub day_night: f32,
    /// 1 toward night, -1 toward day
    pub day_night_dir: f32,
    /// Background cloud layers, far to near
    pub layers: Vec<CloudLayer>,
    /// Ground scroll offset in (-GROUND_PATTERN_WIDTH, 0]
    pub ground_offset: f32,
    /// Current color scheme variant
    pub scheme: usize,
    rng: Pcg32,
}

impl Ambient {
    pub fn new(seed: u64) -> Self {
        Self {
            day_night: 0.0,
            day_night_dir: 1.0,
            layers: vec![
                CloudLayer::new(
                    0.5,
                    &[
                        (100.0, 100.0, 1.2),
                        (300.0, 50.0, 0.8),
                        (500.0, 150.0, 1.5),
                        (700.0, 80.0, 1.0),
                        (900.0, 120.0, 1.3),
                    ],
                ),
                CloudLayer::new(
                    1.0,
                    &[
                        (200.0, 180.0, 1.0),
                        (400.0, 70.0, 1.1),
                        (600.0, 120.0, 0.9),
                        (800.0, 60.0, 1.2),
                    ],
                ),
                CloudLayer::new(
                    1.5,
                    &[
                        (150.0, 200.0, 0.7),
                        (350.0, 90.0, 0.6),
                        (550.0, 170.0, 0.8),
                        (750.0, 40.0, 0.5),
                    ],
                ),
            ],
            ground_offset: 0.0,
            scheme: 0,
            rng: Pcg32::seed_from_u64(seed ^ COSMETIC_SEED),
        }
    }

    /// Advance all cosmetic timers by one tick. `running` gates only the
    /// ground scroll; everything else keeps moving in every phase.
    pub fn update(&mut self, dt_ms: f32, running: bool, tuning: &Tuning) {
        self.update_day_night(dt_ms, tuning);
        self.update_clouds(dt_ms, tuning);
        if running {
            self.update_ground(dt_ms, tuning);
        }
    }

    /// Ping-pong the day-night value inside [0, 1]
    fn update_day_night(&mut self, dt_ms: f32, tuning: &Tuning) {
        self.day_night += self.day_night_dir * tuning.day_night_speed * dt_ms;
        if self.day_night >= 1.0 {
            self.day_night = 1.0;
            self.day_night_dir = -1.0;
        } else if self.day_night <= 0.0 {
            self.day_night = 0.0;
            self.day_night_dir = 1.0;
        }
    }

    fn update_clouds(&mut self, dt_ms: f32, tuning: &Tuning) {
        let frames = dt_ms / FRAME_TIME_MS;
        for layer in &mut self.layers {
            let drift = layer.speed * (tuning.pipe_speed / 4.0) * frames;
            for cloud in &mut layer.clouds {
                cloud.pos.x -= drift;
                if cloud.pos.x + CLOUD_WRAP_MARGIN < 0.0 {
                    cloud.pos.x = CANVAS_WIDTH + 50.0;
                    cloud.pos.y = self.rng.random_range(0.0..CANVAS_HEIGHT / 2.0);
                }
            }
        }
    }

    fn update_ground(&mut self, dt_ms: f32, tuning: &Tuning) {
        let frames = dt_ms / FRAME_TIME_MS;
        self.ground_offset -= tuning.pipe_speed * frames;
        if self.ground_offset <= -GROUND_PATTERN_WIDTH {
            self.ground_offset = 0.0;
        }
    }

    /// Pick a fresh random scheme (restart behavior)
    pub fn reshuffle_scheme(&mut self) {
        self.scheme = self.rng.random_range(0..SCHEME_COUNT);
    }

    /// Back to the fixed default scheme (initial start behavior)
    pub fn reset_scheme(&mut self) {
        self.scheme = 0;
    }

    pub fn scheme_name(&self) -> &'static str {
        SCHEME_NAMES[self.scheme]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_night_ping_pongs_within_bounds() {
        let tuning = Tuning::default();
        let mut ambient = Ambient::new(1);

        // Long enough to cross both ends of the cycle several times
        let mut reversals = 0;
        let mut last_dir = ambient.day_night_dir;
        for _ in 0..200_000 {
            ambient.update(100.0, false, &tuning);
            assert!((0.0..=1.0).contains(&ambient.day_night));
            if ambient.day_night_dir != last_dir {
                reversals += 1;
                last_dir = ambient.day_night_dir;
            }
        }
        assert!(reversals >= 2);
    }

    #[test]
    fn clouds_drift_even_while_idle() {
        let tuning = Tuning::default();
        let mut ambient = Ambient::new(1);
        let before = ambient.layers[0].clouds[0].pos.x;
        ambient.update(FRAME_TIME_MS, false, &tuning);
        assert!(ambient.layers[0].clouds[0].pos.x < before);
    }

    #[test]
    fn ground_scroll_only_moves_while_running() {
        let tuning = Tuning::default();
        let mut ambient = Ambient::new(1);

        ambient.update(FRAME_TIME_MS, false, &tuning);
        assert_eq!(ambient.ground_offset, 0.0);

        ambient.update(FRAME_TIME_MS, true, &tuning);
        assert!(ambient.ground_offset < 0.0);
    }

    #[test]
    fn ground_offset_wraps() {
        let tuning = Tuning::default();
        let mut ambient = Ambient::new(1);
        for _ in 0..1000 {
            ambient.update(FRAME_TIME_MS, true, &tuning);
            assert!(ambient.ground_offset > -GROUND_PATTERN_WIDTH);
            assert!(ambient.ground_offset <= 0.0);
        }
    }

    #[test]
    fn wrapped_clouds_reenter_from_the_right() {
        let tuning = Tuning::default();
        let mut ambient = Ambient::new(1);
        for _ in 0..100_000 {
            ambient.update(FRAME_TIME_MS, false, &tuning);
        }
        for layer in &ambient.layers {
            for cloud in &layer.clouds {
                assert!(cloud.pos.x + CLOUD_WRAP_MARGIN >= 0.0);
                assert!(cloud.pos.x <= CANVAS_WIDTH + 50.0);
                assert!(cloud.pos.y >= 0.0 && cloud.pos.y <= CANVAS_HEIGHT / 2.0);
            }
        }
    }

    #[test]
    fn reshuffle_stays_in_range() {
        let mut ambient = Ambient::new(9);
        for _ in 0..50 {
            ambient.reshuffle_scheme();
            assert!(ambient.scheme < SCHEME_COUNT);
        }
        ambient.reset_scheme();
        assert_eq!(ambient.scheme, 0);
        assert_eq!(ambient.scheme_name(), "Original");
    }
}
