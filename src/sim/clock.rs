//! Frame driver: turns host timestamps into clamped simulation deltas
//!
//! The host supplies monotonically increasing timestamps at display refresh
//! cadence. A stalled frame must not produce a huge integration step, so
//! deltas are clamped; the simulation treats any oversized delta identically
//! to the maximum.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DELTA_MS;

/// Computes elapsed-time deltas from consecutive timestamps
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call, clamped to [`MAX_FRAME_DELTA_MS`].
    /// The first call yields zero.
    pub fn delta_ms(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        delta.min(MAX_FRAME_DELTA_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_delta_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_ms(1234.5), 0.0);
    }

    #[test]
    fn consecutive_deltas_subtract() {
        let mut clock = FrameClock::new();
        clock.delta_ms(1000.0);
        assert_eq!(clock.delta_ms(1016.0), 16.0);
        assert_eq!(clock.delta_ms(1033.0), 17.0);
    }

    #[test]
    fn stalled_frame_is_clamped() {
        let mut clock = FrameClock::new();
        clock.delta_ms(0.0);
        assert_eq!(clock.delta_ms(5000.0), MAX_FRAME_DELTA_MS);
    }

    proptest! {
        #[test]
        fn delta_never_exceeds_clamp(gap in 0.0f64..1e6) {
            let mut clock = FrameClock::new();
            clock.delta_ms(0.0);
            let delta = clock.delta_ms(gap);
            prop_assert!(delta <= MAX_FRAME_DELTA_MS);
            prop_assert!(delta >= 0.0);
        }
    }
}
