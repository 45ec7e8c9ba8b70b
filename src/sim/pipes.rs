//! Pipe lifecycle: spawn, advance, score, retire
//!
//! Pipes travel a fixed distance per tick (frame-coupled, like the ground
//! scroll), while the spawn cadence accumulates real elapsed time. Spawn
//! bounds come pre-validated from `Tuning`; nothing here re-checks them.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, Pipe, RunContext};
use crate::consts::{BIRD_X, CANVAS_WIDTH};
use crate::tuning::Tuning;

/// Create one pipe pair at the right screen edge with a uniformly random
/// gap placement
pub fn spawn_pipe(rng: &mut Pcg32, tuning: &Tuning) -> Pipe {
    let (min, max) = tuning.spawn_range();
    let top_height = rng.random_range(min..=max);
    Pipe {
        x: CANVAS_WIDTH,
        top_height,
        bottom_y: top_height + tuning.pipe_gap,
        width: tuning.pipe_width,
        scored: false,
    }
}

/// Advance every live pipe by one tick, credit newly passed pairs to the
/// score, retire off-screen pairs and spawn on cadence.
///
/// `run.elapsed_ms` must already include this tick's delta.
pub fn update_pipes(
    run: &mut RunContext,
    rng: &mut Pcg32,
    events: &mut Vec<GameEvent>,
    tuning: &Tuning,
    dt_ms: f32,
) {
    for pipe in &mut run.pipes {
        pipe.x -= tuning.pipe_speed;

        // Trailing edge strictly past the bird: score exactly once
        if !pipe.scored && pipe.x + pipe.width < BIRD_X {
            pipe.scored = true;
            run.score += 1;
            events.push(GameEvent::Score);
        }
    }

    run.pipes.retain(|pipe| !pipe.offscreen());

    // The first pipe waits out a longer delay so the run opens unobstructed
    if !run.first_pipe_spawned {
        if run.elapsed_ms > tuning.first_spawn_delay_ms {
            run.first_pipe_spawned = true;
            run.spawn_timer_ms = 0.0;
            run.pipes.push(spawn_pipe(rng, tuning));
        }
        return;
    }

    run.spawn_timer_ms += dt_ms;
    if run.spawn_timer_ms >= tuning.spawn_interval_ms {
        run.spawn_timer_ms = 0.0;
        run.pipes.push(spawn_pipe(rng, tuning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn spawned_pipes_stay_in_bounds() {
        let tuning = Tuning::default();
        let (min, max) = tuning.spawn_range();
        let mut rng = rng();
        for _ in 0..1000 {
            let pipe = spawn_pipe(&mut rng, &tuning);
            assert!(pipe.top_height >= min && pipe.top_height <= max);
            assert_eq!(pipe.bottom_y, pipe.top_height + tuning.pipe_gap);
            assert_eq!(pipe.x, CANVAS_WIDTH);
            assert!(!pipe.scored);
        }
    }

    #[test]
    fn first_pipe_waits_for_the_opening_delay() {
        let tuning = Tuning::default();
        let mut run = RunContext::default();
        let mut rng = rng();
        let mut events = Vec::new();

        run.elapsed_ms = 1499.0;
        update_pipes(&mut run, &mut rng, &mut events, &tuning, 16.0);
        assert!(run.pipes.is_empty());
        assert!(!run.first_pipe_spawned);

        run.elapsed_ms = 1501.0;
        update_pipes(&mut run, &mut rng, &mut events, &tuning, 16.0);
        assert_eq!(run.pipes.len(), 1);
        assert!(run.first_pipe_spawned);
    }

    #[test]
    fn steady_cadence_accumulates_elapsed_time() {
        let tuning = Tuning::default();
        let mut run = RunContext {
            first_pipe_spawned: true,
            elapsed_ms: 2000.0,
            ..RunContext::default()
        };
        let mut rng = rng();
        let mut events = Vec::new();

        // 1500 ms in uneven deltas: spawns exactly once
        for dt in [700.0, 700.0, 100.0] {
            update_pipes(&mut run, &mut rng, &mut events, &tuning, dt);
        }
        assert_eq!(run.pipes.len(), 1);
        assert_eq!(run.spawn_timer_ms, 0.0);
    }

    #[test]
    fn passing_pipe_scores_exactly_once() {
        let tuning = Tuning::default();
        let mut run = RunContext {
            first_pipe_spawned: true,
            ..RunContext::default()
        };
        // One tick short of crossing the bird's x
        run.pipes.push(Pipe {
            x: BIRD_X - tuning.pipe_width + tuning.pipe_speed - 1.0,
            top_height: 300.0,
            bottom_y: 540.0,
            width: tuning.pipe_width,
            scored: false,
        });
        let mut rng = rng();
        let mut events = Vec::new();

        update_pipes(&mut run, &mut rng, &mut events, &tuning, 16.0);
        assert_eq!(run.score, 1);
        assert_eq!(events, vec![GameEvent::Score]);

        // The pair stays in the live set for many more ticks; no re-credit
        events.clear();
        for _ in 0..10 {
            update_pipes(&mut run, &mut rng, &mut events, &tuning, 16.0);
        }
        assert_eq!(run.score, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn offscreen_pipes_are_retired() {
        let tuning = Tuning::default();
        let mut run = RunContext {
            first_pipe_spawned: true,
            ..RunContext::default()
        };
        run.pipes.push(Pipe {
            x: -tuning.pipe_width + tuning.pipe_speed - 1.0,
            top_height: 300.0,
            bottom_y: 540.0,
            width: tuning.pipe_width,
            scored: true,
        });
        let mut rng = rng();
        let mut events = Vec::new();

        update_pipes(&mut run, &mut rng, &mut events, &tuning, 16.0);
        assert!(run.pipes.is_empty());
    }
}
