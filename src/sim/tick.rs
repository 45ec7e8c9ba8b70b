//! Per-frame simulation dispatch
//!
//! One `tick` call advances the whole game by one clamped elapsed-time
//! delta: commands first, then the always-on cosmetic drivers, then - only
//! while a run is active - physics, pipe lifecycle and collision.

use super::collision::bird_collides;
use super::pipes;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{FRAME_TIME_MS, MAX_FRAME_DELTA_MS};

/// Discrete commands for a single tick. Each is immediately processed;
/// within one tick the last write wins, and a command received outside its
/// valid transition is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap impulse; also starts or restarts when the game is not running
    pub flap: bool,
    /// Begin a run from idle
    pub start: bool,
    /// Begin a fresh run after a game over
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    let dt_ms = dt_ms.clamp(0.0, MAX_FRAME_DELTA_MS);

    match state.phase {
        GamePhase::Idle => {
            // Any interaction starts the game
            if input.start || input.flap {
                state.begin_run(false);
            }
        }
        GamePhase::Running => {
            if input.flap {
                state.bird.flap(state.tuning.flap_force);
                state.events.push(GameEvent::Flap);
            }
        }
        GamePhase::Ended => {
            // A restart reshuffles the cosmetic scheme
            if input.restart || input.flap {
                state.begin_run(true);
            }
        }
    }

    let running = state.phase == GamePhase::Running;
    state.ambient.update(dt_ms, running, &state.tuning);
    if !running {
        return;
    }

    let collided = {
        let GameState {
            bird,
            run,
            rng,
            events,
            tuning,
            ..
        } = state;
        let Some(run) = run.as_mut() else {
            return;
        };

        run.elapsed_ms += dt_ms;

        bird.integrate(tuning.gravity, dt_ms / FRAME_TIME_MS);
        bird.advance_animation();

        pipes::update_pipes(run, rng, events, tuning, dt_ms);

        // Collisions inside the post-start grace window are ignored
        // entirely, not queued
        run.elapsed_ms > tuning.grace_period_ms && bird_collides(bird, &run.pipes)
    };

    if collided {
        state.end_run();
    }
}
