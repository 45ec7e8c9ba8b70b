//! Game state and core simulation types
//!
//! The whole simulation is one owned [`GameState`] aggregate; there are no
//! ambient globals. Everything needed for determinism lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use glam::Vec2;

use super::ambient::Ambient;
use super::collision::Rect;
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Authoritative mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Awaiting player input to begin
    Idle,
    /// Simulation active
    Running,
    /// Run over, awaiting input to restart
    Ended,
}

/// Fire-and-forget side effects raised by the simulation, drained by the
/// shell each frame. The core never waits on their handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player flapped
    Flap,
    /// A pipe pair was passed
    Score,
    /// The bird struck something
    Hit,
    /// The run ended
    Die,
    /// The just-ended run set a new best score
    NewBest,
}

/// The controllable actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Position of the sprite's top-left corner; x never changes
    pub pos: Vec2,
    /// Vertical velocity, positive is downward
    pub vel: f32,
    /// Derived from velocity, clamped to ±45°; presentation only
    pub rotation: f32,
    /// Wing animation frame
    pub frame: u8,
    frame_timer: u8,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_START_Y),
            vel: 0.0,
            rotation: 0.0,
            frame: 0,
            frame_timer: 0,
        }
    }
}

impl Bird {
    /// Back to the fixed start position with zero velocity
    pub fn reset(&mut self) {
        self.pos.y = BIRD_START_Y;
        self.vel = 0.0;
        self.rotation = 0.0;
    }

    /// Instantaneous upward impulse; overrides existing velocity
    pub fn flap(&mut self, force: f32) {
        self.vel = force;
    }

    /// Integrate gravity into velocity and velocity into position.
    /// `frames` is the clamped elapsed time in 60 Hz reference frames.
    pub fn integrate(&mut self, gravity: f32, frames: f32) {
        self.vel += gravity * frames;
        self.pos.y += self.vel * frames;
        self.rotation = (self.vel / 10.0).clamp(
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_4,
        );
    }

    /// Advance the wing animation on a fixed tick-count cadence,
    /// independent of elapsed time
    pub fn advance_animation(&mut self) {
        self.frame_timer += 1;
        if self.frame_timer >= BIRD_FRAME_DELAY {
            self.frame_timer = 0;
            self.frame = (self.frame + 1) % BIRD_FRAME_COUNT;
        }
    }

    /// Collision hitbox, inset from the sprite for more forgiving play
    pub fn hitbox(&self) -> Rect {
        Rect {
            x: self.pos.x + HITBOX_INSET,
            y: self.pos.y + HITBOX_INSET,
            w: BIRD_WIDTH - 2.0 * HITBOX_INSET,
            h: BIRD_HEIGHT - 2.0 * HITBOX_INSET,
        }
    }
}

/// One pipe pair: two barrier segments separated by a fixed gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge; decreases every tick while a run is active
    pub x: f32,
    /// Height of the upper barrier
    pub top_height: f32,
    /// Top edge of the lower barrier; always `top_height + pipe_gap`
    pub bottom_y: f32,
    /// Width of both barriers
    pub width: f32,
    /// Flipped true exactly once when the pair is credited to the score
    pub scored: bool,
}

impl Pipe {
    /// Upper barrier rectangle
    pub fn top_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            w: self.width,
            h: self.top_height,
        }
    }

    /// Lower barrier rectangle, reaching down to the ground
    pub fn bottom_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.bottom_y,
            w: self.width,
            h: CANVAS_HEIGHT - self.bottom_y - GROUND_HEIGHT,
        }
    }

    /// Trailing edge has moved past the left screen edge
    pub fn offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Per-run state; exists only while the game is running or just ended and is
/// recreated fresh on every start
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunContext {
    /// Pipes passed so far
    pub score: u32,
    /// Live pipe set, owned exclusively by this run
    pub pipes: Vec<Pipe>,
    /// Accumulated elapsed time toward the next spawn
    pub spawn_timer_ms: f32,
    /// Accumulated time since run start; drives grace period and first spawn
    pub elapsed_ms: f32,
    /// The first pipe spawns on a longer delay than the steady cadence
    pub first_pipe_spawned: bool,
    /// Set when the run ends with a new best score
    pub new_best: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Validated balance parameters
    pub tuning: Tuning,
    /// Authoritative mode
    pub phase: GamePhase,
    /// The controllable actor; never destroyed, only reset
    pub bird: Bird,
    /// Active run, `None` while idle
    pub run: Option<RunContext>,
    /// Best score seen so far (loaded from the persistence collaborator)
    pub best: u32,
    /// Always-on cosmetic drivers
    pub ambient: Ambient,
    /// Gameplay RNG (pipe heights); cosmetic randomness uses its own stream
    pub rng: Pcg32,
    /// Events raised this tick, drained by the shell
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh idle state. Fails if the tuning admits no valid pipe
    /// spawn range; that must never reach the spawner.
    pub fn new(seed: u64, tuning: Tuning, best: u32) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            seed,
            tuning,
            phase: GamePhase::Idle,
            bird: Bird::default(),
            run: None,
            best,
            ambient: Ambient::new(seed),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        })
    }

    /// Score of the active (or just-ended) run
    pub fn score(&self) -> u32 {
        self.run.as_ref().map_or(0, |run| run.score)
    }

    /// Start or restart a run: reset the bird, recreate the run context and
    /// apply the kick-off impulse at half flap force. A restart reshuffles
    /// the cosmetic color scheme; the initial start keeps the default.
    pub fn begin_run(&mut self, reshuffle_scheme: bool) {
        self.bird.reset();
        self.run = Some(RunContext::default());
        self.phase = GamePhase::Running;
        self.bird.flap(self.tuning.flap_force / 2.0);

        if reshuffle_scheme {
            self.ambient.reshuffle_scheme();
        } else {
            self.ambient.reset_scheme();
        }

        log::info!("run started (seed {}, scheme {})", self.seed, self.ambient.scheme);
    }

    /// Enter the terminal state for this run: emit the hit/die cues and
    /// settle the best-score comparison. Ties count as a new best only for a
    /// nonzero score or when nothing has ever been recorded.
    pub fn end_run(&mut self) {
        self.phase = GamePhase::Ended;
        self.events.push(GameEvent::Hit);
        self.events.push(GameEvent::Die);

        let Some(run) = self.run.as_mut() else {
            return;
        };
        if crate::highscores::BestScore::new(self.best).qualifies(run.score) {
            self.best = run.score;
            run.new_best = true;
            self.events.push(GameEvent::NewBest);
        }

        log::info!(
            "run over: score {} best {}{}",
            run.score,
            self.best,
            if run.new_best { " (new best)" } else { "" }
        );
    }

    /// Hand this tick's events to the shell
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bird_reset_restores_start_pose() {
        let mut bird = Bird::default();
        bird.pos.y = 700.0;
        bird.vel = 12.0;
        bird.rotation = 0.5;
        bird.reset();
        assert_eq!(bird.pos, Vec2::new(BIRD_X, BIRD_START_Y));
        assert_eq!(bird.vel, 0.0);
        assert_eq!(bird.rotation, 0.0);
    }

    #[test]
    fn flap_overrides_velocity() {
        let mut bird = Bird::default();
        bird.vel = 25.0;
        bird.flap(-9.0);
        assert_eq!(bird.vel, -9.0);
    }

    #[test]
    fn rotation_is_clamped() {
        let mut bird = Bird::default();
        bird.vel = 500.0;
        bird.integrate(0.3, 1.0);
        assert_eq!(bird.rotation, std::f32::consts::FRAC_PI_4);
        bird.flap(-500.0);
        bird.integrate(0.3, 1.0);
        assert_eq!(bird.rotation, -std::f32::consts::FRAC_PI_4);
    }

    #[test]
    fn animation_advances_on_tick_cadence() {
        let mut bird = Bird::default();
        for _ in 0..BIRD_FRAME_DELAY {
            bird.advance_animation();
        }
        assert_eq!(bird.frame, 1);
        for _ in 0..(BIRD_FRAME_DELAY * (BIRD_FRAME_COUNT - 1)) {
            bird.advance_animation();
        }
        assert_eq!(bird.frame, 0);
    }

    #[test]
    fn pipe_gap_invariant_holds_in_rects() {
        let pipe = Pipe {
            x: 300.0,
            top_height: 300.0,
            bottom_y: 540.0,
            width: 104.0,
            scored: false,
        };
        assert_eq!(pipe.top_rect().h, 300.0);
        assert_eq!(pipe.bottom_rect().y, 540.0);
        assert_eq!(pipe.bottom_rect().h, CANVAS_HEIGHT - 540.0 - GROUND_HEIGHT);
    }

    #[test]
    fn zero_score_is_first_best_only_once() {
        let mut state = GameState::new(7, Tuning::default(), 0).unwrap();
        state.begin_run(false);
        state.end_run();
        assert!(state.run.as_ref().unwrap().new_best);
        assert_eq!(state.best, 0);

        // Best of zero has been recorded; a second zero-score run is not new
        let mut state = GameState::new(7, Tuning::default(), 0).unwrap();
        state.best = 3;
        state.begin_run(true);
        state.end_run();
        assert!(!state.run.as_ref().unwrap().new_best);
    }

    #[test]
    fn tie_with_nonzero_best_counts() {
        let mut state = GameState::new(7, Tuning::default(), 4).unwrap();
        state.begin_run(false);
        state.run.as_mut().unwrap().score = 4;
        state.end_run();
        assert!(state.run.as_ref().unwrap().new_best);
        assert_eq!(state.best, 4);
        assert!(state.events.contains(&GameEvent::NewBest));
    }
}
