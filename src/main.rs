//! Skyflap entry point
//!
//! Headless shell: wires the simulation core to its collaborators (logger,
//! best-score store, audio sink) and runs a few autopilot demo runs at a
//! fixed cadence. A graphical front end would drive `tick` the same way from
//! its frame callback.

use std::time::{SystemTime, UNIX_EPOCH};

use skyflap::audio::{AudioSink, LogAudio, SoundEffect};
use skyflap::consts::{BIRD_HEIGHT, BIRD_X, CANVAS_HEIGHT, FRAME_TIME_MS};
use skyflap::persistence::{BestStore, JsonFileStore};
use skyflap::sim::{FrameClock, GameEvent, GamePhase, GameState, TickInput, tick};
use skyflap::tuning::Tuning;

/// How many demo runs to play before exiting
const DEMO_RUNS: u32 = 3;
/// Sim time after which the autopilot stops flapping and lets the run end
const DEMO_RUN_MS: f32 = 45_000.0;

/// Flap whenever the bird sinks near the floor of the next gap; the climb
/// from one flap stays well inside the gap height
fn autopilot(state: &GameState) -> TickInput {
    let floor_y = state
        .run
        .as_ref()
        .and_then(|run| run.pipes.iter().find(|p| p.x + p.width >= BIRD_X))
        .map_or(CANVAS_HEIGHT / 2.0 + 120.0, |p| p.bottom_y);
    TickInput {
        flap: state.bird.pos.y + BIRD_HEIGHT > floor_y - 30.0,
        ..TickInput::default()
    }
}

fn main() {
    env_logger::init();
    log::info!("skyflap (headless demo) starting");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut store = JsonFileStore::new();
    let best = store.load_best();

    let mut state = match GameState::new(seed, Tuning::default(), best) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid tuning: {err}");
            std::process::exit(1);
        }
    };
    let mut audio = LogAudio;
    let mut clock = FrameClock::new();

    let mut now_ms = 0.0;
    let mut runs_finished = 0;
    let mut input = TickInput {
        start: true,
        ..TickInput::default()
    };

    while runs_finished < DEMO_RUNS {
        let dt_ms = clock.delta_ms(now_ms);
        let was_running = state.phase == GamePhase::Running;
        tick(&mut state, &input, dt_ms);

        for event in state.drain_events() {
            audio.play(SoundEffect::for_event(event));
            if event == GameEvent::NewBest {
                store.save_best(state.best);
            }
        }

        if was_running && state.phase == GamePhase::Ended {
            runs_finished += 1;
            log::info!(
                "demo run {runs_finished}/{DEMO_RUNS}: score {} (best {})",
                state.score(),
                state.best
            );
            input = TickInput {
                restart: runs_finished < DEMO_RUNS,
                ..TickInput::default()
            };
        } else if state
            .run
            .as_ref()
            .is_some_and(|run| run.elapsed_ms > DEMO_RUN_MS)
        {
            // Give up and glide into the ground so the run finishes
            input = TickInput::default();
        } else {
            input = autopilot(&state);
        }

        now_ms += f64::from(FRAME_TIME_MS);
    }

    log::info!("demo complete, best score {}", state.best);
}
