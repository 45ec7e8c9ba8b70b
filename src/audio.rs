//! Sound-effect sink interface
//!
//! The simulation raises [`GameEvent`]s; a presentation layer maps them to
//! effect triggers here. Calls are fire-and-forget: no return value, no
//! error propagation back into the core.

use crate::sim::GameEvent;

/// Sound effect kinds the presentation layer can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player flapped
    Flap,
    /// A pipe pair was passed
    Score,
    /// The bird struck something
    Hit,
    /// Run-over sting
    Die,
    /// New best score fanfare
    NewBest,
}

impl SoundEffect {
    /// Map a simulation event onto its audio cue
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::Flap => SoundEffect::Flap,
            GameEvent::Score => SoundEffect::Score,
            GameEvent::Hit => SoundEffect::Hit,
            GameEvent::Die => SoundEffect::Die,
            GameEvent::NewBest => SoundEffect::NewBest,
        }
    }
}

/// Something that can play effects. Implementations must not block.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every trigger; the default when no audio backend is wired up
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs triggers instead of playing them; handy for headless runs
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {effect:?}");
    }
}
