//! Audio cue boundary
//!
//! Maps discrete game events to sound cues. No audio backend lives in this
//! crate; the player resolves cues and logs them so a real output layer can
//! sit on top, purely reactive. Mute is an explicit configuration value
//! threaded in at construction, not process-wide state.

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Move accepted, snake starts sliding
    SnakeMove,
    /// Move rejected, exit path blocked
    Collision,
    /// Snake fully off the board
    SnakeExit,
    /// Board cleared
    LevelWin,
    /// Hint highlighted
    Hint,
}

impl SoundCue {
    /// Cue for a game event
    pub fn for_event(event: &GameEvent) -> SoundCue {
        match event {
            GameEvent::MoveAccepted { .. } => SoundCue::SnakeMove,
            GameEvent::MoveRejected { .. } => SoundCue::Collision,
            GameEvent::SnakeExited { .. } => SoundCue::SnakeExit,
            GameEvent::BoardCleared => SoundCue::LevelWin,
            GameEvent::HintShown { .. } => SoundCue::Hint,
        }
    }
}

/// Feedback player for the audio-cue boundary
#[derive(Debug, Clone)]
pub struct CuePlayer {
    muted: bool,
    volume: f32,
}

impl CuePlayer {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            volume: 1.0,
        }
    }

    /// Mute/unmute all cues
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Set cue volume (0.0 - 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// React to a game event
    pub fn handle(&self, event: &GameEvent) {
        self.play(SoundCue::for_event(event));
    }

    /// Play a cue (logged; a real backend would synthesize here)
    pub fn play(&self, cue: SoundCue) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        log::debug!("cue {cue:?} at volume {volume}");
    }
}
