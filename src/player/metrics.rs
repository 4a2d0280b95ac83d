use crate::{player::PlaybackState, scrub::PlaybackPosition};

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering},
    },
    time::Duration,
};

/// Lock-free view of the player thread, read by the UI every frame.
pub struct PlaybackMetrics {
    state: AtomicU8,
    elapsed_ms: AtomicU64,
    duration_ms: AtomicU64,
    available: AtomicBool,
}

impl PlaybackMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(PlaybackMetrics {
            state: AtomicU8::new(0),
            elapsed_ms: AtomicU64::new(0),
            duration_ms: AtomicU64::new(0),
            available: AtomicBool::new(false),
        })
    }

    pub fn get_state(&self) -> PlaybackState {
        self.state
            .load(Ordering::Relaxed)
            .try_into()
            .unwrap_or(PlaybackState::Stopped)
    }

    pub fn get_elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }

    pub fn get_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.load(Ordering::Relaxed))
    }

    pub fn position(&self) -> PlaybackPosition {
        PlaybackPosition::new(
            self.get_elapsed().as_secs_f64(),
            self.get_duration().as_secs_f64(),
        )
    }

    pub fn is_playing(&self) -> bool {
        PlaybackState::Playing == self.get_state()
    }

    pub fn is_paused(&self) -> bool {
        PlaybackState::Paused == self.get_state()
    }

    pub fn is_stopped(&self) -> bool {
        PlaybackState::Stopped == self.get_state()
    }

    /// Whether an audio output was opened.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed)
    }

    pub fn set_playback_state(&self, state: PlaybackState) {
        self.state.store(state.into(), Ordering::Relaxed);
    }

    pub fn set_elapsed(&self, d: Duration) {
        self.elapsed_ms
            .store(d.as_millis() as u64, Ordering::Relaxed)
    }

    pub fn set_duration(&self, d: Duration) {
        self.duration_ms
            .store(d.as_millis() as u64, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.set_elapsed(Duration::ZERO);
        self.set_duration(Duration::ZERO);
        self.set_playback_state(PlaybackState::Stopped);
    }
}
