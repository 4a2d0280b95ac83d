use crate::{
    scrub::{PlaybackPosition, scrub},
    tape_time,
    ui_state::UiState,
};
use std::time::{Duration, Instant};

/// How long a wind may wait for the player to report its seek.
const SEEK_SETTLE: Duration = Duration::from_millis(250);
/// Distance from the seek target at which the player counts as caught up.
const SEEK_TOLERANCE: f64 = 0.1;

/// What the deck shows about the tape: mirrors the player between winds and
/// leads it while the user is winding a reel.
#[derive(Debug, Default)]
pub struct DeckView {
    is_playing: bool,
    current_time: f64,
    pending_seek: Option<PendingSeek>,
}

/// A seek sent to the player that its metrics have not reflected yet.
#[derive(Debug, Clone, Copy)]
struct PendingSeek {
    target: f64,
    deadline: Instant,
}

impl UiState {
    pub fn is_playing(&self) -> bool {
        self.deck.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.deck.current_time
    }

    pub fn time_display(&self) -> String {
        tape_time(self.deck.current_time)
    }

    pub fn duration(&self) -> Duration {
        self.metrics.get_duration()
    }

    /// Whether the player has an audio output to scrub.
    pub fn playback_available(&self) -> bool {
        self.metrics.is_available()
    }

    /// A track is loaded when the player knows its length.
    pub fn track_loaded(&self) -> bool {
        !self.metrics.get_duration().is_zero()
    }

    pub fn show_idle_overlay(&self) -> bool {
        !self.deck.is_playing && self.deck.current_time == 0.0
    }

    /// Pulls the player's state into the view. The counter is left alone
    /// while a reel is held, and after a wind until the player reports the
    /// new position, so winding is not undone by stale positions.
    pub fn sync_playback(&mut self) {
        self.deck.is_playing = self.metrics.is_playing();

        if self.reels.any_dragging() {
            return;
        }

        let position = self.metrics.position();

        if let Some(pending) = self.deck.pending_seek {
            let caught_up =
                (position.current_time_seconds - pending.target).abs() <= SEEK_TOLERANCE;
            if !caught_up && Instant::now() < pending.deadline {
                return;
            }
            self.deck.pending_seek = None;
        }

        self.deck.current_time = position.current_time_seconds;
    }

    /// The deck's counter against the loaded track's length.
    pub fn playback_position(&self) -> PlaybackPosition {
        PlaybackPosition {
            current_time_seconds: self.deck.current_time,
            ..self.metrics.position()
        }
    }

    /// Turns the reels by `delta` and winds the tape with them.
    ///
    /// Returns the seek target for the player, or `None` when there is no
    /// loaded track to wind, in which case nothing changes.
    pub fn apply_scrub(&mut self, delta: f64, seconds_per_revolution: f64) -> Option<Duration> {
        if !self.playback_available() || !self.track_loaded() {
            return None;
        }

        let position = scrub(self.playback_position(), delta, seconds_per_revolution);

        self.deck.current_time = position.current_time_seconds;
        self.deck.pending_seek = Some(PendingSeek {
            target: position.current_time_seconds,
            deadline: Instant::now() + SEEK_SETTLE,
        });
        self.reels.rotation.apply(delta);

        Some(position.current_time())
    }

    /// Playback-driven turn of the reels.
    pub fn spin(&mut self, delta: f64) {
        self.reels.rotation.apply(delta);
    }

    pub(crate) fn reset_counter(&mut self) {
        self.deck.current_time = 0.0;
        self.deck.pending_seek = None;
    }
}
