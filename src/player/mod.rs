mod backend_rodio;
mod core;
mod handle;
mod metrics;
mod track;

#[cfg(test)]
pub(crate) mod testing;

pub use backend_rodio::RodioBackend;
pub use handle::PlayerHandle;
pub use metrics::PlaybackMetrics;
pub use track::TrackSource;

use anyhow::Result;
use std::{path::Path, time::Duration};

pub enum PlayerEvent {
    TrackStarted(String),
    EndOfStream(String),
    Error(String),
}

pub enum PlayerCommand {
    Play(TrackSource),
    Cue(TrackSource),
    TogglePlayback,
    SeekTo(Duration),
    Stop,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum PlaybackState {
    Stopped = 0,
    Playing = 1,
    Paused = 2,
}

impl From<PlaybackState> for u8 {
    fn from(state: PlaybackState) -> u8 {
        state as u8
    }
}

impl TryFrom<u8> for PlaybackState {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PlaybackState::Stopped),
            1 => Ok(PlaybackState::Playing),
            2 => Ok(PlaybackState::Paused),
            _ => Err(()),
        }
    }
}

/// Audio output the player thread drives.
///
/// Backends are constructed on the player thread, so they need not be `Send`.
pub trait TapeBackend {
    /// Load a file and start playing it from the beginning.
    fn play(&mut self, path: &Path) -> Result<()>;
    /// Load a file, paused at the beginning.
    fn cue(&mut self, path: &Path) -> Result<()>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    fn seek(&mut self, pos: Duration) -> Result<()>;
    fn position(&self) -> Duration;
    fn duration(&self) -> Duration;
    fn is_paused(&self) -> bool;
    fn is_stopped(&self) -> bool;
    /// True once a loaded file has played out.
    fn track_ended(&self) -> bool;
}
