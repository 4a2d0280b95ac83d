use crate::player::{
    PlaybackMetrics, PlayerCommand, PlayerEvent, RodioBackend, TapeBackend,
    TrackSource, core::PlayerCore,
};
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::{sync::Arc, thread::JoinHandle, time::Duration};

pub struct PlayerHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<PlayerEvent>,
    metrics: Arc<PlaybackMetrics>,
    _thread_handle: JoinHandle<()>,
}

impl PlayerHandle {
    /// Spawns the player thread on the default audio output.
    pub fn spawn() -> Self {
        Self::spawn_with(|| Ok(Box::new(RodioBackend::new()?) as Box<dyn TapeBackend>))
    }

    pub fn spawn_with<F>(make_backend: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn TapeBackend>> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let metrics = PlaybackMetrics::new();

        let thread_handle = PlayerCore::spawn(make_backend, cmd_rx, evt_tx, Arc::clone(&metrics));

        Self {
            commands: cmd_tx,
            events: evt_rx,
            metrics,
            _thread_handle: thread_handle,
        }
    }

    pub fn metrics(&self) -> Arc<PlaybackMetrics> {
        Arc::clone(&self.metrics)
    }
}

// =====================
//    COMMAND HANDLER
// =====================
impl PlayerHandle {
    pub fn play(&self, song: TrackSource) -> Result<()> {
        self.commands.send(PlayerCommand::Play(song))?;
        Ok(())
    }

    pub fn cue(&self, song: TrackSource) -> Result<()> {
        self.commands.send(PlayerCommand::Cue(song))?;
        Ok(())
    }

    pub fn toggle_playback(&self) -> Result<()> {
        self.commands.send(PlayerCommand::TogglePlayback)?;
        Ok(())
    }

    pub fn seek_to(&self, pos: Duration) -> Result<()> {
        self.commands.send(PlayerCommand::SeekTo(pos))?;
        Ok(())
    }

    pub fn stop(&self) -> Result<()> {
        self.commands.send(PlayerCommand::Stop)?;
        Ok(())
    }
}

// ===============
//    ACCESSORS
// ===============
impl PlayerHandle {
    pub fn poll_events(&mut self) -> Vec<PlayerEvent> {
        std::iter::from_fn(|| self.events.try_recv().ok()).collect()
    }
}
