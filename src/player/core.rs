use crate::{
    REFRESH_RATE,
    player::{PlaybackMetrics, PlaybackState, PlayerCommand, PlayerEvent, TapeBackend, TrackSource},
};
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

pub struct PlayerCore {
    backend: Box<dyn TapeBackend>,
    commands: Receiver<PlayerCommand>,
    events: Sender<PlayerEvent>,
    metrics: Arc<PlaybackMetrics>,

    current: Option<TrackSource>,
    finished: bool,
}

impl PlayerCore {
    /// Runs until every command sender is dropped.
    pub fn spawn<F>(
        make_backend: F,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
        metrics: Arc<PlaybackMetrics>,
    ) -> JoinHandle<()>
    where
        F: FnOnce() -> Result<Box<dyn TapeBackend>> + Send + 'static,
    {
        thread::spawn(move || {
            let backend = match make_backend() {
                Ok(backend) => backend,
                Err(e) => {
                    tracing::error!("Could not open audio output: {e:#}");
                    let _ = events.send(PlayerEvent::Error(format!(
                        "Could not open audio output: {e}"
                    )));
                    return;
                }
            };
            metrics.set_available(true);

            let mut core = PlayerCore {
                backend,
                commands,
                events,
                metrics,

                current: None,
                finished: false,
            };

            core.run();
            tracing::debug!("Player thread exiting");
        })
    }

    fn run(&mut self) {
        while self.process_commands() {
            self.check_track_end();
            self.update_metrics();
            thread::sleep(REFRESH_RATE);
        }
        self.backend.stop();
    }

    fn process_commands(&mut self) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(cmd) => match cmd {
                    PlayerCommand::Play(s) => self.play_song(s),
                    PlayerCommand::Cue(s) => self.cue_song(s),
                    PlayerCommand::TogglePlayback => self.toggle_playback(),
                    PlayerCommand::SeekTo(pos) => self.seek_to(pos),
                    PlayerCommand::Stop => self.stop(),
                },
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    fn check_track_end(&mut self) {
        // `finished` ensures the event is sent once per play-through
        if self.finished || !self.backend.track_ended() {
            return;
        }

        if let Some(song) = &self.current {
            self.finished = true;
            self.metrics.set_elapsed(self.backend.duration());
            self.metrics.set_playback_state(PlaybackState::Stopped);
            tracing::info!(track = song.id(), "End of stream");
            self.emit(PlayerEvent::EndOfStream(song.id().to_string()));
        }
    }

    fn update_metrics(&mut self) {
        if self.current.is_some() && !self.finished {
            self.metrics.set_elapsed(self.backend.position())
        }
    }

    fn play_song(&mut self, song: TrackSource) {
        if let Err(e) = self.backend.play(song.path()) {
            tracing::warn!(track = song.id(), "Play failed: {e:#}");
            self.emit(PlayerEvent::Error(format!("Play failed: {e}")));
            return;
        }

        self.load_metrics(PlaybackState::Playing);
        tracing::info!(track = song.id(), path = %song.path().display(), "Playing");
        self.emit(PlayerEvent::TrackStarted(song.id().to_string()));

        self.current = Some(song);
        self.finished = false;
    }

    fn cue_song(&mut self, song: TrackSource) {
        if let Err(e) = self.backend.cue(song.path()) {
            tracing::warn!(track = song.id(), "Cue failed: {e:#}");
            self.emit(PlayerEvent::Error(format!("Could not load track: {e}")));
            self.current = None;
            self.metrics.reset();
            return;
        }

        self.load_metrics(PlaybackState::Paused);
        tracing::debug!(track = song.id(), "Cued");

        self.current = Some(song);
        self.finished = false;
    }

    fn load_metrics(&self, state: PlaybackState) {
        self.metrics.set_duration(self.backend.duration());
        self.metrics.set_elapsed(Duration::ZERO);
        self.metrics.set_playback_state(state);
    }

    fn toggle_playback(&mut self) {
        // A finished tape starts over, like a media element after `ended`
        if self.finished || self.backend.is_stopped() {
            if let Some(song) = self.current.clone() {
                self.play_song(song);
            }
            return;
        }

        match self.backend.is_paused() {
            true => {
                self.backend.resume();
                self.metrics.set_playback_state(PlaybackState::Playing);
            }

            false => {
                self.backend.pause();
                self.metrics.set_playback_state(PlaybackState::Paused);
            }
        }
    }

    fn stop(&mut self) {
        self.backend.stop();
        self.current = None;
        self.finished = false;
        self.metrics.reset();
    }

    fn seek_to(&mut self, pos: Duration) {
        let Some(song) = self.current.clone() else {
            return;
        };

        if self.finished {
            // Reload so the tape can be wound back from its end
            if let Err(e) = self.backend.cue(song.path()) {
                self.emit(PlayerEvent::Error(e.to_string()));
                return;
            }
            self.finished = false;
            self.metrics.set_playback_state(PlaybackState::Paused);
        }

        let duration = self.backend.duration();
        let target = match duration.is_zero() {
            true => Duration::ZERO,
            false => pos.min(duration),
        };

        match self.backend.seek(target) {
            Ok(()) => self.metrics.set_elapsed(target),
            Err(e) => {
                tracing::warn!(track = song.id(), "Seek failed: {e:#}");
                self.emit(PlayerEvent::Error(format!("Seek failed: {e}")));
            }
        }
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.events.send(event);
    }
}
