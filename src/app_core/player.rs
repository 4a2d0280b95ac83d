use crate::{
    app_core::TapeDeck,
    domain::NarrationTrack,
    key_handler::TrackStep,
    player::{PlayerEvent, TrackSource},
};
use anyhow::{Result, anyhow};

impl TapeDeck {
    fn track_source(&self, track: &NarrationTrack) -> TrackSource {
        TrackSource::new(&track.id, track.resolve(&self.config.audio_dir))
    }

    /// Loads the selected track paused at the start of the tape.
    pub(crate) fn cue_current(&mut self) -> Result<()> {
        let source = self.track_source(self.ui.current_track());
        self.player.cue(source)
    }

    pub(crate) fn toggle_playback(&mut self) -> Result<()> {
        if !self.ui.is_playing() {
            self.ui.reveal.restart();
        }
        self.player.toggle_playback()
    }

    /// A new language keeps the deck's transport state: playing decks start
    /// the new track, paused decks cue it.
    pub(crate) fn select_track(&mut self, step: TrackStep) -> Result<()> {
        let id = match step {
            TrackStep::Next => self.ui.next_track_id(),
            TrackStep::Prev => self.ui.prev_track_id(),
            TrackStep::Index(idx) => self
                .ui
                .track_id_at(idx)
                .ok_or_else(|| anyhow!("No track {}", idx + 1))?,
        };

        if !self.ui.select_track(&id) {
            return Ok(());
        }

        let source = self.track_source(self.ui.current_track());
        match self.ui.is_playing() {
            true => self.player.play(source),
            false => self.player.cue(source),
        }
    }

    /// Winds the tape by `delta` radians of reel travel.
    pub(crate) fn wind(&mut self, delta: f64) -> Result<()> {
        let spr = self.config.seconds_per_revolution;
        if let Some(target) = self.ui.apply_scrub(delta, spr) {
            self.player.seek_to(target)?;
        }
        Ok(())
    }

    pub(crate) fn handle_player_events(&mut self) {
        for event in self.player.poll_events() {
            match event {
                PlayerEvent::TrackStarted(id) => tracing::debug!(track = %id, "Track started"),
                PlayerEvent::EndOfStream(id) => tracing::debug!(track = %id, "Tape ran out"),
                PlayerEvent::Error(e) => self.ui.set_error(anyhow!(e)),
            }
        }
    }
}
