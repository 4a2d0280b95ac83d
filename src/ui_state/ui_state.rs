use super::{DeckView, Mode, PopupState, ReelBank, TextReveal};
use crate::{
    domain::{Catalog, NarrationTrack},
    player::PlaybackMetrics,
};
use std::sync::Arc;

pub struct UiState {
    // Backend Modules
    pub(super) metrics: Arc<PlaybackMetrics>,
    pub(crate) catalog: Catalog,

    // Visual Elements
    pub(crate) deck: DeckView,
    pub(crate) reels: ReelBank,
    pub(crate) reveal: TextReveal,
    pub(crate) popup: PopupState,

    current_id: String,
    mode: Mode,
}

impl UiState {
    pub fn new(catalog: Catalog, language: &str, metrics: Arc<PlaybackMetrics>) -> Self {
        let current_id = catalog.find(language).id.clone();
        if current_id != language {
            tracing::warn!("Unknown language {language:?}, starting with {current_id:?}");
        }

        UiState {
            metrics,
            catalog,
            deck: DeckView::default(),
            reels: ReelBank::new(),
            reveal: TextReveal::new(),
            popup: PopupState::new(),
            current_id,
            mode: Mode::default(),
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode
    }
}

// ============
//    TRACKS
// ============
impl UiState {
    pub fn current_track(&self) -> &NarrationTrack {
        self.catalog.find(&self.current_id)
    }

    pub fn track_number(&self) -> usize {
        self.catalog.track_number(&self.current_id)
    }

    pub fn next_track_id(&self) -> String {
        self.catalog.next_id(&self.current_id).to_string()
    }

    pub fn prev_track_id(&self) -> String {
        self.catalog.prev_id(&self.current_id).to_string()
    }

    pub fn track_id_at(&self, idx: usize) -> Option<String> {
        self.catalog.at(idx).map(|t| t.id.clone())
    }

    /// Switches the displayed narration. Returns false if `id` is already
    /// selected; unknown ids fall back to the first track.
    pub fn select_track(&mut self, id: &str) -> bool {
        let id = self.catalog.find(id).id.clone();
        if id == self.current_id {
            return false;
        }

        self.current_id = id;
        self.reset_counter();
        self.reveal.restart();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui(language: &str) -> UiState {
        UiState::new(Catalog::builtin(), language, PlaybackMetrics::new())
    }

    #[test]
    fn starts_on_requested_language() {
        assert_eq!(ui("mr").current_track().label, "Marathi");
        assert_eq!(ui("mr").track_number(), 3);
    }

    #[test]
    fn unknown_language_starts_on_first_track() {
        assert_eq!(ui("fr").current_track().id, "en");
    }

    #[test]
    fn selecting_same_track_is_a_no_op() {
        let mut ui = ui("en");
        assert!(!ui.select_track("en"));
        assert!(ui.select_track("hi"));
        assert_eq!(ui.current_track().id, "hi");
        assert_eq!(ui.current_time(), 0.0);
    }

    #[test]
    fn cycling_follows_catalog_order() {
        let mut ui = ui("bn");
        assert_eq!(ui.next_track_id(), "en");
        assert_eq!(ui.prev_track_id(), "te");

        let id = ui.track_id_at(1).unwrap();
        ui.select_track(&id);
        assert_eq!(ui.current_track().label, "Hindi");
        assert_eq!(ui.track_id_at(9), None);
    }
}
