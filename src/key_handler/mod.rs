mod action;

pub use action::{handle_key_event, handle_mouse_event, next_events};

use crate::{scrub::PointerSample, ui_state::ReelSide};
use ratatui::crossterm::event::KeyModifiers;
use std::f64::consts::FRAC_PI_4;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

/// Reel travel for one keyboard wind.
const WIND_STEP: f64 = FRAC_PI_4;
/// Reel travel for one notch of the scroll wheel.
const WHEEL_STEP: f64 = FRAC_PI_4 / 2.0;

#[derive(Debug, PartialEq)]
pub enum Action {
    // Player Controls
    TogglePlayback,
    SelectTrack(TrackStep),

    // Reels
    Wind(f64),
    BeginDrag(ReelSide, PointerSample),
    ContinueDrag(PointerSample),
    EndDrag,

    // Errors, Convenience & Other
    ClosePopup,
    QUIT,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TrackStep {
    Next,
    Prev,
    Index(usize),
}
