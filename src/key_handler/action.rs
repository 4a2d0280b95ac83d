use crate::{
    REFRESH_RATE,
    app_core::TapeDeck,
    key_handler::*,
    ui_state::{Mode, UiState, cell_to_pointer},
};
use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use KeyCode::*;

pub fn handle_key_event(key: KeyEvent, state: &UiState) -> Option<Action> {
    // Works even with a popup open
    match (key.modifiers, key.code) {
        (C, Char('c')) | (X, Char('q')) => return Some(Action::QUIT),
        (X, Esc) if state.popup.is_open() => return Some(Action::ClosePopup),
        _ if state.popup.is_open() => return None,
        _ => (),
    }

    match (key.modifiers, key.code) {
        (X, Char(' ')) | (X, Enter) => Some(Action::TogglePlayback),

        (X, Tab) | (X, Char('l')) => Some(Action::SelectTrack(TrackStep::Next)),
        (S, BackTab) | (X, BackTab) | (X, Char('h')) => {
            Some(Action::SelectTrack(TrackStep::Prev))
        }
        (X, Char(c @ '1'..='9')) => {
            let idx = c as usize - '1' as usize;
            (idx < state.catalog.len()).then_some(Action::SelectTrack(TrackStep::Index(idx)))
        }

        (X, Char(']')) | (X, Right) => Some(Action::Wind(WIND_STEP)),
        (X, Char('[')) | (X, Left) => Some(Action::Wind(-WIND_STEP)),

        _ => None,
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &UiState) -> Option<Action> {
    if state.popup.is_open() {
        return None;
    }

    let pointer = cell_to_pointer(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => state
            .reels
            .hit(mouse.column, mouse.row)
            .map(|side| Action::BeginDrag(side, pointer)),

        MouseEventKind::Drag(MouseButton::Left) if state.reels.any_dragging() => {
            Some(Action::ContinueDrag(pointer))
        }

        MouseEventKind::Up(_) if state.reels.any_dragging() => Some(Action::EndDrag),

        MouseEventKind::ScrollDown => state
            .reels
            .hit(mouse.column, mouse.row)
            .map(|_| Action::Wind(WHEEL_STEP)),
        MouseEventKind::ScrollUp => state
            .reels
            .hit(mouse.column, mouse.row)
            .map(|_| Action::Wind(-WHEEL_STEP)),

        _ => None,
    }
}

/// Waits up to one frame for input, then takes whatever else is queued so a
/// fast drag is not spread over many frames.
pub fn next_events() -> Result<Vec<Event>> {
    let mut events = Vec::new();

    if event::poll(REFRESH_RATE)? {
        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
    }

    Ok(events)
}

impl TapeDeck {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Player
            Action::TogglePlayback  => self.toggle_playback()?,
            Action::SelectTrack(s)  => self.select_track(s)?,

            // Reels
            Action::Wind(delta)     => self.wind(delta)?,
            Action::BeginDrag(side, p) => self.ui.reels.begin_drag(side, p),
            Action::ContinueDrag(p) => {
                let delta = self.ui.reels.continue_drag(p);
                if delta != 0.0 {
                    self.wind(delta)?;
                }
            }
            Action::EndDrag         => self.ui.reels.end_drags(),

            // Ops
            Action::ClosePopup      => self.ui.close_popup(),
            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::Catalog, player::PlaybackMetrics, ui_state::ReelSide};
    use ratatui::{
        crossterm::event::{KeyEventKind, KeyEventState},
        layout::Rect,
    };

    fn ui() -> UiState {
        let mut ui = UiState::new(Catalog::builtin(), "en", PlaybackMetrics::new());
        ui.reels
            .set_area(ReelSide::Left, Some(Rect::new(0, 0, 20, 10)));
        ui
    }

    fn key(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn playback_and_language_keys() {
        let ui = ui();
        assert_eq!(
            handle_key_event(key(X, Char(' ')), &ui),
            Some(Action::TogglePlayback)
        );
        assert_eq!(
            handle_key_event(key(X, Tab), &ui),
            Some(Action::SelectTrack(TrackStep::Next))
        );
        assert_eq!(
            handle_key_event(key(S, BackTab), &ui),
            Some(Action::SelectTrack(TrackStep::Prev))
        );
        assert_eq!(
            handle_key_event(key(X, Char('3')), &ui),
            Some(Action::SelectTrack(TrackStep::Index(2)))
        );
        assert_eq!(handle_key_event(key(X, Char('9')), &ui), None);
    }

    #[test]
    fn wind_keys() {
        let ui = ui();
        assert_eq!(
            handle_key_event(key(X, Char(']')), &ui),
            Some(Action::Wind(WIND_STEP))
        );
        assert_eq!(
            handle_key_event(key(X, Left), &ui),
            Some(Action::Wind(-WIND_STEP))
        );
    }

    #[test]
    fn popup_swallows_everything_but_escape_and_quit() {
        let mut ui = ui();
        ui.set_error(anyhow::anyhow!("boom"));

        assert_eq!(handle_key_event(key(X, Char(' ')), &ui), None);
        assert_eq!(
            handle_key_event(key(X, Esc), &ui),
            Some(Action::ClosePopup)
        );
        assert_eq!(
            handle_key_event(key(C, Char('c')), &ui),
            Some(Action::QUIT)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), &ui),
            None
        );
    }

    #[test]
    fn press_on_reel_begins_drag() {
        let ui = ui();
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), &ui),
            Some(Action::BeginDrag(ReelSide::Left, cell_to_pointer(10, 5)))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 50, 5), &ui),
            None
        );
    }

    #[test]
    fn drag_and_release_only_while_grabbed() {
        let mut ui = ui();
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 12, 7);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 12, 7);

        assert_eq!(handle_mouse_event(drag, &ui), None);
        assert_eq!(handle_mouse_event(up, &ui), None);

        ui.reels
            .begin_drag(ReelSide::Left, cell_to_pointer(15, 5));
        assert_eq!(
            handle_mouse_event(drag, &ui),
            Some(Action::ContinueDrag(cell_to_pointer(12, 7)))
        );
        assert_eq!(handle_mouse_event(up, &ui), Some(Action::EndDrag));
    }

    #[test]
    fn wheel_over_reel_winds() {
        let ui = ui();
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 5), &ui),
            Some(Action::Wind(WHEEL_STEP))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollUp, 40, 5), &ui),
            None
        );
    }
}
