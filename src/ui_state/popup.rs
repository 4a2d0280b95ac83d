use crate::ui_state::UiState;
use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupType {
    None,
    Error(String),
}

pub struct PopupState {
    pub current: PopupType,
}

impl PopupState {
    pub(crate) fn new() -> PopupState {
        PopupState {
            current: PopupType::None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    fn open(&mut self, popup: PopupType) {
        self.current = popup;
    }

    fn close(&mut self) {
        self.current = PopupType::None;
    }
}

impl UiState {
    pub fn set_error(&mut self, e: Error) {
        tracing::warn!("{e:#}");
        self.popup.open(PopupType::Error(e.to_string()));
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.popup.current {
            PopupType::Error(e) => Some(e.as_str()),
            _ => None,
        }
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }
}
