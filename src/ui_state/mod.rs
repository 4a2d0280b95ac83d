mod mode;
mod playback;
mod popup;
mod reels;
mod reveal;
mod ui_state;

pub use mode::Mode;
pub use playback::DeckView;
pub use popup::{PopupState, PopupType};
pub use reels::{CELL_ASPECT, ReelBank, ReelSide, cell_to_pointer};
pub use reveal::{TextReveal, reveal_opacity};
pub use ui_state::UiState;
