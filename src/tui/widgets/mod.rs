mod deck;
mod error;
mod header;
mod hint_line;
mod play_button;
mod reel;

pub use deck::Deck;
pub use error::ErrorMsg;
pub use header::Header;
pub use hint_line::HintLine;
pub use play_button::PlayButton;
pub use reel::Reel;
