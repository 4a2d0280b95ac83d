mod layout;
mod renderer;
mod widgets;

use ratatui::style::Color;

pub use layout::AppLayout;
pub use renderer::render;
pub use widgets::{Deck, ErrorMsg, Header, HintLine, PlayButton, Reel};

const EMERALD: Color = Color::Rgb(16, 185, 129);
const EMERALD_LIGHT: Color = Color::Rgb(52, 211, 153);
const PANEL_BG: Color = Color::Rgb(10, 10, 10);
const TEXT: Color = Color::Rgb(209, 213, 219);
const MUTED: Color = Color::Rgb(115, 115, 115);
const DIM: Color = Color::Rgb(64, 64, 64);
