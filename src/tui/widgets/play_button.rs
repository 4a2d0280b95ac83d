use crate::{
    tui::{DIM, EMERALD},
    ui_state::UiState,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Stylize},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

const BUTTON_WIDTH: u16 = 18;

pub struct PlayButton;
impl StatefulWidget for PlayButton {
    type State = UiState;
    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [button] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
            .flex(Flex::Center)
            .areas(area);

        let label = match state.is_playing() {
            true => "❚❚  PAUSE",
            false => "▶  PLAY",
        };

        let color = match state.playback_available() {
            true => EMERALD,
            false => DIM,
        };

        Paragraph::new(label)
            .centered()
            .bold()
            .fg(Color::Black)
            .bg(color)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(color)
                    .bg(color),
            )
            .render(button, buf);
    }
}
