use crate::{
    tui::{DIM, MUTED},
    ui_state::UiState,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const HINTS: &[(&str, &str)] = &[
    ("space", "play"),
    ("tab", "language"),
    ("1-9", "track"),
    ("drag reel  [ ]", "scrub"),
    ("q", "quit"),
];

pub struct HintLine;
impl StatefulWidget for HintLine {
    type State = UiState;
    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.playback_available() {
            Line::from("NO AUDIO OUTPUT  ·  q quit")
                .fg(Color::LightRed)
                .centered()
                .render(area, buf);
            return;
        }

        let mut spans = Vec::with_capacity(HINTS.len() * 3);
        for (idx, (key, what)) in HINTS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::from("  ·  ").fg(DIM));
            }
            spans.push(Span::from(*key).fg(MUTED).bold());
            spans.push(Span::from(format!(" {what}")).fg(DIM));
        }

        Line::from(spans).centered().render(area, buf);
    }
}
