use crate::tui::{EMERALD, MUTED};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

const TITLE: &str = "KrishiMitra";
const SUBTITLE: &str =
    "YOUR AI-POWERED COMPANION FOR SUSTAINABLE AND SMARTER AGRICULTURE. SELECT A LANGUAGE TO LISTEN.";

pub struct Header;
impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, title, subtitle, _] = Layout::vertical([Constraint::Length(1); 4]).areas(area);

        Line::from(vec![
            Span::from("About ").fg(Color::White).bold(),
            Span::from(TITLE).fg(EMERALD).bold(),
        ])
        .centered()
        .render(title, buf);

        Line::from(SUBTITLE)
            .fg(MUTED)
            .centered()
            .render(subtitle, buf);
    }
}
