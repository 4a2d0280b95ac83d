use crate::{
    tui::{DIM, EMERALD, EMERALD_LIGHT, MUTED, PANEL_BG, TEXT},
    ui_state::UiState,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

const IDLE_TEXT: &str = "INITIALIZE SYSTEM";

pub struct Deck;
impl StatefulWidget for Deck {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(DIM)
            .padding(Padding::new(3, 3, 1, 0));
        let inner = block.inner(area);
        block.render(area, buf);

        let [status, _, text, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        render_status(status, buf, state);
        render_script(text, buf, state);
        render_bottom_bar(bottom, buf, state);

        if state.show_idle_overlay() {
            render_idle_overlay(text, buf);
        }
    }
}

/// Left, center and right columns of a row. Lines set their style across
/// the whole area they render to, so each gets its own.
fn thirds(area: Rect) -> [Rect; 3] {
    Layout::horizontal([Constraint::Fill(1); 3]).areas(area)
}

fn render_status(area: Rect, buf: &mut Buffer, state: &UiState) {
    let [left, center, right] = thirds(area);
    let (icon, label, color) = match state.is_playing() {
        true => ("●", "PLAYING", EMERALD_LIGHT),
        false => ("○", "PAUSED", MUTED),
    };

    Line::from(vec![
        Span::from(icon).fg(color),
        Span::from(format!(" {label}")).fg(color),
    ])
    .render(left, buf);

    Line::from(state.time_display())
        .fg(Color::White)
        .bold()
        .centered()
        .render(center, buf);

    Line::from(vec![
        Span::from("TRACK ").fg(MUTED),
        Span::from(format!("{:02}", state.track_number())).fg(Color::White),
    ])
    .right_aligned()
    .render(right, buf);
}

fn render_script(area: Rect, buf: &mut Buffer, state: &UiState) {
    let track = state.current_track();
    let mut lines = Vec::new();

    for (idx, paragraph) in track.paragraphs().into_iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        let color = fade(PANEL_BG, TEXT, state.reveal.opacity(idx));
        lines.push(Line::from(paragraph).fg(color));
    }

    Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_idle_overlay(area: Rect, buf: &mut Buffer) {
    let width = IDLE_TEXT.len() as u16 + 6;
    let [row] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    let [badge] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    Paragraph::new(IDLE_TEXT)
        .centered()
        .fg(MUTED)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(DIM),
        )
        .bg(PANEL_BG)
        .render(badge, buf);
}

fn render_bottom_bar(area: Rect, buf: &mut Buffer, state: &UiState) {
    let [rule, labels, values] = Layout::vertical([Constraint::Length(1); 3]).areas(area);

    Line::from("─".repeat(rule.width as usize))
        .fg(Color::Rgb(30, 30, 30))
        .render(rule, buf);

    let [label_left, _, label_right] = thirds(labels);
    let [left, center, right] = thirds(values);

    Line::from("LANGUAGE DATA").fg(DIM).bold().render(label_left, buf);
    Line::from("AUDIO")
        .fg(MUTED)
        .right_aligned()
        .render(label_right, buf);

    Line::from(format!("{} ▾", state.current_track().label.to_uppercase()))
        .fg(EMERALD)
        .render(left, buf);

    Line::from("S Y S T E M")
        .fg(DIM)
        .centered()
        .render(center, buf);

    let (status, status_color, led) = match state.is_playing() {
        true => ("ACTIVE", EMERALD_LIGHT, EMERALD),
        false => ("STANDBY", DIM, Color::Rgb(20, 60, 45)),
    };
    Line::from(vec![
        Span::from(status).fg(status_color).bold(),
        Span::from(" ●").fg(led),
    ])
    .right_aligned()
    .render(right, buf);
}

/// Linear blend between two RGB colors, `t` clamped to `0..=1`.
fn fade(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
