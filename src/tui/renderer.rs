use super::{AppLayout, Deck, ErrorMsg, Header, HintLine, PANEL_BG, PlayButton, Reel};
use crate::ui_state::{PopupType, ReelSide, UiState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area());

    Block::new()
        .bg(Color::Black)
        .render(f.area(), f.buffer_mut());

    // Hit-testing for mouse input reads these back
    state.reels.set_area(ReelSide::Left, layout.left_reel);
    state.reels.set_area(ReelSide::Right, layout.right_reel);

    Header.render(layout.header, f.buffer_mut());

    for (side, area) in [
        (ReelSide::Left, layout.left_reel),
        (ReelSide::Right, layout.right_reel),
    ] {
        if let Some(area) = area {
            Reel { side }.render(area, f.buffer_mut(), state);
        }
    }

    Block::new().bg(PANEL_BG).render(layout.deck, f.buffer_mut());
    Deck.render(layout.deck, f.buffer_mut(), state);
    PlayButton.render(layout.play_button, f.buffer_mut(), state);
    HintLine.render(layout.hint_line, f.buffer_mut(), state);

    if let PopupType::Error(_) = state.popup.current {
        let popup_rect = centered_rect(40, 30, f.area());

        Clear.render(popup_rect, f.buffer_mut());
        ErrorMsg.render(popup_rect, f.buffer_mut(), state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
