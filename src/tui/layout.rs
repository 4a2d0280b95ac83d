use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Narrower terminals drop the reels and give the panel the full width.
const MIN_WIDTH_FOR_REELS: u16 = 90;

pub struct AppLayout {
    pub header: Rect,
    pub left_reel: Option<Rect>,
    pub deck: Rect,
    pub right_reel: Option<Rect>,
    pub play_button: Rect,
    pub hint_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [header, deck_row, play_button, hint_line] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        if deck_row.width < MIN_WIDTH_FOR_REELS {
            return AppLayout {
                header,
                left_reel: None,
                deck: deck_row,
                right_reel: None,
                play_button,
                hint_line,
            };
        }

        // Cells are twice as tall as wide, so a round reel is twice the
        // row count in columns
        let reel_width = deck_row.height.saturating_mul(2).min(deck_row.width / 4);

        let [left, deck, right] = Layout::horizontal([
            Constraint::Length(reel_width),
            Constraint::Fill(1),
            Constraint::Length(reel_width),
        ])
        .spacing(1)
        .areas(deck_row);

        AppLayout {
            header,
            left_reel: Some(reel_square(left)),
            deck,
            right_reel: Some(reel_square(right)),
            play_button,
            hint_line,
        }
    }
}

/// Largest centered box in `area` that draws as a circle.
fn reel_square(area: Rect) -> Rect {
    let height = (area.width / 2).min(area.height);
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [square] = Layout::horizontal([Constraint::Length(height * 2)])
        .flex(Flex::Center)
        .areas(row);
    square
}
