use crate::{
    tui::{DIM, EMERALD, MUTED},
    ui_state::{ReelSide, UiState},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        StatefulWidget, Widget,
        canvas::{Canvas, Circle, Context, Line, Points},
    },
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

const OUTER_RADIUS: f64 = 0.98;
const RIM_RADIUS: f64 = 0.9;
const PLATTER_RADIUS: f64 = 0.82;
const HUB_RADIUS: f64 = 0.22;
const BOLT_RADIUS: f64 = 0.13;

const DASH_SEGMENTS: usize = 96;
const DASH_RUN: usize = 3;

pub struct Reel {
    pub side: ReelSide,
}

impl StatefulWidget for Reel {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let angle = state.reels.rotation.display_angle();
        let platter = match state.reels.is_dragging(self.side) {
            true => EMERALD,
            false => Color::Gray,
        };

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .background_color(Color::Black)
            .paint(|ctx| {
                draw_dashed_ring(ctx);
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: RIM_RADIUS,
                    color: DIM,
                });
                ctx.layer();

                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: PLATTER_RADIUS,
                    color: platter,
                });
                draw_spokes(ctx, angle);
                ctx.layer();

                draw_hub(ctx, angle);
            })
            .render(area, buf);
    }
}

/// Static outer ring, drawn as alternating runs of dots.
fn draw_dashed_ring(ctx: &mut Context) {
    let coords: Vec<(f64, f64)> = (0..DASH_SEGMENTS)
        .filter(|i| (i / DASH_RUN) % 2 == 0)
        .map(|i| {
            let a = TAU * i as f64 / DASH_SEGMENTS as f64;
            (OUTER_RADIUS * a.cos(), OUTER_RADIUS * a.sin())
        })
        .collect();

    ctx.draw(&Points {
        coords: &coords,
        color: DIM,
    });
}

/// Three diameters 60 degrees apart. Screen rotation is clockwise, the
/// canvas y axis points up, hence the subtraction.
fn draw_spokes(ctx: &mut Context, angle: f64) {
    for k in 0..3 {
        let a = FRAC_PI_2 + k as f64 * FRAC_PI_3 - angle;
        let (x, y) = (PLATTER_RADIUS * a.cos(), PLATTER_RADIUS * a.sin());

        ctx.draw(&Line {
            x1: -x,
            y1: -y,
            x2: x,
            y2: y,
            color: MUTED,
        });
    }
}

fn draw_hub(ctx: &mut Context, angle: f64) {
    ctx.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: HUB_RADIUS,
        color: Color::White,
    });

    let bolts: Vec<(f64, f64)> = (0..4)
        .map(|k| {
            let a = FRAC_PI_2 + k as f64 * FRAC_PI_2 - angle;
            (BOLT_RADIUS * a.cos(), BOLT_RADIUS * a.sin())
        })
        .collect();

    ctx.draw(&Points {
        coords: &bolts,
        color: Color::White,
    });
}
