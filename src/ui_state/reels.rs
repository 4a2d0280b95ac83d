use crate::scrub::{PointerSample, ReelControl, Rotation};
use ratatui::layout::Rect;

/// Terminal cells are roughly twice as tall as they are wide. Rows are
/// stretched by this factor so reel angles match what is drawn.
pub const CELL_ASPECT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelSide {
    Left,
    Right,
}

impl ReelSide {
    const ALL: [ReelSide; 2] = [ReelSide::Left, ReelSide::Right];

    fn index(self) -> usize {
        match self {
            ReelSide::Left => 0,
            ReelSide::Right => 1,
        }
    }
}

/// Pointer sample at the middle of a terminal cell.
pub fn cell_to_pointer(column: u16, row: u16) -> PointerSample {
    PointerSample::new(
        column as f64 + 0.5,
        (row as f64 + 0.5) * CELL_ASPECT,
    )
}

fn rect_center(area: Rect) -> PointerSample {
    PointerSample::new(
        area.x as f64 + area.width as f64 / 2.0,
        (area.y as f64 + area.height as f64 / 2.0) * CELL_ASPECT,
    )
}

/// The deck's two reels. Each owns its drag session; both turn together.
#[derive(Default)]
pub struct ReelBank {
    controls: [ReelControl; 2],
    areas: [Option<Rect>; 2],
    pub rotation: Rotation,
}

impl ReelBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded by the renderer; `None` while a reel is hidden.
    pub fn set_area(&mut self, side: ReelSide, area: Option<Rect>) {
        self.areas[side.index()] = area;
        if area.is_none() {
            self.controls[side.index()].end_drag();
        }
    }

    pub fn area(&self, side: ReelSide) -> Option<Rect> {
        self.areas[side.index()]
    }

    /// The reel whose circle contains the cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<ReelSide> {
        let pointer = cell_to_pointer(column, row);

        ReelSide::ALL.into_iter().find(|side| {
            self.area(*side).is_some_and(|area| {
                let center = rect_center(area);
                let rx = area.width as f64 / 2.0;
                let ry = area.height as f64 / 2.0 * CELL_ASPECT;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let dx = (pointer.x - center.x) / rx;
                let dy = (pointer.y - center.y) / ry;
                dx * dx + dy * dy <= 1.0
            })
        })
    }

    pub fn is_dragging(&self, side: ReelSide) -> bool {
        self.controls[side.index()].is_dragging()
    }

    pub fn any_dragging(&self) -> bool {
        self.controls.iter().any(ReelControl::is_dragging)
    }

    /// Single pointer: grabbing one reel releases the other.
    pub fn begin_drag(&mut self, side: ReelSide, pointer: PointerSample) {
        let Some(area) = self.area(side) else {
            return;
        };

        self.end_drags();
        self.controls[side.index()].begin_drag(rect_center(area), pointer);
    }

    /// Angle travelled by the grabbed reel since the last sample.
    pub fn continue_drag(&mut self, pointer: PointerSample) -> f64 {
        let mut delta = 0.0;
        for side in ReelSide::ALL {
            let idx = side.index();
            match self.areas[idx] {
                Some(area) => delta += self.controls[idx].continue_drag(rect_center(area), pointer),
                None => self.controls[idx].end_drag(),
            }
        }
        delta
    }

    pub fn end_drags(&mut self) {
        for control in &mut self.controls {
            control.end_drag();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn bank() -> ReelBank {
        let mut bank = ReelBank::new();
        // 20 columns by 10 rows is a circle once rows are stretched
        bank.set_area(ReelSide::Left, Some(Rect::new(0, 0, 20, 10)));
        bank.set_area(ReelSide::Right, Some(Rect::new(60, 0, 20, 10)));
        bank
    }

    #[test]
    fn hit_respects_the_circle() {
        let bank = bank();
        assert_eq!(bank.hit(10, 5), Some(ReelSide::Left));
        assert_eq!(bank.hit(70, 5), Some(ReelSide::Right));
        // corners of the box are outside the reel
        assert_eq!(bank.hit(0, 0), None);
        assert_eq!(bank.hit(40, 5), None);
    }

    #[test]
    fn hidden_reels_cannot_be_hit() {
        let mut bank = bank();
        bank.set_area(ReelSide::Right, None);
        assert_eq!(bank.hit(70, 5), None);
    }

    #[test]
    fn quarter_turn_on_screen() {
        let mut bank = bank();
        // center sits at (10.0, 10.0) in pointer space
        bank.begin_drag(ReelSide::Left, PointerSample::new(15.0, 10.0));
        let delta = bank.continue_drag(PointerSample::new(10.0, 15.0));

        assert!((delta - FRAC_PI_2).abs() < 1e-9);
        assert!(bank.is_dragging(ReelSide::Left));
        assert!(!bank.is_dragging(ReelSide::Right));
    }

    #[test]
    fn grabbing_one_reel_releases_the_other() {
        let mut bank = bank();
        bank.begin_drag(ReelSide::Left, cell_to_pointer(12, 5));
        bank.begin_drag(ReelSide::Right, cell_to_pointer(72, 5));

        assert!(!bank.is_dragging(ReelSide::Left));
        assert!(bank.is_dragging(ReelSide::Right));

        bank.end_drags();
        assert!(!bank.any_dragging());
    }

    #[test]
    fn hiding_a_reel_ends_its_drag() {
        let mut bank = bank();
        bank.begin_drag(ReelSide::Left, cell_to_pointer(12, 5));
        bank.set_area(ReelSide::Left, None);

        assert!(!bank.any_dragging());
        assert_eq!(bank.continue_drag(cell_to_pointer(10, 8)), 0.0);
    }

    #[test]
    fn moves_without_grab_do_nothing() {
        let mut bank = bank();
        assert_eq!(bank.continue_drag(cell_to_pointer(3, 3)), 0.0);
    }
}
