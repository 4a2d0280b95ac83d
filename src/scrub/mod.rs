//! Reel drag-to-scrub mapping.
//!
//! A reel is a circular control. Dragging the pointer around its center
//! produces an angular delta per sample, which is both added to the reel's
//! visual rotation and converted into a seek offset on the playback source.

mod spin;

pub use spin::Spinner;

use std::f64::consts::{PI, TAU};

/// A pointer position, or the center of a control, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        PointerSample { x, y }
    }
}

/// Session state for one continuous drag on a reel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub center_x: f64,
    pub center_y: f64,
    pub last_angle: f64,
    pub active: bool,
}

impl DragState {
    pub fn begin(center: PointerSample, pointer: PointerSample) -> Self {
        DragState {
            center_x: center.x,
            center_y: center.y,
            last_angle: pointer_angle(center, pointer),
            active: true,
        }
    }

    /// Returns the normalized angle travelled since the previous sample and
    /// the state to carry forward. Inactive states yield a zero delta and are
    /// returned untouched.
    pub fn advance(self, center: PointerSample, pointer: PointerSample) -> (f64, DragState) {
        if !self.active {
            return (0.0, self);
        }

        let angle = pointer_angle(center, pointer);
        let delta = normalize_delta(angle - self.last_angle);

        let next = DragState {
            center_x: center.x,
            center_y: center.y,
            last_angle: angle,
            active: true,
        };

        (delta, next)
    }

    pub fn end(self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Owns the drag session of a single reel instance.
///
/// At most one [`DragState`] exists per control: beginning a new drag while
/// one is active replaces it.
#[derive(Debug, Default)]
pub struct ReelControl {
    drag: Option<DragState>,
}

impl ReelControl {
    pub fn new() -> Self {
        ReelControl { drag: None }
    }

    pub fn phase(&self) -> DragPhase {
        match self.drag {
            Some(_) => DragPhase::Dragging,
            None => DragPhase::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == DragPhase::Dragging
    }

    pub fn begin_drag(&mut self, center: PointerSample, pointer: PointerSample) {
        self.drag = Some(begin_drag(center, pointer));
    }

    /// Zero while idle.
    pub fn continue_drag(&mut self, center: PointerSample, pointer: PointerSample) -> f64 {
        match self.drag.take() {
            Some(state) => {
                let (delta, next) = continue_drag(state, center, pointer);
                self.drag = Some(next);
                delta
            }
            None => 0.0,
        }
    }

    pub fn end_drag(&mut self) {
        if let Some(state) = self.drag.take() {
            end_drag(state);
        }
    }
}

pub fn begin_drag(center: PointerSample, pointer: PointerSample) -> DragState {
    DragState::begin(center, pointer)
}

pub fn continue_drag(
    state: DragState,
    center: PointerSample,
    pointer: PointerSample,
) -> (f64, DragState) {
    state.advance(center, pointer)
}

pub fn end_drag(state: DragState) {
    state.end()
}

fn pointer_angle(center: PointerSample, pointer: PointerSample) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x)
}

/// Folds a raw angle difference into `(-π, π]`.
///
/// Only a single `2π` correction is applied. A sample that crosses the
/// atan2 seam more than once cannot be told apart from a short move.
pub fn normalize_delta(raw: f64) -> f64 {
    if raw > PI {
        raw - TAU
    } else if raw <= -PI {
        raw + TAU
    } else {
        raw
    }
}

/// Cumulative reel rotation in radians. Unbounded; only wrapped for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation(f64);

impl Rotation {
    pub fn radians(&self) -> f64 {
        self.0
    }

    pub fn apply(&mut self, delta: f64) {
        self.0 = apply_rotation(self.0, delta);
    }

    /// Rotation reduced to `[0, 2π)` for rendering.
    pub fn display_angle(&self) -> f64 {
        self.0.rem_euclid(TAU)
    }
}

pub fn apply_rotation(accumulator: f64, delta: f64) -> f64 {
    accumulator + delta
}

/// Position of the external playback source, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackPosition {
    pub current_time_seconds: f64,
    pub duration_seconds: f64,
}

impl PlaybackPosition {
    pub fn new(current_time_seconds: f64, duration_seconds: f64) -> Self {
        PlaybackPosition {
            current_time_seconds,
            duration_seconds,
        }
    }

    pub fn current_time(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(self.current_time_seconds.max(0.0))
    }
}

/// Winds the playback position by `delta` radians of reel travel.
///
/// One full revolution moves `seconds_per_revolution` seconds. The result is
/// clamped to `[0, duration]`; an unknown or zero duration pins it to zero.
pub fn scrub(
    playback: PlaybackPosition,
    delta: f64,
    seconds_per_revolution: f64,
) -> PlaybackPosition {
    let time_delta = (delta / TAU) * seconds_per_revolution;

    let upper = match playback.duration_seconds {
        d if d.is_finite() && d > 0.0 => d,
        _ => 0.0,
    };

    let target = (playback.current_time_seconds + time_delta).clamp(0.0, upper);

    PlaybackPosition {
        current_time_seconds: target,
        duration_seconds: playback.duration_seconds,
    }
}
