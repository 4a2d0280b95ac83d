use std::time::{Duration, Instant};

const REVEAL_DURATION: Duration = Duration::from_millis(800);
const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Staggered fade-in of the narration paragraphs.
#[derive(Default)]
pub struct TextReveal {
    started: Option<Instant>,
}

impl TextReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart(&mut self) {
        self.started = Some(Instant::now());
    }

    /// 1.0 when no reveal has been started.
    pub fn opacity(&self, paragraph: usize) -> f64 {
        match self.started {
            Some(start) => reveal_opacity(start.elapsed(), paragraph),
            None => 1.0,
        }
    }
}

/// Opacity of a paragraph `elapsed` into a reveal, eased with power2-out.
pub fn reveal_opacity(elapsed: Duration, paragraph: usize) -> f64 {
    let delay = REVEAL_STAGGER * paragraph as u32;
    let Some(since) = elapsed.checked_sub(delay) else {
        return 0.0;
    };

    let t = (since.as_secs_f64() / REVEAL_DURATION.as_secs_f64()).min(1.0);
    1.0 - (1.0 - t).powi(2)
}
