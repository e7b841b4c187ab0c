use crate::constants::VIEW_DURATION_MAX;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportWindow {
    pub start: f64,
    pub end: f64,
}

impl ViewportWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span_for(duration: f64) -> f64 {
        duration.clamp(0.0, VIEW_DURATION_MAX)
    }

    pub fn initial(duration: f64) -> Self {
        Self::new(0.0, Self::span_for(duration))
    }

    /// Window of full span centered on `reference`, slid back inside the video
    /// when the center would push it past either end.
    pub fn centered_on(reference: f64, duration: f64) -> Self {
        let span = Self::span_for(duration);
        let latest_start = (duration - span).max(0.0);
        let start = (reference - span / 2.0).max(0.0).min(latest_start);
        if start >= latest_start {
            // Pinned to the end of the video.
            return Self::new(start, duration.max(span));
        }
        Self::new(start, start + span)
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }
}
