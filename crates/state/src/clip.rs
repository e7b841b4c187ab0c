use crate::constants::{INITIAL_CLIP_LENGTH, MAX_CLIP_LENGTH, MIN_CLIP_LENGTH};
use crate::viewport::ViewportWindow;

// Absorbs float rounding so a settled clip is a fixed point of the corrections.
const LENGTH_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveEdge {
    Start,
    End,
    #[default]
    None,
}

/// Length bounds that still fit inside a window.
///
/// Windows narrower than `MIN_CLIP_LENGTH` only occur for very short videos;
/// there the clip simply spans the whole window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthLimits {
    pub min: f64,
    pub max: f64,
}

impl LengthLimits {
    pub fn for_window(window: ViewportWindow) -> Self {
        let span = window.span().max(0.0);
        let min = MIN_CLIP_LENGTH.min(span);
        let max = MAX_CLIP_LENGTH.min(span).max(min);
        Self { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipRange {
    pub start: f64,
    pub end: f64,
}

impl ClipRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    pub fn initial_for(window: ViewportWindow, duration: f64) -> Self {
        let length = if duration > INITIAL_CLIP_LENGTH {
            INITIAL_CLIP_LENGTH.min(window.span())
        } else {
            LengthLimits::for_window(window).min
        };
        Self::new(window.start, window.start + length)
    }

    /// Pulls the edge that is not being dragged so the length lands inside
    /// `limits`. With no active edge the start stays put.
    pub fn adjust_length(&mut self, edge: ActiveEdge, limits: LengthLimits) {
        let length = self.length();
        let target = if length < limits.min - LENGTH_TOLERANCE {
            limits.min
        } else if length > limits.max + LENGTH_TOLERANCE {
            limits.max
        } else {
            return;
        };
        match edge {
            ActiveEdge::Start => self.start = self.end - target,
            ActiveEdge::End | ActiveEdge::None => self.end = self.start + target,
        }
    }

    pub fn clamp_to_window(&mut self, edge: ActiveEdge, window: ViewportWindow) {
        let limits = LengthLimits::for_window(window);
        if self.start < window.start {
            self.start = window.start;
            self.end = self.end.max(self.start + limits.min);
        }
        if self.end > window.end {
            self.end = window.end;
            self.start = self.start.min(self.end - limits.min);
        }
        self.adjust_length(edge, limits);
        self.start = self.start.max(window.start).min(window.end);
        self.end = self.end.max(window.start).min(window.end);
        if self.length() < limits.min - LENGTH_TOLERANCE {
            self.start = self.start.min(window.end - limits.min);
            self.end = (self.start + limits.min).min(window.end);
        }
    }

    /// Moves the clip by the smallest shift that brings it inside `window`,
    /// keeping its length, then settles it.
    pub fn fit_into(&mut self, window: ViewportWindow) {
        let length = self.length();
        if self.start < window.start {
            self.start = window.start;
            self.end = self.start + length;
        }
        if self.end > window.end {
            self.end = window.end;
            self.start = self.end - length;
        }
        self.clamp_to_window(ActiveEdge::None, window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: f64, end: f64) -> ViewportWindow {
        ViewportWindow::new(start, end)
    }

    #[test]
    fn initial_clip_is_fifteen_seconds_for_long_videos() {
        let w = ViewportWindow::initial(300.0);
        assert_eq!(ClipRange::initial_for(w, 300.0), ClipRange::new(0.0, 15.0));
    }

    #[test]
    fn initial_clip_falls_back_to_minimum_for_short_videos() {
        let w = ViewportWindow::initial(12.0);
        assert_eq!(ClipRange::initial_for(w, 12.0), ClipRange::new(0.0, 5.0));
    }

    #[test]
    fn initial_clip_spans_tiny_videos_entirely() {
        let w = ViewportWindow::initial(3.0);
        assert_eq!(ClipRange::initial_for(w, 3.0), ClipRange::new(0.0, 3.0));
    }

    #[test]
    fn short_left_drag_pulls_start_back() {
        let mut clip = ClipRange::new(19.0, 20.0);
        clip.adjust_length(ActiveEdge::Start, LengthLimits::for_window(window(0.0, 100.0)));
        assert_eq!(clip, ClipRange::new(15.0, 20.0));
    }

    #[test]
    fn long_right_drag_pulls_end_back() {
        let mut clip = ClipRange::new(10.0, 210.0);
        clip.adjust_length(ActiveEdge::End, LengthLimits::for_window(window(0.0, 280.0)));
        assert_eq!(clip, ClipRange::new(10.0, 149.0));
    }

    #[test]
    fn clip_left_of_window_is_pinned_with_minimum_length() {
        let mut clip = ClipRange::new(-20.0, -12.0);
        clip.clamp_to_window(ActiveEdge::None, window(0.0, 100.0));
        assert_eq!(clip, ClipRange::new(0.0, 5.0));
    }

    #[test]
    fn clip_past_window_end_keeps_minimum_length() {
        let mut clip = ClipRange::new(98.0, 130.0);
        clip.clamp_to_window(ActiveEdge::None, window(0.0, 100.0));
        assert_eq!(clip, ClipRange::new(95.0, 100.0));
    }

    #[test]
    fn clamp_is_idempotent_on_a_settled_clip() {
        let w = window(40.0, 320.0);
        let mut once = ClipRange::new(10.0, 60.0);
        once.clamp_to_window(ActiveEdge::Start, w);
        let mut twice = once;
        twice.clamp_to_window(ActiveEdge::Start, w);
        assert_eq!(once, twice);
    }

    #[test]
    fn fit_into_translates_without_resizing() {
        let mut clip = ClipRange::new(0.0, 15.0);
        clip.fit_into(window(20.0, 300.0));
        assert_eq!(clip, ClipRange::new(20.0, 35.0));

        let mut clip = ClipRange::new(310.0, 330.0);
        clip.fit_into(window(20.0, 300.0));
        assert_eq!(clip, ClipRange::new(280.0, 300.0));
    }

    #[test]
    fn window_narrower_than_minimum_never_inverts() {
        let w = window(0.0, 3.0);
        let mut clip = ClipRange::new(1.0, 2.0);
        clip.clamp_to_window(ActiveEdge::None, w);
        assert_eq!(clip, ClipRange::new(0.0, 3.0));
    }
}
