use crate::clip::{ActiveEdge, ClipRange, LengthLimits};
use crate::constants::CROSSOVER_FLOOR;
use crate::viewport::ViewportWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragTarget {
    LeftHandle,
    RightHandle,
    Range,
    Playhead,
}

impl DragTarget {
    pub fn active_edge(self) -> ActiveEdge {
        match self {
            DragTarget::LeftHandle => ActiveEdge::Start,
            DragTarget::RightHandle => ActiveEdge::End,
            DragTarget::Range | DragTarget::Playhead => ActiveEdge::None,
        }
    }

    pub fn edits_clip(self) -> bool {
        !matches!(self, DragTarget::Playhead)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub target: DragTarget,
    pub anchor_x: f32,
    pub anchor_clip: ClipRange,
    pub pointer_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(DragState),
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    pub fn target(&self) -> Option<DragTarget> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging(state) => Some(state.target),
        }
    }

    pub fn is_dragging(&self, target: DragTarget) -> bool {
        self.target() == Some(target)
    }
}

/// Pointer capability the rendering surface drives. `x` is measured from the
/// left edge of the timeline container.
pub trait PointerInput {
    /// Returns false when the gesture was refused (another drag is active or
    /// nothing is loaded).
    fn on_drag_start(&mut self, target: DragTarget, x: f32) -> bool;
    fn on_drag_move(&mut self, x: f32);
    fn on_drag_end(&mut self, x: f32);
}

/// Applies a clip-editing drag, `delta_t` seconds away from the anchor.
pub fn apply_clip_drag(
    state: &DragState,
    delta_t: f64,
    clip: &mut ClipRange,
    window: ViewportWindow,
) {
    let limits = LengthLimits::for_window(window);
    let anchor = state.anchor_clip;
    match state.target {
        DragTarget::LeftHandle => {
            clip.start = anchor.start + delta_t;
            if clip.start >= clip.end {
                clip.start = clip.end - CROSSOVER_FLOOR;
            }
            clip.adjust_length(ActiveEdge::Start, limits);
            clip.clamp_to_window(ActiveEdge::Start, window);
        }
        DragTarget::RightHandle => {
            clip.end = anchor.end + delta_t;
            if clip.end <= clip.start {
                clip.end = clip.start + CROSSOVER_FLOOR;
            }
            clip.adjust_length(ActiveEdge::End, limits);
            clip.clamp_to_window(ActiveEdge::End, window);
        }
        DragTarget::Range => {
            // Stop at the window edge instead of squeezing the selection.
            let delta_t = delta_t
                .max(window.start - anchor.start)
                .min(window.end - anchor.end);
            clip.start = anchor.start + delta_t;
            clip.end = anchor.end + delta_t;
            clip.clamp_to_window(ActiveEdge::None, window);
        }
        DragTarget::Playhead => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(target: DragTarget, anchor_clip: ClipRange) -> DragState {
        DragState {
            target,
            anchor_x: 0.0,
            anchor_clip,
            pointer_x: 0.0,
        }
    }

    #[test]
    fn left_handle_past_window_start_pins_to_edge() {
        let window = ViewportWindow::new(0.0, 100.0);
        let anchor = ClipRange::new(10.0, 30.0);
        let mut clip = anchor;
        apply_clip_drag(&drag(DragTarget::LeftHandle, anchor), -15.0, &mut clip, window);
        assert_eq!(clip, ClipRange::new(0.0, 30.0));
    }

    #[test]
    fn left_handle_crossing_end_keeps_minimum_length() {
        let window = ViewportWindow::new(0.0, 100.0);
        let anchor = ClipRange::new(10.0, 30.0);
        let mut clip = anchor;
        apply_clip_drag(&drag(DragTarget::LeftHandle, anchor), 40.0, &mut clip, window);
        assert_eq!(clip, ClipRange::new(25.0, 30.0));
    }

    #[test]
    fn right_handle_too_long_is_pulled_back_to_maximum() {
        let window = ViewportWindow::new(0.0, 280.0);
        let anchor = ClipRange::new(20.0, 40.0);
        let mut clip = anchor;
        apply_clip_drag(&drag(DragTarget::RightHandle, anchor), 180.0, &mut clip, window);
        assert_eq!(clip, ClipRange::new(20.0, 159.0));
    }

    #[test]
    fn right_handle_crossing_start_keeps_minimum_length() {
        let window = ViewportWindow::new(0.0, 100.0);
        let anchor = ClipRange::new(10.0, 30.0);
        let mut clip = anchor;
        apply_clip_drag(&drag(DragTarget::RightHandle, anchor), -50.0, &mut clip, window);
        assert_eq!(clip, ClipRange::new(10.0, 15.0));
    }

    #[test]
    fn range_drag_stops_at_window_edge_with_length_intact() {
        let window = ViewportWindow::new(0.0, 65.0);
        let anchor = ClipRange::new(10.0, 20.0);
        let mut clip = anchor;
        apply_clip_drag(&drag(DragTarget::Range, anchor), 50.0, &mut clip, window);
        assert_eq!(clip, ClipRange::new(55.0, 65.0));
    }

    #[test]
    fn range_drag_inside_window_moves_both_edges() {
        let window = ViewportWindow::new(0.0, 280.0);
        let anchor = ClipRange::new(10.0, 20.0);
        let mut clip = anchor;
        apply_clip_drag(&drag(DragTarget::Range, anchor), 7.5, &mut clip, window);
        assert_eq!(clip, ClipRange::new(17.5, 27.5));
    }

    #[test]
    fn playhead_drag_leaves_clip_alone() {
        let window = ViewportWindow::new(0.0, 280.0);
        let anchor = ClipRange::new(10.0, 20.0);
        let mut clip = anchor;
        apply_clip_drag(&drag(DragTarget::Playhead, anchor), 30.0, &mut clip, window);
        assert_eq!(clip, anchor);
    }

    #[test]
    fn session_reports_its_target() {
        let session = DragSession::Dragging(drag(DragTarget::Range, ClipRange::new(0.0, 5.0)));
        assert!(!session.is_idle());
        assert!(session.is_dragging(DragTarget::Range));
        assert!(!session.is_dragging(DragTarget::Playhead));
        assert_eq!(DragSession::default().target(), None);
    }
}
