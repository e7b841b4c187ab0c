use easyclip_state::coords::TimeScale;
use easyclip_state::{ClipTimeline, DragSession, DragTarget, MediaHost, PointerInput};
use egui::{pos2, vec2, Align2, CornerRadius, CursorIcon, FontId, Id, Rect, Response, Sense, Stroke};

use crate::constants::{
    HANDLE_WIDTH, LABEL_HEIGHT, MIN_TICK_SPACING_PX, PLAYHEAD_GRAB_WIDTH, RULER_HEIGHT,
    TICK_STEPS, TRACK_HEIGHT,
};
use crate::theme;

pub fn timeline_panel<H: MediaHost>(ui: &mut egui::Ui, timeline: &mut ClipTimeline<H>) {
    let width = ui.available_width().max(1.0);
    let (outer, _) = ui.allocate_exact_size(
        vec2(width, RULER_HEIGHT + TRACK_HEIGHT + LABEL_HEIGHT),
        Sense::hover(),
    );
    let ruler_rect = Rect::from_min_size(outer.min, vec2(width, RULER_HEIGHT));
    let track_rect = Rect::from_min_size(
        pos2(outer.min.x, ruler_rect.max.y),
        vec2(width, TRACK_HEIGHT),
    );
    let left = track_rect.min.x;

    timeline.set_container_width(track_rect.width());

    let painter = ui.painter().with_clip_rect(outer);
    painter.rect_filled(track_rect, theme::ROUNDING_SM, theme::TRACK_BG);

    if !timeline.is_loaded() {
        painter.text(
            track_rect.center(),
            Align2::CENTER_CENTER,
            "Loading video\u{2026}",
            FontId::proportional(12.0),
            theme::TEXT_DIM,
        );
        return;
    }

    // Later interacts sit on top, so handles win over the playhead and range.
    let view = timeline.view();
    let clip_rect = Rect::from_min_size(
        pos2(left + view.clip_left_px, track_rect.min.y),
        vec2(view.clip_width_px.max(1.0), TRACK_HEIGHT),
    );
    let handle_size = vec2(HANDLE_WIDTH, TRACK_HEIGHT);
    let targets = [
        (DragTarget::Range, clip_rect, "clip_range"),
        (
            DragTarget::Playhead,
            Rect::from_min_max(
                pos2(left + view.playhead_px - PLAYHEAD_GRAB_WIDTH / 2.0, ruler_rect.min.y),
                pos2(left + view.playhead_px + PLAYHEAD_GRAB_WIDTH / 2.0, track_rect.max.y),
            ),
            "playhead",
        ),
        (
            DragTarget::LeftHandle,
            Rect::from_min_size(clip_rect.min, handle_size),
            "clip_left_handle",
        ),
        (
            DragTarget::RightHandle,
            Rect::from_min_size(pos2(clip_rect.max.x - HANDLE_WIDTH, clip_rect.min.y), handle_size),
            "clip_right_handle",
        ),
    ];

    for (target, rect, id) in targets {
        let response = ui.interact(rect, Id::new(id), Sense::drag());
        route_drag(ui, timeline, &response, target, left);
        if response.hovered() || timeline.drag().is_dragging(target) {
            ui.ctx().set_cursor_icon(cursor_for(target, response.dragged()));
        }
    }

    let view = timeline.view();
    draw_ruler(&painter, ruler_rect, timeline.scale(), timeline.window().start, timeline.window().end);

    let clip_rect = Rect::from_min_size(
        pos2(left + view.clip_left_px, track_rect.min.y),
        vec2(view.clip_width_px, TRACK_HEIGHT),
    );
    let editing = timeline
        .drag()
        .target()
        .is_some_and(DragTarget::edits_clip);
    painter.rect_filled(clip_rect, theme::ROUNDING_SM, theme::CLIP_REGION.gamma_multiply(0.7));
    painter.rect_stroke(
        clip_rect,
        theme::ROUNDING_SM,
        Stroke::new(if editing { 2.0 } else { 1.0 }, theme::CLIP_HANDLE),
        egui::StrokeKind::Inside,
    );
    for handle in [
        Rect::from_min_size(clip_rect.min, handle_size),
        Rect::from_min_size(pos2(clip_rect.max.x - HANDLE_WIDTH, clip_rect.min.y), handle_size),
    ] {
        painter.rect_filled(handle, CornerRadius::ZERO, theme::CLIP_HANDLE);
    }

    let label_y = track_rect.max.y + 2.0;
    painter.text(
        pos2(clip_rect.min.x, label_y),
        Align2::LEFT_TOP,
        &view.start_label,
        FontId::monospace(11.0),
        theme::TEXT_PRIMARY,
    );
    painter.text(
        pos2(clip_rect.max.x, label_y),
        Align2::RIGHT_TOP,
        &view.end_label,
        FontId::monospace(11.0),
        theme::TEXT_PRIMARY,
    );

    let playhead_x = left + view.playhead_px;
    painter.line_segment(
        [pos2(playhead_x, ruler_rect.min.y), pos2(playhead_x, track_rect.max.y)],
        Stroke::new(2.0, theme::PLAYHEAD_COLOR),
    );
    painter.add(egui::Shape::convex_polygon(
        vec![
            pos2(playhead_x - 6.0, ruler_rect.min.y),
            pos2(playhead_x + 6.0, ruler_rect.min.y),
            pos2(playhead_x, ruler_rect.min.y + 8.0),
        ],
        theme::PLAYHEAD_COLOR,
        Stroke::NONE,
    ));
}

fn route_drag<H: MediaHost>(
    ui: &egui::Ui,
    timeline: &mut ClipTimeline<H>,
    response: &Response,
    target: DragTarget,
    left: f32,
) {
    let x = response.interact_pointer_pos().map(|p| p.x - left);

    if response.drag_started() {
        // egui reports the start after the drag threshold; anchor on the press.
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .map(|p| p.x - left)
            .or(x);
        if let Some(origin) = origin {
            if timeline.on_drag_start(target, origin) {
                if let Some(x) = x {
                    timeline.on_drag_move(x);
                }
            }
        }
    } else if response.dragged() {
        if let Some(x) = x.filter(|_| timeline.drag().is_dragging(target)) {
            timeline.on_drag_move(x);
        }
    } else if response.drag_stopped() {
        if let DragSession::Dragging(state) = timeline.drag() {
            if state.target == target {
                timeline.on_drag_end(x.unwrap_or(state.pointer_x));
            }
        }
    }
}

fn cursor_for(target: DragTarget, dragging: bool) -> CursorIcon {
    match target {
        DragTarget::LeftHandle | DragTarget::RightHandle | DragTarget::Playhead => {
            CursorIcon::ResizeHorizontal
        }
        DragTarget::Range if dragging => CursorIcon::Grabbing,
        DragTarget::Range => CursorIcon::Grab,
    }
}

fn draw_ruler(painter: &egui::Painter, rect: Rect, scale: TimeScale, start: f64, end: f64) {
    let pps = scale.px_per_sec() as f32;
    if pps <= 0.0 {
        return;
    }
    let step = tick_step(pps);
    let mut t = (start / step).ceil() * step;
    while t <= end {
        let x = rect.min.x + scale.to_pixel(t);
        painter.line_segment(
            [pos2(x, rect.max.y - 6.0), pos2(x, rect.max.y)],
            Stroke::new(1.0, theme::RULER_TICK),
        );
        painter.text(
            pos2(x + 2.0, rect.min.y + 2.0),
            Align2::LEFT_TOP,
            tick_label(t),
            FontId::monospace(9.0),
            theme::TEXT_DIM,
        );
        t += step;
    }
}

fn tick_step(px_per_sec: f32) -> f64 {
    TICK_STEPS
        .iter()
        .copied()
        .find(|step| *step as f32 * px_per_sec >= MIN_TICK_SPACING_PX)
        .unwrap_or(TICK_STEPS[TICK_STEPS.len() - 1])
}

fn tick_label(seconds: f64) -> String {
    let total = seconds.round() as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_step_keeps_labels_apart() {
        // 280 s across 840 px
        assert_eq!(tick_step(3.0), 30.0);
        assert_eq!(tick_step(100.0), 1.0);
        assert_eq!(tick_step(0.1), 120.0);
    }

    #[test]
    fn tick_labels_are_minutes_and_seconds() {
        assert_eq!(tick_label(0.0), "0:00");
        assert_eq!(tick_label(75.0), "1:15");
        assert_eq!(tick_label(600.0), "10:00");
    }
}
