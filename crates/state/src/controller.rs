use tracing::{debug, info};

use crate::clip::{ActiveEdge, ClipRange};
use crate::coords::TimeScale;
use crate::drag::{apply_clip_drag, DragSession, DragState, DragTarget, PointerInput};
use crate::host::{HostEvent, MediaHost};
use crate::view::{time_label, TimelineView};
use crate::viewport::ViewportWindow;

pub struct ClipTimeline<H> {
    host: H,
    loaded: bool,
    duration: f64,
    window: ViewportWindow,
    clip: ClipRange,
    container_width: f32,
    playhead: f64,
    drag: DragSession,
}

impl<H: MediaHost> ClipTimeline<H> {
    pub fn new(host: H, container_width: f32) -> Self {
        Self {
            host,
            loaded: false,
            duration: 0.0,
            window: ViewportWindow::default(),
            clip: ClipRange::default(),
            container_width: container_width.max(0.0),
            playhead: 0.0,
            drag: DragSession::Idle,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn window(&self) -> ViewportWindow {
        self.window
    }

    pub fn clip(&self) -> ClipRange {
        self.clip
    }

    pub fn drag(&self) -> DragSession {
        self.drag
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn scale(&self) -> TimeScale {
        TimeScale::new(self.window, self.container_width)
    }

    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = width.max(0.0);
    }

    /// Time the playhead will seek to if the current playhead drag ends here.
    pub fn pending_playhead_time(&self) -> Option<f64> {
        match self.drag {
            DragSession::Dragging(state) if state.target == DragTarget::Playhead => {
                Some(self.playhead_time_at(state.pointer_x))
            }
            _ => None,
        }
    }

    pub fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Loaded => self.on_loaded(),
            HostEvent::Seeked => self.on_seeked(),
            HostEvent::TimeUpdate => self.on_time_update(),
        }
    }

    /// Drains queued host events. Handling an event never seeks, so this
    /// terminates after one pass of whatever the host had queued.
    pub fn pump_host_events(&mut self) {
        for event in self.host.take_events() {
            self.handle_host_event(event);
        }
    }

    pub fn on_loaded(&mut self) {
        let duration = self.host.duration();
        self.duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        self.window = ViewportWindow::initial(self.duration);
        self.clip = ClipRange::initial_for(self.window, self.duration);
        self.playhead = 0.0;
        self.drag = DragSession::Idle;
        self.loaded = true;
        info!(
            duration = self.duration,
            window = ?self.window,
            clip = ?self.clip,
            "video loaded"
        );
    }

    pub fn center_on(&mut self, reference: f64) {
        self.window = ViewportWindow::centered_on(reference, self.duration);
        self.clip.fit_into(self.window);
        debug!(reference, window = ?self.window, clip = ?self.clip, "window recentered");
    }

    pub fn on_time_update(&mut self) {
        if !self.loaded || self.drag.is_dragging(DragTarget::Playhead) {
            return;
        }
        let cursor = self.cursor();
        if !self.window.contains(cursor) {
            self.center_on(cursor);
        }
        self.playhead = cursor;
    }

    pub fn on_seeked(&mut self) {
        if !self.loaded {
            return;
        }
        let cursor = self.cursor();
        self.center_on(cursor);
        // A dragged playhead follows the pointer until release.
        if !self.drag.is_dragging(DragTarget::Playhead) {
            self.playhead = cursor;
        }
        if !self.clip.contains(cursor) {
            let length = self.clip.length();
            self.clip = ClipRange::new(cursor, cursor + length);
            self.clip.clamp_to_window(ActiveEdge::None, self.window);
            debug!(cursor, clip = ?self.clip, "clip re-anchored on seek");
        }
    }

    pub fn view(&self) -> TimelineView {
        let scale = self.scale();
        let clip_left_px = scale.to_pixel(self.clip.start);
        let clip_right_px = scale.to_pixel(self.clip.end);
        let playhead_px = match self.drag {
            DragSession::Dragging(state) if state.target == DragTarget::Playhead => {
                self.clamp_to_container(state.pointer_x)
            }
            _ => scale.to_pixel(self.playhead),
        };
        TimelineView {
            clip_left_px,
            clip_width_px: clip_right_px - clip_left_px,
            playhead_px,
            start_label: time_label(self.clip.start),
            end_label: time_label(self.clip.end),
        }
    }

    fn cursor(&self) -> f64 {
        let t = self.host.current_time();
        if t.is_finite() {
            t.max(0.0).min(self.duration)
        } else {
            0.0
        }
    }

    fn clamp_to_container(&self, x: f32) -> f32 {
        x.max(0.0).min(self.container_width)
    }

    fn playhead_time_at(&self, x: f32) -> f64 {
        self.window.start + self.scale().to_time(self.clamp_to_container(x))
    }
}

impl<H: MediaHost> PointerInput for ClipTimeline<H> {
    fn on_drag_start(&mut self, target: DragTarget, x: f32) -> bool {
        if !self.loaded || !self.drag.is_idle() {
            return false;
        }
        self.drag = DragSession::Dragging(DragState {
            target,
            anchor_x: x,
            anchor_clip: self.clip,
            pointer_x: x,
        });
        debug!(?target, x, "drag started");
        true
    }

    fn on_drag_move(&mut self, x: f32) {
        let DragSession::Dragging(mut state) = self.drag else {
            return;
        };
        state.pointer_x = x;
        self.drag = DragSession::Dragging(state);
        if !state.target.edits_clip() {
            return;
        }
        let delta_t = self.scale().to_time(x - state.anchor_x);
        apply_clip_drag(&state, delta_t, &mut self.clip, self.window);
    }

    fn on_drag_end(&mut self, x: f32) {
        let DragSession::Dragging(state) = std::mem::take(&mut self.drag) else {
            return;
        };
        if state.target.edits_clip() {
            self.clip.clamp_to_window(ActiveEdge::None, self.window);
            debug!(target = ?state.target, clip = ?self.clip, "clip committed");
            self.host.seek(self.clip.start);
        } else {
            let time = self.playhead_time_at(x);
            debug!(time, "playhead released");
            self.host.seek(time);
        }
    }
}
