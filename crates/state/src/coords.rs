use crate::viewport::ViewportWindow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    window_start: f64,
    px_per_sec: f64,
}

impl TimeScale {
    pub fn new(window: ViewportWindow, container_width: f32) -> Self {
        let span = window.span();
        let px_per_sec = if span > 0.0 {
            container_width.max(0.0) as f64 / span
        } else {
            0.0
        };
        Self {
            window_start: window.start,
            px_per_sec,
        }
    }

    pub fn px_per_sec(&self) -> f64 {
        self.px_per_sec
    }

    pub fn to_pixel(&self, t: f64) -> f32 {
        ((t - self.window_start) * self.px_per_sec) as f32
    }

    pub fn to_time(&self, px: f32) -> f64 {
        if self.px_per_sec > 0.0 {
            px as f64 / self.px_per_sec
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_window_edges_to_container_edges() {
        let scale = TimeScale::new(ViewportWindow::new(100.0, 300.0), 800.0);
        assert_eq!(scale.px_per_sec(), 4.0);
        assert_eq!(scale.to_pixel(100.0), 0.0);
        assert_eq!(scale.to_pixel(300.0), 800.0);
    }

    #[test]
    fn to_time_is_a_delta() {
        let scale = TimeScale::new(ViewportWindow::new(100.0, 300.0), 800.0);
        assert_eq!(scale.to_time(40.0), 10.0);
        assert_eq!(scale.to_time(-40.0), -10.0);
    }

    #[test]
    fn out_of_range_inputs_are_not_clamped() {
        let scale = TimeScale::new(ViewportWindow::new(0.0, 10.0), 100.0);
        assert_eq!(scale.to_pixel(-1.0), -10.0);
        assert_eq!(scale.to_pixel(20.0), 200.0);
    }

    #[test]
    fn empty_window_maps_everything_to_zero_time() {
        let scale = TimeScale::new(ViewportWindow::new(3.0, 3.0), 500.0);
        assert_eq!(scale.px_per_sec(), 0.0);
        assert_eq!(scale.to_time(120.0), 0.0);
    }
}
