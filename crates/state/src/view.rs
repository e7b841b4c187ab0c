#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineView {
    pub clip_left_px: f32,
    pub clip_width_px: f32,
    pub playhead_px: f32,
    pub start_label: String,
    pub end_label: String,
}

pub fn time_label(seconds: f64) -> String {
    format!("{seconds:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_have_two_decimals() {
        assert_eq!(time_label(0.0), "0.00");
        assert_eq!(time_label(12.346), "12.35");
        assert_eq!(time_label(139.0), "139.00");
    }
}
