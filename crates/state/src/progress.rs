/// Converts encoder progress (microseconds of output written) into a
/// percentage of the clip being extracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractProgress {
    clip_length: f64,
    seconds: f64,
    percent: f64,
}

impl ExtractProgress {
    pub fn new(clip_length: f64) -> Self {
        Self {
            clip_length,
            seconds: 0.0,
            percent: 0.0,
        }
    }

    pub fn update(&mut self, time_us: i64) -> f64 {
        self.seconds = time_us.max(0) as f64 / 1_000_000.0;
        self.percent = if self.clip_length > 0.0 {
            (self.seconds / self.clip_length * 100.0).min(100.0)
        } else {
            0.0
        };
        self.percent
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn label(&self) -> String {
        format!("{:.1}% \u{2022} {:.2}s", self.percent, self.seconds)
    }
}
