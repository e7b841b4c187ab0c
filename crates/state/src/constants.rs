pub const MIN_CLIP_LENGTH: f64 = 5.0;
pub const MAX_CLIP_LENGTH: f64 = 139.0;
pub const VIEW_DURATION_MAX: f64 = 280.0;
pub const INITIAL_CLIP_LENGTH: f64 = 15.0;
// Gap kept between the edges when a handle is dragged across the other one.
pub const CROSSOVER_FLOOR: f64 = 0.1;
