use egui::vec2;

pub const TRANSPORT_BTN_SIZE: egui::Vec2 = vec2(32.0, 26.0);
pub const TRANSPORT_HEIGHT: f32 = 40.0;

pub const TRACK_HEIGHT: f32 = 56.0;
pub const RULER_HEIGHT: f32 = 20.0;
pub const LABEL_HEIGHT: f32 = 18.0;
pub const HANDLE_WIDTH: f32 = 10.0;
pub const PLAYHEAD_GRAB_WIDTH: f32 = 12.0;
pub const MIN_TICK_SPACING_PX: f32 = 60.0;
pub const TICK_STEPS: [f64; 8] = [1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0];

pub const DROP_ZONE_HEIGHT: f32 = 220.0;
