pub mod clip;
pub mod constants;
pub mod controller;
pub mod coords;
pub mod drag;
pub mod host;
pub mod playback;
pub mod progress;
pub mod view;
pub mod viewport;

pub use clip::{ActiveEdge, ClipRange, LengthLimits};
pub use controller::ClipTimeline;
pub use drag::{DragSession, DragState, DragTarget, PointerInput};
pub use host::{HostEvent, MediaHost};
pub use playback::{PlaybackState, PreviewPlayer};
pub use progress::ExtractProgress;
pub use view::TimelineView;
pub use viewport::ViewportWindow;
