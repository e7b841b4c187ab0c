pub mod constants;
pub mod export;
pub mod intake;
pub mod preview;
pub mod theme;
pub mod timeline;

/// Decoded preview frames owned by the app, looked up by the panels.
pub trait FrameLookup {
    fn current_frame(&self) -> Option<&egui::TextureHandle>;
    fn is_frame_pending(&self) -> bool;
}
