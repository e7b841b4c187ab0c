pub mod extract;
pub mod frame;
pub mod gst_init;
pub mod import;
pub mod metadata;
