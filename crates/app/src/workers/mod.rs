pub mod extract_worker;
pub mod frame_worker;
pub mod keyboard;
