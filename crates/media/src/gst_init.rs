use anyhow::Context;
use gstreamer as gst;

pub fn init_once() -> anyhow::Result<()> {
    use std::sync::OnceLock;
    static INIT: OnceLock<Result<(), String>> = OnceLock::new();
    INIT.get_or_init(|| gst::init().map_err(|e| e.to_string()))
        .clone()
        .map_err(anyhow::Error::msg)
        .context("Failed to initialize GStreamer")
}
