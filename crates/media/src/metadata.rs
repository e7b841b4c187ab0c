use std::path::Path;

use anyhow::{bail, Context};
use gst_pbutils::prelude::DiscovererStreamInfoExt;
use gstreamer as gst;
use gstreamer_pbutils as gst_pbutils;

use crate::gst_init::init_once;

#[derive(Debug, Clone, PartialEq)]
pub struct MediaMetadata {
    pub duration: f64,
    pub resolution: Option<(u32, u32)>,
    pub codec: Option<String>,
}

/// Reads duration and the first video stream's format. Files without a video
/// stream or a usable duration are rejected here so the timeline only ever
/// sees a positive duration.
pub fn probe(path: &Path) -> anyhow::Result<MediaMetadata> {
    init_once()?;

    let uri = file_uri(path)?;
    let discoverer = gst_pbutils::Discoverer::new(gst::ClockTime::from_seconds(10))
        .context("Failed to create discoverer")?;
    let info = discoverer
        .discover_uri(&uri)
        .with_context(|| format!("Failed to inspect {}", path.display()))?;

    let Some(stream) = info.video_streams().into_iter().next() else {
        bail!("{} has no video stream", path.display());
    };

    let duration = info
        .duration()
        .map(|d| d.nseconds() as f64 / 1_000_000_000.0)
        .filter(|d| d.is_finite() && *d > 0.0)
        .with_context(|| format!("{} reports no duration", path.display()))?;

    let w = stream.width();
    let h = stream.height();
    let resolution = (w > 0 && h > 0).then_some((w, h));
    let codec = DiscovererStreamInfoExt::caps(&stream)
        .and_then(|caps| caps.structure(0).map(|s| s.name().as_str().to_string()));

    Ok(MediaMetadata {
        duration,
        resolution,
        codec,
    })
}

fn file_uri(path: &Path) -> anyhow::Result<String> {
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Could not resolve working directory")?
            .join(path)
    };
    let uri = gst::glib::filename_to_uri(&abs, None)
        .with_context(|| format!("Could not build a file URI for {}", abs.display()))?;
    Ok(uri.to_string())
}
