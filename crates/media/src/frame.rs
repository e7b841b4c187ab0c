use std::path::Path;
use std::process::{Command, Stdio};

pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 360;

/// Grabs one letterboxed RGBA frame at `time_seconds`.
pub fn frame_at(path: &Path, time_seconds: f64, width: u32, height: u32) -> Option<image::RgbaImage> {
    let expected_bytes = (width * height * 4) as usize;
    let seek = format!("{:.3}", time_seconds.max(0.0));
    let output = Command::new("ffmpeg")
        .args(["-ss", &seek, "-i"])
        .arg(path)
        .args([
            "-frames:v",
            "1",
            "-vf",
            &letterbox_filter(width, height),
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "pipe:1",
        ])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() || output.stdout.len() != expected_bytes {
        tracing::debug!(
            path = %path.display(),
            time_seconds,
            bytes = output.stdout.len(),
            "no frame decoded"
        );
        return None;
    }

    image::RgbaImage::from_raw(width, height, output.stdout)
}

fn letterbox_filter(width: u32, height: u32) -> String {
    format!(
        "scale={width}:{height}:force_original_aspect_ratio=decrease,pad={width}:{height}:(ow-iw)/2:(oh-ih)/2"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letterbox_keeps_aspect_and_pads() {
        assert_eq!(
            letterbox_filter(640, 360),
            "scale=640:360:force_original_aspect_ratio=decrease,pad=640:360:(ow-iw)/2:(oh-ih)/2"
        );
    }
}
