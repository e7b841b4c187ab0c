use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context};
use easyclip_state::ClipRange;
use serde::{Deserialize, Serialize};

/// Encoder parameters for the extracted clip. Defaults give a 720p H.264/AAC
/// file that social sites accept without re-encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSettings {
    pub ffmpeg_path: String,
    pub video_codec: String,
    pub threads: u32,
    pub profile: String,
    pub level: String,
    pub preset: String,
    pub video_bitrate: String,
    pub max_rate: String,
    pub buffer_size: String,
    pub width: u32,
    pub height: u32,
    pub pixel_format: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
    pub audio_channels: u32,
    pub output_prefix: String,
    pub overwrite: bool,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            video_codec: "libx264".to_string(),
            threads: 4,
            profile: "high".to_string(),
            level: "4.0".to_string(),
            preset: "fast".to_string(),
            video_bitrate: "5000k".to_string(),
            max_rate: "5000k".to_string(),
            buffer_size: "10000k".to_string(),
            width: 1280,
            height: 720,
            pixel_format: "yuv420p".to_string(),
            audio_codec: "aac".to_string(),
            audio_bitrate: "128k".to_string(),
            audio_channels: 2,
            output_prefix: "easy-clip-video-".to_string(),
            overwrite: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub range: ClipRange,
}

impl ExtractJob {
    pub fn new(
        input: PathBuf,
        range: ClipRange,
        settings: &ExtractSettings,
        output_dir: Option<&Path>,
    ) -> Self {
        let output = output_path_for(&input, settings, output_dir);
        Self {
            input,
            output,
            range,
        }
    }

    pub fn ffmpeg_args(&self, settings: &ExtractSettings) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "-hide_banner".into(),
            "-loglevel".into(),
            "error".into(),
            (if settings.overwrite { "-y" } else { "-n" }).into(),
            "-i".into(),
            self.input.to_string_lossy().into_owned(),
            "-ss".into(),
            format!("{:.3}", self.range.start),
            "-to".into(),
            format!("{:.3}", self.range.end),
        ];
        let threads = settings.threads.to_string();
        let channels = settings.audio_channels.to_string();
        let filter = format!(
            "scale={}:{},format={}",
            settings.width, settings.height, settings.pixel_format
        );
        let encode: [&str; 27] = [
            "-c:v",
            &settings.video_codec,
            "-threads",
            &threads,
            "-profile:v",
            &settings.profile,
            "-level:v",
            &settings.level,
            "-preset",
            &settings.preset,
            "-b:v",
            &settings.video_bitrate,
            "-maxrate",
            &settings.max_rate,
            "-bufsize",
            &settings.buffer_size,
            "-vf",
            &filter,
            "-c:a",
            &settings.audio_codec,
            "-b:a",
            &settings.audio_bitrate,
            "-ac",
            &channels,
            "-progress",
            "pipe:1",
            "-nostats",
        ];
        args.extend(encode.map(String::from));
        args.push(self.output.to_string_lossy().into_owned());
        args
    }
}

pub fn output_path_for(
    input: &Path,
    settings: &ExtractSettings,
    output_dir: Option<&Path>,
) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "clip.mp4".to_string());
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{}{name}", settings.output_prefix))
}

/// Microseconds of output written, from one line of `-progress` output.
/// ffmpeg reports `out_time_ms` in microseconds as well.
pub fn parse_progress_line(line: &str) -> Option<i64> {
    let (key, value) = line.trim().split_once('=')?;
    match key {
        "out_time_us" | "out_time_ms" => value.trim().parse().ok(),
        _ => None,
    }
}

/// Runs the extraction to completion, reporting progress as it goes.
pub fn run(
    job: &ExtractJob,
    settings: &ExtractSettings,
    mut on_progress: impl FnMut(i64),
) -> anyhow::Result<PathBuf> {
    let args = job.ffmpeg_args(settings);
    tracing::info!(
        input = %job.input.display(),
        output = %job.output.display(),
        start = job.range.start,
        end = job.range.end,
        "starting extraction"
    );
    tracing::debug!(?args, "running ffmpeg");

    let mut child = Command::new(&settings.ffmpeg_path)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to launch {}", settings.ffmpeg_path))?;

    let stderr = child.stderr.take();
    let stderr_reader = std::thread::Builder::new()
        .name("ffmpeg-stderr".into())
        .spawn(move || {
            let mut text = String::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_string(&mut text);
            }
            text
        })
        .context("Failed to spawn stderr reader")?;

    let stdout = child.stdout.take().context("ffmpeg stdout unavailable")?;
    for line in BufReader::new(stdout).lines() {
        let Ok(line) = line else {
            break;
        };
        if let Some(time_us) = parse_progress_line(&line) {
            on_progress(time_us);
        }
    }

    let status = child.wait().context("Failed to wait for ffmpeg")?;
    let stderr_text = stderr_reader.join().unwrap_or_default();
    if !status.success() {
        bail!("ffmpeg exited with {status}: {}", stderr_text.trim());
    }

    on_progress((job.range.length() * 1_000_000.0) as i64);
    tracing::info!(output = %job.output.display(), "extraction finished");
    Ok(job.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> ExtractJob {
        ExtractJob::new(
            PathBuf::from("/videos/party.mp4"),
            ClipRange::new(12.5, 30.0),
            &ExtractSettings::default(),
            None,
        )
    }

    #[test]
    fn output_lands_next_to_input_with_prefix() {
        assert_eq!(
            job().output,
            PathBuf::from("/videos/easy-clip-video-party.mp4")
        );
    }

    #[test]
    fn output_dir_overrides_input_folder() {
        let out = output_path_for(
            Path::new("/videos/party.mp4"),
            &ExtractSettings::default(),
            Some(Path::new("/exports")),
        );
        assert_eq!(out, PathBuf::from("/exports/easy-clip-video-party.mp4"));
    }

    #[test]
    fn seeks_after_input_and_encodes_with_defaults() {
        let args = job().ffmpeg_args(&ExtractSettings::default());
        let joined = args.join(" ");
        assert!(joined.contains("-i /videos/party.mp4 -ss 12.500 -to 30.000"));
        assert!(joined.contains("-c:v libx264 -threads 4 -profile:v high -level:v 4.0"));
        assert!(joined.contains("-vf scale=1280:720,format=yuv420p"));
        assert!(joined.contains("-c:a aac -b:a 128k -ac 2"));
        assert!(args.contains(&"-n".to_string()));
        assert_eq!(
            args.last().map(String::as_str),
            Some("/videos/easy-clip-video-party.mp4")
        );
    }

    #[test]
    fn overwrite_switches_flag() {
        let settings = ExtractSettings {
            overwrite: true,
            ..ExtractSettings::default()
        };
        let args = job().ffmpeg_args(&settings);
        assert!(args.contains(&"-y".to_string()));
        assert!(!args.contains(&"-n".to_string()));
    }

    #[test]
    fn parses_progress_keys() {
        assert_eq!(parse_progress_line("out_time_us=2500000"), Some(2_500_000));
        assert_eq!(parse_progress_line("out_time_ms=1000\n"), Some(1000));
        assert_eq!(parse_progress_line("out_time_us=N/A"), None);
        assert_eq!(parse_progress_line("frame=42"), None);
        assert_eq!(parse_progress_line("progress=end"), None);
    }

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let settings: ExtractSettings =
            serde_json::from_str(r#"{ "preset": "veryfast", "width": 1920 }"#).unwrap();
        assert_eq!(settings.preset, "veryfast");
        assert_eq!(settings.width, 1920);
        assert_eq!(settings.video_codec, "libx264");
        assert_eq!(settings.output_prefix, "easy-clip-video-");
    }
}
