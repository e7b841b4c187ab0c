use std::path::Path;

pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "avi", "mkv", "webm", "m4v", "mxf", "ts", "mts", "m2ts", "flv", "wmv", "mpg",
    "mpeg", "vob", "3gp", "3g2", "ogv", "f4v", "divx", "asf", "rm", "rmvb", "dv",
];

pub fn is_video_extension(ext: &str) -> bool {
    let lower = ext.to_lowercase();
    VIDEO_EXTENSIONS.contains(&lower.as_str())
}

pub fn is_video_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(is_video_extension)
}

/// `"<name> (<size> MB)"` line shown once a file is picked.
pub fn describe_file(path: &Path, size_bytes: u64) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{name} ({:.2} MB)", size_bytes as f64 / 1024.0 / 1024.0)
}
