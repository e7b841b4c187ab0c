use std::path::PathBuf;

use easyclip_media::import::{describe_file, is_video_path};
use easyclip_media::metadata::probe;
use easyclip_ui::intake::IntakeNotice;

use crate::{ClipperApp, ProbeResult};

impl ClipperApp {
    pub(crate) fn open_file(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        if !is_video_path(&path) {
            tracing::warn!(path = %path.display(), "rejected non-video file");
            self.intake_notice = Some(IntakeNotice::Error(format!(
                "{name} is not a supported video file."
            )));
            return;
        }

        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let info = describe_file(&path, size);
        tracing::info!(path = %path.display(), size, "opening video");

        self.session += 1;
        self.intake_notice = Some(IntakeNotice::Loading(info.clone()));

        let session = self.session;
        let tx = self.probe_tx.clone();
        std::thread::spawn(move || {
            let metadata = probe(&path);
            let _ = tx.send(ProbeResult {
                session,
                path,
                info,
                metadata,
            });
        });
    }
}
