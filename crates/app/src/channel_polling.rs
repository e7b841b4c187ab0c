use easyclip_ui::export::ExportPhase;
use easyclip_ui::intake::IntakeNotice;

use crate::workers::extract_worker::ExtractEvent;
use crate::{ClipperApp, LoadedVideo};

impl ClipperApp {
    pub(crate) fn poll_background_tasks(&mut self, ctx: &egui::Context) {
        let mut received = false;

        while let Ok(probe) = self.probe_rx.try_recv() {
            received = true;
            if probe.session != self.session {
                continue;
            }
            match probe.metadata {
                Ok(metadata) => {
                    tracing::info!(
                        path = %probe.path.display(),
                        duration = metadata.duration,
                        resolution = ?metadata.resolution,
                        codec = ?metadata.codec,
                        "video ready"
                    );
                    self.timeline.host_mut().load(metadata.duration);
                    self.video = Some(LoadedVideo {
                        path: probe.path,
                        info: probe.info,
                        metadata,
                    });
                    self.intake_notice = None;
                }
                Err(e) => {
                    tracing::warn!(path = %probe.path.display(), "could not open video: {e:#}");
                    self.intake_notice = Some(IntakeNotice::Error(format!(
                        "Could not open {}: {e}",
                        probe.info
                    )));
                }
            }
        }

        while let Ok(frame) = self.frame_worker.result_rx.try_recv() {
            if frame.session != self.session {
                continue;
            }
            received = true;
            self.frames.pending = false;
            if let Some(image) = frame.image {
                self.frames.update_frame_texture(ctx, &image);
            }
        }

        while let Ok(event) = self.extract_worker.event_rx.try_recv() {
            received = true;
            match event {
                ExtractEvent::Progress(time_us) => {
                    if let ExportPhase::Running(progress) = &mut self.export {
                        progress.update(time_us);
                    }
                }
                ExtractEvent::Finished(result) => {
                    let success = match result {
                        Ok(path) => {
                            tracing::info!(output = %path.display(), "clip saved");
                            true
                        }
                        Err(_) => false,
                    };
                    self.export = ExportPhase::Finished {
                        success,
                        closing_in: self
                            .config
                            .close_after_export
                            .then_some(self.config.close_countdown_secs),
                    };
                }
            }
        }

        if received {
            ctx.request_repaint();
        }
    }
}
