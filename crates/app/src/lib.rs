use std::path::PathBuf;
use std::sync::mpsc;

use easyclip_media::extract::ExtractJob;
use easyclip_media::import::VIDEO_EXTENSIONS;
use easyclip_media::metadata::MediaMetadata;
use easyclip_state::{ClipTimeline, DragSession, ExtractProgress, MediaHost, PreviewPlayer};
use easyclip_ui::export::{ExportAction, ExportPhase};
use easyclip_ui::intake::{IntakeAction, IntakeNotice};

mod channel_polling;
pub mod config;
mod frame_cache;
mod import;
mod workers;

pub use config::AppConfig;

use frame_cache::FrameCache;
use workers::extract_worker::{spawn_extract_worker, ExtractRequest, ExtractWorkerChannels};
use workers::frame_worker::{frame_bucket, spawn_frame_worker, FrameRequest, FrameWorkerChannels};

// Replaced by the measured width on the first layout pass.
const INITIAL_TIMELINE_WIDTH: f32 = 800.0;

struct ProbeResult {
    session: u64,
    path: PathBuf,
    info: String,
    metadata: anyhow::Result<MediaMetadata>,
}

struct LoadedVideo {
    path: PathBuf,
    info: String,
    metadata: MediaMetadata,
}

pub struct ClipperApp {
    config: AppConfig,
    /// Bumped whenever the open file changes so late worker results are dropped.
    session: u64,
    timeline: ClipTimeline<PreviewPlayer>,
    video: Option<LoadedVideo>,
    intake_notice: Option<IntakeNotice>,
    frames: FrameCache,
    last_frame_request: Option<i64>,
    last_frame_time: Option<f64>,
    export: ExportPhase,
    probe_tx: mpsc::Sender<ProbeResult>,
    probe_rx: mpsc::Receiver<ProbeResult>,
    frame_worker: FrameWorkerChannels,
    extract_worker: ExtractWorkerChannels,
}

impl ClipperApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        easyclip_ui::theme::apply_theme(&cc.egui_ctx);
        let (probe_tx, probe_rx) = mpsc::channel();

        Self {
            config,
            session: 0,
            timeline: ClipTimeline::new(PreviewPlayer::new(), INITIAL_TIMELINE_WIDTH),
            video: None,
            intake_notice: None,
            frames: FrameCache::default(),
            last_frame_request: None,
            last_frame_time: None,
            export: ExportPhase::Idle,
            probe_tx,
            probe_rx,
            frame_worker: spawn_frame_worker(),
            extract_worker: spawn_extract_worker(),
        }
    }

    fn close_video(&mut self) {
        if let Some(video) = &self.video {
            tracing::info!(path = %video.path.display(), "closing video");
        }
        self.session += 1;
        let width = self.timeline.container_width();
        self.timeline = ClipTimeline::new(PreviewPlayer::new(), width);
        self.video = None;
        self.intake_notice = None;
        self.frames.clear();
        self.last_frame_request = None;
        self.export = ExportPhase::Idle;
    }

    fn start_export(&mut self) {
        let Some(video) = &self.video else {
            return;
        };
        if self.export.is_running() {
            return;
        }
        let range = self.timeline.clip();
        let job = ExtractJob::new(
            video.path.clone(),
            range,
            &self.config.extract,
            self.config.output_dir.as_deref(),
        );
        let request = ExtractRequest {
            job,
            settings: self.config.extract.clone(),
        };
        if self.extract_worker.req_tx.send(request).is_err() {
            tracing::warn!("extraction worker is gone");
            self.export = ExportPhase::Finished {
                success: false,
                closing_in: None,
            };
            return;
        }
        self.timeline.host_mut().pause();
        self.export = ExportPhase::Running(ExtractProgress::new(range.length()));
    }

    fn request_preview_frame(&mut self) {
        let Some(video) = &self.video else {
            return;
        };
        let time_seconds = self
            .timeline
            .pending_playhead_time()
            .unwrap_or_else(|| self.timeline.host().current_time());
        let bucket = frame_bucket(time_seconds);
        if self.last_frame_request == Some(bucket) {
            return;
        }
        self.last_frame_request = Some(bucket);
        self.frames.pending = true;
        let _ = self.frame_worker.req_tx.send(FrameRequest {
            session: self.session,
            path: video.path.clone(),
            time_seconds,
        });
    }

    fn tick_close_countdown(&mut self, ctx: &egui::Context, dt: f64) {
        if let ExportPhase::Finished {
            closing_in: Some(remaining),
            ..
        } = &mut self.export
        {
            *remaining -= dt;
            if *remaining <= 0.0 {
                tracing::info!("closing window after export");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else {
                ctx.request_repaint();
            }
        }
    }

    fn intake_screen(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.open_file(path);
        }

        let mut action = IntakeAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action =
                easyclip_ui::intake::intake_panel(ui, VIDEO_EXTENSIONS, self.intake_notice.as_ref());
        });
        if let IntakeAction::Open(path) = action {
            self.open_file(path);
        }
    }

    fn editor_screen(&mut self, ctx: &egui::Context) {
        let mut close = false;
        let mut export = ExportAction::None;
        let running = self.export.is_running();

        egui::TopBottomPanel::top("file_bar")
            .exact_height(32.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if let Some(video) = &self.video {
                        ui.label(&video.info);
                        ui.colored_label(
                            easyclip_ui::theme::TEXT_DIM,
                            describe_metadata(&video.metadata),
                        );
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add_enabled(!running, egui::Button::new("\u{2715} Close"))
                            .on_hover_text("Pick another video")
                            .clicked()
                        {
                            close = true;
                        }
                    });
                });
            });

        egui::TopBottomPanel::bottom("timeline_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                easyclip_ui::timeline::timeline_panel(ui, &mut self.timeline);
                ui.separator();
                export = easyclip_ui::export::export_panel(ui, &self.export, self.timeline.clip());
                ui.add_space(4.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            easyclip_ui::preview::preview_panel(ui, self.timeline.host_mut(), &self.frames);
        });

        if close {
            self.close_video();
        } else if let ExportAction::Start = export {
            self.start_export();
        }
    }
}

fn describe_metadata(metadata: &MediaMetadata) -> String {
    let total = metadata.duration.max(0.0).round() as u64;
    let mut parts = vec![format!("{}:{:02}", total / 60, total % 60)];
    if let Some((w, h)) = metadata.resolution {
        parts.push(format!("{w}x{h}"));
    }
    if let Some(codec) = &metadata.codec {
        parts.push(codec.clone());
    }
    parts.join(" \u{2022} ")
}

impl eframe::App for ClipperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let dt = self.last_frame_time.map_or(0.0, |last| (now - last).max(0.0));
        self.last_frame_time = Some(now);

        self.timeline.host_mut().advance(dt);
        self.poll_background_tasks(ctx);
        if self.video.is_some() {
            workers::keyboard::handle_keyboard(ctx, self.timeline.host_mut());
        }
        self.timeline.pump_host_events();
        self.tick_close_countdown(ctx, dt);

        if self.video.is_some() {
            self.editor_screen(ctx);
        } else {
            self.intake_screen(ctx);
        }

        // Transport and timeline seeks from this frame.
        self.timeline.pump_host_events();
        self.request_preview_frame();

        let dragging = !matches!(self.timeline.drag(), DragSession::Idle);
        if self.timeline.host().is_playing() || self.export.is_running() || dragging {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_line_lists_known_fields() {
        let metadata = MediaMetadata {
            duration: 125.4,
            resolution: Some((1920, 1080)),
            codec: Some("video/x-h264".to_string()),
        };
        assert_eq!(
            describe_metadata(&metadata),
            "2:05 \u{2022} 1920x1080 \u{2022} video/x-h264"
        );
    }

    #[test]
    fn metadata_line_skips_unknown_fields() {
        let metadata = MediaMetadata {
            duration: 9.0,
            resolution: None,
            codec: None,
        };
        assert_eq!(describe_metadata(&metadata), "0:09");
    }
}
