use easyclip_state::view::time_label;
use easyclip_state::{ClipRange, ExtractProgress};

use crate::theme;

/// Where the extraction of the current clip stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExportPhase {
    #[default]
    Idle,
    Running(ExtractProgress),
    Finished {
        success: bool,
        /// Seconds left before the window closes, when closing is enabled.
        closing_in: Option<f64>,
    },
}

impl ExportPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, ExportPhase::Running(_))
    }
}

pub enum ExportAction {
    None,
    Start,
}

pub fn export_panel(ui: &mut egui::Ui, phase: &ExportPhase, clip: ClipRange) -> ExportAction {
    let mut action = ExportAction::None;

    ui.horizontal(|ui| {
        ui.colored_label(
            theme::TEXT_DIM,
            format!(
                "Clip {} \u{2013} {} ({}s)",
                time_label(clip.start),
                time_label(clip.end),
                time_label(clip.length())
            ),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new("Extract clip").fill(theme::ACCENT);
            if ui.add_enabled(!phase.is_running(), button).clicked() {
                action = ExportAction::Start;
            }
        });
    });

    match phase {
        ExportPhase::Idle => {}
        ExportPhase::Running(progress) => {
            ui.add(
                egui::ProgressBar::new((progress.percent() / 100.0) as f32)
                    .text(progress.label())
                    .animate(true),
            );
        }
        ExportPhase::Finished {
            success,
            closing_in,
        } => {
            let (text, color) = if *success {
                ("Export complete!", theme::SUCCESS)
            } else {
                ("Export failed.", theme::FAILURE)
            };
            ui.horizontal(|ui| {
                ui.colored_label(color, text);
                if let Some(remaining) = closing_in {
                    ui.colored_label(
                        theme::TEXT_DIM,
                        format!("Closing in {}\u{2026}", remaining.ceil().max(0.0) as u64),
                    );
                }
            });
        }
    }

    action
}
