use std::path::PathBuf;

use egui::{vec2, Sense, Stroke, StrokeKind};

use crate::constants;
use crate::theme;

pub enum IntakeAction {
    None,
    Open(PathBuf),
}

/// Feedback shown under the drop zone.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeNotice {
    Loading(String),
    Error(String),
}

pub fn intake_panel(
    ui: &mut egui::Ui,
    extensions: &[&str],
    notice: Option<&IntakeNotice>,
) -> IntakeAction {
    let mut action = IntakeAction::None;
    let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let loading = matches!(notice, Some(IntakeNotice::Loading(_)));

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("Easy Clip");
        ui.colored_label(theme::TEXT_DIM, "Cut a short clip out of a longer video.");
        ui.add_space(16.0);

        let width = ui.available_width().min(560.0);
        let (rect, _) = ui.allocate_exact_size(vec2(width, constants::DROP_ZONE_HEIGHT), Sense::hover());
        let stroke = if hovering_files {
            Stroke::new(2.0, theme::ACCENT)
        } else {
            Stroke::new(1.0, theme::BORDER)
        };
        ui.painter().rect_filled(rect, theme::ROUNDING, theme::BG_DARK);
        ui.painter()
            .rect_stroke(rect, theme::ROUNDING, stroke, StrokeKind::Inside);
        ui.painter().text(
            rect.center() - vec2(0.0, 24.0),
            egui::Align2::CENTER_CENTER,
            "Drop a video here",
            egui::FontId::proportional(18.0),
            theme::TEXT_PRIMARY,
        );

        let button_rect = egui::Rect::from_center_size(rect.center() + vec2(0.0, 24.0), vec2(140.0, 30.0));
        let button = ui.put(
            button_rect,
            egui::Button::new("Choose file\u{2026}"),
        );
        if button.clicked() && !loading {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Video", extensions)
                .pick_file()
            {
                action = IntakeAction::Open(path);
            }
        }

        ui.add_space(12.0);
        match notice {
            Some(IntakeNotice::Loading(text)) => {
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() / 2.0 - 100.0).max(0.0));
                    ui.spinner();
                    ui.colored_label(theme::TEXT_PRIMARY, text);
                });
            }
            Some(IntakeNotice::Error(text)) => {
                ui.colored_label(theme::FAILURE, text);
            }
            None => {}
        }
    });

    action
}
