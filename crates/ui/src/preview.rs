use easyclip_state::playback::{PLAYBACK_RATES, SKIP_SECONDS};
use easyclip_state::{MediaHost, PreviewPlayer};

use crate::constants;
use crate::theme;
use crate::FrameLookup;

pub fn preview_panel(ui: &mut egui::Ui, player: &mut PreviewPlayer, frames: &dyn FrameLookup) {
    let available = ui.available_size();
    let video_area = egui::vec2(
        available.x,
        (available.y - constants::TRANSPORT_HEIGHT).max(0.0),
    );

    ui.allocate_ui(video_area, |ui| {
        ui.set_min_size(video_area);
        match frames.current_frame() {
            Some(tex) => show_frame_texture(ui, tex, video_area),
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(video_area.y / 2.0 - 10.0);
                    let text = if frames.is_frame_pending() {
                        "Decoding frame\u{2026}"
                    } else {
                        "No preview"
                    };
                    ui.colored_label(theme::TEXT_DIM, text);
                });
            }
        }
    });

    transport_bar(ui, player);
}

fn transport_bar(ui: &mut egui::Ui, player: &mut PreviewPlayer) {
    let btn = constants::TRANSPORT_BTN_SIZE;

    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() / 2.0 - 140.0).max(0.0));

        if ui
            .add_sized(btn, egui::Button::new("\u{23EA}"))
            .on_hover_text("Back 5s")
            .clicked()
        {
            player.skip(-SKIP_SECONDS);
        }

        let play_label = if player.is_playing() {
            "\u{23F8}"
        } else {
            "\u{25B6}"
        };
        if ui
            .add_sized(btn, egui::Button::new(play_label))
            .on_hover_text(if player.is_playing() { "Pause" } else { "Play" })
            .clicked()
        {
            player.toggle_play();
        }

        if ui
            .add_sized(btn, egui::Button::new("\u{23E9}"))
            .on_hover_text("Forward 5s")
            .clicked()
        {
            player.skip(SKIP_SECONDS);
        }

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!(
                "{} / {}",
                timecode(player.current_time()),
                timecode(player.duration())
            ))
            .font(egui::FontId::monospace(12.0))
            .color(theme::TEXT_PRIMARY),
        );

        ui.add_space(8.0);
        let current = player.speed();
        egui::ComboBox::from_id_salt("playback_rate")
            .width(56.0)
            .selected_text(format!("{current}x"))
            .show_ui(ui, |ui| {
                for rate in PLAYBACK_RATES {
                    if ui
                        .selectable_label((current - rate).abs() < 1e-9, format!("{rate}x"))
                        .clicked()
                    {
                        player.set_speed(rate);
                    }
                }
            });
    });
}

fn timecode(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as i64;
    let secs = seconds - minutes as f64 * 60.0;
    format!("{minutes}:{secs:05.2}")
}

fn show_frame_texture(ui: &mut egui::Ui, tex: &egui::TextureHandle, available: egui::Vec2) {
    let tex_size = tex.size_vec2();
    let video_h = available.y - 8.0;
    let scale = (available.x / tex_size.x).min(video_h / tex_size.y).max(0.0);
    let display_size = tex_size * scale;

    let vertical_pad = (available.y - display_size.y) / 2.0;

    ui.vertical_centered(|ui| {
        ui.add_space(vertical_pad.max(0.0));

        let frame_rect = egui::Rect::from_min_size(
            egui::pos2(
                ui.available_rect_before_wrap().center().x - display_size.x / 2.0,
                ui.cursor().min.y,
            ),
            display_size,
        );
        ui.painter().rect_stroke(
            frame_rect,
            egui::CornerRadius::ZERO,
            egui::Stroke::new(1.0, theme::BORDER),
            egui::StrokeKind::Outside,
        );

        ui.image(egui::load::SizedTexture::new(tex.id(), display_size));
    });
}
