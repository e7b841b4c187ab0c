use easyclip_state::playback::SKIP_SECONDS;
use easyclip_state::{MediaHost, PreviewPlayer};

pub fn handle_keyboard(ctx: &egui::Context, player: &mut PreviewPlayer) {
    ctx.input(|i| {
        if i.key_pressed(egui::Key::Space) {
            player.toggle_play();
        }
        if i.key_pressed(egui::Key::ArrowLeft) {
            player.skip(-SKIP_SECONDS);
        }
        if i.key_pressed(egui::Key::ArrowRight) {
            player.skip(SKIP_SECONDS);
        }
    });
}
