#[derive(Default)]
pub struct FrameCache {
    pub frame_texture: Option<egui::TextureHandle>,
    pub pending: bool,
}

impl FrameCache {
    pub fn update_frame_texture(&mut self, ctx: &egui::Context, image: &image::RgbaImage) {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let color = egui::ColorImage::from_rgba_unmultiplied([width, height], image.as_raw());
        if let Some(ref mut handle) = self.frame_texture {
            let [tw, th] = handle.size();
            if tw == width && th == height {
                handle.set(color, egui::TextureOptions::LINEAR);
                return;
            }
        }
        let texture = ctx.load_texture("preview_frame", color, egui::TextureOptions::LINEAR);
        self.frame_texture = Some(texture);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl easyclip_ui::FrameLookup for FrameCache {
    fn current_frame(&self) -> Option<&egui::TextureHandle> {
        self.frame_texture.as_ref()
    }

    fn is_frame_pending(&self) -> bool {
        self.pending
    }
}
