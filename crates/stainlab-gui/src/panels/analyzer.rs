use crate::app::StainlabApp;
use crate::states::Tool;

pub fn show(ctx: &egui::Context, app: &mut StainlabApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let size = app.config.analysis.thumbnail_size as f32;
        let show_binaries = app.ui_state.active_tool == Tool::Binary;

        egui::ScrollArea::both().show(ui, |ui| {
            ui.horizontal_top(|ui| {
                for slot in 0..app.analyzer.slot_count() {
                    ui.vertical(|ui| {
                        let title = app
                            .analyzer
                            .slot(slot)
                            .map(|s| format!("Image {}: {}", slot + 1, s.name))
                            .unwrap_or_else(|| format!("Image {}", slot + 1));
                        ui.strong(title);
                        thumbnail(ui, app.thumbnails.originals[slot].as_ref(), size, "Not loaded");

                        if show_binaries {
                            ui.add_space(6.0);
                            ui.small("Binary");
                            thumbnail(ui, app.thumbnails.binaries[slot].as_ref(), size, "Not processed");
                        }
                    });
                    ui.add_space(12.0);
                }
            });
        });
    });
}

/// Draw a texture fitted inside a `size x size` box, top-left aligned.
fn thumbnail(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>, size: f32, placeholder: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    super::paint_background(ui, rect);

    match texture {
        Some(texture) => {
            let [w, h] = texture.size();
            let scale = (size / w as f32).min(size / h as f32);
            let img_rect = egui::Rect::from_min_size(rect.min, egui::vec2(w as f32, h as f32) * scale);
            super::draw_image(ui, texture.id(), img_rect);
        }
        None => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                placeholder,
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(100),
            );
        }
    }
}
