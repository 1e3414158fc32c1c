use stainlab_core::display::DisplayRect;

use crate::app::StainlabApp;

const OVERLAY_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

pub fn show(ctx: &egui::Context, app: &mut StainlabApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        super::paint_background(ui, rect);

        // The image is refitted whenever the panel changes size.
        app.selector
            .resize_viewport(rect.width() as u32, rect.height() as u32);

        let texture_id = app.selector_view.texture.as_ref().map(|t| t.id());
        let (Some(texture_id), Some(transform)) = (texture_id, app.selector.transform()) else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click());
        let img_rect = egui::Rect::from_min_size(
            rect.min
                + egui::vec2(transform.offset.0 as f32, transform.offset.1 as f32),
            egui::vec2(
                transform.display_width as f32,
                transform.display_height as f32,
            ),
        );
        super::draw_image(ui, texture_id, img_rect);

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                if let Err(e) = app.selector.click(local.x as f64, local.y as f64) {
                    app.ui_state.add_log(format!("ERROR: {e}"));
                }
            }
        }

        if let Some(overlay) = app.selector.overlay() {
            draw_overlay(ui, rect.min, &overlay, app.selector.side());
        }
    });
}

fn draw_overlay(ui: &egui::Ui, origin: egui::Pos2, overlay: &DisplayRect, side: u32) {
    let screen = egui::Rect::from_min_max(
        origin + egui::vec2(overlay.left as f32, overlay.top as f32),
        origin + egui::vec2(overlay.right as f32, overlay.bottom as f32),
    );
    ui.painter().rect_stroke(
        screen,
        0.0,
        egui::Stroke::new(2.0, OVERLAY_COLOR),
        egui::epaint::StrokeKind::Inside,
    );

    let label = format!("{side}x{side}");
    ui.painter().text(
        egui::pos2(screen.right() - 4.0, screen.bottom() + 4.0),
        egui::Align2::RIGHT_TOP,
        label,
        egui::FontId::proportional(12.0),
        OVERLAY_COLOR,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open or drop an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
