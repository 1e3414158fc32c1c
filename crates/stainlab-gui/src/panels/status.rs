use crate::app::StainlabApp;

pub fn show(ctx: &egui::Context, app: &mut StainlabApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            ui.label(app.ui_state.active_tool.to_string());
            if app.ui_state.active_tool.is_analyzer() {
                return;
            }
            if let Some(image) = app.selector.image() {
                ui.separator();
                ui.label(format!("{}x{}", image.width(), image.height()));
            }
            if let Some(transform) = app.selector.transform() {
                ui.separator();
                ui.label(format!("Scale: {:.0}%", transform.scale * 100.0));
            }
            if let Some(rect) = app.selector.selection() {
                ui.separator();
                ui.label(format!(
                    "Selection: ({}, {})-({}, {})",
                    rect.left, rect.top, rect.right, rect.bottom
                ));
            }
        });

        ui.add_space(2.0);
    });
}
