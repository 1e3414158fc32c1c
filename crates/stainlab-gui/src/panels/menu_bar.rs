use stainlab_core::config::StainlabConfig;

use crate::app::StainlabApp;
use crate::messages::WorkerResult;
use crate::states::Tool;

pub fn show(ctx: &egui::Context, app: &mut StainlabApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    super::pick_image(app, super::open_target(app));
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Tools", |ui| {
                for &tool in Tool::ALL {
                    if ui
                        .selectable_label(app.ui_state.active_tool == tool, tool.to_string())
                        .clicked()
                    {
                        ui.close();
                        app.ui_state.active_tool = tool;
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            super::pick_image(app, super::open_target(app));
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_config(ctx: &egui::Context, app: &mut StainlabApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match StainlabConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("Config import failed: {e}"),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn export_config(ctx: &egui::Context, app: &mut StainlabApp) {
    let mut config = app.config.clone();
    config.analysis.threshold = app.ui_state.threshold;
    config.selector.default_side = app.selector.side();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("stainlab_config.toml")
            .save_file()
        {
            let written = config
                .to_toml()
                .map_err(|e| e.to_string())
                .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
            let result = match written {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config exported: {}", path.display()),
                },
                Err(message) => WorkerResult::Error {
                    message: format!("Config export failed: {message}"),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}
