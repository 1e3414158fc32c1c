use crate::app::StainlabApp;
use crate::messages::{LoadTarget, WorkerCommand};
use crate::states::Tool;

const LEFT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut StainlabApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                match app.ui_state.active_tool {
                    Tool::Binary | Tool::Intensity => {
                        slots_section(ui, app);
                        ui.separator();
                        analysis_section(ui, ctx, app);
                        ui.separator();
                        results_section(ui, app);
                    }
                    Tool::SquareSelector => {
                        selector_section(ui, app);
                    }
                }
            });
        });
}

fn slots_section(ui: &mut egui::Ui, app: &mut StainlabApp) {
    super::section_header(ui, "Images", None);
    ui.add_space(4.0);

    for slot in 0..app.analyzer.slot_count() {
        ui.horizontal(|ui| {
            if ui.button(format!("Load Image {}", slot + 1)).clicked() {
                super::pick_image(app, LoadTarget::Slot(slot));
            }
            let loaded = app.analyzer.slot(slot).map(|s| s.name.clone());
            match loaded {
                Some(name) => {
                    ui.small(name);
                    if ui.small_button("x").on_hover_text("Unload").clicked() {
                        if let Err(e) = app.analyzer.clear_slot(slot) {
                            app.ui_state.add_log(format!("ERROR: {e}"));
                        } else {
                            app.thumbnails.originals[slot] = None;
                            app.thumbnails.clear_binaries();
                            app.ui_state.summaries.clear();
                        }
                    }
                }
                None => {
                    ui.small("Not loaded");
                }
            }
        });
    }
}

fn analysis_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut StainlabApp) {
    let tool = app.ui_state.active_tool;
    super::section_header(ui, &tool.to_string(), None);
    ui.add_space(4.0);

    if tool == Tool::Binary {
        ui.add(
            egui::Slider::new(&mut app.ui_state.threshold, 0..=255)
                .text("Threshold")
                .clamping(egui::SliderClamping::Always),
        );
        ui.small("Pixels at or above the threshold count as positive.");
        ui.add_space(4.0);
    }

    if ui.button("Process").clicked() {
        let outcome = match tool {
            Tool::Binary => app.analyzer.run_binary(app.ui_state.threshold),
            _ => app.analyzer.run_intensity(),
        };
        match outcome {
            Ok(summaries) => {
                for line in &summaries {
                    app.ui_state.add_log(line.to_string());
                }
                app.ui_state.summaries = summaries;
                if tool == Tool::Binary {
                    app.refresh_binary_thumbnails(ctx);
                } else {
                    app.thumbnails.clear_binaries();
                }
            }
            Err(e) => app.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    let has_records = !app.analyzer.records().is_empty();
    if ui
        .add_enabled(has_records, egui::Button::new("Download Excel..."))
        .clicked()
    {
        export_stats(app);
    }
}

fn results_section(ui: &mut egui::Ui, app: &StainlabApp) {
    super::section_header(ui, "Results", None);
    ui.add_space(4.0);

    if app.ui_state.summaries.is_empty() {
        ui.small("Press Process to compute statistics.");
        return;
    }
    for summary in &app.ui_state.summaries {
        ui.label(summary.to_string());
    }
}

fn export_stats(app: &StainlabApp) {
    let cmd_tx = app.cmd_tx.clone();
    let records = app.analyzer.records().to_vec();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel workbook", &["xlsx"])
            .set_file_name("statistics.xlsx")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ExportStats { path, records });
        }
    });
}

fn selector_section(ui: &mut egui::Ui, app: &mut StainlabApp) {
    super::section_header(ui, "Square Selector", None);
    ui.add_space(4.0);

    if ui.button("Load Image...").clicked() {
        super::pick_image(app, LoadTarget::Selector);
    }
    if let Some(name) = app.selector.image_name() {
        ui.label(name);
    }
    ui.add_space(4.0);

    let (min_side, max_side) = app.selector.fitting_side_range();
    let mut side = app.selector.side();
    let response = ui.add(
        egui::Slider::new(&mut side, min_side..=max_side)
            .text("Size (px)")
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        if let Err(e) = app.selector.set_side(side) {
            app.ui_state.add_log(format!("ERROR: {e}"));
        }
    }
    ui.small("Click the image to place the square.");
    ui.add_space(4.0);

    let can_crop = app.selector.selection().is_some();
    if ui
        .add_enabled(can_crop, egui::Button::new("Download Crop..."))
        .clicked()
    {
        save_crop(app);
    }
}

fn save_crop(app: &mut StainlabApp) {
    let patch = match app.selector.crop() {
        Ok(patch) => patch,
        Err(e) => {
            app.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
    };
    let default_name = app
        .selector
        .image_name()
        .and_then(|n| std::path::Path::new(n).file_stem())
        .map(|stem| format!("{}_crop.png", stem.to_string_lossy()))
        .unwrap_or_else(|| "crop.png".into());

    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .add_filter("TIFF", &["tif", "tiff"])
            .add_filter("BMP", &["bmp"])
            .set_file_name(default_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveImage { path, image: patch });
        }
    });
}
