pub mod analyzer;
pub mod controls;
pub mod drop;
pub mod menu_bar;
pub mod selector;
pub mod status;

use stainlab_core::consts::SUPPORTED_EXTENSIONS;

use crate::app::StainlabApp;
use crate::messages::{LoadTarget, WorkerCommand};

/// Ask for an image file on a dialog thread and hand it to the worker.
pub(crate) fn pick_image(app: &StainlabApp, target: LoadTarget) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", SUPPORTED_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path, target });
        }
    });
}

/// Default destination for File > Open in the current tool.
pub(crate) fn open_target(app: &StainlabApp) -> LoadTarget {
    if app.ui_state.active_tool.is_analyzer() {
        LoadTarget::Slot(app.analyzer.first_empty_slot().unwrap_or(0))
    } else {
        LoadTarget::Selector
    }
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

pub(crate) fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

pub(crate) fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
