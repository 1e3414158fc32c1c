use std::sync::mpsc;

use stainlab_core::config::StainlabConfig;
use stainlab_core::raster::SourceImage;
use stainlab_core::session::{AnalyzerSession, SelectorSession};
use tracing::warn;

use crate::convert::fitted_texture;
use crate::messages::{LoadTarget, WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{SelectorView, ThumbnailState, UIState};
use crate::worker;

/// Largest edge of the selector preview texture.
const SELECTOR_TEXTURE_SIDE: u32 = 2048;

pub struct StainlabApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: StainlabConfig,
    pub ui_state: UIState,
    pub analyzer: AnalyzerSession,
    pub thumbnails: ThumbnailState,
    pub selector: SelectorSession,
    pub selector_view: SelectorView,
    pub show_about: bool,
}

impl StainlabApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());
        let config = StainlabConfig::default();

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::new(config.analysis.threshold),
            analyzer: AnalyzerSession::new(config.analysis.slots),
            thumbnails: ThumbnailState::new(config.analysis.slots),
            selector: SelectorSession::new(&config.selector),
            selector_view: SelectorView::default(),
            config,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    target,
                    name,
                    image,
                } => match target {
                    LoadTarget::Slot(slot) => {
                        self.ui_state.finish_pending(slot);
                        self.install_slot(ctx, slot, name, image);
                    }
                    LoadTarget::Selector => self.install_selector(ctx, name, image),
                },
                WorkerResult::LoadFailed { target, message } => {
                    if let LoadTarget::Slot(slot) = target {
                        self.ui_state.finish_pending(slot);
                    }
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::StatsExported { path } => {
                    self.ui_state
                        .add_log(format!("Statistics exported: {}", path.display()));
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(ctx, config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn install_slot(&mut self, ctx: &egui::Context, slot: usize, name: String, image: SourceImage) {
        let (w, h) = (image.width(), image.height());
        if let Err(e) = self.analyzer.load_slot(slot, name.as_str(), image) {
            self.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }

        let size = self.config.analysis.thumbnail_size;
        let texture = self
            .analyzer
            .slot(slot)
            .and_then(|s| self.upload(ctx, &format!("slot{slot}"), &s.image, size, size));
        self.thumbnails.originals[slot] = texture;
        // Statistics cover every slot, so a new image invalidates all of them.
        self.thumbnails.clear_binaries();
        self.ui_state.summaries.clear();
        self.ui_state
            .add_log(format!("Image {} loaded: {name} ({w}x{h})", slot + 1));
    }

    fn install_selector(&mut self, ctx: &egui::Context, name: String, image: SourceImage) {
        self.selector_view.texture = self.upload(
            ctx,
            "selector",
            &image,
            SELECTOR_TEXTURE_SIDE,
            SELECTOR_TEXTURE_SIDE,
        );
        self.ui_state.add_log(format!(
            "Opened: {name} ({}x{})",
            image.width(),
            image.height()
        ));
        self.selector.load(name, image);
    }

    fn upload(
        &self,
        ctx: &egui::Context,
        name: &str,
        image: &SourceImage,
        max_width: u32,
        max_height: u32,
    ) -> Option<egui::TextureHandle> {
        match fitted_texture(ctx, name, image, max_width, max_height) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!("Preview for {name} failed: {e}");
                None
            }
        }
    }

    /// Rebuild the binary thumbnails after a binary analysis run.
    pub fn refresh_binary_thumbnails(&mut self, ctx: &egui::Context) {
        let size = self.config.analysis.thumbnail_size;
        for slot in 0..self.analyzer.slot_count() {
            let texture = self
                .analyzer
                .binary(slot)
                .and_then(|b| SourceImage::from_gray(b.clone()).ok())
                .and_then(|img| self.upload(ctx, &format!("binary{slot}"), &img, size, size));
            self.thumbnails.binaries[slot] = texture;
        }
    }

    /// Swap in an imported config. Loaded images survive unless the slot count changes.
    fn apply_config(&mut self, ctx: &egui::Context, config: StainlabConfig) {
        self.ui_state.threshold = config.analysis.threshold;

        if config.analysis.slots != self.analyzer.slot_count() {
            self.analyzer = AnalyzerSession::new(config.analysis.slots);
            self.thumbnails = ThumbnailState::new(config.analysis.slots);
            self.ui_state.summaries.clear();
        }

        let (vw, vh) = self.selector.viewport();
        let previous = self
            .selector
            .image_name()
            .map(str::to_owned)
            .zip(self.selector.image().cloned());
        self.selector = SelectorSession::new(&config.selector);
        self.selector.resize_viewport(vw, vh);
        self.config = config;
        if let Some((name, image)) = previous {
            self.install_selector(ctx, name, image);
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for StainlabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        if self.ui_state.active_tool.is_analyzer() {
            panels::analyzer::show(ctx, self);
        } else {
            panels::selector::show(ctx, self);
        }
        panels::drop::handle_dropped_files(ctx, self);

        if self.show_about {
            egui::Window::new("About Stainlab")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Stainlab");
                        ui.label("Stained image statistics and square cropping");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
