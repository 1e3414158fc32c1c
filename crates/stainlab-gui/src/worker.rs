use std::path::Path;
use std::sync::mpsc;

use stainlab_core::io::export::write_xlsx;
use stainlab_core::io::image_io::{check_image_path, load_source_image, save_source_image};
use stainlab_core::raster::SourceImage;
use stainlab_core::stats::StatRecord;

use crate::messages::{LoadTarget, WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("stainlab-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path, target } => {
                handle_load_image(&path, target, &tx, &ctx);
            }
            WorkerCommand::SaveImage { path, image } => {
                handle_save_image(&path, &image, &tx, &ctx);
            }
            WorkerCommand::ExportStats { path, records } => {
                handle_export_stats(&path, &records, &tx, &ctx);
            }
        }
    }
}

fn handle_load_image(
    path: &Path,
    target: LoadTarget,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let loaded = check_image_path(path).and_then(|()| load_source_image(path));
    match loaded {
        Ok(image) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            send(tx, ctx, WorkerResult::ImageLoaded { target, name, image });
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::LoadFailed {
                target,
                message: format!("Could not open {}: {e}", path.display()),
            },
        ),
    }
}

fn handle_save_image(
    path: &Path,
    image: &SourceImage,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_source_image(image, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::ImageSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Save failed: {e}")),
    }
}

fn handle_export_stats(
    path: &Path,
    records: &[StatRecord],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match write_xlsx(records, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::StatsExported {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Export failed: {e}")),
    }
}
