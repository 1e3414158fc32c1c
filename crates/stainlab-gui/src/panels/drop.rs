use std::path::PathBuf;

use stainlab_core::io::image_io::is_supported_extension;
use tracing::warn;

use crate::app::StainlabApp;
use crate::messages::{LoadTarget, WorkerCommand};

/// Route files dropped onto the window: the selector takes the first image,
/// the analyzers fill their free slots in order. Files without a supported
/// image extension are skipped before any slot is assigned.
pub fn handle_dropped_files(ctx: &egui::Context, app: &mut StainlabApp) {
    let paths: Vec<PathBuf> = ctx.input(|i| {
        i.raw
            .dropped_files
            .iter()
            .filter_map(|f| f.path.clone())
            .collect()
    });
    if paths.is_empty() {
        return;
    }

    let (images, rejected): (Vec<_>, Vec<_>) =
        paths.into_iter().partition(|p| is_supported_extension(p));
    for path in rejected {
        warn!("Ignoring dropped file {}: unsupported extension", path.display());
        app.ui_state
            .add_log(format!("Skipped {}: not a supported image", path.display()));
    }

    if !app.ui_state.active_tool.is_analyzer() {
        if let Some(path) = images.into_iter().next() {
            app.send_command(WorkerCommand::LoadImage {
                path,
                target: LoadTarget::Selector,
            });
        }
        return;
    }

    // Slots with a load still in flight count as taken.
    let free: Vec<usize> = (0..app.analyzer.slot_count())
        .filter(|&slot| app.analyzer.slot(slot).is_none() && !app.ui_state.is_pending(slot))
        .collect();
    let (assigned, overflow) = assign_slots(images, &free);

    if overflow > 0 {
        app.ui_state
            .add_log(format!("{overflow} dropped image(s) ignored: no free image slot"));
    }
    for (path, slot) in assigned {
        app.ui_state.mark_pending(slot);
        app.send_command(WorkerCommand::LoadImage {
            path,
            target: LoadTarget::Slot(slot),
        });
    }
}

/// Pair images with free slots in order. Returns the pairs and the number of
/// images left without a slot.
fn assign_slots(images: Vec<PathBuf>, free: &[usize]) -> (Vec<(PathBuf, usize)>, usize) {
    let overflow = images.len().saturating_sub(free.len());
    let assigned = images.into_iter().zip(free.iter().copied()).collect();
    (assigned, overflow)
}
