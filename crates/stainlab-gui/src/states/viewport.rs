/// Thumbnail textures for the analyzer slots.
pub struct ThumbnailState {
    pub originals: Vec<Option<egui::TextureHandle>>,
    /// Binarized output, filled by the binary analyzer.
    pub binaries: Vec<Option<egui::TextureHandle>>,
}

impl ThumbnailState {
    pub fn new(slot_count: usize) -> Self {
        Self {
            originals: vec![None; slot_count],
            binaries: vec![None; slot_count],
        }
    }

    pub fn clear_binaries(&mut self) {
        self.binaries.iter_mut().for_each(|t| *t = None);
    }
}

/// Selector preview texture. Its resolution is fixed at load time; the
/// display size follows the session's transform.
#[derive(Default)]
pub struct SelectorView {
    pub texture: Option<egui::TextureHandle>,
}
