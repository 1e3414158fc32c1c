use stainlab_core::session::SlotSummary;

use super::tool::Tool;

/// Overall UI state.
pub struct UIState {
    pub active_tool: Tool,
    /// Threshold slider value for the binary analyzer.
    pub threshold: u8,
    /// Per-slot lines from the last analysis run.
    pub summaries: Vec<SlotSummary>,
    /// Log messages.
    pub log_messages: Vec<String>,
    /// Analyzer slots with a load still in flight.
    pending_slots: Vec<usize>,
}

impl UIState {
    pub fn new(threshold: u8) -> Self {
        Self {
            active_tool: Tool::default(),
            threshold,
            summaries: Vec::new(),
            log_messages: Vec::new(),
            pending_slots: Vec::new(),
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn mark_pending(&mut self, slot: usize) {
        if !self.pending_slots.contains(&slot) {
            self.pending_slots.push(slot);
        }
    }

    pub fn finish_pending(&mut self, slot: usize) {
        self.pending_slots.retain(|&s| s != slot);
    }

    pub fn is_pending(&self, slot: usize) -> bool {
        self.pending_slots.contains(&slot)
    }
}
