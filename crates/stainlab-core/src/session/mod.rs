//! Per-window state of the desktop tools, held as explicit values so that
//! several independent sessions can coexist and be driven from tests.

pub mod analyzer;
pub mod selector;

pub use analyzer::{AnalyzerSession, AnalyzerSlot, SlotSummary};
pub use selector::SelectorSession;
