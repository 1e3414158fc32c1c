mod tool;
mod ui;
mod viewport;

pub use tool::Tool;
pub use ui::UIState;
pub use viewport::{SelectorView, ThumbnailState};
