pub mod preview;
pub mod selection;
pub mod transform;

pub use preview::preview;
pub use selection::{compute_square_selection, SelectionRect};
pub use transform::{compute_fit, DisplayRect, DisplayTransform};
