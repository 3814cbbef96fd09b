//! Slot placement on the pitch diagram.

mod engine;
mod placement;
mod types;

pub use engine::LayoutEngine;
pub use placement::{row_x_positions, rows_y_positions};
pub use types::{Margins, PitchLayout, SlotPosition};
