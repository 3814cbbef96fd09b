//! Layout engine core implementation.

use crate::formation::FormationTemplate;

use super::placement::{row_x_positions, rows_y_positions};
use super::types::{Margins, PitchLayout, SlotPosition};

/// Layout engine configuration and computation.
pub struct LayoutEngine {
    pub(crate) horizontal: Margins,
    pub(crate) horizontal_compact: Margins,
    pub(crate) vertical: Margins,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            horizontal: Margins::new(12.0, 88.0),
            horizontal_compact: Margins::new(15.0, 85.0), // Narrow screens keep spots off the touchline
            vertical: Margins::new(12.0, 88.0),
        }
    }
}

impl LayoutEngine {
    pub fn new(horizontal: Margins, horizontal_compact: Margins, vertical: Margins) -> Self {
        Self {
            horizontal,
            horizontal_compact,
            vertical,
        }
    }

    /// Compute slot positions for the given template.
    pub fn layout(&self, template: FormationTemplate, compact: bool) -> PitchLayout {
        self.layout_rows(template.rows(), compact)
    }

    /// Same as [`LayoutEngine::layout`] for an arbitrary row shape.
    pub fn layout_rows(&self, rows: &[usize], compact: bool) -> PitchLayout {
        let horizontal = if compact {
            self.horizontal_compact
        } else {
            self.horizontal
        };
        let row_y = rows_y_positions(rows.len(), self.vertical);

        let mut slots = Vec::with_capacity(rows.iter().sum());
        for (row, &cols) in rows.iter().enumerate() {
            for x in row_x_positions(cols, horizontal) {
                slots.push(SlotPosition {
                    index: slots.len(),
                    row,
                    x,
                    y: row_y[row],
                });
            }
        }

        log::trace!(
            "laid out {} slots over {} rows (compact={})",
            slots.len(),
            rows.len(),
            compact
        );

        PitchLayout {
            slots,
            row_y,
            compact,
        }
    }
}
