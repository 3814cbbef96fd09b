//! Row and column spacing.

use super::types::Margins;

/// Evenly spread `cols` slots across the horizontal margins.
/// A single slot is centred.
pub fn row_x_positions(cols: usize, margins: Margins) -> Vec<f64> {
    match cols {
        0 => Vec::new(),
        1 => vec![50.0],
        _ => {
            let step = (margins.end - margins.start) / (cols - 1) as f64;
            (0..cols).map(|i| margins.start + i as f64 * step).collect()
        }
    }
}

/// Y coordinate per row. Row 0 sits on the bottom margin and each later
/// row moves up; a lone row is centred.
pub fn rows_y_positions(rows: usize, margins: Margins) -> Vec<f64> {
    match rows {
        0 => Vec::new(),
        1 => vec![margins.midpoint()],
        _ => {
            let step = (margins.end - margins.start) / (rows - 1) as f64;
            (0..rows).map(|i| margins.end - i as f64 * step).collect()
        }
    }
}
