//! Data structures for layout computation.

/// Inclusive span along one axis, in percent of the pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub start: f64,
    pub end: f64,
}

impl Margins {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// A slot with its normalized centre.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPosition {
    pub index: usize,
    /// Template row, 0 being the goalkeeper line
    pub row: usize,
    /// Percent of pitch width
    pub x: f64,
    /// Percent of pitch height
    pub y: f64,
}

/// The complete layout result.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchLayout {
    pub slots: Vec<SlotPosition>,
    /// Row index -> y coordinate
    pub row_y: Vec<f64>,
    pub compact: bool,
}

impl PitchLayout {
    pub fn slot(&self, index: usize) -> Option<&SlotPosition> {
        self.slots.get(index)
    }

    /// Slot centre in pixels for a pitch of the given size.
    pub fn to_pixels(&self, index: usize, width: f64, height: f64) -> Option<(f64, f64)> {
        self.slot(index)
            .map(|s| (s.x * width / 100.0, s.y * height / 100.0))
    }
}
