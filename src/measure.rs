use unicode_width::UnicodeWidthStr;

/// Host viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
}

impl Viewport {
    pub const COMPACT_MAX_WIDTH: f64 = 360.0;

    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn is_compact(&self) -> bool {
        self.width <= Self::COMPACT_MAX_WIDTH
    }
}

pub struct SpotMetrics {
    pub min_spot: f64,
    pub max_spot: f64,
    /// Container height per row is divided by this to get the spot diameter.
    pub row_divisor: f64,
    pub min_font: f64,
    pub min_label_font: f64,
    /// Approximate glyph width as a fraction of the font size.
    pub glyph_ratio: f64,
    /// Share of the spot diameter a label may span.
    pub label_fill: f64,
}

impl Default for SpotMetrics {
    fn default() -> Self {
        Self {
            min_spot: 40.0,
            max_spot: 72.0,
            row_divisor: 2.6,
            min_font: 10.0,
            min_label_font: 7.0,
            glyph_ratio: 0.6,
            label_fill: 0.85,
        }
    }
}

impl SpotMetrics {
    pub fn spot_size(&self, container_height: f64, rows: usize) -> f64 {
        if rows == 0 {
            return self.max_spot;
        }
        let raw = (container_height / (rows as f64 * self.row_divisor)).floor();
        raw.clamp(self.min_spot, self.max_spot)
    }

    pub fn font_size(&self, spot: f64) -> f64 {
        (spot / 5.0).round().max(self.min_font)
    }

    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        UnicodeWidthStr::width(text) as f64 * font_size * self.glyph_ratio
    }

    /// Font size for a name inside a spot, shrunk until the name fits.
    pub fn label_font_size(&self, name: &str, spot: f64) -> f64 {
        let base = self.font_size(spot);
        let available = spot * self.label_fill;
        let needed = self.text_width(name, base);
        if needed <= available || needed == 0.0 {
            return base;
        }
        (base * available / needed).max(self.min_label_font)
    }
}
