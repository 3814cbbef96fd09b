//! One layout engine and renderer shared by drawing, hit testing and export,
//! so drop targets always line up with the drawn spots.

use crate::board::Board;
use crate::formation::FormationTemplate;
use crate::gesture::SpotRects;
use crate::layout::{LayoutEngine, PitchLayout};
use crate::measure::SpotMetrics;
use crate::svg::SvgRenderer;

#[derive(Default)]
pub struct Pitch {
    engine: LayoutEngine,
    renderer: SvgRenderer,
}

impl Pitch {
    pub fn new(engine: LayoutEngine, renderer: SvgRenderer) -> Self {
        Self { engine, renderer }
    }

    pub fn metrics(&self) -> &SpotMetrics {
        self.renderer.metrics()
    }

    pub fn layout(&self, template: FormationTemplate, compact: bool) -> PitchLayout {
        self.engine.layout(template, compact)
    }

    /// Spot diameter for a pitch `height` pixels tall.
    pub fn spot_size(&self, template: FormationTemplate, height: f64) -> f64 {
        self.metrics().spot_size(height, template.rows().len())
    }

    pub fn render(&self, board: &Board, compact: bool, width: f64, height: f64) -> String {
        let layout = self.layout(board.template(), compact);
        self.renderer.render(board, &layout, width, height)
    }

    pub fn spot_rects(
        &self,
        template: FormationTemplate,
        compact: bool,
        width: f64,
        height: f64,
    ) -> SpotRects {
        let layout = self.layout(template, compact);
        SpotRects::from_layout(&layout, width, height, self.spot_size(template, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_area_matches_drawn_spot() {
        let metrics = SpotMetrics {
            min_spot: 60.0,
            ..SpotMetrics::default()
        };
        let pitch = Pitch::new(LayoutEngine::default(), SvgRenderer::with_metrics(metrics));
        let board = Board::new();

        // 600 / (4 * 2.6) floors to 57, raised to the 60 minimum
        assert_eq!(pitch.spot_size(board.template(), 600.0), 60.0);
        let svg = pitch.render(&board, false, 400.0, 600.0);
        assert!(svg.contains(r#"cx="200" cy="528" r="30""#));

        let rects = pitch.spot_rects(board.template(), false, 400.0, 600.0);
        assert_eq!(rects.hit(230.0, 528.0), Some(0));
        assert_eq!(rects.hit(231.0, 528.0), None);
    }

    #[test]
    fn test_compact_flag_reaches_layout() {
        let pitch = Pitch::default();
        let svg = pitch.render(&Board::new(), true, 400.0, 600.0);
        // Three-man line starts on the 15% compact margin
        assert!(svg.contains(r#"cx="60""#));
        assert!(!svg.contains(r#"cx="48""#));
    }
}
