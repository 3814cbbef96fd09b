use crate::board::Board;
use crate::layout::PitchLayout;
use crate::measure::SpotMetrics;
use std::fmt::Write;

pub const EMPTY_SPOT_LABEL: &str = "Drop / Tap";

pub struct SvgRenderer {
    metrics: SpotMetrics,
    grass: &'static str,
    line: &'static str,
    spot_empty: &'static str,
    spot_filled: &'static str,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::with_metrics(SpotMetrics::default())
    }
}

impl SvgRenderer {
    pub fn with_metrics(metrics: SpotMetrics) -> Self {
        Self {
            metrics,
            grass: "#2e7d32",
            line: "#e8f5e9",
            spot_empty: "rgba(255,255,255,0.25)",
            spot_filled: "#1565c0",
        }
    }

    pub fn metrics(&self) -> &SpotMetrics {
        &self.metrics
    }

    /// Render the pitch with every slot at `width` x `height` pixels.
    pub fn render(&self, board: &Board, layout: &PitchLayout, width: f64, height: f64) -> String {
        let mut svg = String::new();
        let spot = self
            .metrics
            .spot_size(height, board.template().rows().len());

        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            width, height, width, height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r#"<style>
  .pitch {{ fill: {grass}; }}
  .marking {{ fill: none; stroke: {line}; stroke-width: 2; }}
  .pen-spot {{ fill: {line}; }}
  .spot {{ fill: {empty}; stroke: #fff; stroke-width: 2; stroke-dasharray: 4 3; }}
  .spot.filled {{ fill: {filled}; stroke-dasharray: none; }}
  .spot-label {{ font-family: sans-serif; fill: #fff; font-weight: bold; }}
  .spot-label.empty {{ font-weight: normal; opacity: 0.8; }}
</style>"#,
            grass = self.grass,
            line = self.line,
            empty = self.spot_empty,
            filled = self.spot_filled,
        )
        .unwrap();

        self.render_pitch(&mut svg, width, height);

        for slot in &layout.slots {
            let occupant = board.assignments().occupant(slot.index);
            let cx = slot.x * width / 100.0;
            let cy = slot.y * height / 100.0;
            self.render_spot(&mut svg, cx, cy, spot, occupant);
        }

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    fn render_pitch(&self, svg: &mut String, w: f64, h: f64) {
        writeln!(
            svg,
            r#"<rect class="pitch" x="0" y="0" width="{}" height="{}" />"#,
            w, h
        )
        .unwrap();
        writeln!(
            svg,
            r#"<rect class="marking" x="4" y="4" width="{}" height="{}" />"#,
            w - 8.0,
            h - 8.0
        )
        .unwrap();

        // Halfway line and centre circle
        writeln!(
            svg,
            r#"<line class="marking" x1="4" y1="{}" x2="{}" y2="{}" />"#,
            h / 2.0,
            w - 4.0,
            h / 2.0
        )
        .unwrap();
        writeln!(
            svg,
            r#"<circle class="marking" cx="{}" cy="{}" r="{}" />"#,
            w / 2.0,
            h / 2.0,
            w * 0.12
        )
        .unwrap();

        // Penalty area, six-yard box and spot at each end
        let penalty_w = w * 0.6;
        let penalty_h = h * 0.16;
        let six_w = w * 0.3;
        let six_h = h * 0.06;
        for top in [true, false] {
            let (pen_y, six_y, spot_y) = if top {
                (4.0, 4.0, 4.0 + h * 0.11)
            } else {
                (h - 4.0 - penalty_h, h - 4.0 - six_h, h - 4.0 - h * 0.11)
            };
            writeln!(
                svg,
                r#"<rect class="marking" x="{}" y="{}" width="{}" height="{}" />"#,
                (w - penalty_w) / 2.0,
                pen_y,
                penalty_w,
                penalty_h
            )
            .unwrap();
            writeln!(
                svg,
                r#"<rect class="marking" x="{}" y="{}" width="{}" height="{}" />"#,
                (w - six_w) / 2.0,
                six_y,
                six_w,
                six_h
            )
            .unwrap();
            writeln!(
                svg,
                r#"<circle class="pen-spot" cx="{}" cy="{}" r="3" />"#,
                w / 2.0,
                spot_y
            )
            .unwrap();
        }
    }

    fn render_spot(&self, svg: &mut String, cx: f64, cy: f64, spot: f64, occupant: Option<&str>) {
        let class = if occupant.is_some() { "spot filled" } else { "spot" };
        writeln!(
            svg,
            r#"<circle class="{}" cx="{}" cy="{}" r="{}" />"#,
            class,
            cx,
            cy,
            spot / 2.0
        )
        .unwrap();

        let (label, label_class, font) = match occupant {
            Some(name) => (name, "spot-label", self.metrics.label_font_size(name, spot)),
            None => (
                EMPTY_SPOT_LABEL,
                "spot-label empty",
                self.metrics.label_font_size(EMPTY_SPOT_LABEL, spot),
            ),
        };
        writeln!(
            svg,
            r#"<text class="{}" x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            label_class,
            cx,
            cy,
            font,
            escape_xml(label)
        )
        .unwrap();
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
