//! Progress ring drawn from the node tree
//!
//! Reads only what a renderer would: geometry attributes, the dash styles of
//! the fill arc and the container's marker classes.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Color,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Block, Borders, Paragraph, Widget,
    },
};
use regex::Regex;
use std::f64::consts::PI;
use std::sync::LazyLock;

use progress_ring::constants::HIDDEN_CLASS;
use progress_ring::Element;

use crate::ui::theme;

/// Sampling caps per arc; past these the braille grid cannot show more detail
const MAX_BANDS: usize = 128;
const MAX_STEPS: usize = 8192;

/// Rotation in a `transform` attribute, e.g. `rotate(-90)`
static ROTATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rotate\(\s*(-?\d+(?:\.\d+)?)").unwrap());

pub struct Ring<'a> {
    container: &'a Element,
    fill: &'a Element,
    background: &'a Element,
    spin: f64,
    title: Option<&'a str>,
}

impl<'a> Ring<'a> {
    pub fn new(container: &'a Element, fill: &'a Element, background: &'a Element) -> Self {
        Self {
            container,
            fill,
            background,
            spin: 0.0,
            title: None,
        }
    }

    /// Extra rotation applied by the animation (degrees)
    pub fn spin(mut self, degrees: f64) -> Self {
        self.spin = degrees;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Widget for Ring<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border());

        if let Some(title) = self.title {
            block = block.title(Span::styled(title, theme::title()));
        }

        if self.container.has_class(HIDDEN_CLASS) {
            Paragraph::new(Span::styled("(hidden)", theme::dim()))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let width = number_attribute(self.container, "width").unwrap_or(0.0);
        let height = number_attribute(self.container, "height").unwrap_or(0.0);
        let size = width.max(height);
        if size <= 0.0 {
            block.render(area, buf);
            return;
        }

        let inner = block.inner(area);
        let (x_bounds, y_bounds) = square_bounds(size, inner.width, inner.height);
        let resolution = dot_size(x_bounds, y_bounds, inner.width, inner.height);

        let background = ArcShape::read(self.background, height, 1.0, 0.0, theme::DIM)
            .map(|shape| shape.resolution(resolution));
        let fill = ArcShape::read(
            self.fill,
            height,
            fill_fraction(self.fill),
            self.spin,
            theme::PRIMARY,
        )
        .map(|shape| shape.resolution(resolution));

        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                if let Some(shape) = &background {
                    ctx.draw(shape);
                }
                if let Some(shape) = &fill {
                    ctx.draw(shape);
                }
            })
            .render(area, buf);
    }
}

/// Stroked circular arc in canvas coordinates (y up)
#[derive(Debug, Clone, PartialEq)]
struct ArcShape {
    cx: f64,
    cy: f64,
    radius: f64,
    thickness: f64,
    /// Start angle, degrees clockwise from three o'clock
    start: f64,
    /// Drawn share of the circle, 0..=1
    fraction: f64,
    /// Model units covered by one braille dot
    unit: f64,
    color: Color,
}

impl ArcShape {
    /// Build from an arc node; `height` flips the y axis
    fn read(arc: &Element, height: f64, fraction: f64, spin: f64, color: Color) -> Option<Self> {
        let radius = number_attribute(arc, "r")?;
        let cx = number_attribute(arc, "cx")?;
        let cy = number_attribute(arc, "cy")?;
        let thickness = number_attribute(arc, "stroke-width").unwrap_or(1.0);
        let rotation = arc
            .attribute("transform")
            .and_then(|t| parse_rotation(&t))
            .unwrap_or(0.0);

        Some(Self {
            cx,
            cy: height - cy,
            radius,
            thickness,
            start: rotation + spin,
            fraction,
            unit: 1.0,
            color,
        })
    }

    fn resolution(mut self, unit: f64) -> Self {
        if unit.is_finite() && unit > 0.0 {
            self.unit = unit;
        }
        self
    }

    /// Radial bands and angular steps, about one sample per dot
    fn sample_counts(&self) -> (usize, usize) {
        let outer = self.radius + self.thickness / 2.0;
        let arc_length = outer * 2.0 * PI * self.fraction.min(1.0);
        let bands = ((self.thickness / self.unit).ceil() as usize).clamp(1, MAX_BANDS);
        let steps = ((arc_length / self.unit * 2.0).ceil() as usize).clamp(8, MAX_STEPS);
        (bands, steps)
    }
}

impl Shape for ArcShape {
    fn draw(&self, painter: &mut Painter) {
        if self.fraction <= 0.0 || self.radius <= 0.0 {
            return;
        }

        let inner = (self.radius - self.thickness / 2.0).max(0.0);
        let outer = self.radius + self.thickness / 2.0;
        let (bands, steps) = self.sample_counts();
        let sweep = 360.0 * self.fraction.min(1.0);

        for band in 0..=bands {
            let r = inner + (outer - inner) * band as f64 / bands as f64;
            for step in 0..=steps {
                let degrees = self.start + sweep * step as f64 / steps as f64;
                let theta = degrees.to_radians();
                // Clockwise on screen means decreasing y with y up
                let x = self.cx + r * theta.cos();
                let y = self.cy - r * theta.sin();
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
            }
        }
    }
}

fn number_attribute(element: &Element, name: &str) -> Option<f64> {
    element.attribute(name).and_then(|v| parse_length(&v))
}

/// Parse a length such as `45` or `69.74px`
fn parse_length(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn parse_rotation(transform: &str) -> Option<f64> {
    ROTATE_RE
        .captures(transform)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Drawn share of the fill arc from its dash styles
fn fill_fraction(fill: &Element) -> f64 {
    let array = fill.style("stroke-dasharray").and_then(|v| parse_length(&v));
    let offset = fill.style("stroke-dashoffset").and_then(|v| parse_length(&v));
    match (array, offset) {
        (Some(array), Some(offset)) if array > 0.0 => ((array - offset) / array).clamp(0.0, 1.0),
        // No dash styles means a solid stroke
        _ => 1.0,
    }
}

/// Model units per braille dot for the given bounds and cell area
fn dot_size(x_bounds: [f64; 2], y_bounds: [f64; 2], cols: u16, rows: u16) -> f64 {
    let per_x = (x_bounds[1] - x_bounds[0]) / (f64::from(cols.max(1)) * 2.0);
    let per_y = (y_bounds[1] - y_bounds[0]) / (f64::from(rows.max(1)) * 4.0);
    per_x.max(per_y)
}

/// Canvas bounds that keep a `size` x `size` drawing round
///
/// Braille cells hold 2x4 dots, so a cell is twice as tall as wide in dots;
/// the longer axis gets extra room centered on the drawing.
fn square_bounds(size: f64, cols: u16, rows: u16) -> ([f64; 2], [f64; 2]) {
    let dots_x = f64::from(cols.max(1)) * 2.0;
    let dots_y = f64::from(rows.max(1)) * 4.0;

    if dots_x >= dots_y {
        let span = size * dots_x / dots_y;
        let pad = (span - size) / 2.0;
        ([-pad, size + pad], [0.0, size])
    } else {
        let span = size * dots_y / dots_x;
        let pad = (span - size) / 2.0;
        ([0.0, size], [-pad, size + pad])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_ring::{svg, ProgressIndicator, ProgressOptions};

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("45"), Some(45.0));
        assert_eq!(parse_length(" 69.5px "), Some(69.5));
        assert_eq!(parse_length("auto"), None);
    }

    #[test]
    fn test_parse_rotation() {
        assert_eq!(parse_rotation("rotate(-90)"), Some(-90.0));
        assert_eq!(parse_rotation("translate(1 2) rotate( 45.5 50 50)"), Some(45.5));
        assert_eq!(parse_rotation("scale(2)"), None);
    }

    #[test]
    fn test_fill_fraction_follows_value() {
        let container = svg::progress_circle();
        let mut progress =
            ProgressIndicator::new(container, ProgressOptions::new().value(0.0)).unwrap();
        assert_eq!(fill_fraction(progress.fill_arc()), 0.0);

        progress.set_value(100.0).unwrap();
        assert_eq!(fill_fraction(progress.fill_arc()), 1.0);

        progress.set_value(50.0).unwrap();
        let fraction = fill_fraction(progress.fill_arc());
        assert!(fraction > 0.5 && fraction < 0.51);
    }

    #[test]
    fn test_square_bounds() {
        // 40 cols x 10 rows = 80 x 40 dots: wider than tall
        let (x, y) = square_bounds(100.0, 40, 10);
        assert_eq!(y, [0.0, 100.0]);
        assert_eq!(x, [-50.0, 150.0]);

        let (x, y) = square_bounds(100.0, 10, 10);
        assert_eq!(x, [0.0, 100.0]);
        assert_eq!(y, [-50.0, 150.0]);
    }

    #[test]
    fn test_arc_shape_flips_y() {
        let container = svg::progress_circle();
        let progress = ProgressIndicator::new(container, ProgressOptions::default()).unwrap();
        let shape = ArcShape::read(progress.fill_arc(), 100.0, 1.0, 10.0, Color::Cyan).unwrap();
        assert_eq!(shape.cx, 50.0);
        assert_eq!(shape.cy, 50.0);
        assert_eq!(shape.radius, 45.0);
        assert_eq!(shape.thickness, 10.0);
        // rotate(-90) from the scaffold plus the spin
        assert_eq!(shape.start, -80.0);
        assert_eq!(shape.unit, 1.0);
    }

    #[test]
    fn test_sampling_follows_dot_size() {
        let (x, y) = square_bounds(100.0, 40, 10);
        assert_eq!(dot_size(x, y, 40, 10), 2.5);

        let shape = ArcShape {
            cx: 50.0,
            cy: 50.0,
            radius: 45.0,
            thickness: 10.0,
            start: -90.0,
            fraction: 1.0,
            unit: 1.0,
            color: Color::Cyan,
        };
        let (bands, steps) = shape.clone().resolution(2.5).sample_counts();
        assert_eq!(bands, 4);
        assert_eq!(steps, (50.0 * 2.0 * PI / 2.5 * 2.0_f64).ceil() as usize);

        // A bad resolution keeps the previous one
        assert_eq!(shape.clone().resolution(0.0).unit, 1.0);
        assert_eq!(shape.resolution(f64::NAN).unit, 1.0);
    }

    #[test]
    fn test_sampling_is_capped() {
        let shape = ArcShape {
            cx: 0.0,
            cy: 0.0,
            radius: 2000.0,
            thickness: 2000.0,
            start: 0.0,
            fraction: 1.0,
            unit: 1e-9,
            color: Color::Cyan,
        };
        assert_eq!(shape.sample_counts(), (MAX_BANDS, MAX_STEPS));
    }

    #[test]
    fn test_huge_ring_renders_on_small_area() {
        let container = svg::progress_circle();
        let progress = ProgressIndicator::new(
            container,
            ProgressOptions::new().radius(2000.0).thickness(2000.0),
        )
        .unwrap();

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        Ring::new(progress.element(), progress.fill_arc(), progress.background_arc())
            .render(area, &mut buf);

        // Braille dots land inside the border
        let painted = (1..area.height - 1)
            .flat_map(|y| (1..area.width - 1).map(move |x| (x, y)))
            .filter(|&pos| buf[pos].symbol() != " ")
            .count();
        assert!(painted > 0);
    }

    #[test]
    fn test_hidden_ring_renders_placeholder() {
        let container = svg::progress_circle();
        let mut progress = ProgressIndicator::new(container, ProgressOptions::default()).unwrap();
        progress.hide();

        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        Ring::new(progress.element(), progress.fill_arc(), progress.background_arc())
            .render(area, &mut buf);

        let text: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(text.contains("(hidden)"));
    }
}
