use rand::Rng;
use tracing::{debug, info};

use super::{draw_circle, draw_line, Canvas, Color, Point, Polygon};

/// Radius of the marker drawn on every vertex.
pub const MARKER_RADIUS: i32 = 4;
/// Thickness of the black band around a marker.
pub const MARKER_BORDER: i32 = 1;
/// Marker grays are drawn from `[0, MAX_MARKER_TONE)`.
pub const MAX_MARKER_TONE: u8 = 200;

/// What a draw pass put on the canvas.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct RenderReport {
    pub edges: usize,
    pub markers: usize,
}

/// Draws `points` as a closed polygon with a marker on each vertex.
///
/// The canvas is cleared to white first. For every index the outgoing
/// edge is drawn before that vertex's marker, so later vertices paint over
/// earlier ones.
#[tracing::instrument(skip_all, fields(vertices = points.len()))]
pub fn render_polygon<C, R>(canvas: &mut C, points: &[Point], rng: &mut R) -> RenderReport
where C: Canvas, R: Rng {
    canvas.set_draw_color(Color::WHITE);
    canvas.clear(Color::WHITE);

    let polygon = Polygon::new(points);
    if let Some(bb) = polygon.bounding_box() {
        debug!(?bb, "polygon bounds");
    }

    let mut report = RenderReport::default();
    for (i, edge) in polygon.edges().enumerate() {
        let tone = rng.gen_range(0..MAX_MARKER_TONE);

        draw_line(canvas, edge.start(), edge.end(), Color::LINE_RED);
        report.edges += 1;

        draw_circle(canvas, polygon.vertex(i), MARKER_RADIUS, Color::gray(tone), MARKER_BORDER);
        report.markers += 1;
    }

    info!(edges = report.edges, markers = report.markers, "frame drawn");
    report
}
