//! Draws a list of integer coordinates as a closed polygon.
//!
//! The pipeline runs once: [`load_path`] reads raw `(x, y)` pairs,
//! [`normalize`] rescales them into canvas pixels, and [`render_polygon`]
//! draws edges and vertex markers onto any [`Canvas`]. [`Bitmap`] is the
//! in-memory canvas; with the `viewer` feature, [`Viewer`] shows it in a
//! window.

mod private;
pub mod error;
#[cfg(feature = "viewer")]
mod viewer;

use std::path::Path;

use rand::Rng;
use tracing::warn;

pub use error::{Error, LoadError, Result, ViewerError};
pub use private::{load, load_path};
pub use private::{map, max_coordinate, normalize, order_up, MARGIN};
pub use private::{draw_circle, draw_line, draw_ring, RING_SAMPLES};
pub use private::{render_polygon, RenderReport, MARKER_BORDER, MARKER_RADIUS, MAX_MARKER_TONE};
pub use private::{Bitmap, Canvas, Color};
pub use private::{Line, Point, Polygon, Rect, Vector};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, POLL_INTERVAL};

/// Side length of the square canvas, in pixels.
pub const CANVAS_SIZE: usize = 800;

pub const WINDOW_TITLE: &str = "Node Visualizer";

/// Reads `path`, or returns no points if it can't be read.
///
/// A missing or unreadable file is not fatal: the failure is logged and the
/// frame is drawn blank.
pub fn load_or_empty(path: &Path) -> Vec<Point> {
    match load_path(path) {
        Ok(points) => points,
        Err(e) => {
            warn!(error = %e, "no points to draw");
            Vec::new()
        }
    }
}

/// Normalizes `raw` to the canvas and draws it.
pub fn draw_points<C, R>(canvas: &mut C, raw: &[Point], rng: &mut R) -> RenderReport
where C: Canvas, R: Rng {
    let (width, height) = canvas.size();
    let normalized = normalize(raw, width.min(height));
    render_polygon(canvas, &normalized, rng)
}
