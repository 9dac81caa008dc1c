//! Debug-Overlay: Dreiecksliste mit Kreisen und Bézier-Handles.
//!
//! Jeder Vertex trägt `(x, y, colorIndex)`. Kreise bekommen einen Index
//! `i / n` aus der Spektral-Palette, Handles den festen [`HANDLE_COLOR_INDEX`].

use super::types::{DebugVertex, HANDLE_COLOR_INDEX};
use crate::core::{Anchor, Circle, CircleCurve, GeometryError, Point2D};
use std::f64::consts::{FRAC_PI_4, TAU};

/// Anzahl Dreiecke pro Kreisfläche.
pub const CIRCLE_SEGMENTS: usize = 20;
/// Linienstärke der Handle-Linie.
pub const HANDLE_LINE_WEIGHT: f64 = 0.01;
/// Kantenlänge des Handle-Quadrats.
pub const HANDLE_SQUARE_SIZE: f64 = 0.03;

/// Gesammelte Overlay-Dreiecke (je drei Vertices ein Dreieck).
#[derive(Debug, Clone, Default)]
pub struct DebugOverlay {
    vertices: Vec<DebugVertex>,
}

impl DebugOverlay {
    /// Leeres Overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut das Overlay für die aktuelle Kreisliste: alle Kreise plus alle Handles.
    pub fn for_curve(curve: &CircleCurve) -> Result<Self, GeometryError> {
        let mut overlay = Self::new();
        let count = curve.len().max(1) as f32;
        for (i, circle) in curve.circles().iter().enumerate() {
            overlay.push_circle(circle, i as f32 / count);
        }
        for (a, b) in curve.anchors()? {
            overlay.push_anchor(&a);
            overlay.push_anchor(&b);
        }
        log::trace!(
            "Debug-Overlay: {} Kreise, {} Vertices",
            curve.len(),
            overlay.vertices.len()
        );
        Ok(overlay)
    }

    /// Kreisfläche als Dreiecksfächer um den Mittelpunkt.
    pub fn push_circle(&mut self, circle: &Circle, color_index: f32) {
        let center = circle.center;
        for i in 0..CIRCLE_SEGMENTS {
            let a = i as f64 / CIRCLE_SEGMENTS as f64 * TAU;
            let b = (i + 1) as f64 / CIRCLE_SEGMENTS as f64 * TAU;
            let p1 = circle.point_at(a);
            let p2 = circle.point_at(b);
            self.push_triangle([center, p1, p2], color_index);
        }
    }

    /// Gedrehtes Rechteck (zwei Dreiecke) um `position`.
    pub fn push_square(&mut self, position: Point2D, width: f64, height: f64, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let hw = width / 2.0;
        let hh = height / 2.0;
        let corner = |x: f64, y: f64| Point2D::new(x * cos - y * sin, x * sin + y * cos) + position;
        let bl = corner(-hw, -hh);
        let br = corner(hw, -hh);
        let tr = corner(hw, hh);
        let tl = corner(-hw, hh);
        self.push_triangle([bl, br, tr], HANDLE_COLOR_INDEX);
        self.push_triangle([bl, tr, tl], HANDLE_COLOR_INDEX);
    }

    /// Linie als dünnes Rechteck zwischen `from` und `to`.
    pub fn push_line(&mut self, from: Point2D, to: Point2D, weight: f64) {
        let delta = from - to;
        let angle = delta.y.atan2(delta.x);
        let width = delta.length() + weight;
        self.push_square((from + to) / 2.0, width, weight, angle);
    }

    /// Handle eines Ankers: Linie zum Handle-Punkt plus um 45° gedrehtes Quadrat.
    pub fn push_anchor(&mut self, anchor: &Anchor) {
        let handle_position = anchor.handle_point();
        let angle = anchor.handle.y.atan2(anchor.handle.x) + FRAC_PI_4;
        self.push_line(anchor.position, handle_position, HANDLE_LINE_WEIGHT);
        self.push_square(handle_position, HANDLE_SQUARE_SIZE, HANDLE_SQUARE_SIZE, angle);
    }

    fn push_triangle(&mut self, points: [Point2D; 3], color_index: f32) {
        self.vertices
            .extend(points.iter().map(|p| DebugVertex::new(p.x, p.y, color_index)));
    }

    /// Alle Vertices (je drei ein Dreieck).
    pub fn vertices(&self) -> &[DebugVertex] {
        &self.vertices
    }

    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Flache `(x, y, colorIndex)`-Sicht für den Buffer-Upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}
