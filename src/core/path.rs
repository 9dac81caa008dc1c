//! Zusammengesetzte Kurve aus kubischen Segmenten mit Arc-Length-Zugriff.

use super::bezier::CubicSegment;
use super::geometry::Point2D;

/// Geordnete Folge von Bézier-Segmenten; Längen werden beim Aufbau summiert.
#[derive(Debug, Clone, Default)]
pub struct CompositeCurve {
    segments: Vec<CubicSegment>,
    /// Kumulierte Länge bis einschließlich Segment `i`
    cumulative: Vec<f64>,
}

impl CompositeCurve {
    /// Baut die Kurve aus Segmenten auf.
    pub fn new(segments: Vec<CubicSegment>) -> Self {
        let cumulative = segments
            .iter()
            .scan(0.0, |sum, seg| {
                *sum += seg.length();
                Some(*sum)
            })
            .collect();
        Self {
            segments,
            cumulative,
        }
    }

    /// Alle Segmente in Kurvenreihenfolge.
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Gibt `true` zurück, wenn die Kurve keine Segmente hat.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Gesamtlänge (0 für leere Kurven).
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Startpunkt; Ursprung, wenn die Kurve leer ist.
    pub fn start_point(&self) -> Point2D {
        self.segments
            .first()
            .map(CubicSegment::start)
            .unwrap_or(Point2D::ZERO)
    }

    /// Endpunkt; Ursprung, wenn die Kurve leer ist.
    pub fn end_point(&self) -> Point2D {
        self.segments
            .last()
            .map(CubicSegment::end)
            .unwrap_or(Point2D::ZERO)
    }

    /// Punkt bei Längenanteil `u ∈ [0, 1]` der Gesamtkurve.
    ///
    /// Werte außerhalb werden geklemmt; Segmente ohne Länge werden übersprungen.
    pub fn point_at(&self, u: f64) -> Point2D {
        let total = self.total_length();
        if total <= 0.0 || !u.is_finite() {
            return self.start_point();
        }
        self.point_at_length(u.clamp(0.0, 1.0) * total)
    }

    /// Punkt bei absoluter Bogenlänge `distance` (geklemmt auf `[0, Gesamtlänge]`).
    pub fn point_at_length(&self, distance: f64) -> Point2D {
        let total = self.total_length();
        if self.segments.is_empty() {
            return Point2D::ZERO;
        }
        let distance = distance.clamp(0.0, total);

        // Erstes Segment, dessen kumulierte Länge die Distanz erreicht
        let idx = self
            .cumulative
            .partition_point(|&len| len < distance)
            .min(self.segments.len() - 1);

        let segment = &self.segments[idx];
        let length = segment.length();
        if length <= 0.0 {
            return segment.end();
        }
        let before = self.cumulative[idx] - length;
        segment.point_at((distance - before) / length)
    }
}
