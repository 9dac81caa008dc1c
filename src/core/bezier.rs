//! Kubische Bézier-Segmente mit Arc-Length-Lookup-Tabelle.

use super::anchor::Anchor;
use super::geometry::Point2D;

/// Anzahl der Sehnen-Samples für die Längentabelle eines Segments.
pub const ARC_LENGTH_DIVISIONS: usize = 200;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, t: f64) -> Point2D {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Ein kubisches Bézier-Segment der Gesamtkurve.
#[derive(Debug, Clone)]
pub struct CubicSegment {
    /// Kontrollpunkte `[P0, P1, P2, P3]`
    pub control_points: [Point2D; 4],
    /// Kumulierte Sehnenlängen für `t = i / ARC_LENGTH_DIVISIONS`
    arc_lengths: Vec<f64>,
}

impl CubicSegment {
    /// Erstellt ein Segment aus vier Kontrollpunkten und berechnet die Längentabelle.
    pub fn new(control_points: [Point2D; 4]) -> Self {
        let [p0, p1, p2, p3] = control_points;
        let mut arc_lengths = Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1);
        arc_lengths.push(0.0);
        let mut prev = p0;
        let mut cumulative = 0.0;
        for i in 1..=ARC_LENGTH_DIVISIONS {
            let t = i as f64 / ARC_LENGTH_DIVISIONS as f64;
            let p = cubic_bezier(p0, p1, p2, p3, t);
            cumulative += prev.distance(p);
            arc_lengths.push(cumulative);
            prev = p;
        }
        Self {
            control_points,
            arc_lengths,
        }
    }

    /// Baut das Segment zwischen zwei Ankern:
    /// `A.position, A.position + A.handle, B.position + B.handle, B.position`.
    pub fn from_anchors(a: &Anchor, b: &Anchor) -> Self {
        Self::new([a.position, a.handle_point(), b.handle_point(), b.position])
    }

    /// Startpunkt (P0).
    pub fn start(&self) -> Point2D {
        self.control_points[0]
    }

    /// Endpunkt (P3).
    pub fn end(&self) -> Point2D {
        self.control_points[3]
    }

    /// Approximierte Bogenlänge.
    pub fn length(&self) -> f64 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Punkt für den Kurvenparameter `t ∈ [0, 1]`.
    pub fn point(&self, t: f64) -> Point2D {
        let [p0, p1, p2, p3] = self.control_points;
        cubic_bezier(p0, p1, p2, p3, t)
    }

    /// Rechnet einen Längenanteil `u ∈ [0, 1]` in den Kurvenparameter `t` um.
    pub fn u_to_t(&self, u: f64) -> f64 {
        let total = self.length();
        if total <= f64::EPSILON {
            return u.clamp(0.0, 1.0);
        }
        let target = u.clamp(0.0, 1.0) * total;
        let idx = self
            .arc_lengths
            .partition_point(|&len| len < target)
            .clamp(1, ARC_LENGTH_DIVISIONS);

        let len_before = self.arc_lengths[idx - 1];
        let len_after = self.arc_lengths[idx];
        let frac = if (len_after - len_before).abs() > f64::EPSILON {
            (target - len_before) / (len_after - len_before)
        } else {
            0.0
        };
        ((idx - 1) as f64 + frac) / ARC_LENGTH_DIVISIONS as f64
    }

    /// Punkt bei Längenanteil `u ∈ [0, 1]` (gleichmäßig nach Bogenlänge).
    pub fn point_at(&self, u: f64) -> Point2D {
        self.point(self.u_to_t(u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    #[test]
    fn test_cubic_bezier_endpoints() {
        let p0 = DVec2::new(0.0, 0.0);
        let p1 = DVec2::new(3.0, 10.0);
        let p2 = DVec2::new(7.0, 10.0);
        let p3 = DVec2::new(10.0, 0.0);
        assert_eq!(cubic_bezier(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(cubic_bezier(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn test_cubic_bezier_symmetry() {
        // Symmetrische S-Kurve → Mittelpunkt bei (5, 5)
        let mid = cubic_bezier(
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            0.5,
        );
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_straight_segment_length() {
        let seg = CubicSegment::new([
            DVec2::new(0.0, 1.0),
            DVec2::new(0.75, 1.0),
            DVec2::new(2.25, 1.0),
            DVec2::new(3.0, 1.0),
        ]);
        assert_relative_eq!(seg.length(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_at_is_arc_length_uniform() {
        // Ungleich verteilte Kontrollpunkte: t=0.5 liegt nicht bei halber Länge
        let seg = CubicSegment::new([
            DVec2::new(0.0, 0.0),
            DVec2::new(0.1, 0.0),
            DVec2::new(0.2, 0.0),
            DVec2::new(10.0, 0.0),
        ]);
        let half = seg.point_at(0.5);
        assert_relative_eq!(half.x, 5.0, epsilon = 0.05);
        assert_relative_eq!(seg.point_at(0.0).x, 0.0);
        assert_relative_eq!(seg.point_at(1.0).x, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_length_segment() {
        let p = DVec2::new(1.0, 2.0);
        let seg = CubicSegment::new([p; 4]);
        assert_eq!(seg.length(), 0.0);
        assert_eq!(seg.point_at(0.7), p);
    }
}
