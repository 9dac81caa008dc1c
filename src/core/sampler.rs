//! Gleichmäßige Abtastung eines Kurvenfensters nach Bogenlänge.

use super::geometry::Point2D;
use super::path::CompositeCurve;

/// Tastet `divisions` Punkte zwischen den Bogenlängen `start` und `end` ab.
///
/// Beide Fenstergrenzen sind enthalten; `start > end` läuft rückwärts
/// (Kopf → Schwanz). Bei einer Kurve ohne Länge wird der Startpunkt
/// wiederholt, statt NaN zu erzeugen.
pub fn spaced_points_between(
    curve: &CompositeCurve,
    start: f64,
    end: f64,
    divisions: usize,
) -> Vec<Point2D> {
    let total = curve.total_length();
    if total <= 0.0 {
        return vec![curve.start_point(); divisions];
    }

    let u_start = start / total;
    let u_end = end / total;
    let u_length = u_end - u_start;
    let last = divisions.saturating_sub(1).max(1) as f64;

    (0..divisions)
        .map(|i| curve.point_at(u_start + u_length * (i as f64 / last)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bezier::CubicSegment;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn straight(length: f64) -> CompositeCurve {
        let end = DVec2::new(length, 0.0);
        CompositeCurve::new(vec![CubicSegment::new([
            DVec2::ZERO,
            end / 3.0,
            end * 2.0 / 3.0,
            end,
        ])])
    }

    #[test]
    fn test_window_includes_both_ends() {
        let curve = straight(10.0);
        let points = spaced_points_between(&curve, 2.0, 6.0, 5);
        assert_eq!(points.len(), 5);
        for (i, p) in points.iter().enumerate() {
            assert_relative_eq!(p.x, 2.0 + i as f64, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_reverse_window() {
        let curve = straight(10.0);
        let points = spaced_points_between(&curve, 8.0, 4.0, 3);
        assert_relative_eq!(points[0].x, 8.0, epsilon = 1e-6);
        assert_relative_eq!(points[2].x, 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_curve_repeats_single_point() {
        let points = spaced_points_between(&CompositeCurve::default(), 0.0, 1.0, 4);
        assert_eq!(points, vec![DVec2::ZERO; 4]);
    }

    #[test]
    fn test_degenerate_division_counts() {
        let curve = straight(10.0);
        assert!(spaced_points_between(&curve, 0.0, 10.0, 0).is_empty());
        let one = spaced_points_between(&curve, 3.0, 10.0, 1);
        assert_eq!(one.len(), 1);
        assert_relative_eq!(one[0].x, 3.0, epsilon = 1e-6);
    }
}
