//! Join-Solver: bestimmt die Übergangspunkte zwischen aufeinanderfolgenden Kreisen.
//!
//! Für jedes Fenster `(prev, current, next)` entstehen ein oder zwei
//! Join-Paare: die Brücke `prev → current` und, falls ein Nachfolger
//! existiert, der Bogen auf `current` bis zum Absprungpunkt Richtung `next`.
//! Der Austrittspunkt eines Fensters ist der Eintrittspunkt des nächsten,
//! dadurch ist die Gesamtkurve lückenlos.

use super::anchor::CirclePoint;
use super::circle::Circle;
use super::geometry::{diff_angles_direction, mod_tau};
use std::f64::consts::{PI, TAU};

/// Übergangspunkt samt „idealem“ Tangentenpunkt.
///
/// Die Abweichung zwischen beiden ist ein Maß für den Knick der Kurve.
#[derive(Debug, Clone, Copy)]
pub struct Join<'a> {
    /// Tatsächlich verwendeter Punkt
    pub point: CirclePoint<'a>,
    /// Punkt, den ein glatter Übergang verwenden würde
    pub ideal_point: CirclePoint<'a>,
}

/// Zwei Joins, zwischen denen ein Kurvenstück entsteht.
#[derive(Debug, Clone, Copy)]
pub struct JoinPair<'a> {
    pub start: Join<'a>,
    pub end: Join<'a>,
}

impl JoinPair<'_> {
    /// `true` für einen Bogen auf einem Kreis, `false` für eine Brücke zwischen zwei Kreisen.
    pub fn is_arc(&self) -> bool {
        self.start.point.same_circle(&self.end.point)
    }
}

/// Berechnet die Join-Paare für das Fenster `prev → current → next`.
///
/// `entry` ist der Austrittspunkt des vorherigen Fensters auf `prev`; am
/// Kurvenanfang (`None`) wird die Außentangente passend zu `prev`s
/// Laufrichtung verwendet.
pub fn find_joins<'a>(
    entry: Option<CirclePoint<'a>>,
    prev: &'a Circle,
    current: &'a Circle,
    next: Option<&'a Circle>,
) -> Vec<JoinPair<'a>> {
    let prev_current = prev.tangent_points(current);
    let same_winding = prev.clockwise == current.clockwise;

    let join_a = Join {
        point: entry.unwrap_or_else(|| prev_current.outer.for_winding(prev.clockwise).this),
        ideal_point: prev_current.ideal(prev.clockwise, same_winding).this,
    };

    let mut join_b = Join {
        point: prev_current.outer.for_winding(current.clockwise).other,
        ideal_point: prev_current.ideal(prev.clockwise, same_winding).other,
    };

    let Some(next) = next else {
        return vec![JoinPair {
            start: join_a,
            end: join_b,
        }];
    };

    let current_next = current.tangent_points(next);
    let join_c = Join {
        point: current_next.outer.for_winding(current.clockwise).this,
        ideal_point: current_next
            .ideal(current.clockwise, current.clockwise == next.clockwise)
            .this,
    };

    let point_diff = diff_angles_direction(
        join_b.point.angle,
        join_c.point.angle,
        current.clockwise,
    );
    let ideal_diff = diff_angles_direction(
        join_b.ideal_point.angle,
        join_c.ideal_point.angle,
        current.clockwise,
    );

    if point_diff.abs() > PI && ideal_diff.abs() < PI {
        // Der Bogen würde den langen Weg um den Kreis nehmen: Eintrittspunkt
        // in die Mitte des kurzen Rests schieben und den Bogen weglassen.
        let corrected = mod_tau(join_b.point.angle + (TAU - point_diff.abs()) / 2.0);
        log::trace!(
            "Loop-Back-Korrektur: {:.4} → {:.4} (Bogen {:.4})",
            join_b.point.angle,
            corrected,
            point_diff
        );
        join_b.point.angle = corrected;
        if same_winding {
            // Bei gleicher Laufrichtung sind Punkt und Idealpunkt dieselbe Tangente
            join_b.ideal_point.angle = corrected;
        }
        return vec![JoinPair {
            start: join_a,
            end: join_b,
        }];
    }

    vec![
        JoinPair {
            start: join_a,
            end: join_b,
        },
        JoinPair {
            start: join_b,
            end: join_c,
        },
    ]
}

/// Berechnet die Join-Paare aller Fenster in einem Vorwärts-Durchlauf.
///
/// Eintrag `i` gehört zum Fenster, das auf `circles[i + 1]` ankommt.
/// Der Austritts-Join jedes Fensters wird als Eintritt des nächsten
/// weitergereicht, statt den Präfix erneut zu berechnen.
pub fn join_windows(circles: &[Circle]) -> Vec<Vec<JoinPair<'_>>> {
    let mut windows = Vec::with_capacity(circles.len().saturating_sub(1));
    let mut entry: Option<CirclePoint<'_>> = None;

    for i in 1..circles.len() {
        let joins = find_joins(entry, &circles[i - 1], &circles[i], circles.get(i + 1));
        entry = joins.last().map(|pair| pair.end.point);
        windows.push(joins);
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn scenario() -> Vec<Circle> {
        vec![
            Circle::new(DVec2::new(0.0, 0.0), 1.0, true),
            Circle::new(DVec2::new(3.0, 0.0), 1.0, true),
            Circle::new(DVec2::new(6.0, 0.0), 1.0, false),
        ]
    }

    #[test]
    fn test_terminal_window_has_single_bridge() {
        let circles = scenario();
        let joins = find_joins(None, &circles[0], &circles[1], None);
        assert_eq!(joins.len(), 1);
        assert!(!joins[0].is_arc());
    }

    #[test]
    fn test_same_winding_uses_outer_tangent() {
        let circles = scenario();
        let joins = find_joins(None, &circles[0], &circles[1], Some(&circles[2]));
        assert_eq!(joins.len(), 2);
        let bridge = joins[0];
        let a = bridge.start.point.position();
        let b = bridge.end.point.position();
        assert_relative_eq!(a.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(b.y, 1.0, epsilon = 1e-12);
        // Idealpunkt == tatsächlicher Punkt → kein Knick
        assert_relative_eq!(bridge.start.point.angle, bridge.start.ideal_point.angle);
        assert!(joins[1].is_arc());
    }

    #[test]
    fn test_opposite_winding_ideal_is_inner_tangent() {
        let circles = scenario();
        let joins = find_joins(None, &circles[1], &circles[2], None);
        let bridge = joins[0];
        // Tatsächliche Punkte: oben auf dem Uhrzeiger-Kreis, unten auf dem Gegenuhrzeiger-Kreis
        assert_relative_eq!(bridge.start.point.position().y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bridge.end.point.position().y, -1.0, epsilon = 1e-12);
        // Idealpunkte liegen auf der inneren Tangente
        let ideal_a = bridge.start.ideal_point.position();
        let ideal_b = bridge.end.ideal_point.position();
        assert!(ideal_a.x > 3.0 && ideal_a.y > 0.0);
        assert!(ideal_b.x < 6.0 && ideal_b.y < 0.0);
    }

    #[test]
    fn test_windows_carry_exit_point_forward() {
        let circles = scenario();
        let windows = join_windows(&circles);
        assert_eq!(windows.len(), 2);
        let exit = windows[0].last().unwrap().end.point;
        let entry = windows[1][0].start.point;
        assert!(exit.same_circle(&entry));
        assert_relative_eq!(exit.angle, entry.angle);
    }

    #[test]
    fn test_loop_back_correction_drops_arc() {
        // Nachfolger liegt knapp hinter dem Eintrittspunkt: der Uhrzeiger-Bogen
        // müsste fast ganz herum laufen, die Idealtangente aber nicht.
        let direction: f64 = 1.27;
        let circles = vec![
            Circle::new(DVec2::new(0.0, 0.0), 1.0, true),
            Circle::new(DVec2::new(3.0, 0.0), 1.0, true),
            Circle::new(
                DVec2::new(3.0 + 3.0 * direction.sin(), 3.0 * direction.cos()),
                1.0,
                false,
            ),
        ];
        let joins = find_joins(None, &circles[0], &circles[1], Some(&circles[2]));
        assert_eq!(joins.len(), 1);
        let join_b = joins[0].end;
        let expected = (PI / 2.0 - direction) / 2.0;
        assert_relative_eq!(join_b.point.angle, expected, epsilon = 1e-9);
        // Gleiche Laufrichtung: Idealpunkt wandert mit
        assert_relative_eq!(join_b.ideal_point.angle, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_short_arc_is_kept() {
        let direction: f64 = 1.9;
        let circles = vec![
            Circle::new(DVec2::new(0.0, 0.0), 1.0, true),
            Circle::new(DVec2::new(3.0, 0.0), 1.0, true),
            Circle::new(
                DVec2::new(3.0 + 3.0 * direction.sin(), 3.0 * direction.cos()),
                1.0,
                true,
            ),
        ];
        let joins = find_joins(None, &circles[0], &circles[1], Some(&circles[2]));
        assert_eq!(joins.len(), 2);
        assert!(joins[1].is_arc());
        assert_relative_eq!(joins[1].end.point.angle, direction - PI / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_join_windows_empty_and_single() {
        assert!(join_windows(&[]).is_empty());
        let one = vec![Circle::new(DVec2::ZERO, 1.0, true)];
        assert!(join_windows(&one).is_empty());
    }
}
