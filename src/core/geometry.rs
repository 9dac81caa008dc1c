//! Winkel- und Vektor-Hilfsfunktionen für die Kreis-Geometrie.
//!
//! Winkelkonvention: 0 = „oben“ (+Y), positiv im Uhrzeigersinn.
//! Ein Punkt auf dem Kreis liegt bei `center + (sin(a), cos(a)) · r`.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// 2D-Punkt bzw. 2D-Vektor der Kurven-Engine.
pub type Point2D = DVec2;

/// Winkel des Vektors `from → to` in der Kreis-Konvention (`atan2(dx, dy)`).
pub fn bearing(from: Point2D, to: Point2D) -> f64 {
    let v = to - from;
    v.x.atan2(v.y)
}

/// Punkt auf einem Kreis für den gegebenen Winkel.
pub fn point_at_angle(center: Point2D, radius: f64, angle: f64) -> Point2D {
    center + DVec2::new(angle.sin(), angle.cos()) * radius
}

/// Mathematisches Modulo (Ergebnis immer in `[0, n)` für `n > 0`).
pub fn modulo(a: f64, n: f64) -> f64 {
    a - (a / n).floor() * n
}

/// Normalisiert einen Winkel nach `[0, 2π)`.
pub fn mod_tau(angle: f64) -> f64 {
    modulo(angle, TAU)
}

/// Vorzeichenbehaftete kürzeste Differenz `a - b` in `[-π, π)`.
pub fn diff_angles(a: f64, b: f64) -> f64 {
    modulo(a - b + PI, TAU) - PI
}

/// Rohe Winkeldifferenz `b - a` in Laufrichtung des Kreises.
///
/// Im Uhrzeigersinn ist das Ergebnis `>= 0`, gegen den Uhrzeigersinn `<= 0`
/// (sofern beide Winkel in `[0, 2π)` liegen).
pub fn diff_angles_direction(a: f64, b: f64, clockwise: bool) -> f64 {
    let mut a = a;
    let mut b = b;
    if !clockwise && a < b {
        a += TAU;
    }
    if clockwise && b < a {
        b += TAU;
    }
    b - a
}

/// Senkrechte (90° gegen den Uhrzeigersinn gedreht, in Y-oben-Koordinaten).
pub fn perpendicular(v: Point2D) -> Point2D {
    DVec2::new(-v.y, v.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bearing_convention() {
        let origin = Point2D::ZERO;
        assert_relative_eq!(bearing(origin, DVec2::new(0.0, 1.0)), 0.0);
        assert_relative_eq!(bearing(origin, DVec2::new(1.0, 0.0)), PI / 2.0);
        assert_relative_eq!(bearing(origin, DVec2::new(-1.0, 0.0)), -PI / 2.0);
    }

    #[test]
    fn test_point_at_angle_matches_bearing() {
        let center = DVec2::new(2.0, -1.0);
        let p = point_at_angle(center, 3.0, 1.1);
        assert_relative_eq!(p.distance(center), 3.0, epsilon = 1e-12);
        assert_relative_eq!(bearing(center, p), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_mod_tau_negative() {
        assert_relative_eq!(mod_tau(-PI / 2.0), 1.5 * PI);
        assert_relative_eq!(mod_tau(TAU + 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_angles_wraps_shortest() {
        assert_relative_eq!(diff_angles(0.1, TAU - 0.1), 0.2, epsilon = 1e-12);
        assert_relative_eq!(diff_angles(TAU - 0.1, 0.1), -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_angles_direction_sign() {
        // Uhrzeigersinn: immer vorwärts, ggf. über 2π hinweg
        assert_relative_eq!(diff_angles_direction(1.0, 0.5, true), TAU - 0.5);
        assert_relative_eq!(diff_angles_direction(0.5, 1.0, true), 0.5);
        // Gegen den Uhrzeigersinn: rückwärts
        assert_relative_eq!(diff_angles_direction(1.0, 0.5, false), -0.5);
        assert_relative_eq!(diff_angles_direction(0.5, 1.0, false), -(TAU - 0.5));
    }

    #[test]
    fn test_perpendicular_is_orthogonal() {
        let v = DVec2::new(0.3, -0.7);
        assert_relative_eq!(perpendicular(v).dot(v), 0.0);
    }
}
