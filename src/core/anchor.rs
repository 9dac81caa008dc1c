//! Punkte auf Kreisen und Bézier-Anker.

use super::circle::Circle;
use super::geometry::{perpendicular, Point2D};

/// Punkt auf dem Umfang eines Kreises, identifiziert über seinen Winkel.
///
/// Hält nur eine geliehene Referenz auf den Kreis: `CirclePoint`s sind
/// kurzlebig und werden pro Tick aus der Kreisliste neu berechnet.
#[derive(Debug, Clone, Copy)]
pub struct CirclePoint<'a> {
    /// Kreis, auf dem der Punkt liegt
    pub circle: &'a Circle,
    /// Winkel in Radiant (0 = oben, im Uhrzeigersinn positiv)
    pub angle: f64,
}

impl<'a> CirclePoint<'a> {
    /// Erstellt einen neuen Kreispunkt.
    pub fn new(circle: &'a Circle, angle: f64) -> Self {
        Self { circle, angle }
    }

    /// Gibt `true` zurück, wenn beide Punkte auf demselben Kreis-Objekt liegen.
    ///
    /// Verglichen wird die Identität, nicht die Werte: zwei gleich große Kreise
    /// an derselben Stelle sind trotzdem verschiedene Kreise der Folge.
    pub fn same_circle(&self, other: &CirclePoint<'_>) -> bool {
        std::ptr::eq(self.circle, other.circle)
    }

    /// Weltposition des Punkts.
    pub fn position(&self) -> Point2D {
        self.circle.point_at(self.angle)
    }

    /// Wandelt den Punkt in einen Anker mit normierter Tangente um.
    ///
    /// Die Tangente zeigt gegen den Uhrzeigersinn; die Anker-Builder
    /// skalieren und drehen sie passend zur Laufrichtung.
    pub fn to_anchor(&self) -> Anchor {
        let local = self.position() - self.circle.center;
        Anchor::new(self.position(), perpendicular(local).normalize_or_zero())
    }
}

/// Bézier-Kontrollpunkt: Position auf der Kurve plus Tangenten-Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Punkt auf der Kurve
    pub position: Point2D,
    /// Handle-Vektor relativ zur Position
    pub handle: Point2D,
}

impl Anchor {
    /// Erstellt einen neuen Anker.
    pub fn new(position: Point2D, handle: Point2D) -> Self {
        Self { position, handle }
    }

    /// Absolute Position des Handle-Endpunkts (`position + handle`).
    pub fn handle_point(&self) -> Point2D {
        self.position + self.handle
    }

    /// Skaliert den Handle um `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            handle: self.handle * factor,
            ..self
        }
    }

    /// Kehrt die Handle-Richtung um.
    pub fn inverted(self) -> Self {
        self.scaled(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;
    use std::f64::consts::PI;

    #[test]
    fn test_to_anchor_top_point() {
        let circle = Circle::new(DVec2::new(1.0, 1.0), 2.0, true);
        let anchor = CirclePoint::new(&circle, 0.0).to_anchor();
        assert_relative_eq!(anchor.position.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(anchor.position.y, 3.0, epsilon = 1e-12);
        // Tangente oben zeigt nach -X (gegen den Uhrzeigersinn)
        assert_relative_eq!(anchor.handle.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(anchor.handle.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_anchor_handle_is_tangent() {
        let circle = Circle::new(DVec2::new(-0.3, 0.4), 0.7, false);
        for i in 0..8 {
            let angle = i as f64 * PI / 4.0 + 0.1;
            let anchor = CirclePoint::new(&circle, angle).to_anchor();
            let radial = anchor.position - circle.center;
            assert_relative_eq!(anchor.handle.dot(radial), 0.0, epsilon = 1e-12);
            assert_relative_eq!(anchor.handle.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_same_circle_uses_identity() {
        let a = Circle::new(DVec2::ZERO, 1.0, true);
        let b = a.clone();
        let pa = CirclePoint::new(&a, 0.0);
        assert!(pa.same_circle(&CirclePoint::new(&a, 1.0)));
        assert!(!pa.same_circle(&CirclePoint::new(&b, 0.0)));
    }

    #[test]
    fn test_anchor_inverted() {
        let anchor = Anchor::new(DVec2::new(1.0, 2.0), DVec2::new(0.5, -0.5)).inverted();
        assert_eq!(anchor.handle, DVec2::new(-0.5, 0.5));
        assert_eq!(anchor.handle_point(), DVec2::new(0.5, 2.5));
    }
}
