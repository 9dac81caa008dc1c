//! Kreis mit Laufrichtung: Homothetie-Zentren, gemeinsame Tangenten, Bogen-Unterteilung.

use super::anchor::CirclePoint;
use super::geometry::{bearing, mod_tau, point_at_angle, Point2D};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Standard-Auflösung der Bogen-Unterteilung (Segmente pro Vollkreis, zzgl. 1).
pub const ARC_RESOLUTION: u32 = 5;

/// Relative Toleranz, ab der zwei Radien als gleich gelten (parallele Außentangenten).
const EQUAL_RADIUS_EPSILON: f64 = 1e-12;

/// Ein Kreis der Schlangen-Folge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Mittelpunkt in Kurvenkoordinaten
    pub center: Point2D,
    /// Radius (> 0)
    pub radius: f64,
    /// Laufrichtung: `true` = im Uhrzeigersinn
    pub clockwise: bool,
}

/// Innere und äußere Homothetie-Zentren zweier Kreise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomotheticCenters {
    /// Liegt zwischen den Kreisen (Schnitt der inneren Tangenten)
    pub inner: Point2D,
    /// Schnitt der äußeren Tangenten; `None` bei gleichen Radien (parallele Tangenten)
    pub outer: Option<Point2D>,
}

/// Tangentenpunkt auf beiden Kreisen für eine gemeinsame Tangente.
#[derive(Debug, Clone, Copy)]
pub struct TangentPair<'a> {
    /// Berührpunkt auf `self`
    pub this: CirclePoint<'a>,
    /// Berührpunkt auf `other`
    pub other: CirclePoint<'a>,
}

/// Beide Tangenten einer Sorte (innen oder außen), nach Laufrichtung benannt.
#[derive(Debug, Clone, Copy)]
pub struct TangentSet<'a> {
    /// Tangente passend zur Fahrt im Uhrzeigersinn
    pub clockwise: TangentPair<'a>,
    /// Tangente passend zur Fahrt gegen den Uhrzeigersinn
    pub anticlockwise: TangentPair<'a>,
}

impl<'a> TangentSet<'a> {
    /// Wählt die Tangente zur gegebenen Laufrichtung.
    pub fn for_winding(&self, clockwise: bool) -> TangentPair<'a> {
        if clockwise {
            self.clockwise
        } else {
            self.anticlockwise
        }
    }
}

/// Alle vier gemeinsamen Tangenten zweier Kreise.
#[derive(Debug, Clone, Copy)]
pub struct TangentPoints<'a> {
    /// Innere Tangenten (kreuzen zwischen den Kreisen)
    pub inner: TangentSet<'a>,
    /// Äußere Tangenten
    pub outer: TangentSet<'a>,
}

impl<'a> TangentPoints<'a> {
    /// „Ideale“ Tangente für den Übergang zwischen zwei Laufrichtungen:
    /// gleiche Richtung → außen, entgegengesetzt → innen (S-Übergang).
    ///
    /// `winding` ist die Richtung, nach der die Tangente benannt wird
    /// (die des Kreises, von dem aus gesehen wird).
    pub fn ideal(&self, winding: bool, same_winding: bool) -> TangentPair<'a> {
        if same_winding {
            self.outer.for_winding(winding)
        } else {
            self.inner.for_winding(winding)
        }
    }
}

impl Circle {
    /// Erstellt einen neuen Kreis.
    pub fn new(center: Point2D, radius: f64, clockwise: bool) -> Self {
        Self {
            center,
            radius,
            clockwise,
        }
    }

    /// Punkt auf dem Umfang für einen Winkel.
    pub fn point_at(&self, angle: f64) -> Point2D {
        point_at_angle(self.center, self.radius, angle)
    }

    /// Gibt `true` zurück, wenn sich die beiden Kreise überlappen.
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    /// Berechnet das innere und äußere Homothetie-Zentrum.
    ///
    /// Bei gleichen Radien existiert kein äußeres Zentrum (es läge im
    /// Unendlichen); dann ist `outer == None`.
    pub fn homothetic_centers(&self, other: &Circle) -> HomotheticCenters {
        let (ra, rb) = (self.radius, other.radius);
        let inner = (self.center * rb + other.center * ra) / (ra + rb);
        let outer = if (ra - rb).abs() <= EQUAL_RADIUS_EPSILON * ra.max(rb) {
            None
        } else {
            Some((self.center * -rb + other.center * ra) / (ra - rb))
        };
        HomotheticCenters { inner, outer }
    }

    /// Berechnet die Berührpunkte aller vier gemeinsamen Tangenten.
    ///
    /// „clockwise“ bezeichnet immer die Tangente, die zur Fahrt im
    /// Uhrzeigersinn passt, unabhängig davon, welcher Kreis größer ist.
    pub fn tangent_points<'a>(&'a self, other: &'a Circle) -> TangentPoints<'a> {
        let centers = self.homothetic_centers(other);

        let (plus, minus) = self.tangents_through(other, centers.inner);
        let inner = TangentSet {
            clockwise: minus,
            anticlockwise: plus,
        };

        let outer = match centers.outer {
            Some(center) => {
                let (plus, minus) = self.tangents_through(other, center);
                if self.radius > other.radius {
                    TangentSet {
                        clockwise: minus,
                        anticlockwise: plus,
                    }
                } else {
                    TangentSet {
                        clockwise: plus,
                        anticlockwise: minus,
                    }
                }
            }
            None => self.parallel_tangents(other),
        };

        TangentPoints { inner, outer }
    }

    /// Tangenten durch ein Homothetie-Zentrum: (Bearing + Halbwinkel, Bearing − Halbwinkel).
    fn tangents_through<'a>(
        &'a self,
        other: &'a Circle,
        center: Point2D,
    ) -> (TangentPair<'a>, TangentPair<'a>) {
        let half_a = (self.radius / self.center.distance(center)).acos();
        let half_b = (other.radius / other.center.distance(center)).acos();
        let local_a = bearing(self.center, center);
        let local_b = bearing(other.center, center);

        let plus = TangentPair {
            this: CirclePoint::new(self, mod_tau(local_a + half_a)),
            other: CirclePoint::new(other, mod_tau(local_b + half_b)),
        };
        let minus = TangentPair {
            this: CirclePoint::new(self, mod_tau(local_a - half_a)),
            other: CirclePoint::new(other, mod_tau(local_b - half_b)),
        };
        (plus, minus)
    }

    /// Außentangenten bei gleichen Radien: parallel zur Mittelpunkt-Achse,
    /// um den Radius senkrecht versetzt.
    fn parallel_tangents<'a>(&'a self, other: &'a Circle) -> TangentSet<'a> {
        let axis = bearing(self.center, other.center);
        let clockwise = mod_tau(axis - FRAC_PI_2);
        let anticlockwise = mod_tau(axis + FRAC_PI_2);
        TangentSet {
            clockwise: TangentPair {
                this: CirclePoint::new(self, clockwise),
                other: CirclePoint::new(other, clockwise),
            },
            anticlockwise: TangentPair {
                this: CirclePoint::new(self, anticlockwise),
                other: CirclePoint::new(other, anticlockwise),
            },
        }
    }

    /// Unterteilt den Bogen von `a` nach `b` in Laufrichtung des Kreises.
    ///
    /// Liefert `floor(spanne / 2π · resolution) + 2` gleichwinklige Punkte
    /// inklusive beider Endpunkte, also mindestens ein Segment.
    pub fn arc_points(
        &self,
        a: &CirclePoint<'_>,
        b: &CirclePoint<'_>,
        resolution: u32,
    ) -> Vec<CirclePoint<'_>> {
        let angle_a = a.angle;
        let mut angle_b = b.angle;
        if self.clockwise && angle_a > angle_b {
            angle_b += TAU;
        }
        if !self.clockwise && angle_a < angle_b {
            angle_b -= TAU;
        }
        let span = angle_b - angle_a;
        let count = (span.abs() / TAU * resolution as f64).floor() as usize + 2;
        let step = span / (count - 1) as f64;

        (0..count)
            .map(|i| CirclePoint::new(self, angle_a + step * i as f64))
            .collect()
    }
}
