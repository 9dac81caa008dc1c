//! Anker-Builder: wandelt Join-Paare in Bézier-Anker um.
//!
//! - Brücke zwischen zwei Kreisen: Handle-Länge aus Knick, Radius und Abstand
//! - Bogen auf einem Kreis: klassische Kreisbogen-Näherung (Winkel · r / 3)

use super::anchor::Anchor;
use super::error::GeometryError;
use super::geometry::diff_angles;
use super::join::Join;
use serde::{Deserialize, Serialize};

/// Ersatzwert für den Knick, wenn die Tangentenrechnung entartet (NaN).
pub const KINK_SENTINEL: f64 = 100.0;

/// Gewichte der Handle-Länge an Brücken-Ankern.
///
/// `länge = variant · (1 + knick·kink) · (1 + radius·radius_amount) · (1 + abstand·distance)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleCoefficients {
    /// Basis-Skalierung
    pub variant: f64,
    /// Einfluss des Knicks
    pub kink: f64,
    /// Einfluss des Kreisradius
    pub radius: f64,
    /// Einfluss des Anker-Abstands
    pub distance: f64,
}

impl Default for HandleCoefficients {
    fn default() -> Self {
        Self {
            variant: 0.1,
            kink: 0.2,
            radius: 2.0,
            distance: 0.5,
        }
    }
}

impl HandleCoefficients {
    /// Betrag der Handle-Länge (ohne Vorzeichen der Laufrichtung).
    pub fn handle_length(&self, kink: f64, radius: f64, distance: f64) -> f64 {
        self.variant
            * (1.0 + kink * self.kink)
            * (1.0 + radius * self.radius)
            * (1.0 + distance * self.distance)
    }
}

/// Knick eines Joins: Winkelabstand zwischen tatsächlichem und idealem Punkt.
///
/// Nicht-endliche Ergebnisse werden als maximaler Knick gewertet.
pub fn calc_kink(join: &Join<'_>) -> f64 {
    let kink = diff_angles(join.point.angle, join.ideal_point.angle).abs();
    if kink.is_nan() {
        KINK_SENTINEL
    } else {
        kink
    }
}

/// Anker für die Brücke zwischen zwei verschiedenen Kreisen.
pub fn circle_join_anchors(
    join_a: &Join<'_>,
    join_b: &Join<'_>,
    coefficients: &HandleCoefficients,
) -> Result<(Anchor, Anchor), GeometryError> {
    let point_a = join_a.point;
    let point_b = join_b.point;
    if point_a.same_circle(&point_b) {
        return Err(GeometryError::BridgeOnSameCircle {
            from: point_a.angle,
            to: point_b.angle,
        });
    }

    let kink_a = calc_kink(join_a);
    let kink_b = calc_kink(join_b);

    let anchor_a = point_a.to_anchor();
    let anchor_b = point_b.to_anchor();
    let distance = anchor_a.position.distance(anchor_b.position);

    // Handles zeigen in Fahrtrichtung (Start) bzw. gegen sie (Ende)
    let sign_a = if point_a.circle.clockwise { -1.0 } else { 1.0 };
    let sign_b = if point_b.circle.clockwise { 1.0 } else { -1.0 };

    let length_a = coefficients.handle_length(kink_a, point_a.circle.radius, distance);
    let length_b = coefficients.handle_length(kink_b, point_b.circle.radius, distance);

    Ok((
        anchor_a.scaled(sign_a * length_a),
        anchor_b.scaled(sign_b * length_b),
    ))
}

/// Anker-Paare für den Bogen zwischen zwei Punkten desselben Kreises.
pub fn arc_join_anchors(
    join_a: &Join<'_>,
    join_b: &Join<'_>,
    resolution: u32,
) -> Result<Vec<(Anchor, Anchor)>, GeometryError> {
    let point_a = join_a.point;
    let point_b = join_b.point;
    if !point_a.same_circle(&point_b) {
        return Err(GeometryError::ArcAcrossCircles {
            from: point_a.angle,
            to: point_b.angle,
        });
    }

    let circle = point_a.circle;
    let arc_points = circle.arc_points(&point_a, &point_b, resolution);

    Ok(arc_points
        .windows(2)
        .map(|w| {
            let size = (w[0].angle - w[1].angle).abs() * circle.radius / 3.0;
            let anchor_a = w[0].to_anchor().scaled(size);
            let anchor_b = w[1].to_anchor().scaled(size);
            if circle.clockwise {
                (anchor_a.inverted(), anchor_b)
            } else {
                (anchor_a, anchor_b.inverted())
            }
        })
        .collect())
}
