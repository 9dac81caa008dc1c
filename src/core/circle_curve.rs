//! CircleCurve: baut aus der Kreisliste die vollständige Bézier-Kurve.
//!
//! Die Kurve wird nicht gecacht: jede Abfrage leitet Segmente und Längen
//! frisch aus der aktuellen Kreisliste ab, da diese sich zwischen zwei
//! Frames ändert.

use super::anchor::Anchor;
use super::bezier::CubicSegment;
use super::circle::{Circle, ARC_RESOLUTION};
use super::error::GeometryError;
use super::join::{join_windows, JoinPair};
use super::join_anchors::{arc_join_anchors, circle_join_anchors, HandleCoefficients};
use super::path::CompositeCurve;
use serde::{Deserialize, Serialize};

/// Parameter des Kurvenaufbaus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// Bogen-Unterteilung (Segmente pro Vollkreis, zzgl. 1)
    pub arc_resolution: u32,
    /// Gewichte der Brücken-Handles
    pub handles: HandleCoefficients,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            arc_resolution: ARC_RESOLUTION,
            handles: HandleCoefficients::default(),
        }
    }
}

/// Kurvenstück, das von `circles[i]` kommend auf `circles[i + 1]` ankommt
/// und ggf. dessen Bogen bis zum Absprung enthält.
#[derive(Debug, Clone, Default)]
pub struct CircleSection {
    pub segments: Vec<CubicSegment>,
}

impl CircleSection {
    /// Summierte Länge aller Segmente.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(CubicSegment::length).sum()
    }
}

/// Geordnete Kreisfolge, aus der die Schlangen-Kurve abgeleitet wird.
#[derive(Debug, Clone, Default)]
pub struct CircleCurve {
    circles: Vec<Circle>,
    settings: CurveSettings,
}

impl CircleCurve {
    /// Erstellt eine Kurve mit Standard-Einstellungen.
    pub fn new(circles: Vec<Circle>) -> Self {
        Self::with_settings(circles, CurveSettings::default())
    }

    /// Erstellt eine Kurve mit eigenen Einstellungen.
    pub fn with_settings(circles: Vec<Circle>, settings: CurveSettings) -> Self {
        Self { circles, settings }
    }

    /// Read-only Sicht auf die Kreise.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Anzahl der Kreise.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Gibt `true` zurück, wenn keine Kreise vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Letzter Kreis der Folge.
    pub fn last(&self) -> Option<&Circle> {
        self.circles.last()
    }

    /// Hängt einen Kreis an das Ende an.
    pub fn push(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    /// Entfernt bis zu `count` Kreise am Anfang; gibt die tatsächliche Anzahl zurück.
    pub fn prune_front(&mut self, count: usize) -> usize {
        let count = count.min(self.circles.len());
        self.circles.drain(..count);
        count
    }

    /// Join-Paare aller Fenster (siehe [`join_windows`]).
    pub fn joins(&self) -> Vec<Vec<JoinPair<'_>>> {
        join_windows(&self.circles)
    }

    /// Wandelt die Join-Paare eines Fensters in Anker-Paare um.
    pub fn find_anchors(
        &self,
        joins: &[JoinPair<'_>],
    ) -> Result<Vec<(Anchor, Anchor)>, GeometryError> {
        let mut anchors = Vec::with_capacity(joins.len() * 2);
        for pair in joins {
            if pair.is_arc() {
                anchors.extend(arc_join_anchors(
                    &pair.start,
                    &pair.end,
                    self.settings.arc_resolution,
                )?);
            } else {
                anchors.push(circle_join_anchors(
                    &pair.start,
                    &pair.end,
                    &self.settings.handles,
                )?);
            }
        }
        Ok(anchors)
    }

    /// Alle Anker-Paare der Kurve in Reihenfolge (z.B. für Debug-Overlays).
    pub fn anchors(&self) -> Result<Vec<(Anchor, Anchor)>, GeometryError> {
        let mut anchors = Vec::new();
        for window in self.joins() {
            anchors.extend(self.find_anchors(&window)?);
        }
        Ok(anchors)
    }

    /// Ein Kurvenstück pro Kreis ab Index 1.
    pub fn sections(&self) -> Result<Vec<CircleSection>, GeometryError> {
        self.joins()
            .iter()
            .map(|window| {
                let segments = self
                    .find_anchors(window)?
                    .iter()
                    .map(|(a, b)| CubicSegment::from_anchors(a, b))
                    .collect();
                Ok(CircleSection { segments })
            })
            .collect()
    }

    /// Die vollständige Kurve als Verkettung aller Kurvenstücke.
    pub fn curve(&self) -> Result<CompositeCurve, GeometryError> {
        let segments = self
            .sections()?
            .into_iter()
            .flat_map(|section| section.segments)
            .collect();
        Ok(CompositeCurve::new(segments))
    }

    /// Gesamtlänge der Kurve (0 bei weniger als zwei Kreisen).
    pub fn total_length(&self) -> Result<f64, GeometryError> {
        Ok(self.sections()?.iter().map(CircleSection::length).sum())
    }

    /// Index des Kurvenstücks, in dem die Bogenlänge `position` liegt.
    ///
    /// Liegt `position` hinter dem Kurvenende, wird der letzte gültige
    /// Kreisindex (`len - 1`, bzw. 0 bei leerer Liste) geliefert.
    pub fn circle_for_curve_position(&self, position: f64) -> Result<usize, GeometryError> {
        let mut curve_length = 0.0;
        for (i, section) in self.sections()?.iter().enumerate() {
            curve_length += section.length();
            if curve_length > position {
                return Ok(i);
            }
        }
        Ok(self.circles.len().saturating_sub(1))
    }
}
