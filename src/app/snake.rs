//! Schlangen-Zustand und der reine Update-Schritt pro Tick.
//!
//! Kopf und Schwanz sind Bogenlängen auf der aktuellen Kurve. Pro Tick
//! wandert der Kopf vor, am Ende werden bei Bedarf Kreise angehängt und
//! am Anfang nicht mehr benötigte Kreise entfernt. Die Positionen werden
//! dabei um die weggefallene Länge verschoben, damit die Schlange auf
//! der Kurve stehen bleibt.

use super::generator::CircleGenerator;
use crate::core::{spaced_points_between, CircleCurve, Point2D};
use crate::shared::SnakeOptions;
use anyhow::Context;

/// Sichtbares Fenster der Schlange auf der Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeState {
    /// Vordere Bogenlänge
    pub head: f64,
    /// Hintere Bogenlänge (`head - length`)
    pub tail: f64,
    /// Konstante Fensterlänge
    pub length: f64,
}

impl SnakeState {
    /// Startzustand: Kopf am Kurvenende, Länge als Anteil der Gesamtlänge.
    pub fn initial(total_length: f64, length_fraction: f64) -> Self {
        let length = total_length * length_fraction;
        Self {
            head: total_length,
            tail: total_length - length,
            length,
        }
    }

    /// Startzustand für eine Kurve.
    pub fn for_curve(curve: &CircleCurve, length_fraction: f64) -> anyhow::Result<Self> {
        let total = curve
            .total_length()
            .context("Startlänge der Kurve nicht berechenbar")?;
        Ok(Self::initial(total, length_fraction))
    }
}

/// Ergebnis eines Ticks: neuer Zustand plus abgetastete Fensterpunkte (Kopf → Schwanz).
#[derive(Debug, Clone)]
pub struct SnakeFrame {
    pub state: SnakeState,
    pub points: Vec<Point2D>,
}

/// Führt einen Tick aus und liefert den neuen Zustand.
///
/// Die Kreisliste ist die einzige veränderte Ressource; der Zustand wird
/// nicht verändert, sondern neu zurückgegeben.
pub fn tick(
    state: SnakeState,
    curve: &mut CircleCurve,
    delta: f64,
    options: &SnakeOptions,
    generator: &mut impl CircleGenerator,
) -> anyhow::Result<SnakeState> {
    let mut head = state.head + delta * options.speed;

    // Kreise anhängen, bis genug Kurve vor dem Kopf liegt
    let mut added = 0usize;
    while curve.circle_for_curve_position(head)? + 3 > curve.len() {
        if added >= options.max_circles_per_tick {
            log::warn!(
                "Kreis-Limit pro Tick erreicht ({}), Kopf bei {:.3} von {:.3}",
                added,
                head,
                curve.total_length()?
            );
            break;
        }
        let circle = generator.next_circle(curve.last());
        curve.push(circle);
        added += 1;
    }

    // Nicht mehr benötigte Kreise entfernen
    let tail = head - state.length;
    let remove_index = curve.circle_for_curve_position(tail)?.saturating_sub(1);
    let before = curve.total_length()?;
    let removed = curve.prune_front(remove_index);
    let after = curve.total_length()?;
    head -= before - after;

    if added > 0 || removed > 0 {
        log::debug!(
            "Tick: +{} / -{} Kreise, {} aktiv, Kurvenlänge {:.3}",
            added,
            removed,
            curve.len(),
            after
        );
    }

    Ok(SnakeState {
        head,
        tail: head - state.length,
        length: state.length,
    })
}

/// Tastet das Schlangenfenster vom Kopf zum Schwanz ab.
pub fn sample_window(
    state: &SnakeState,
    curve: &CircleCurve,
    divisions: usize,
) -> anyhow::Result<Vec<Point2D>> {
    let composite = curve.curve().context("Kurve für Abtastung nicht aufbaubar")?;
    Ok(spaced_points_between(&composite, state.head, state.tail, divisions))
}
