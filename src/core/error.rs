//! Fehlertypen der Kurven-Geometrie.

use thiserror::Error;

/// Vertragsverletzungen beim Aufbau von Bézier-Ankern.
///
/// Tritt nur bei falscher Verwendung der Anker-Builder auf; der Join-Solver
/// erzeugt solche Paare nie.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Brücke zwischen zwei Punkten desselben Kreises angefordert
    #[error("Brücken-Anker benötigen Punkte auf verschiedenen Kreisen (Winkel {from:.4} → {to:.4})")]
    BridgeOnSameCircle { from: f64, to: f64 },
    /// Bogen zwischen Punkten verschiedener Kreise angefordert
    #[error("Bogen-Anker benötigen Punkte auf demselben Kreis (Winkel {from:.4} → {to:.4})")]
    ArcAcrossCircles { from: f64, to: f64 },
}
