//! Controller: bündelt Kreisliste, Schlangen-Zustand und Generator für den Frame-Loop.

use super::generator::RandomCircleGenerator;
use super::snake::{sample_window, tick, SnakeFrame, SnakeState};
use crate::core::CircleCurve;
use crate::shared::SnakeOptions;

/// Besitzt die Kreisliste exklusiv und führt pro Frame einen Tick aus.
pub struct SnakeController {
    options: SnakeOptions,
    curve: CircleCurve,
    state: SnakeState,
    generator: RandomCircleGenerator,
}

impl SnakeController {
    /// Erstellt den Controller aus den Optionen (Start-Kreise, Seed, Kurven-Parameter).
    pub fn new(options: SnakeOptions) -> anyhow::Result<Self> {
        let generator = match options.seed {
            Some(seed) => RandomCircleGenerator::new(seed, options.generator),
            None => RandomCircleGenerator::from_entropy(options.generator),
        };
        let curve = CircleCurve::with_settings(options.initial_circles.clone(), options.curve);
        let state = SnakeState::for_curve(&curve, options.length_fraction)?;
        log::info!(
            "Schlange gestartet: {} Kreise, Länge {:.3}",
            curve.len(),
            state.length
        );
        Ok(Self {
            options,
            curve,
            state,
            generator,
        })
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> &SnakeState {
        &self.state
    }

    /// Aktuelle Kreisliste.
    pub fn curve(&self) -> &CircleCurve {
        &self.curve
    }

    /// Verwendete Optionen.
    pub fn options(&self) -> &SnakeOptions {
        &self.options
    }

    /// Seed des Generators (für Reproduktion).
    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Rückt die Schlange um `delta` Sekunden vor und tastet das Fenster ab.
    ///
    /// Bei einem Fehler bleibt der bisherige Zustand erhalten; der nächste
    /// Tick rechnet mit der dann aktuellen Kreisliste neu.
    pub fn advance(&mut self, delta: f64) -> anyhow::Result<SnakeFrame> {
        let state = tick(
            self.state,
            &mut self.curve,
            delta,
            &self.options,
            &mut self.generator,
        )?;
        self.state = state;
        let points = sample_window(&state, &self.curve, self.options.sample_points)?;
        Ok(SnakeFrame { state, points })
    }
}
