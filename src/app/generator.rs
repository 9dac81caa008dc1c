//! Kreis-Generator: liefert den nächsten Kreis der Schlangen-Folge.

use crate::core::Circle;
use crate::shared::options::GeneratorOptions;
use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Quelle neuer Kreise für das Kurvenende.
///
/// Vertrag: Mittelpunkt und Radius sind endlich; ist ein Vorgänger gegeben,
/// überlappt der neue Kreis ihn nicht.
pub trait CircleGenerator {
    /// Erzeugt den nächsten Kreis, ggf. abhängig vom bisher letzten.
    fn next_circle(&mut self, previous: Option<&Circle>) -> Circle;
}

/// Zufälliger, per Seed reproduzierbarer Kreis-Generator.
#[derive(Debug, Clone)]
pub struct RandomCircleGenerator {
    rng: Pcg64,
    seed: u64,
    options: GeneratorOptions,
}

impl RandomCircleGenerator {
    /// Erstellt einen Generator mit festem Seed (bit-genau reproduzierbar).
    pub fn new(seed: u64, options: GeneratorOptions) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
            seed,
            options,
        }
    }

    /// Erstellt einen Generator mit zufälligem Seed; der Seed wird geloggt,
    /// damit ein Lauf nachgestellt werden kann.
    pub fn from_entropy(options: GeneratorOptions) -> Self {
        let seed: u64 = rand::random();
        log::info!("Kreis-Generator Seed: {}", seed);
        Self::new(seed, options)
    }

    /// Verwendeter Seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn signed_unit(&mut self) -> f64 {
        self.rng.gen::<f64>() * 2.0 - 1.0
    }
}

impl CircleGenerator for RandomCircleGenerator {
    fn next_circle(&mut self, previous: Option<&Circle>) -> Circle {
        let GeneratorOptions {
            extent,
            min_radius,
            radius_range,
            gap_jitter,
        } = self.options;

        let center = DVec2::new(self.signed_unit() * extent, self.signed_unit() * extent);
        let radius = self.rng.gen::<f64>() * radius_range + min_radius;
        let clockwise = self.rng.gen::<f64>() > 0.5;
        let mut circle = Circle::new(center, radius, clockwise);

        let Some(previous) = previous else {
            return circle;
        };

        let distance = circle.center.distance(previous.center);
        let gap = distance - circle.radius - previous.radius;
        if gap < 0.0 {
            // Entlang der Trennachse nach außen schieben
            let direction = (circle.center - previous.center)
                .try_normalize()
                .unwrap_or(DVec2::X);
            let push = -gap + self.rng.gen::<f64>() * gap_jitter;
            circle.center += direction * push;
            log::trace!("Kreis um {:.4} verschoben (Überlappung {:.4})", push, -gap);
        }
        circle
    }
}

/// Liefert vorgegebene Kreise der Reihe nach (z.B. für Tests und feste Layouts).
///
/// Ist die Liste erschöpft, wird ab dem Vorgänger in fester Richtung
/// weitergebaut, damit der Vertrag „keine Überlappung“ erhalten bleibt.
#[derive(Debug, Clone)]
pub struct SequenceCircleGenerator {
    circles: std::collections::VecDeque<Circle>,
}

impl SequenceCircleGenerator {
    /// Erstellt den Generator aus einer festen Kreisfolge.
    pub fn new(circles: impl IntoIterator<Item = Circle>) -> Self {
        Self {
            circles: circles.into_iter().collect(),
        }
    }
}

impl CircleGenerator for SequenceCircleGenerator {
    fn next_circle(&mut self, previous: Option<&Circle>) -> Circle {
        if let Some(circle) = self.circles.pop_front() {
            return circle;
        }
        match previous {
            Some(prev) => Circle::new(
                prev.center + DVec2::new(prev.radius * 3.0, 0.0),
                prev.radius,
                !prev.clockwise,
            ),
            None => Circle::new(DVec2::ZERO, 1.0, true),
        }
    }
}
