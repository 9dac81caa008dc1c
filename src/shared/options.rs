//! Zentrale Konfiguration der Schlangen-Kurve.
//!
//! `SnakeOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Circle, CurveSettings};
use anyhow::Context;
use glam::DVec2;
use serde::{Deserialize, Serialize};

// ── Abtastung ───────────────────────────────────────────────────────

/// Anzahl der Kurvenpunkte pro Frame (Breite der Kurven-Textur).
pub const SAMPLE_POINTS: usize = 250;

// ── Bewegung ────────────────────────────────────────────────────────

/// Vorschub des Schlangenkopfs in Kurveneinheiten pro Sekunde.
pub const SNAKE_SPEED: f64 = 2.0;
/// Sichtbare Schlangenlänge als Anteil der Start-Kurvenlänge.
pub const SNAKE_LENGTH_FRACTION: f64 = 0.8;
/// Obergrenze neu erzeugter Kreise pro Tick.
pub const MAX_CIRCLES_PER_TICK: usize = 64;

// ── Kreis-Generator ─────────────────────────────────────────────────

/// Halbe Kantenlänge des Bereichs, in dem Mittelpunkte gewürfelt werden.
pub const GENERATOR_EXTENT: f64 = 0.75;
/// Minimaler Radius.
pub const GENERATOR_MIN_RADIUS: f64 = 0.1;
/// Zufälliger Zusatz-Radius (0..range).
pub const GENERATOR_RADIUS_RANGE: f64 = 0.4;
/// Maximaler zufälliger Zusatzabstand beim Auseinanderschieben.
pub const GENERATOR_GAP_JITTER: f64 = 0.2;

// ── Frame-Takt (Headless-Treiber) ───────────────────────────────────

/// Simulierte Bildrate.
pub const FRAME_RATE: f64 = 60.0;
/// Anzahl simulierter Frames.
pub const FRAME_COUNT: usize = 600;

/// Parameter des zufälligen Kreis-Generators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Mittelpunkte liegen in `[-extent, extent]²`
    pub extent: f64,
    /// Minimaler Radius
    pub min_radius: f64,
    /// Zufälliger Zusatz-Radius
    pub radius_range: f64,
    /// Zufälliger Zusatzabstand nach dem Auseinanderschieben
    pub gap_jitter: f64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            extent: GENERATOR_EXTENT,
            min_radius: GENERATOR_MIN_RADIUS,
            radius_range: GENERATOR_RADIUS_RANGE,
            gap_jitter: GENERATOR_GAP_JITTER,
        }
    }
}

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `snake_curve.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeOptions {
    // ── Abtastung ───────────────────────────────────────────────
    /// Punkte pro Frame (Texturbreite)
    pub sample_points: usize,

    // ── Bewegung ────────────────────────────────────────────────
    /// Vorschub pro Sekunde
    pub speed: f64,
    /// Schlangenlänge relativ zur Start-Kurve
    pub length_fraction: f64,
    /// Maximale Anzahl neuer Kreise pro Tick
    #[serde(default = "default_max_circles_per_tick")]
    pub max_circles_per_tick: usize,
    /// Fester Seed für reproduzierbare Läufe (`None` = zufällig)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    // ── Treiber ─────────────────────────────────────────────────
    /// Simulierte Bildrate des Headless-Treibers
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    /// Anzahl simulierter Frames
    #[serde(default = "default_frame_count")]
    pub frame_count: usize,

    // ── Kurve ───────────────────────────────────────────────────
    /// Bogen-Auflösung und Handle-Gewichte
    #[serde(default)]
    pub curve: CurveSettings,

    // ── Generator ───────────────────────────────────────────────
    #[serde(default)]
    pub generator: GeneratorOptions,

    /// Start-Kreise der Schlange
    #[serde(default = "default_initial_circles")]
    pub initial_circles: Vec<Circle>,
}

impl Default for SnakeOptions {
    fn default() -> Self {
        Self {
            sample_points: SAMPLE_POINTS,

            speed: SNAKE_SPEED,
            length_fraction: SNAKE_LENGTH_FRACTION,
            max_circles_per_tick: MAX_CIRCLES_PER_TICK,
            seed: None,

            frame_rate: FRAME_RATE,
            frame_count: FRAME_COUNT,

            curve: CurveSettings::default(),
            generator: GeneratorOptions::default(),
            initial_circles: default_initial_circles(),
        }
    }
}

/// Start-Layout: sechs Kreise mit wechselnder Laufrichtung.
pub fn default_initial_circles() -> Vec<Circle> {
    [
        (-0.3, -0.4, 0.4, false),
        (0.7, -0.5, 0.15, true),
        (0.0, 0.5, 0.1, false),
        (-0.4, 0.15, 0.4, true),
        (-0.8, -0.2, 0.1, false),
        (-1.2, -0.6, 0.2, false),
    ]
    .into_iter()
    .map(|(x, y, radius, clockwise)| Circle::new(DVec2::new(x, y), radius, clockwise))
    .collect()
}

/// Serde-Default für `max_circles_per_tick` (Abwärtskompatibilität).
fn default_max_circles_per_tick() -> usize {
    MAX_CIRCLES_PER_TICK
}

fn default_frame_rate() -> f64 {
    FRAME_RATE
}

fn default_frame_count() -> usize {
    FRAME_COUNT
}

impl SnakeOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei (inkl. Start-Kreise und Seed).
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(self).context("Schlangen-Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!(
            "Optionen ({} Start-Kreise) gespeichert nach: {}",
            self.initial_circles.len(),
            path.display()
        );
        Ok(())
    }

    /// Lädt die Optionen; fehlt die Datei, werden die Standardwerte dort abgelegt,
    /// damit sie als Vorlage zum Anpassen dient.
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from_file(path);
        }
        let options = Self::default();
        if let Err(e) = options.save_to_file(path) {
            log::warn!("Standard-Optionen nicht gespeichert: {:#}", e);
        }
        options
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("snake_curve"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("snake_curve.toml")
    }

    /// Zeitschritt eines simulierten Frames in Sekunden.
    pub fn frame_delta(&self) -> f64 {
        1.0 / self.frame_rate.max(1.0)
    }
}
