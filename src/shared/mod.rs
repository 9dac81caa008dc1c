//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `core` und der Treiber teilen.

pub mod options;

pub use options::{GeneratorOptions, SnakeOptions};
pub use options::{SAMPLE_POINTS, SNAKE_SPEED};
