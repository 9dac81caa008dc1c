//! Application-Layer: Schlangen-Zustand, Tick-Update, Kreis-Generator und Controller.

pub mod controller;
pub mod generator;
/// Schlangen-Zustand und reiner Update-Schritt pro Tick
pub mod snake;

pub use controller::SnakeController;
pub use generator::{CircleGenerator, RandomCircleGenerator, SequenceCircleGenerator};
pub use snake::{sample_window, tick, SnakeFrame, SnakeState};
