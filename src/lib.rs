//! Snake Curve Library.
//! Prozedurale Bézier-Kurve um eine Kreisfolge, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    CircleGenerator, RandomCircleGenerator, SequenceCircleGenerator, SnakeController, SnakeFrame,
    SnakeState,
};
pub use core::{
    Anchor, Circle, CircleCurve, CircleSection, CompositeCurve, CubicSegment, CurveSettings,
    GeometryError, Point2D,
};
pub use render::{CurveTexture, DebugOverlay};
pub use shared::{GeneratorOptions, SnakeOptions};
