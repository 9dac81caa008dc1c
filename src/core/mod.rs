//! Core-Geometrie: Kreise, Tangenten, Join-Solver, Bézier-Kurve und Abtastung.

pub mod anchor;
pub mod bezier;
pub mod circle;
pub mod circle_curve;
pub mod error;
pub mod geometry;
/// Join-Solver für aufeinanderfolgende Kreis-Fenster
pub mod join;
pub mod join_anchors;
pub mod path;
pub mod sampler;

pub use anchor::{Anchor, CirclePoint};
pub use bezier::{cubic_bezier, CubicSegment};
pub use circle::{Circle, HomotheticCenters, TangentPair, TangentPoints, TangentSet};
pub use circle_curve::{CircleCurve, CircleSection, CurveSettings};
pub use error::GeometryError;
pub use geometry::Point2D;
pub use join::{find_joins, join_windows, Join, JoinPair};
pub use join_anchors::{arc_join_anchors, calc_kink, circle_join_anchors, HandleCoefficients};
pub use path::CompositeCurve;
pub use sampler::spaced_points_between;
