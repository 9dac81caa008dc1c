//! Übergabe-Typen für den externen Renderer.

use bytemuck::{Pod, Zeroable};

/// Farbindex, den der Overlay-Shader als „Handle“ (grau, hinterlegt) interpretiert.
pub const HANDLE_COLOR_INDEX: f32 = 2.0;

/// Vertex des Debug-Overlays: Position in Kurvenkoordinaten plus Farbindex.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DebugVertex {
    /// Position im 2D-Raum
    pub position: [f32; 2],
    /// Index in die Spektral-Palette (0..1) bzw. [`HANDLE_COLOR_INDEX`]
    pub color_index: f32,
}

impl DebugVertex {
    /// Erstellt einen neuen DebugVertex.
    pub fn new(x: f64, y: f64, color_index: f32) -> Self {
        Self {
            position: [x as f32, y as f32],
            color_index,
        }
    }

    /// Als `(x, y, colorIndex)`-Tripel.
    pub fn to_triple(&self) -> [f32; 3] {
        [self.position[0], self.position[1], self.color_index]
    }
}

/// Ein Texel der Kurven-Textur (zwei Float-Kanäle: x, y).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CurveTexel {
    pub x: f32,
    pub y: f32,
}
