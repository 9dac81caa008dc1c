//! Kurven-Textur: abgetastete Schlangenpunkte als Float-Daten für den Texture-Upload.
//!
//! Die Punkte liegen im normierten Kurvenraum `[-1, 1]` und werden nach
//! `[0, 255]` abgebildet; der Vertex-Shader rechnet sie zurück.

use super::types::CurveTexel;
use crate::core::Point2D;

/// Bildet eine Koordinate aus `[-1, 1]` nach `[0, 255]` ab.
pub fn to_texture_range(v: f64) -> f32 {
    ((v * 0.5 + 0.5) * 255.0) as f32
}

/// Eine Zeile Float-Texels (Breite = Anzahl Abtastpunkte, Höhe 1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveTexture {
    texels: Vec<CurveTexel>,
}

impl CurveTexture {
    /// Erstellt die Textur-Daten aus den abgetasteten Punkten.
    pub fn from_points(points: &[Point2D]) -> Self {
        let texels = points
            .iter()
            .map(|p| CurveTexel {
                x: to_texture_range(p.x),
                y: to_texture_range(p.y),
            })
            .collect();
        Self { texels }
    }

    /// Texturbreite in Texeln.
    pub fn width(&self) -> usize {
        self.texels.len()
    }

    /// Flache Sicht `[x0, y0, x1, y1, …]` der Länge `2 · width`.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Rohdaten für den Upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Texels in Punkt-Reihenfolge.
    pub fn texels(&self) -> &[CurveTexel] {
        &self.texels
    }
}
