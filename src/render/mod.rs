//! Übergabe an den externen Renderer: Kurven-Textur und Debug-Overlay.
//!
//! Hier wird nichts gezeichnet; die Module liefern nur die Buffer-Daten
//! (über `bytemuck` als Bytes), die ein GPU-Renderer hochlädt.

mod overlay;
mod texture;
mod types;

pub use overlay::{DebugOverlay, CIRCLE_SEGMENTS};
pub use texture::{to_texture_range, CurveTexture};
pub use types::{CurveTexel, DebugVertex, HANDLE_COLOR_INDEX};
