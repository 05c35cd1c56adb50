//! Play-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host-Renderer sie
//! konsumiert. Der Kern hängt nicht davon ab, wie Shapes gemalt werden —
//! die Szene ist eine deklarative Shape-Liste in Zeichenreihenfolge.

use crate::core::PathSegment;
use glam::Vec2;

/// Ein primitives Shape der Play-Szene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneShape {
    /// Player-Token (Kreis)
    Circle {
        /// Mittelpunkt in Field-Space
        center: Vec2,
        /// Radius
        radius: f32,
        /// Füllfarbe (RGBA)
        fill: [f32; 4],
        /// Konturstärke
        stroke_width: f32,
    },
    /// Routen-Strich (offener Pfad)
    Path {
        /// Pfad-Segmente (`MoveTo` + `LineTo`s)
        segments: Vec<PathSegment>,
        /// Strichfarbe (RGBA)
        stroke: [f32; 4],
        /// Strichstärke
        stroke_width: f32,
        /// Strich-Deckkraft
        stroke_opacity: f32,
    },
    /// Zonen-Rechteck
    Rect {
        /// Obere linke Ecke
        position: Vec2,
        /// Breite und Höhe
        size: Vec2,
        /// Eckenradius
        corner_radius: f32,
        /// Füllfarbe (RGBA)
        fill: [f32; 4],
        /// Füll-Deckkraft
        fill_opacity: f32,
    },
}

/// Angeforderte Einrast-Animation (fire-and-forget, blockiert keine Gesten).
///
/// Die Modellposition ist beim Erstellen bereits auf `to` gesetzt; der Host
/// animiert nur die Darstellung von `from` nach `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    /// Betroffener Player
    pub player_id: u64,
    /// Ausgangsposition (Drag-Ende)
    pub from: Vec2,
    /// Eingerastete Zielposition
    pub to: Vec2,
    /// Animationsdauer in Millisekunden
    pub duration_ms: u32,
}

/// Read-only Shape-Liste für einen Frame, in Zeichenreihenfolge
/// (Player-Token liegen stets über den Routen-Strichen).
#[derive(Debug, Clone, Default)]
pub struct PlayScene {
    /// Shapes in Zeichenreihenfolge (hinten = oben)
    pub shapes: Vec<SceneShape>,
}
