//! Coverage-Zone: Rechteck am Endpunkt einer Defense-Route.

use glam::Vec2;

/// Eine rechteckige Coverage-Zone.
///
/// Während des Drags am Routen-Endpunkt wird die Geometrie jeden Tick neu
/// aus dem Endpunkt (Anker) und dem kumulativen Drag-Delta berechnet, nicht
/// aus der absoluten Pointer-Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    /// Obere linke Ecke
    pub position: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
    /// Füllfarbe (RGBA)
    pub fill: [f32; 4],
    /// Füll-Deckkraft (seitenabhängig)
    pub fill_opacity: f32,
}

impl Zone {
    /// Erstellt eine Zone mit expliziter Geometrie.
    pub fn new(position: Vec2, size: Vec2, fill: [f32; 4], fill_opacity: f32) -> Self {
        Self {
            position,
            size,
            fill,
            fill_opacity,
        }
    }

    /// Erstellt eine leere Zone (Breite/Höhe 0) am Anker — der Zustand beim
    /// Drag-Start, bevor der erste Move-Tick die Ausdehnung setzt.
    pub fn empty_at(anchor: Vec2, fill: [f32; 4], fill_opacity: f32) -> Self {
        Self::new(anchor, Vec2::ZERO, fill, fill_opacity)
    }
}
