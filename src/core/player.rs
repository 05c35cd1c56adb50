//! Player-Token auf dem Spielfeld.

use super::Route;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Mannschaftsseite eines Players bzw. einer Route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Angriff
    #[default]
    Offense,
    /// Verteidigung
    Defense,
}

/// Ein Player-Token mit Position, Seite und Darstellungsfarbe.
///
/// Besitzt höchstens eine Route (exklusiv): wird der Player entfernt,
/// verschwindet seine Route mitsamt eventueller Zone.
#[derive(Debug, Clone)]
pub struct Player {
    /// Eindeutige ID innerhalb des Plays
    pub id: u64,
    /// Position des Token-Mittelpunkts in Field-Space
    pub position: Vec2,
    /// Mannschaftsseite
    pub side: Side,
    /// Füllfarbe (RGBA)
    pub fill: [f32; 4],
    /// Route des Players (0 oder 1)
    pub route: Option<Route>,
}

impl Player {
    /// Erstellt einen Player ohne Route.
    pub fn new(id: u64, position: Vec2, side: Side, fill: [f32; 4]) -> Self {
        Self {
            id,
            position,
            side,
            fill,
            route: None,
        }
    }
}
