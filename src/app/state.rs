//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Play, Side};
use crate::shared::{EditorOptions, SnapAnimation};
use glam::Vec2;

/// Interaktionsmodus des Editors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Token verschieben (mit Grid-Snap am Drag-Ende)
    #[default]
    Move,
    /// Routen zeichnen und Zonen aufziehen
    Design,
}

/// Transienter Zustand der aktiven Drag-Geste.
///
/// Genau eine Geste ist gleichzeitig aktiv; jeder Drag-Start überschreibt
/// den Slot. Der Zustand ist gesten-gebunden, nie geteilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Drag auf einem Player-Token
    PlayerDrag {
        /// Gezogener Player
        player_id: u64,
        /// Player-Position beim Drag-Start
        origin: Vec2,
    },
    /// Drag auf einem Routen-Strich
    PathDrag {
        /// Besitzer der Route
        player_id: u64,
        /// Seite der Route (beim Start kopiert)
        side: Side,
        /// Pointer-Position beim Drag-Start
        origin: Vec2,
        /// Zu bewegender Segment-Index; `None` deaktiviert die
        /// Segment-Mutation (schützt den Anker an Index 0)
        segment_to_move: Option<usize>,
    },
}

/// Editor-Zustand: Modus und aktive Geste
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktueller Interaktionsmodus
    pub mode: Mode,
    /// Aktive Drag-Geste (None = keine)
    pub gesture: Option<Gesture>,
}

/// Ein Eintrag der Zeichenreihenfolge, referenziert über die Player-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneNode {
    /// Player-Token
    PlayerToken(u64),
    /// Routen-Strich des Players
    RouteStroke(u64),
    /// Zonen-Rechteck der Player-Route
    ZoneRect(u64),
}

/// View-bezogener Anwendungszustand: Stacking und angeforderte Animationen.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Zeichenreihenfolge aller Entity-Shapes (hinten = oben)
    pub draw_order: Vec<SceneNode>,
    /// Angeforderte, noch nicht abgeholte Einrast-Animationen
    snap_animations: Vec<SnapAnimation>,
}

impl ViewState {
    /// Hängt einen Szenen-Knoten oben an.
    pub fn push_node(&mut self, node: SceneNode) {
        self.draw_order.push(node);
    }

    /// Entfernt alle Szenen-Knoten eines Players (Zone, Route, Token).
    pub fn remove_player_nodes(&mut self, player_id: u64) {
        self.draw_order.retain(|n| {
            !matches!(n,
                SceneNode::PlayerToken(id)
                | SceneNode::RouteStroke(id)
                | SceneNode::ZoneRect(id) if *id == player_id)
        });
    }

    /// Entfernt Routen-Strich und Zonen-Rechteck eines Players.
    pub fn remove_route_nodes(&mut self, player_id: u64) {
        self.draw_order.retain(|n| {
            !matches!(n, SceneNode::RouteStroke(id) | SceneNode::ZoneRect(id) if *id == player_id)
        });
    }

    /// Entfernt das Zonen-Rechteck eines Players.
    pub fn remove_zone_node(&mut self, player_id: u64) {
        self.draw_order
            .retain(|n| !matches!(n, SceneNode::ZoneRect(id) if *id == player_id));
    }

    /// Hebt alle Player-Token an das obere Ende der Zeichenreihenfolge.
    ///
    /// Idempotent; relative Reihenfolge der Token und der übrigen Shapes
    /// bleibt erhalten. Hält Token über den Routen-Strichen.
    pub fn players_to_front(&mut self) {
        let mut tokens = Vec::new();
        self.draw_order.retain(|n| {
            if matches!(n, SceneNode::PlayerToken(_)) {
                tokens.push(*n);
                false
            } else {
                true
            }
        });
        self.draw_order.extend(tokens);
    }

    /// Merkt eine Einrast-Animation zur Abholung durch den Host vor.
    pub fn push_snap_animation(&mut self, animation: SnapAnimation) {
        self.snap_animations.push(animation);
    }

    /// Holt alle vorgemerkten Einrast-Animationen ab (und leert die Liste).
    pub fn take_snap_animations(&mut self) -> Vec<SnapAnimation> {
        std::mem::take(&mut self.snap_animations)
    }
}

/// Hauptzustand einer Editor-Session
pub struct AppState {
    /// Der aktuelle Spielzug
    pub play: Play,
    /// Editor-Zustand (Modus, aktive Geste)
    pub editor: EditorState,
    /// View-State (Zeichenreihenfolge, Animationen)
    pub view: ViewState,
    /// Laufzeit-Optionen (Feldmaße, Farben, Grid)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen leeren Session-Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Session-Zustand mit expliziten Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            play: Play::new(),
            editor: EditorState::default(),
            view: ViewState::default(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Erstellt eine Session mit der Standard-Aufstellung (22 Player).
    pub fn with_default_lineup(options: EditorOptions) -> Self {
        let mut state = Self::with_options(options);
        super::handlers::editing::reset_lineup(&mut state);
        state
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_to_front_ist_stabil_und_idempotent() {
        let mut view = ViewState::default();
        view.push_node(SceneNode::PlayerToken(1));
        view.push_node(SceneNode::RouteStroke(1));
        view.push_node(SceneNode::PlayerToken(2));
        view.push_node(SceneNode::ZoneRect(1));

        view.players_to_front();
        assert_eq!(
            view.draw_order,
            vec![
                SceneNode::RouteStroke(1),
                SceneNode::ZoneRect(1),
                SceneNode::PlayerToken(1),
                SceneNode::PlayerToken(2),
            ]
        );

        let before = view.draw_order.clone();
        view.players_to_front();
        assert_eq!(view.draw_order, before);
    }

    #[test]
    fn test_remove_player_nodes_entfernt_alle_shapes() {
        let mut view = ViewState::default();
        view.push_node(SceneNode::ZoneRect(1));
        view.push_node(SceneNode::RouteStroke(1));
        view.push_node(SceneNode::PlayerToken(1));
        view.push_node(SceneNode::PlayerToken(2));

        view.remove_player_nodes(1);
        assert_eq!(view.draw_order, vec![SceneNode::PlayerToken(2)]);
    }
}
