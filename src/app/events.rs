//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::Mode;
use crate::core::Side;
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/Pointer-Layer ohne direkte Mutationslogik.
///
/// Eine Pointer-Geste kommt als Started → Moved* → Ended an; `pos` ist die
/// absolute Pointer-Position, `delta` das kumulative Delta seit Drag-Start.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Drag auf einem Player-Token gestartet
    PlayerDragStarted { player_id: u64, pos: Vec2 },
    /// Drag auf einem Player-Token bewegt
    PlayerDragMoved {
        player_id: u64,
        delta: Vec2,
        pos: Vec2,
    },
    /// Drag auf einem Player-Token beendet
    PlayerDragEnded { player_id: u64 },

    /// Drag auf einem Routen-Strich gestartet
    RouteDragStarted { player_id: u64, pos: Vec2 },
    /// Drag auf einem Routen-Strich bewegt
    RouteDragMoved {
        player_id: u64,
        delta: Vec2,
        pos: Vec2,
    },
    /// Drag auf einem Routen-Strich beendet
    RouteDragEnded { player_id: u64 },

    /// Interaktionsmodus wechseln (wirkt ab der nächsten Geste)
    ModeChangeRequested { mode: Mode },
    /// Neuen Player an Position platzieren
    AddPlayerRequested { position: Vec2, side: Side },
    /// Player entfernen (Kaskade: Route und Zone fallen mit weg)
    RemovePlayerRequested { player_id: u64 },
    /// Spielzug auf die Standard-Aufstellung (22 Player) zurücksetzen
    ResetLineupRequested,

    /// Spielzug aus JSON-Datei importieren
    ImportPlayRequested { path: String },
    /// Spielzug als JSON-Datei exportieren
    ExportPlayRequested { path: String },

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Interaktionsmodus setzen
    SetMode { mode: Mode },

    /// Player-Drag-Geste beginnen (Ursprungsposition einfangen)
    BeginPlayerDrag { player_id: u64 },
    /// Neue Route am Player starten (ersetzt eine bestehende samt Zone)
    CreateRoute { player_id: u64 },
    /// Player um das kumulative Delta verschieben (Move-Modus)
    MovePlayer { player_id: u64, delta: Vec2 },
    /// Initialen Routen-Strich formen (Design-Modus)
    ShapeRouteInitialSegment { player_id: u64, delta: Vec2 },
    /// Player am Drag-Ende aufs Grid einrasten
    SnapPlayerToGrid { player_id: u64 },

    /// Pfad-Drag-Geste beginnen (Segmentwahl bzw. Zonen-Neuaufbau)
    BeginPathDrag { player_id: u64, pos: Vec2 },
    /// Pfad-Drag fortschreiben (Segment bewegen / Zone aufziehen)
    UpdatePathDrag { player_id: u64, delta: Vec2 },

    /// Neuen Player hinzufügen
    AddPlayer { position: Vec2, side: Side },
    /// Player entfernen (Kaskade)
    RemovePlayer { player_id: u64 },
    /// Standard-Aufstellung aufbauen
    ResetLineup,

    /// Spielzug aus JSON-Datei laden
    LoadPlay { path: String },
    /// Spielzug als JSON-Datei speichern
    SavePlay { path: String },

    /// Optionen anwenden
    ApplyOptions { options: EditorOptions },
}
