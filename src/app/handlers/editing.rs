//! Handler für Editier-Operationen: Modus, Player-Verwaltung, Routen-Erstellung.

use crate::app::state::{Mode, SceneNode};
use crate::app::AppState;
use crate::core::{Route, Side};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Setzt den Interaktionsmodus; wirkt ab der nächsten Geste.
pub fn set_mode(state: &mut AppState, mode: Mode) {
    state.editor.mode = mode;
    log::info!("Modus gewechselt: {:?}", mode);
}

/// Startet eine neue Route am Player und ersetzt eine bestehende.
///
/// Kaskade: die Zone der alten Route fällt mit ihr weg. Die neue Route ist
/// ein einzelnes `MoveTo` an der aktuellen Player-Position; anschließend
/// werden alle Player-Token nach vorn gehoben, damit sie über den
/// Routen-Strichen bleiben.
pub fn create_route(state: &mut AppState, player_id: u64) {
    let Some(player) = state.play.player(player_id) else {
        log::warn!("Routen-Start auf unbekanntem Player {}", player_id);
        return;
    };
    let side = player.side;
    let fill = player.fill;
    let start = player.position;
    let opacity = state.options.route_opacity(side);

    state.view.remove_route_nodes(player_id);
    state
        .play
        .replace_route(player_id, Route::new(start, side, fill, opacity));
    state.view.push_node(SceneNode::RouteStroke(player_id));
    state.view.players_to_front();
    log::debug!("Neue Route an Player {} ({:?})", player_id, side);
}

/// Fügt einen Player hinzu und gibt seine ID zurück.
pub fn add_player(state: &mut AppState, position: Vec2, side: Side) -> u64 {
    let fill = state.options.side_color(side);
    let id = state.play.add_player(position, side, fill);
    state.view.push_node(SceneNode::PlayerToken(id));
    log::info!("Player {} ({:?}) bei {:?} hinzugefügt", id, side, position);
    id
}

/// Entfernt einen Player mitsamt Route und Zone.
///
/// Reihenfolge der Kaskade: Zone, Route, dann der Player selbst — so
/// bleiben keine verwaisten Shapes zurück.
pub fn remove_player(state: &mut AppState, player_id: u64) {
    if state.play.player(player_id).is_none() {
        // bereits entfernt: No-op
        return;
    }
    state.view.remove_player_nodes(player_id);
    state.play.remove_player(player_id);
    log::info!("Player {} entfernt", player_id);
}

/// Baut die Standard-Aufstellung auf: 22 Player beidseits der Line of
/// Scrimmage, Offense unten, Defense oben.
pub fn reset_lineup(state: &mut AppState) {
    let ids: Vec<u64> = state.play.players().map(|p| p.id).collect();
    for id in ids {
        remove_player(state, id);
    }

    let los = state.options.line_of_scrimmage();
    for i in 0..22u32 {
        let (side, position) = if i > 10 {
            (
                Side::Defense,
                Vec2::new((i - 10) as f32 * 100.0, los - 25.0),
            )
        } else {
            (Side::Offense, Vec2::new((i + 1) as f32 * 100.0, los + 25.0))
        };
        add_player(state, position, side);
    }
    log::info!("Standard-Aufstellung aufgebaut (22 Player)");
}

/// Wendet geänderte Optionen auf die Session an.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    log::info!("Optionen angewendet");
}
