//! Handler für die Pfad-Geste: Segmente verlängern/verschieben, Zonen aufziehen.

use crate::app::state::{Gesture, Mode, SceneNode};
use crate::app::AppState;
use crate::core::{Side, Zone};
use crate::shared::geometry;
use glam::Vec2;

/// Beginnt eine Pfad-Drag-Geste und wählt den Verhaltenszweig nach
/// `(Seite, Modus)`:
///
/// - Offense + Design: Append-Index — der Drag erzeugt ein neues Endsegment.
/// - Move (beide Seiten): nächstgelegenes `LineTo` per Manhattan-Score.
/// - Defense + Design: bestehende Zone verwerfen und leere Zone am
///   Routen-Endpunkt neu anlegen; kein Segment-Index.
pub fn begin(state: &mut AppState, player_id: u64, pos: Vec2) {
    let mode = state.editor.mode;
    let Some(route) = state.play.route(player_id) else {
        // Drag auf bereits ersetzter/entfernter Route: No-op
        log::debug!("Pfad-Drag ohne Route an Player {}", player_id);
        return;
    };
    let side = route.side;

    let mut segment_to_move = None;
    if side == Side::Offense && mode == Mode::Design {
        // Index hinter dem letzten Segment: Drag-Move hängt ein neues an
        segment_to_move = Some(route.segment_count());
    }
    if mode == Mode::Move {
        segment_to_move = Some(geometry::nearest_segment_index(route.segments(), pos));
    }

    if side == Side::Defense && mode == Mode::Design {
        let anchor = route.last_point();
        let fill = state.options.color_defense;
        let opacity = state.options.route_opacity(side);
        // Alte Zone verwerfen, leere Zone am Endpunkt anlegen
        state.view.remove_zone_node(player_id);
        if let Some(route) = state.play.route_mut(player_id) {
            route.zone = Some(Zone::empty_at(anchor, fill, opacity));
        }
        state.view.push_node(SceneNode::ZoneRect(player_id));
    }

    state.editor.gesture = Some(Gesture::PathDrag {
        player_id,
        side,
        origin: pos,
        segment_to_move,
    });
    log::debug!(
        "Pfad-Drag gestartet: Player {}, Segment {:?}",
        player_id,
        segment_to_move
    );
}

/// Schreibt die Pfad-Geste fort.
///
/// Zuerst die Segment-Mutation (Offense oder Move-Modus), dann — für
/// Defense-Routen — die Zonen-Geometrie aus dem aktualisierten Endpunkt
/// und dem kumulativen Delta. Für Defense + Design läuft nur der
/// Zonen-Zweig, da `segment_to_move` dort nicht gesetzt ist.
pub fn update(state: &mut AppState, player_id: u64, delta: Vec2) {
    let Some(Gesture::PathDrag {
        player_id: active,
        side,
        origin,
        segment_to_move,
    }) = state.editor.gesture
    else {
        return;
    };
    if active != player_id {
        return;
    }
    let mode = state.editor.mode;

    if side == Side::Offense || mode == Mode::Move {
        // Guard: nur positive Indizes — Segment 0 (der Anker) wird nie
        // überschrieben, auch nicht als Append-Ziel
        if let Some(index) = segment_to_move {
            if index > 0 {
                if let Some(route) = state.play.route_mut(player_id) {
                    route.set_or_append_line_to(index, origin + delta);
                }
            }
        }
    }

    if side == Side::Defense {
        if let Some(route) = state.play.route_mut(player_id) {
            let anchor = route.last_point();
            if let Some(zone) = route.zone.as_mut() {
                let (position, size) = geometry::zone_from_drag(anchor, delta.x, delta.y);
                zone.position = position;
                zone.size = size;
            }
        }
    }
}
