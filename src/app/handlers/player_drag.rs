//! Handler für die Player-Token-Geste: Verschieben, Routen-Zeichnen, Grid-Snap.

use crate::app::state::Gesture;
use crate::app::AppState;
use crate::shared::geometry;
use crate::shared::SnapAnimation;
use glam::Vec2;

/// Beginnt eine Player-Drag-Geste und fängt die Ursprungsposition ein.
///
/// Jeder Drag-Start überschreibt den Gesten-Slot — eine liegengebliebene
/// Pfad-Geste wird dadurch verdrängt.
pub fn begin(state: &mut AppState, player_id: u64) {
    let Some(player) = state.play.player(player_id) else {
        log::warn!("Drag-Start auf unbekanntem Player {}", player_id);
        return;
    };
    state.editor.gesture = Some(Gesture::PlayerDrag {
        player_id,
        origin: player.position,
    });
    log::debug!(
        "Player-Drag gestartet: Player {} bei {:?}",
        player_id,
        player.position
    );
}

/// Liefert den Gesten-Ursprung, falls die aktive Geste zu diesem Player gehört.
fn drag_origin(state: &AppState, player_id: u64) -> Option<Vec2> {
    match state.editor.gesture {
        Some(Gesture::PlayerDrag {
            player_id: active,
            origin,
        }) if active == player_id => Some(origin),
        _ => None,
    }
}

/// Verschiebt den Player auf Ursprung + kumulatives Delta (Move-Modus).
///
/// Der Routen-Anker wandert mit (`Play::move_player`); die übrige
/// Routenform bleibt unberührt. Während des Drags wird nicht geclampt.
pub fn move_player(state: &mut AppState, player_id: u64, delta: Vec2) {
    let Some(origin) = drag_origin(state, player_id) else {
        return;
    };
    state.play.move_player(player_id, origin + delta);
}

/// Formt den initialen Strich der frisch erstellten Route (Design-Modus):
/// Der Pfad besteht aus Anker + genau einem `LineTo`, das mit dem Pointer
/// wächst und schrumpft.
pub fn shape_initial_segment(state: &mut AppState, player_id: u64, delta: Vec2) {
    let Some(origin) = drag_origin(state, player_id) else {
        return;
    };
    let target = origin + delta;
    if let Some(route) = state.play.route_mut(player_id) {
        route.set_initial_segment(target);
    }
}

/// Rastet den Player am Drag-Ende aufs Grid ein (Move-Modus).
///
/// Die Ruheposition wird zuerst in die Feldgrenzen geclampt und dann pro
/// Achse unabhängig gesnappt. Die Modellposition gilt sofort (der
/// Routen-Anker wandert mit); die Animation ist eine reine Host-Anweisung.
pub fn snap_to_grid(state: &mut AppState, player_id: u64) {
    let Some(player) = state.play.player(player_id) else {
        return;
    };
    let current = player.position;

    let opts = &state.options;
    let clamped = Vec2::new(
        current.x.clamp(0.0, opts.field_width),
        current.y.clamp(0.0, opts.field_height),
    );
    let target = Vec2::new(
        geometry::snap_to(opts.grid_size, clamped.x, opts.snap_threshold),
        geometry::snap_to(opts.grid_size, clamped.y, opts.snap_threshold),
    );

    if target != current {
        state.view.push_snap_animation(SnapAnimation {
            player_id,
            from: current,
            to: target,
            duration_ms: state.options.snap_animation_ms,
        });
        state.play.move_player(player_id, target);
        log::debug!(
            "Player {} eingerastet: {:?} → {:?}",
            player_id,
            current,
            target
        );
    }

    // Geste ist abgeschlossen
    if drag_origin(state, player_id).is_some() {
        state.editor.gesture = None;
    }
}
