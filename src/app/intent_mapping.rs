//! Mapping von Host-Intents auf mutierende App-Commands.
//!
//! Die Modus-Weiche der Player-Geste ("move verschiebt, design zeichnet")
//! liegt hier; die Seiten/Modus-Weiche der Pfad-Geste braucht den
//! Routen-Zustand und liegt im `path_drag`-Handler.

use super::state::Mode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PlayerDragStarted { player_id, pos: _ } => match state.editor.mode {
            // Im Design-Modus startet der Drag eine neue Route am Player
            Mode::Design => vec![
                AppCommand::BeginPlayerDrag { player_id },
                AppCommand::CreateRoute { player_id },
            ],
            Mode::Move => vec![AppCommand::BeginPlayerDrag { player_id }],
        },
        AppIntent::PlayerDragMoved {
            player_id,
            delta,
            pos: _,
        } => match state.editor.mode {
            Mode::Move => vec![AppCommand::MovePlayer { player_id, delta }],
            Mode::Design => vec![AppCommand::ShapeRouteInitialSegment { player_id, delta }],
        },
        AppIntent::PlayerDragEnded { player_id } => match state.editor.mode {
            Mode::Move => vec![AppCommand::SnapPlayerToGrid { player_id }],
            // Design-Modus: kein Einrasten, die Geste endet ohne Nacharbeit
            Mode::Design => vec![],
        },

        AppIntent::RouteDragStarted { player_id, pos } => {
            vec![AppCommand::BeginPathDrag { player_id, pos }]
        }
        AppIntent::RouteDragMoved {
            player_id,
            delta,
            pos: _,
        } => vec![AppCommand::UpdatePathDrag { player_id, delta }],
        // Kein End-Handler: der Gesten-Zustand wird vom nächsten Drag-Start
        // überschrieben
        AppIntent::RouteDragEnded { player_id: _ } => vec![],

        AppIntent::ModeChangeRequested { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::AddPlayerRequested { position, side } => {
            vec![AppCommand::AddPlayer { position, side }]
        }
        AppIntent::RemovePlayerRequested { player_id } => {
            vec![AppCommand::RemovePlayer { player_id }]
        }
        AppIntent::ResetLineupRequested => vec![AppCommand::ResetLineup],

        AppIntent::ImportPlayRequested { path } => vec![AppCommand::LoadPlay { path }],
        AppIntent::ExportPlayRequested { path } => vec![AppCommand::SavePlay { path }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_player_drag_start_erzeugt_route_nur_im_design_modus() {
        let mut state = AppState::new();

        state.editor.mode = Mode::Move;
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PlayerDragStarted {
                player_id: 1,
                pos: Vec2::ZERO,
            },
        );
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::BeginPlayerDrag { player_id: 1 }]
        ));

        state.editor.mode = Mode::Design;
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PlayerDragStarted {
                player_id: 1,
                pos: Vec2::ZERO,
            },
        );
        assert!(matches!(
            commands.as_slice(),
            [
                AppCommand::BeginPlayerDrag { player_id: 1 },
                AppCommand::CreateRoute { player_id: 1 }
            ]
        ));
    }

    #[test]
    fn test_player_drag_ende_snappt_nur_im_move_modus() {
        let mut state = AppState::new();

        state.editor.mode = Mode::Move;
        let commands =
            map_intent_to_commands(&state, AppIntent::PlayerDragEnded { player_id: 3 });
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::SnapPlayerToGrid { player_id: 3 }]
        ));

        state.editor.mode = Mode::Design;
        let commands =
            map_intent_to_commands(&state, AppIntent::PlayerDragEnded { player_id: 3 });
        assert!(commands.is_empty());
    }

    #[test]
    fn test_route_drag_ende_ist_kein_command() {
        let state = AppState::new();
        let commands = map_intent_to_commands(&state, AppIntent::RouteDragEnded { player_id: 7 });
        assert!(commands.is_empty());
    }
}
