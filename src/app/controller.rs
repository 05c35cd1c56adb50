//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::PlayScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Modus & Optionen ===
            AppCommand::SetMode { mode } => handlers::editing::set_mode(state, mode),
            AppCommand::ApplyOptions { options } => {
                handlers::editing::apply_options(state, options)
            }

            // === Player-Geste ===
            AppCommand::BeginPlayerDrag { player_id } => {
                handlers::player_drag::begin(state, player_id)
            }
            AppCommand::CreateRoute { player_id } => {
                handlers::editing::create_route(state, player_id)
            }
            AppCommand::MovePlayer { player_id, delta } => {
                handlers::player_drag::move_player(state, player_id, delta)
            }
            AppCommand::ShapeRouteInitialSegment { player_id, delta } => {
                handlers::player_drag::shape_initial_segment(state, player_id, delta)
            }
            AppCommand::SnapPlayerToGrid { player_id } => {
                handlers::player_drag::snap_to_grid(state, player_id)
            }

            // === Pfad-Geste ===
            AppCommand::BeginPathDrag { player_id, pos } => {
                handlers::path_drag::begin(state, player_id, pos)
            }
            AppCommand::UpdatePathDrag { player_id, delta } => {
                handlers::path_drag::update(state, player_id, delta)
            }

            // === Editing ===
            AppCommand::AddPlayer { position, side } => {
                handlers::editing::add_player(state, position, side);
            }
            AppCommand::RemovePlayer { player_id } => {
                handlers::editing::remove_player(state, player_id)
            }
            AppCommand::ResetLineup => handlers::editing::reset_lineup(state),

            // === Datei-I/O ===
            AppCommand::LoadPlay { path } => handlers::play_io::load(state, path)?,
            AppCommand::SavePlay { path } => handlers::play_io::save(state, path)?,
        }

        Ok(())
    }

    /// Baut die deklarative Szene für den Host-Renderer.
    pub fn build_play_scene(&self, state: &AppState) -> PlayScene {
        render_scene::build(state)
    }
}
