//! Follow-Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{FollowCommand, FollowIntent, FollowState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Handler auf dem FollowState.
#[derive(Default)]
pub struct FollowController;

impl FollowController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut FollowState,
        intent: FollowIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem FollowState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut FollowState,
        command: FollowCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Fortschritt ===
            FollowCommand::SelectClosestNode => handlers::progress::select_closest(state),
            FollowCommand::RetreatNode => handlers::progress::retreat(state),
            FollowCommand::AdvanceNode => handlers::progress::advance(state),
            FollowCommand::CheckReached => handlers::progress::check_reached(state),

            // === Route ===
            FollowCommand::LoadRoute { route } => handlers::route::load(state, route),
            FollowCommand::ClearRoute => handlers::route::clear(state),

            // === Cursor & Anzeige ===
            FollowCommand::SetCursor { position } => handlers::view::set_cursor(state, position),
            FollowCommand::ToggleOrientationHelper => {
                handlers::view::toggle_orientation_helper(state)
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen FollowState.
    pub fn build_render_scene(&self, state: &FollowState) -> RenderScene {
        render_scene::build(state)
    }
}
