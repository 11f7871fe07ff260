//! Mapping von Host-Intents auf mutierende Follow-Commands.

use super::{FollowCommand, FollowIntent, FollowState};

/// Übersetzt einen `FollowIntent` in eine Sequenz ausführbarer `FollowCommand`s.
pub fn map_intent_to_commands(_state: &FollowState, intent: FollowIntent) -> Vec<FollowCommand> {
    match intent {
        FollowIntent::SelectClosestRequested => vec![FollowCommand::SelectClosestNode],
        FollowIntent::StepBackRequested => vec![FollowCommand::RetreatNode],
        FollowIntent::StepForwardRequested => vec![FollowCommand::AdvanceNode],
        FollowIntent::ToggleOrientationHelperRequested => {
            vec![FollowCommand::ToggleOrientationHelper]
        }
        FollowIntent::CursorMoved { position } => vec![FollowCommand::SetCursor { position }],
        FollowIntent::FrameTick => vec![FollowCommand::CheckReached],
        FollowIntent::RouteLoaded { route } => vec![FollowCommand::LoadRoute { route }],
        FollowIntent::RouteCleared => vec![FollowCommand::ClearRoute],
    }
}
