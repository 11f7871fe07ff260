//! Handler für Cursor- und Anzeige-Zustand.

use glam::Vec3;

use crate::app::FollowState;

/// Übernimmt die Cursor-Position des Hosts für diesen Frame.
pub fn set_cursor(state: &mut FollowState, position: Vec3) {
    state.cursor = position;
}

/// Blendet die Orientierungshilfe ein bzw. aus.
/// Reiner Anzeige-Zustand, der Fortschritt bleibt unberührt.
pub fn toggle_orientation_helper(state: &mut FollowState) {
    state.view.orientation_helper_visible = !state.view.orientation_helper_visible;
}
