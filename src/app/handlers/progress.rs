//! Handler für Fortschritts-Operationen auf der geladenen Route.

use crate::app::events::HostEffect;
use crate::app::FollowState;

/// Steuert den cursor-nächsten Node an. No-op ohne Route.
pub fn select_closest(state: &mut FollowState) {
    let Some(route) = state.route_holder.route().cloned() else {
        return;
    };

    state
        .route_holder
        .progress
        .select_closest(&route, state.cursor);
}

/// Schaltet einen Node zurück. No-op am Routenanfang.
pub fn retreat(state: &mut FollowState) {
    state.route_holder.progress.retreat();
}

/// Schaltet einen Node weiter und stellt den Clipboard-Auftrag ein,
/// falls ein Waypoint mit Code verlassen wurde.
pub fn advance(state: &mut FollowState) {
    let Some(route) = state.route_holder.route().cloned() else {
        return;
    };

    if let Some(code) = state.route_holder.progress.advance(&route) {
        log::info!("Waypoint-Code in die Zwischenablage: {}", code);
        state
            .pending_effects
            .push(HostEffect::CopyToClipboard { code });
    }
}

/// Erreicht-Prüfung gegen die aktuelle Cursor-Position.
/// Schaltet bei Treffer genau einmal weiter (einmal pro Auswertung).
pub fn check_reached(state: &mut FollowState) {
    let Some(route) = state.route_holder.route().cloned() else {
        return;
    };

    let reached = state.route_holder.progress.check_reached(
        &route,
        state.cursor,
        state.options.squared_dist_to_reach,
    );

    if reached {
        advance(state);
    }
}
