//! Handler für das Laden und Entladen von Routen.

use std::sync::Arc;

use crate::app::FollowState;
use crate::core::Route;

/// Lädt eine Route in den Holder. Der Fortschritt startet am Routenanfang;
/// leere Routen bleiben inaktiv.
pub fn load(state: &mut FollowState, route: Arc<Route>) {
    log::info!(
        "Route geladen: {} Nodes, {} freistehend",
        route.node_count(),
        route.detached_nodes().len()
    );
    state.route_holder.load_route(route);
}

/// Entlädt die Route und deaktiviert den Fortschritt.
pub fn clear(state: &mut FollowState) {
    log::info!("Route entladen");
    state.route_holder.clear_route();
}
