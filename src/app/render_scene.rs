//! Builder für Render-Szenen aus dem FollowState.

use crate::app::FollowState;
use crate::shared::{MarkerInstance, RenderScene, RouteStyle};

/// Baut eine RenderScene aus dem aktuellen FollowState.
///
/// Fenster-Nodes zuerst (der erste ist der hervorgehobene aktuelle Zielpunkt),
/// danach alle freistehenden Nodes mit eigenem Mesh.
pub fn build(state: &FollowState) -> RenderScene {
    let options = state.options.clone();
    let Some(route) = state.route_holder.route() else {
        return RenderScene::empty(options);
    };

    let window = state
        .route_holder
        .progress
        .visible_window(route, options.squared_max_route_length);

    let mut markers = Vec::with_capacity(window.len() + route.detached_nodes().len());
    for (offset, node) in window.nodes(route).iter().enumerate() {
        markers.push(MarkerInstance {
            position: node.position,
            detached: false,
            selected: offset == 0,
        });
    }

    let route_polyline = window.nodes(route).iter().map(|n| n.position).collect();

    for node in route.detached_nodes() {
        markers.push(MarkerInstance {
            position: node.position,
            detached: true,
            selected: false,
        });
    }

    let orientation_helper = if state.view.orientation_helper_visible {
        state
            .route_holder
            .progress
            .current_target(route)
            .map(|target| [state.cursor, target.position])
    } else {
        None
    };

    RenderScene {
        markers,
        route_polyline,
        route_style: if window.heart_route {
            RouteStyle::Heart
        } else {
            RouteStyle::Normal
        },
        orientation_helper,
        options,
    }
}
