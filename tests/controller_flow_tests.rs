use std::sync::Arc;

use glam::Vec3;
use route_follow_overlay::{
    FollowCommand, FollowController, FollowIntent, FollowState, HostEffect, Node, NodeType, Route,
    RouteStyle,
};

fn scenario_route() -> Arc<Route> {
    Arc::new(Route::from_nodes(vec![
        Node::new(Vec3::new(0.0, 0.0, 0.0), NodeType::Normal),
        Node::new(Vec3::new(0.0, 0.0, 1.0), NodeType::Normal),
        Node::waypoint(Vec3::new(0.0, 0.0, 2.0), "ABC"),
    ]))
}

fn loaded_state(route: Arc<Route>) -> (FollowController, FollowState) {
    let mut controller = FollowController::new();
    let mut state = FollowState::new();
    controller
        .handle_intent(&mut state, FollowIntent::RouteLoaded { route })
        .expect("RouteLoaded sollte ohne Fehler durchlaufen");
    (controller, state)
}

#[test]
fn test_route_loaded_starts_at_first_node() {
    let (_, state) = loaded_state(scenario_route());

    assert_eq!(state.route_holder.progress.node_index(), Some(0));
    assert_eq!(state.node_count(), 3);
}

#[test]
fn test_frame_tick_at_target_advances_exactly_once() {
    let (mut controller, mut state) = loaded_state(scenario_route());

    // Cursor steht auf Node 0: ein Tick schaltet genau einmal weiter
    controller
        .handle_intent(&mut state, FollowIntent::CursorMoved { position: Vec3::ZERO })
        .expect("CursorMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, FollowIntent::FrameTick)
        .expect("FrameTick sollte ohne Fehler durchlaufen");

    assert_eq!(state.route_holder.progress.node_index(), Some(1));
    // Node 0 war kein Waypoint: kein Clipboard-Auftrag
    assert!(state.drain_effects().is_empty());
}

#[test]
fn test_frame_tick_away_from_target_does_nothing() {
    let (mut controller, mut state) = loaded_state(scenario_route());

    controller
        .handle_intent(
            &mut state,
            FollowIntent::CursorMoved {
                position: Vec3::new(50.0, 0.0, 0.0),
            },
        )
        .expect("CursorMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, FollowIntent::FrameTick)
        .expect("FrameTick sollte ohne Fehler durchlaufen");

    assert_eq!(state.route_holder.progress.node_index(), Some(0));
}

#[test]
fn test_step_forward_past_waypoint_queues_clipboard_effect() {
    let route = Arc::new(Route::from_nodes(vec![
        Node::waypoint(Vec3::ZERO, "WP-7"),
        Node::new(Vec3::new(0.0, 0.0, 5.0), NodeType::Normal),
    ]));
    let (mut controller, mut state) = loaded_state(route);

    controller
        .handle_intent(&mut state, FollowIntent::StepForwardRequested)
        .expect("StepForwardRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.route_holder.progress.node_index(), Some(1));
    assert_eq!(
        state.drain_effects(),
        vec![HostEffect::CopyToClipboard {
            code: "WP-7".to_string()
        }]
    );
    // Queue ist nach dem Abholen leer
    assert!(state.drain_effects().is_empty());
}

#[test]
fn test_step_forward_at_last_node_is_noop_without_effect() {
    let (mut controller, mut state) = loaded_state(scenario_route());
    for _ in 0..2 {
        controller
            .handle_intent(&mut state, FollowIntent::StepForwardRequested)
            .expect("StepForwardRequested sollte ohne Fehler durchlaufen");
    }
    state.drain_effects();
    assert_eq!(state.route_holder.progress.node_index(), Some(2));

    // Letzter Node ist ein Waypoint; ohne Übergang gibt es keinen Auftrag
    controller
        .handle_intent(&mut state, FollowIntent::StepForwardRequested)
        .expect("StepForwardRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.route_holder.progress.node_index(), Some(2));
    assert!(state.drain_effects().is_empty());
}

#[test]
fn test_step_back_then_forward_restores_index() {
    let (mut controller, mut state) = loaded_state(scenario_route());
    controller
        .handle_intent(&mut state, FollowIntent::StepForwardRequested)
        .expect("StepForwardRequested sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, FollowIntent::StepBackRequested)
        .expect("StepBackRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.route_holder.progress.node_index(), Some(0));

    controller
        .handle_intent(&mut state, FollowIntent::StepForwardRequested)
        .expect("StepForwardRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.route_holder.progress.node_index(), Some(1));
}

#[test]
fn test_select_closest_targets_nearest_node() {
    let (mut controller, mut state) = loaded_state(scenario_route());

    controller
        .handle_intent(
            &mut state,
            FollowIntent::CursorMoved {
                position: Vec3::new(0.0, 0.0, 1.9),
            },
        )
        .expect("CursorMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, FollowIntent::SelectClosestRequested)
        .expect("SelectClosestRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.route_holder.progress.node_index(), Some(2));
}

#[test]
fn test_intents_on_empty_state_are_robust() {
    let mut controller = FollowController::new();
    let mut state = FollowState::new();

    for intent in [
        FollowIntent::SelectClosestRequested,
        FollowIntent::StepBackRequested,
        FollowIntent::StepForwardRequested,
        FollowIntent::FrameTick,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Intents ohne Route sollten robust sein");
    }

    assert_eq!(state.route_holder.progress.node_index(), None);
    assert!(state.drain_effects().is_empty());
    assert_eq!(state.command_log.len(), 4);
}

#[test]
fn test_route_reload_resets_progress() {
    let (mut controller, mut state) = loaded_state(scenario_route());
    controller
        .handle_intent(&mut state, FollowIntent::StepForwardRequested)
        .expect("StepForwardRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.route_holder.progress.node_index(), Some(1));

    controller
        .handle_intent(
            &mut state,
            FollowIntent::RouteLoaded {
                route: scenario_route(),
            },
        )
        .expect("RouteLoaded sollte ohne Fehler durchlaufen");

    assert_eq!(state.route_holder.progress.node_index(), Some(0));
}

#[test]
fn test_route_cleared_deactivates_progress() {
    let (mut controller, mut state) = loaded_state(scenario_route());

    controller
        .handle_intent(&mut state, FollowIntent::RouteCleared)
        .expect("RouteCleared sollte ohne Fehler durchlaufen");

    assert_eq!(state.route_holder.progress.node_index(), None);
    assert!(!controller.build_render_scene(&state).has_route());
}

#[test]
fn test_toggle_orientation_helper_is_display_only() {
    let (mut controller, mut state) = loaded_state(scenario_route());
    assert!(!state.view.orientation_helper_visible);

    controller
        .handle_intent(&mut state, FollowIntent::ToggleOrientationHelperRequested)
        .expect("Toggle sollte ohne Fehler durchlaufen");

    assert!(state.view.orientation_helper_visible);
    assert_eq!(state.route_holder.progress.node_index(), Some(0));

    let scene = controller.build_render_scene(&state);
    assert!(scene.orientation_helper.is_some());
}

#[test]
fn test_render_scene_tracks_heart_sections() {
    let route = Arc::new(Route::from_nodes(vec![
        Node::new(Vec3::ZERO, NodeType::Heart),
        Node::new(Vec3::new(0.0, 0.0, 1.0), NodeType::Normal),
        Node::new(Vec3::new(0.0, 0.0, 2.0), NodeType::HeartWall),
        Node::new(Vec3::new(0.0, 0.0, 3.0), NodeType::Normal),
    ]));
    let (mut controller, mut state) = loaded_state(route);

    controller
        .handle_intent(&mut state, FollowIntent::StepForwardRequested)
        .expect("StepForwardRequested sollte ohne Fehler durchlaufen");
    assert_eq!(
        controller.build_render_scene(&state).route_style,
        RouteStyle::Heart
    );

    for _ in 0..2 {
        controller
            .handle_intent(&mut state, FollowIntent::StepForwardRequested)
            .expect("StepForwardRequested sollte ohne Fehler durchlaufen");
    }
    assert_eq!(
        controller.build_render_scene(&state).route_style,
        RouteStyle::Normal
    );
}

#[test]
fn test_command_log_records_dispatched_commands() {
    let (mut controller, mut state) = loaded_state(scenario_route());

    controller
        .handle_intent(&mut state, FollowIntent::StepForwardRequested)
        .expect("StepForwardRequested sollte ohne Fehler durchlaufen");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        FollowCommand::AdvanceNode => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_route_json_loading_matches_model() {
    // So liefert der Host Routen an: JSON mit Nodes und freistehenden Nodes
    let json = r#"{
        "nodes": [
            { "position": [0.0, 0.0, 0.0], "node_type": "Normal" },
            { "position": [0.0, 0.0, 2.0], "node_type": "Waypoint", "waypoint_code": "ABC" }
        ],
        "detached_nodes": [
            { "position": [5.0, 0.0, 0.0], "node_type": "Heart" }
        ]
    }"#;

    let route: Route = serde_json::from_str(json).expect("Route-JSON sollte ladbar sein");

    assert_eq!(route.node_count(), 2);
    assert_eq!(route.detached_nodes().len(), 1);
    assert_eq!(route.nodes()[1].copyable_code(), Some("ABC"));
}
