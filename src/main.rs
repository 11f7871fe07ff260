//! Route-Follow Overlay — Headless-Demo.
//!
//! Lädt eine Route aus einer JSON-Datei und simuliert einen Cursor, der die
//! Route abläuft. Ersetzt Render-Loop und globalen Tastatur-Hook des Hosts
//! durch eine einfache Schleife, die Intents in den Controller speist.

use std::sync::Arc;

use anyhow::Context;
use glam::Vec3;
use route_follow_overlay::{
    FollowController, FollowIntent, FollowOptions, FollowState, HostEffect, Route,
};

/// Schrittweite des simulierten Cursors pro Frame (Welteinheiten).
const CURSOR_STEP: f32 = 0.5;
/// Obergrenze simulierter Frames, falls eine Route unerreichbare Nodes hat.
const MAX_FRAMES: usize = 100_000;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Route-Follow Overlay v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let path = std::env::args()
        .nth(1)
        .context("Aufruf: route-follow-overlay <route.json>")?;
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Route-Datei nicht lesbar: {path}"))?;
    let route: Route =
        serde_json::from_str(&content).with_context(|| format!("Route-Datei ungültig: {path}"))?;

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = FollowOptions::config_path();
    let options = FollowOptions::load_from_file(&config_path);

    let mut state = FollowState::new();
    state.options = options;
    let mut controller = FollowController::new();

    controller.handle_intent(
        &mut state,
        FollowIntent::RouteLoaded {
            route: Arc::new(route),
        },
    )?;

    simulate(&mut controller, &mut state)?;

    Ok(())
}

/// Bewegt den Cursor frameweise auf das jeweils aktuelle Ziel zu, bis die
/// Route abgeschlossen ist, und protokolliert Szene und Host-Aufträge.
fn simulate(controller: &mut FollowController, state: &mut FollowState) -> anyhow::Result<()> {
    let mut cursor = Vec3::ZERO;

    for frame in 0..MAX_FRAMES {
        let Some(route) = state.route_holder.route().cloned() else {
            break;
        };
        let Some(target) = state.route_holder.progress.current_target(&route) else {
            log::info!("Keine Route aktiv, Simulation beendet");
            return Ok(());
        };

        let target_pos = target.position;
        let to_target = target_pos - cursor;
        if to_target.length_squared() > CURSOR_STEP * CURSOR_STEP {
            cursor += to_target.normalize() * CURSOR_STEP;
        } else {
            cursor = target_pos;
        }

        let index_before = state.route_holder.progress.node_index();
        controller.handle_intent(state, FollowIntent::CursorMoved { position: cursor })?;
        controller.handle_intent(state, FollowIntent::FrameTick)?;

        for effect in state.drain_effects() {
            match effect {
                HostEffect::CopyToClipboard { code } => {
                    log::info!("[Host] Zwischenablage: {}", code);
                }
            }
        }

        let index_after = state.route_holder.progress.node_index();
        if index_after != index_before {
            let scene = controller.build_render_scene(state);
            log::info!(
                "Frame {frame}: Node {:?} erreicht, Fenster {} Marker, Stil {:?}",
                index_before,
                scene.markers.len(),
                scene.route_style
            );
        }

        // Route abgeschlossen: Ziel ist der letzte Node und er ist erreicht
        if index_after == index_before
            && index_after == Some(route.node_count().saturating_sub(1))
            && cursor == target_pos
        {
            log::info!("Route abgeschlossen nach {frame} Frames");
            return Ok(());
        }
    }

    log::warn!("Frame-Limit erreicht, Simulation abgebrochen");
    Ok(())
}
