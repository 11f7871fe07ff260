//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand des Overlays (geladene Route,
/// Cursor, Anzeige-Flags) und den Intent/Command-Datenfluss darüber.
pub mod state;

pub use crate::shared::RenderScene;
pub use command_log::CommandLog;
pub use controller::FollowController;
pub use events::{FollowCommand, FollowIntent, HostEffect};
pub use render_scene::build as build_render_scene;
pub use state::{FollowState, RouteHolder, ViewState};
