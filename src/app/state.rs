//! Anwendungszustand des Overlays: Route-Holder, Cursor und Anzeige-Flags.

use std::sync::Arc;

use glam::Vec3;

use super::events::HostEffect;
use super::CommandLog;
use crate::core::{Route, RouteProgress};
use crate::shared::FollowOptions;

/// Hält die geladene Route zusammen mit dem Fortschritt.
///
/// Der Fortschritt lebt bewusst im Holder statt in einer Anzeige-Komponente,
/// damit der Index Anzeige-Reloads überdauert.
#[derive(Debug, Clone, Default)]
pub struct RouteHolder {
    route: Option<Arc<Route>>,
    /// Fortschritts-Cursor über der geladenen Route
    pub progress: RouteProgress,
}

impl RouteHolder {
    /// Erstellt einen leeren Holder ohne Route.
    pub fn new() -> Self {
        Self {
            route: None,
            progress: RouteProgress::inactive(),
        }
    }

    /// Gibt die geladene Route zurück (read-only).
    pub fn route(&self) -> Option<&Arc<Route>> {
        self.route.as_ref()
    }

    /// Lädt eine Route und setzt den Fortschritt an den Routenanfang.
    /// Leere Routen ergeben einen inaktiven Fortschritt.
    pub fn load_route(&mut self, route: Arc<Route>) {
        self.progress = RouteProgress::start_of(&route);
        self.route = Some(route);
    }

    /// Entlädt die Route und deaktiviert den Fortschritt.
    pub fn clear_route(&mut self) {
        self.route = None;
        self.progress = RouteProgress::inactive();
    }
}

/// Anzeigebezogener Zustand ohne Einfluss auf den Fortschritt.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Ob die Orientierungshilfe (Cursor → Ziel) eingeblendet ist.
    /// Startet ausgeblendet.
    pub orientation_helper_visible: bool,
}

impl ViewState {
    /// Erstellt den Standard-Anzeigezustand.
    pub fn new() -> Self {
        Self {
            orientation_helper_visible: false,
        }
    }
}

/// Hauptzustand des Overlays.
pub struct FollowState {
    /// Geladene Route plus Fortschritt (None = keine Route geladen)
    pub route_holder: RouteHolder,
    /// Cursor-Position, pro Frame vom Host aktualisiert
    pub cursor: Vec3,
    /// Anzeige-Zustand
    pub view: ViewState,
    /// Laufzeit-Optionen (Schwellen, Farben, Größen)
    pub options: FollowOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Gesammelte Host-Aufträge, werden vom Host abgeholt
    pub pending_effects: Vec<HostEffect>,
}

impl FollowState {
    /// Erstellt einen neuen, leeren Zustand.
    pub fn new() -> Self {
        Self {
            route_holder: RouteHolder::new(),
            cursor: Vec3::ZERO,
            view: ViewState::new(),
            options: FollowOptions::default(),
            command_log: CommandLog::new(),
            pending_effects: Vec::new(),
        }
    }

    /// Gibt die Anzahl der anlaufbaren Nodes zurück (für UI-Anzeige).
    pub fn node_count(&self) -> usize {
        self.route_holder
            .route()
            .map_or(0, |route| route.node_count())
    }

    /// Holt alle gesammelten Host-Aufträge ab und leert die Queue.
    pub fn drain_effects(&mut self) -> Vec<HostEffect> {
        std::mem::take(&mut self.pending_effects)
    }
}

impl Default for FollowState {
    fn default() -> Self {
        Self::new()
    }
}
