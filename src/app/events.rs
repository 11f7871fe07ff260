//! FollowIntent- und FollowCommand-Enums für den Intent/Command-Datenfluss.

use std::sync::Arc;

use glam::Vec3;

use crate::core::Route;

/// Eingaben aus Host-Adaptern (Tastatur-Hook, Render-Loop) ohne direkte
/// Mutationslogik. Der globale Hook des Hosts übersetzt Tastendrücke in
/// genau diese logischen Aktionen.
#[derive(Debug, Clone)]
pub enum FollowIntent {
    /// Nächstgelegenen Node zum Cursor ansteuern
    SelectClosestRequested,
    /// Manuell einen Node zurückschalten
    StepBackRequested,
    /// Manuell einen Node weiterschalten (Force-Advance)
    StepForwardRequested,
    /// Orientierungshilfe ein-/ausblenden (reiner Anzeige-Zustand)
    ToggleOrientationHelperRequested,
    /// Cursor-Position aus dem Host übernommen (einmal pro Frame)
    CursorMoved { position: Vec3 },
    /// Frame-Tick des Host-Render-Loops (treibt die Erreicht-Prüfung)
    FrameTick,
    /// Eine (neue) Route wurde geladen
    RouteLoaded { route: Arc<Route> },
    /// Route entladen
    RouteCleared,
}

/// Mutierende Commands auf dem FollowState.
#[derive(Debug, Clone)]
pub enum FollowCommand {
    /// Index auf den cursor-nächsten Node setzen
    SelectClosestNode,
    /// Index einen Node zurückschalten
    RetreatNode,
    /// Index einen Node weiterschalten (inkl. Clipboard-Effekt)
    AdvanceNode,
    /// Orientierungshilfe umschalten
    ToggleOrientationHelper,
    /// Cursor-Position setzen
    SetCursor { position: Vec3 },
    /// Erreicht-Prüfung ausführen (schaltet bei Treffer genau einmal weiter)
    CheckReached,
    /// Route in den Holder laden (setzt den Index zurück)
    LoadRoute { route: Arc<Route> },
    /// Route entladen
    ClearRoute,
}

/// Fire-and-forget-Aufträge an Host-Kollaborateure. Werden im State
/// gesammelt und vom Host abgeholt; Fehler dort werden nicht zurückgemeldet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEffect {
    /// Text-Code in die Host-Zwischenablage kopieren
    CopyToClipboard { code: String },
}
