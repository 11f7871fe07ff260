//! Fortschritts-Logik über einer Route: Cursor-Zustandsmaschine,
//! Closest-Node-Auswahl und Sichtfenster-Berechnung.

use std::ops::Range;

use glam::Vec3;

use super::{Node, NodeType, Route};

/// Default: quadrierte Distanz, ab der ein Node als erreicht gilt.
pub const SQUARED_DIST_TO_REACH: f32 = 1.0;
/// Default: quadriertes Längenbudget des Sichtfensters.
pub const SQUARED_MAX_ROUTE_LENGTH: f32 = 1000.0;

/// Cursor in die Node-Sequenz einer Route.
///
/// `None` bedeutet "kein aktives Ziel". Die Zustände sind implizit:
/// inaktiv (`None`), aktiv, sowie "Route abgeschlossen" (letzter Index,
/// `advance` bleibt dauerhaft ein No-op).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteProgress {
    node_index: Option<usize>,
}

impl RouteProgress {
    /// Erstellt einen inaktiven Fortschritt (kein aktives Ziel).
    pub fn inactive() -> Self {
        Self { node_index: None }
    }

    /// Erstellt einen Fortschritt am Routenanfang.
    /// Leere Routen ergeben einen inaktiven Fortschritt.
    pub fn start_of(route: &Route) -> Self {
        Self {
            node_index: if route.is_empty() { None } else { Some(0) },
        }
    }

    /// Gibt den aktuellen Node-Index zurück (`None` = kein aktives Ziel).
    pub fn node_index(&self) -> Option<usize> {
        self.node_index
    }

    /// Gibt den aktuell angesteuerten Node zurück.
    pub fn current_target<'a>(&self, route: &'a Route) -> Option<&'a Node> {
        let index = self.node_index?;
        debug_assert!(index < route.node_count(), "Node-Index außerhalb der Route");
        Some(&route.nodes()[index])
    }

    /// Schaltet auf den nächsten Node weiter.
    ///
    /// Gibt den Clipboard-Code des verlassenen Nodes zurück, falls dieser ein
    /// Waypoint mit nicht-leerem Code ist. Am letzten Node (und ohne aktives
    /// Ziel) ein No-op ohne Code: eine Route, die auf einem Waypoint endet,
    /// liefert dessen Code daher nie aus.
    pub fn advance(&mut self, route: &Route) -> Option<String> {
        let index = self.node_index?;
        debug_assert!(index < route.node_count(), "Node-Index außerhalb der Route");
        if index + 1 >= route.node_count() {
            return None;
        }

        let reached = &route.nodes()[index];
        let code = reached.copyable_code().map(str::to_owned);
        self.node_index = Some(index + 1);
        code
    }

    /// Schaltet einen Node zurück. No-op am Routenanfang und ohne aktives Ziel.
    pub fn retreat(&mut self) {
        if let Some(index) = self.node_index {
            if index > 0 {
                self.node_index = Some(index - 1);
            }
        }
    }

    /// Setzt den Index auf den Node mit minimaler quadrierter Distanz zum
    /// Cursor. Bei Gleichstand gewinnt der niedrigste Index. No-op bei
    /// leerer Route.
    pub fn select_closest(&mut self, route: &Route, cursor: Vec3) {
        let mut best: Option<(usize, f32)> = None;
        for (index, node) in route.nodes().iter().enumerate() {
            let dist_sq = node.position.distance_squared(cursor);
            match best {
                Some((_, best_sq)) if best_sq <= dist_sq => {}
                _ => best = Some((index, dist_sq)),
            }
        }

        if let Some((index, _)) = best {
            self.node_index = Some(index);
        }
    }

    /// Prüft, ob der Cursor das aktuelle Ziel erreicht hat.
    ///
    /// Der Aufrufer entscheidet über das anschließende `advance`; der
    /// Fortschritt schaltet nie selbsttätig weiter.
    pub fn check_reached(&self, route: &Route, cursor: Vec3, threshold_sq: f32) -> bool {
        match self.current_target(route) {
            Some(target) => target.position.distance_squared(cursor) <= threshold_sq,
            None => false,
        }
    }

    /// Berechnet das Sichtfenster ab dem aktuellen Index.
    ///
    /// Das Fenster endet einschließlich am ersten Waypoint oder an dem Node,
    /// dessen Segment das quadrierte Längenbudget überschreitet (inklusive
    /// Abbruchregel: der überschreitende Node gehört noch dazu). Ohne aktives
    /// Ziel ist das Fenster leer.
    pub fn visible_window(&self, route: &Route, max_len_sq: f32) -> VisibleWindow {
        let Some(start) = self.node_index else {
            return VisibleWindow::empty();
        };
        debug_assert!(start < route.node_count(), "Node-Index außerhalb der Route");

        let mut end = start;
        let mut cumulative_sq = 0.0f32;
        let mut previous: Option<&Node> = None;
        for node in &route.nodes()[start..] {
            end += 1;

            if node.node_type == NodeType::Waypoint {
                break;
            }

            if let Some(prev) = previous {
                cumulative_sq += prev.position.distance_squared(node.position);
                if cumulative_sq > max_len_sq {
                    break;
                }
            }

            previous = Some(node);
        }

        VisibleWindow {
            range: start..end,
            heart_route: heart_route_active(route, start),
        }
    }
}

/// Rückwärts-Scan über bereits passierte Nodes: der zuerst gefundene
/// Heart-Node aktiviert den Heart-Stil, eine HeartWall beendet ihn.
fn heart_route_active(route: &Route, index: usize) -> bool {
    for node in route.nodes()[..index].iter().rev() {
        match node.node_type {
            NodeType::HeartWall => return false,
            NodeType::Heart => return true,
            _ => {}
        }
    }
    false
}

/// Sichtfenster: vorderer Routen-Ausschnitt, der aktuell angezeigt wird.
/// Reine Ableitung aus Route und Index, wird nie direkt mutiert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWindow {
    /// Index-Bereich in `Route::nodes` (halb-offen)
    pub range: Range<usize>,
    /// Ob der Abschnitt im Heart-Stil dargestellt wird
    pub heart_route: bool,
}

impl VisibleWindow {
    /// Erstellt ein leeres Fenster.
    pub fn empty() -> Self {
        Self {
            range: 0..0,
            heart_route: false,
        }
    }

    /// Gibt `true` zurück, wenn das Fenster keine Nodes enthält.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Gibt die Anzahl der Nodes im Fenster zurück.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Liefert die Fenster-Nodes als Slice der Route.
    pub fn nodes<'a>(&self, route: &'a Route) -> &'a [Node] {
        &route.nodes()[self.range.clone()]
    }
}
