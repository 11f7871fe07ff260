//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-Renderer.
//!
//! Die App beschreibt hier deklarativ, welche Marker und Linien der Host
//! anzeigen soll; instanziiert wird nichts. Der Host-Renderer difft die
//! Szene gegen seinen aktuellen Anzeigestand.

use glam::Vec3;

use super::options::FollowOptions;

/// Darstellungsstil des Routen-Polyzugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStyle {
    /// Normale Route (Follow-Stil)
    Normal,
    /// Herz-Abschnitt (Heart-Stil)
    Heart,
}

/// Ein anzuzeigender Marker an einer Weltposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerInstance {
    /// Position in Welt-Koordinaten
    pub position: Vec3,
    /// Freistehender Node (anderes Mesh, nie angesteuert)
    pub detached: bool,
    /// Aktuell angesteuerter Node (hervorgehoben)
    pub selected: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Alle anzuzeigenden Marker (Fenster-Nodes, dann freistehende Nodes)
    pub markers: Vec<MarkerInstance>,
    /// Polyzug durch die Fenster-Nodes
    pub route_polyline: Vec<Vec3>,
    /// Stil des Polyzugs für diesen Frame
    pub route_style: RouteStyle,
    /// Orientierungshilfe Cursor → Ziel, falls eingeblendet
    pub orientation_helper: Option<[Vec3; 2]>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: FollowOptions,
}

impl RenderScene {
    /// Erstellt eine Szene ohne Route (nichts anzuzeigen).
    pub fn empty(options: FollowOptions) -> Self {
        Self {
            markers: Vec::new(),
            route_polyline: Vec::new(),
            route_style: RouteStyle::Normal,
            orientation_helper: None,
            options,
        }
    }

    /// Gibt zurück, ob eine Route für Rendering vorhanden ist.
    pub fn has_route(&self) -> bool {
        !self.route_polyline.is_empty()
    }
}
