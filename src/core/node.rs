//! Node-Datenmodell: ein einzelner Halt auf einer Route.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Typ eines Nodes. Steuert Fenster-Abbruch (Waypoint) und
/// Routen-Darstellung (Heart/HeartWall).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// Gewöhnlicher Zwischenpunkt ohne Sonderverhalten
    Normal,
    /// Schnellreisepunkt mit kopierbarem Code
    Waypoint,
    /// Beginn eines Herz-Abschnitts (Darstellung wechselt auf Heart-Stil)
    Heart,
    /// Ende eines Herz-Abschnitts (Darstellung wechselt zurück)
    HeartWall,
}

/// Ein Halt auf einer Route. Nach dem Laden unveränderlich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position in Welt-Koordinaten
    pub position: Vec3,
    /// Node-Typ
    pub node_type: NodeType,
    /// Code des Schnellreisepunkts (nur bei Waypoint-Nodes gesetzt, ggf. leer)
    #[serde(default)]
    pub waypoint_code: Option<String>,
}

impl Node {
    /// Erstellt einen Node ohne Waypoint-Code.
    pub fn new(position: Vec3, node_type: NodeType) -> Self {
        Self {
            position,
            node_type,
            waypoint_code: None,
        }
    }

    /// Erstellt einen Waypoint-Node mit Code.
    pub fn waypoint(position: Vec3, code: impl Into<String>) -> Self {
        Self {
            position,
            node_type: NodeType::Waypoint,
            waypoint_code: Some(code.into()),
        }
    }

    /// Gibt den Waypoint-Code zurück, sofern vorhanden und nicht leer.
    pub fn copyable_code(&self) -> Option<&str> {
        match self.node_type {
            NodeType::Waypoint => self
                .waypoint_code
                .as_deref()
                .filter(|code| !code.is_empty()),
            _ => None,
        }
    }
}
