//! Die Route-Datenstruktur: geordnete Node-Sequenz plus freistehende Nodes.

use serde::{Deserialize, Serialize};

use super::Node;

/// Vollständige Route, wie sie vom Host geladen wird.
/// Diese Crate liest die Route nur, sie wird nie mutiert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Geordnete Sequenz der anlaufbaren Nodes
    nodes: Vec<Node>,
    /// Freistehende Nodes: werden angezeigt, aber nie angesteuert
    #[serde(default)]
    detached_nodes: Vec<Node>,
}

impl Route {
    /// Erstellt eine Route aus Node-Sequenz und freistehenden Nodes.
    pub fn new(nodes: Vec<Node>, detached_nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            detached_nodes,
        }
    }

    /// Erstellt eine Route ohne freistehende Nodes.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self::new(nodes, Vec::new())
    }

    /// Liefert die geordnete Node-Sequenz (read-only).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Liefert die freistehenden Nodes (read-only).
    pub fn detached_nodes(&self) -> &[Node] {
        &self.detached_nodes
    }

    /// Gibt die Anzahl der anlaufbaren Nodes zurück.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn die Route keine anlaufbaren Nodes hat.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
