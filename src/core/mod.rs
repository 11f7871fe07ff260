//! Core-Domänentypen: Nodes, Routen und Fortschritts-Logik.
//!
//! Dieses Modul definiert die Haupt-Datenstrukturen:
//! - Route: geordnete Node-Sequenz plus freistehende Nodes
//! - Node: einzelner Wegpunkt mit Position, Typ und optionalem Code
//! - RouteProgress: Cursor-Zustandsmaschine über der Node-Sequenz

pub mod node;
pub mod progress;
pub mod route;

pub use node::{Node, NodeType};
pub use progress::{RouteProgress, VisibleWindow};
pub use route::Route;
