//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Host-Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::FollowOptions;
pub use options::{SQUARED_DIST_TO_REACH, SQUARED_MAX_ROUTE_LENGTH};
pub use render_scene::{MarkerInstance, RenderScene, RouteStyle};
