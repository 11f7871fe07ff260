//! Route-Follow Overlay Library.
//! Engine-freier Follow-Mode-Kern als Library exportiert für Tests und Host-Adapter.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    CommandLog, FollowCommand, FollowController, FollowIntent, FollowState, HostEffect,
    RouteHolder, ViewState,
};
pub use crate::core::{Node, NodeType, Route, RouteProgress, VisibleWindow};
pub use shared::{FollowOptions, MarkerInstance, RenderScene, RouteStyle};
