//! Radial layout for a two-level mind map.
//!
//! Pure geometry: the functions here take container dimensions, an expansion
//! flag and the fixed node set, and return positions and edges. Nothing in
//! this module touches the DOM.

mod config;
mod engine;
mod types;

pub use config::{CENTER_ID, MapConfig, default_nodes};
pub use engine::{LayoutState, compute_center, compute_edges, compute_positions, is_measured};
pub use types::{
	Edge, EdgeView, LayoutSnapshot, MapNode, NodeRole, NodeVariant, NodeView, Point,
};
