use log::{debug, warn};

use super::config::MapConfig;
use super::types::{Edge, EdgeView, LayoutSnapshot, MapNode, NodeView, Point};

/// Midpoint of a `width` x `height` container.
pub fn compute_center(width: f64, height: f64) -> Point {
	Point::new(width / 2.0, height / 2.0)
}

/// Whether the container has been measured. Both dimensions at zero means the
/// host has not reported a size yet, and layout must not run.
pub fn is_measured(width: f64, height: f64) -> bool {
	!(width == 0.0 && height == 0.0)
}

/// Position of every node in `nodes`, in the same order.
///
/// The center always sits on `center`. Category nodes stack on `center` while
/// collapsed and move out to `config.radius` along their configured angle when
/// expanded.
pub fn compute_positions(
	center: Point,
	expanded: bool,
	nodes: &[MapNode],
	config: &MapConfig,
) -> Vec<Point> {
	nodes
		.iter()
		.map(|node| {
			if node.is_center() || !expanded {
				center
			} else {
				center.polar_offset(config.angle_for(&node.id), config.radius)
			}
		})
		.collect()
}

/// Parent/child connections to draw; empty unless `expanded`.
pub fn compute_edges(nodes: &[MapNode], expanded: bool) -> Vec<Edge> {
	if !expanded {
		return Vec::new();
	}
	nodes
		.iter()
		.filter(|node| !node.is_center())
		.filter_map(|node| {
			node.parent_id.as_ref().map(|parent| Edge {
				source_id: parent.clone(),
				target_id: node.id.clone(),
			})
		})
		.collect()
}

/// Owns the layout inputs and the last computed positions and edges.
///
/// Every mutation goes through [`resize`](Self::resize),
/// [`toggle`](Self::toggle) or [`set_expanded`](Self::set_expanded), each of
/// which recomputes immediately. Rendering reads [`snapshot`](Self::snapshot).
#[derive(Clone, Debug)]
pub struct LayoutState {
	config: MapConfig,
	nodes: Vec<MapNode>,
	edges: Vec<Edge>,
	width: f64,
	height: f64,
	expanded: bool,
}

impl LayoutState {
	/// A collapsed, unmeasured layout over a fixed node set.
	pub fn new(config: MapConfig, nodes: Vec<MapNode>) -> Self {
		check_tree(&nodes);
		Self {
			config,
			nodes,
			edges: Vec::new(),
			width: 0.0,
			height: 0.0,
			expanded: false,
		}
	}

	/// Layout configuration.
	pub fn config(&self) -> &MapConfig {
		&self.config
	}

	/// Nodes with their current positions.
	pub fn nodes(&self) -> &[MapNode] {
		&self.nodes
	}

	/// Currently active edges.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Whether the map is expanded.
	pub fn expanded(&self) -> bool {
		self.expanded
	}

	/// Container dimensions as last reported.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Center of the container.
	pub fn center(&self) -> Point {
		compute_center(self.width, self.height)
	}

	/// Position of the node with `id`, if it exists.
	pub fn position_of(&self, id: &str) -> Option<Point> {
		self.nodes.iter().find(|n| n.id == id).map(|n| n.position)
	}

	/// Records new container dimensions and recomputes.
	pub fn resize(&mut self, width: f64, height: f64) -> bool {
		self.width = sanitize_dimension(width);
		self.height = sanitize_dimension(height);
		self.recompute()
	}

	/// Flips between collapsed and expanded and recomputes.
	pub fn toggle(&mut self) -> bool {
		self.set_expanded(!self.expanded)
	}

	/// Sets the expansion flag and recomputes.
	pub fn set_expanded(&mut self, expanded: bool) -> bool {
		debug!(
			"mind map {}",
			if expanded { "expanded" } else { "collapsed" }
		);
		self.expanded = expanded;
		// Edges only exist while expanded, measured or not.
		if !expanded {
			self.edges.clear();
		}
		self.recompute()
	}

	/// Recomputes every position and edge from scratch.
	///
	/// Returns `false`, leaving positions and edges untouched, while the
	/// container is unmeasured.
	pub fn recompute(&mut self) -> bool {
		if !is_measured(self.width, self.height) {
			debug!("container not measured yet, skipping layout");
			return false;
		}
		let center = self.center();
		let positions = compute_positions(center, self.expanded, &self.nodes, &self.config);
		for (node, position) in self.nodes.iter_mut().zip(positions) {
			node.position = position;
		}
		self.edges = compute_edges(&self.nodes, self.expanded);
		true
	}

	/// Immutable view of the current layout for the renderer.
	pub fn snapshot(&self) -> LayoutSnapshot {
		let nodes = self
			.nodes
			.iter()
			.map(|node| NodeView {
				id: node.id.clone(),
				x: node.position.x,
				y: node.position.y,
				variant: node.variant,
				size: self.size_hint(node),
				is_center_expanded: self.expanded && node.is_center(),
				role: node.role,
				label: node.label.clone(),
				description: node.description.clone(),
			})
			.collect();

		let edges = self
			.edges
			.iter()
			.filter_map(|edge| {
				let start = self.position_of(&edge.source_id)?;
				let end = self.position_of(&edge.target_id)?;
				Some(EdgeView {
					key: edge.key(),
					start_x: start.x,
					start_y: start.y,
					end_x: end.x,
					end_y: end.y,
				})
			})
			.collect();

		LayoutSnapshot {
			expanded: self.expanded,
			nodes,
			edges,
		}
	}

	/// Diameter hint for `node`.
	pub fn size_hint(&self, node: &MapNode) -> f64 {
		if node.is_center() {
			self.config.center_size
		} else {
			self.config.category_size
		}
	}
}

fn sanitize_dimension(value: f64) -> f64 {
	if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn check_tree(nodes: &[MapNode]) {
	let centers: Vec<&MapNode> = nodes.iter().filter(|n| n.is_center()).collect();
	if centers.len() != 1 {
		warn!("mind map has {} center nodes, expected 1", centers.len());
	}
	let Some(center) = centers.first() else {
		return;
	};
	for node in nodes.iter().filter(|n| !n.is_center()) {
		if node.parent_id.as_deref() != Some(center.id.as_str()) {
			warn!(
				"node {:?} has parent {:?}, expected {:?}",
				node.id, node.parent_id, center.id
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::*;
	use crate::layout::config::{CENTER_ID, default_nodes};
	use crate::layout::types::{NodeRole, NodeVariant};

	const EPS: f64 = 1e-9;

	fn measured(width: f64, height: f64) -> LayoutState {
		let mut state = LayoutState::new(MapConfig::default(), default_nodes());
		assert!(state.resize(width, height));
		state
	}

	fn assert_close(actual: Point, expected: Point) {
		assert!(
			actual.distance(expected) < EPS,
			"expected {expected:?}, got {actual:?}"
		);
	}

	#[test]
	fn center_is_half_the_container() {
		for (w, h) in [(400.0, 400.0), (1.0, 3.0), (801.0, 599.5)] {
			assert_eq!(compute_center(w, h), Point::new(w / 2.0, h / 2.0));
		}
		assert_eq!(compute_center(0.0, 0.0), Point::new(0.0, 0.0));
	}

	#[test]
	fn only_both_zero_counts_as_unmeasured() {
		assert!(!is_measured(0.0, 0.0));
		assert!(is_measured(0.0, 10.0));
		assert!(is_measured(10.0, 0.0));
	}

	#[test]
	fn unmeasured_recompute_leaves_state_untouched() {
		let mut state = LayoutState::new(MapConfig::default(), default_nodes());
		let before = state.snapshot();
		assert!(!state.recompute());
		assert!(!state.resize(0.0, 0.0));
		assert_eq!(state.snapshot(), before);
		assert!(state.nodes().iter().all(|n| n.position == Point::default()));
	}

	#[test]
	fn unmeasured_toggle_only_flips_the_flag() {
		let mut state = LayoutState::new(MapConfig::default(), default_nodes());
		assert!(!state.toggle());
		assert!(state.expanded());
		assert!(state.edges().is_empty());
		assert!(state.nodes().iter().all(|n| n.position == Point::default()));

		// Once measured, the pending expansion is applied.
		assert!(state.resize(400.0, 400.0));
		assert_eq!(state.edges().len(), 5);
	}

	#[test]
	fn positions_are_idempotent() {
		let nodes = default_nodes();
		let config = MapConfig::default();
		let center = Point::new(123.5, 77.25);
		for expanded in [false, true] {
			let first = compute_positions(center, expanded, &nodes, &config);
			let second = compute_positions(center, expanded, &nodes, &config);
			assert_eq!(first, second);
		}
	}

	#[test]
	fn recompute_is_idempotent() {
		let mut state = measured(500.0, 300.0);
		state.toggle();
		let first = state.snapshot();
		assert!(state.recompute());
		assert_eq!(state.snapshot(), first);
	}

	#[test]
	fn collapsed_nodes_sit_on_center() {
		let center = Point::new(200.0, 150.0);
		let positions = compute_positions(center, false, &default_nodes(), &MapConfig::default());
		assert!(positions.iter().all(|p| *p == center));
	}

	#[test]
	fn expanded_nodes_follow_their_angle() {
		let config = MapConfig::default();
		let nodes = default_nodes();
		let center = Point::new(300.0, 250.0);
		let positions = compute_positions(center, true, &nodes, &config);

		for (node, position) in nodes.iter().zip(&positions) {
			if node.is_center() {
				assert_eq!(*position, center);
			} else {
				let angle = config.angle_for(&node.id);
				let expected = Point::new(
					center.x + angle.cos() * config.radius,
					center.y + angle.sin() * config.radius,
				);
				assert_eq!(*position, expected);
			}
		}
	}

	#[test]
	fn unknown_id_expands_along_zero_angle() {
		let mut nodes = default_nodes();
		nodes.push(MapNode::category(
			"extra",
			CENTER_ID,
			NodeVariant::Art,
			"Extra",
			"Not in the angle table",
		));
		let center = Point::new(100.0, 100.0);
		let positions = compute_positions(center, true, &nodes, &MapConfig::default());
		assert_eq!(positions[6], Point::new(250.0, 100.0));
	}

	#[test]
	fn edges_only_exist_while_expanded() {
		let nodes = default_nodes();
		assert!(compute_edges(&nodes, false).is_empty());

		let edges = compute_edges(&nodes, true);
		let with_parent = nodes.iter().filter(|n| n.parent_id.is_some()).count();
		assert_eq!(edges.len(), with_parent);

		let targets: Vec<&str> = edges.iter().map(|e| e.target_id.as_str()).collect();
		assert_eq!(targets, ["art", "science", "music", "writing", "design"]);
		assert!(edges.iter().all(|e| e.source_id == CENTER_ID));
		assert_eq!(edges[0].key(), "connection-main-art");
	}

	#[test]
	fn toggle_round_trip_restores_collapsed_layout() {
		let mut state = measured(400.0, 400.0);
		let collapsed = state.snapshot();

		state.toggle();
		assert!(state.expanded());
		assert_eq!(state.snapshot().edges.len(), 5);

		state.toggle();
		assert!(!state.expanded());
		assert_eq!(state.snapshot(), collapsed);
		assert!(state.edges().is_empty());
	}

	#[test]
	fn design_node_expands_to_the_left() {
		let mut state = measured(400.0, 400.0);
		assert_eq!(state.center(), Point::new(200.0, 200.0));
		assert_eq!(state.config().angle_for("design"), PI);

		state.toggle();
		assert_close(state.position_of("design").unwrap(), Point::new(50.0, 200.0));

		state.toggle();
		assert_eq!(state.position_of("design"), Some(Point::new(200.0, 200.0)));
	}

	#[test]
	fn snapshot_carries_render_hints() {
		let mut state = measured(400.0, 400.0);
		let snapshot = state.snapshot();
		let main = &snapshot.nodes[0];
		assert_eq!(main.role, NodeRole::Center);
		assert_eq!(main.size, 40.0);
		assert!(!main.is_center_expanded);
		assert_eq!(snapshot.nodes[1].size, 30.0);
		assert_eq!(snapshot.nodes[1].variant, NodeVariant::Art);

		state.toggle();
		let snapshot = state.snapshot();
		assert!(snapshot.nodes[0].is_center_expanded);
		assert!(snapshot.nodes[1..].iter().all(|n| !n.is_center_expanded));

		let design = &snapshot.edges[4];
		assert_eq!(design.key, "connection-main-design");
		assert_eq!((design.start_x, design.start_y), (200.0, 200.0));
		assert!((design.end_x - 50.0).abs() < EPS);
	}

	#[test]
	fn collapsing_an_unmeasured_map_drops_edges() {
		let mut state = measured(400.0, 400.0);
		state.toggle();
		assert!(!state.resize(0.0, 0.0));
		assert_eq!(state.edges().len(), 5);

		assert!(!state.toggle());
		assert!(state.edges().is_empty());
		let snapshot = state.snapshot();
		assert!(!snapshot.expanded);
		assert!(snapshot.edges.is_empty());
	}

	#[test]
	fn malformed_tree_still_lays_out() {
		let mut nodes = default_nodes();
		nodes.push(MapNode::center("second", "Second", "Another root"));
		nodes.push(MapNode::category(
			"stray",
			"art",
			NodeVariant::Music,
			"Stray",
			"Parent is not the center",
		));
		let mut state = LayoutState::new(MapConfig::default(), nodes);
		assert!(state.resize(400.0, 400.0));
		state.toggle();

		assert_eq!(state.position_of("second"), Some(Point::new(200.0, 200.0)));
		assert_eq!(state.position_of("stray"), Some(Point::new(350.0, 200.0)));
		let stray = state.edges().last().unwrap();
		assert_eq!((stray.source_id.as_str(), stray.target_id.as_str()), ("art", "stray"));
		assert_eq!(state.edges().len(), 6);
	}

	#[test]
	fn resize_recenters_and_clamps_bad_input() {
		let mut state = measured(400.0, 400.0);
		state.toggle();
		state.resize(600.0, 200.0);
		assert_eq!(state.position_of(CENTER_ID), Some(Point::new(300.0, 100.0)));
		assert_close(state.position_of("design").unwrap(), Point::new(150.0, 100.0));

		assert!(!state.resize(-5.0, f64::NAN));
		assert_eq!(state.size(), (0.0, 0.0));
		assert_eq!(state.position_of(CENTER_ID), Some(Point::new(300.0, 100.0)));
	}
}
