/// A point in container-local pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the container's left edge.
	pub x: f64,
	/// Vertical offset from the container's top edge.
	pub y: f64,
}

impl Point {
	/// Creates a point from its coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Offsets this point by `distance` along `angle` (radians, canvas orientation).
	pub fn polar_offset(self, angle: f64, distance: f64) -> Self {
		Self {
			x: self.x + angle.cos() * distance,
			y: self.y + angle.sin() * distance,
		}
	}

	/// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
	pub fn lerp(self, other: Point, t: f64) -> Self {
		Self {
			x: self.x + (other.x - self.x) * t,
			y: self.y + (other.y - self.y) * t,
		}
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Geometric role of a node. Only the center is treated specially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
	/// The single root of the map.
	Center,
	/// A peripheral node attached to the center.
	Category,
}

/// Cosmetic subtype, passed through untouched to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeVariant {
	/// The central "Creativity" node.
	Main,
	/// Visual expression.
	Art,
	/// Problem solving.
	Science,
	/// Sound expression.
	Music,
	/// Written expression.
	Writing,
	/// Problem solutions.
	Design,
}

/// A node of the map. The set of nodes is fixed once the map is built; only
/// `position` changes, and only through [`LayoutState`](super::LayoutState).
#[derive(Clone, Debug, PartialEq)]
pub struct MapNode {
	/// Unique key, also used to look up the node's expansion angle.
	pub id: String,
	/// Center or category.
	pub role: NodeRole,
	/// Id of the center for category nodes, `None` for the center itself.
	pub parent_id: Option<String>,
	/// Visual tag for the renderer.
	pub variant: NodeVariant,
	/// Short text drawn inside the node.
	pub label: String,
	/// Tooltip text.
	pub description: String,
	/// Current layout position.
	pub position: Point,
}

impl MapNode {
	/// The center node, placed at the unmeasured origin.
	pub fn center(id: &str, label: &str, description: &str) -> Self {
		Self {
			id: id.into(),
			role: NodeRole::Center,
			parent_id: None,
			variant: NodeVariant::Main,
			label: label.into(),
			description: description.into(),
			position: Point::default(),
		}
	}

	/// A category node hanging off `parent_id`.
	pub fn category(
		id: &str,
		parent_id: &str,
		variant: NodeVariant,
		label: &str,
		description: &str,
	) -> Self {
		Self {
			id: id.into(),
			role: NodeRole::Category,
			parent_id: Some(parent_id.into()),
			variant,
			label: label.into(),
			description: description.into(),
			position: Point::default(),
		}
	}

	/// Whether this is the center node.
	pub fn is_center(&self) -> bool {
		self.role == NodeRole::Center
	}
}

/// A parent/child connection, derived from the node set while expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Always the center node.
	pub source_id: String,
	/// A category node.
	pub target_id: String,
}

impl Edge {
	/// Stable key identifying the connection, e.g. `connection-main-art`.
	pub fn key(&self) -> String {
		format!("connection-{}-{}", self.source_id, self.target_id)
	}
}

/// What the renderer needs to draw one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
	/// Node id.
	pub id: String,
	/// Layout x coordinate.
	pub x: f64,
	/// Layout y coordinate.
	pub y: f64,
	/// Visual tag.
	pub variant: NodeVariant,
	/// Diameter hint in pixels.
	pub size: f64,
	/// True only for the center node while the map is expanded.
	pub is_center_expanded: bool,
	/// Center or category.
	pub role: NodeRole,
	/// Label text.
	pub label: String,
	/// Tooltip text.
	pub description: String,
}

impl NodeView {
	/// Layout position as a point.
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

/// What the renderer needs to draw one connection line.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeView {
	/// See [`Edge::key`].
	pub key: String,
	/// Source x.
	pub start_x: f64,
	/// Source y.
	pub start_y: f64,
	/// Target x.
	pub end_x: f64,
	/// Target y.
	pub end_y: f64,
}

/// Immutable result of a layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSnapshot {
	/// Whether the map was expanded when the snapshot was taken.
	pub expanded: bool,
	/// Nodes in insertion order.
	pub nodes: Vec<NodeView>,
	/// Active edges in insertion order; empty while collapsed.
	pub edges: Vec<EdgeView>,
}
