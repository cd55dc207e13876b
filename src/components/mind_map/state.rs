use crate::layout::{LayoutSnapshot, LayoutState, MapConfig, MapNode, NodeRole, Point};

/// How long the tooltip takes to fade in once its delay has elapsed.
const TOOLTIP_FADE_SECS: f64 = 0.15;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Where and how large a node is drawn on the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeFrame {
	pub position: Point,
	pub scale: f64,
}

#[derive(Clone, Debug, Default)]
pub struct TransitionState {
	/// Frames drawn when the current transition started.
	pub from: Vec<NodeFrame>,
	/// 0 at the start of a transition, 1 once settled.
	pub progress: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	delay_t: f64,
}

pub struct MindMapState {
	pub layout: LayoutState,
	pub snapshot: LayoutSnapshot,
	pub transition: TransitionState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
}

impl MindMapState {
	pub fn new(config: MapConfig, nodes: Vec<MapNode>, width: f64, height: f64) -> Self {
		let mut layout = LayoutState::new(config, nodes);
		layout.resize(width, height);
		let mut state = Self {
			snapshot: layout.snapshot(),
			layout,
			transition: TransitionState::default(),
			hover: HoverState::default(),
			width,
			height,
		};
		state.settle();
		state
	}

	/// Frames the layout is heading towards.
	pub fn target_frames(&self) -> Vec<NodeFrame> {
		self.snapshot
			.nodes
			.iter()
			.map(|node| NodeFrame {
				position: node.position(),
				scale: if node.role == NodeRole::Center || self.snapshot.expanded {
					1.0
				} else {
					0.0
				},
			})
			.collect()
	}

	/// Frames to draw right now, part way through any running transition.
	pub fn frames(&self) -> Vec<NodeFrame> {
		let targets = self.target_frames();
		if !self.is_animating() || self.transition.from.len() != targets.len() {
			return targets;
		}
		let t = ease_out_cubic(self.transition.progress);
		self.transition
			.from
			.iter()
			.zip(targets)
			.map(|(from, to)| NodeFrame {
				position: from.position.lerp(to.position, t),
				scale: from.scale + (to.scale - from.scale) * t,
			})
			.collect()
	}

	pub fn is_animating(&self) -> bool {
		self.transition.progress < 1.0
	}

	/// Expands or collapses the map, animating from what is currently drawn.
	pub fn toggle(&mut self) {
		let current = self.frames();
		self.layout.toggle();
		self.snapshot = self.layout.snapshot();
		self.transition.from = current;
		self.transition.progress = if self.layout.config().transition_secs > 0.0 {
			0.0
		} else {
			1.0
		};
	}

	/// New container size. Jumps straight to the new layout.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		if self.layout.resize(width, height) {
			self.snapshot = self.layout.snapshot();
			self.settle();
		}
	}

	fn settle(&mut self) {
		self.transition.from = self.target_frames();
		self.transition.progress = 1.0;
	}

	/// Index of the topmost visible node under `(x, y)`.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let point = Point::new(x, y);
		let frames = self.frames();
		self.snapshot
			.nodes
			.iter()
			.zip(frames)
			.enumerate()
			.rev()
			.find(|(_, (node, frame))| {
				frame.scale > 0.5 && frame.position.distance(point) <= node.size * frame.scale / 2.0
			})
			.map(|(idx, _)| idx)
	}

	pub fn is_center(&self, idx: usize) -> bool {
		self.snapshot
			.nodes
			.get(idx)
			.is_some_and(|node| node.role == NodeRole::Center)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.delay_t = 0.0;
	}

	/// Node whose tooltip is showing and its opacity.
	pub fn tooltip(&self) -> Option<(usize, f64)> {
		let idx = self.hover.node?;
		let shown = self.hover.delay_t - self.layout.config().tooltip_delay_secs;
		if shown < 0.0 {
			return None;
		}
		let visible = self.frames().get(idx).is_some_and(|f| f.scale > 0.5);
		visible.then(|| (idx, (shown / TOOLTIP_FADE_SECS).min(1.0)))
	}

	pub fn tick(&mut self, dt: f64) {
		let duration = self.layout.config().transition_secs;
		if self.is_animating() {
			self.transition.progress = if duration > 0.0 {
				(self.transition.progress + dt / duration).min(1.0)
			} else {
				1.0
			};
		}

		if self.hover.node.is_some() {
			let cap = self.layout.config().tooltip_delay_secs + TOOLTIP_FADE_SECS;
			self.hover.delay_t = (self.hover.delay_t + dt).min(cap);
		}
	}
}
