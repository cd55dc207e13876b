use std::collections::HashMap;
use std::f64::consts::PI;

use super::types::{MapNode, NodeVariant};

/// Id of the center node in the default map.
pub const CENTER_ID: &str = "main";

/// Tunables for the radial layout and its presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
	/// Distance from the center to each category node when expanded, in pixels.
	pub radius: f64,
	/// Diameter hint for the center node.
	pub center_size: f64,
	/// Diameter hint for category nodes.
	pub category_size: f64,
	/// Expansion angle per node id, in radians. Ids missing here use `0`.
	pub angles: HashMap<String, f64>,
	/// Length of the expand/collapse transition, in seconds.
	pub transition_secs: f64,
	/// Hover time before a tooltip appears, in seconds.
	pub tooltip_delay_secs: f64,
}

impl Default for MapConfig {
	fn default() -> Self {
		// Hand-tuned so the five branches look balanced; not evenly spaced.
		let angles = [
			("art", PI * 1.7),
			("science", PI * 0.3),
			("music", PI * 0.7),
			("writing", PI * 1.3),
			("design", PI),
		]
		.into_iter()
		.map(|(id, angle)| (id.to_string(), angle))
		.collect();

		Self {
			radius: 150.0,
			center_size: 40.0,
			category_size: 30.0,
			angles,
			transition_secs: 0.3,
			tooltip_delay_secs: 0.3,
		}
	}
}

impl MapConfig {
	/// Expansion angle for `id`, falling back to `0` for unknown ids.
	pub fn angle_for(&self, id: &str) -> f64 {
		self.angles.get(id).copied().unwrap_or(0.0)
	}
}

/// The fixed "Creativity" map: one center and five categories.
pub fn default_nodes() -> Vec<MapNode> {
	vec![
		MapNode::center(CENTER_ID, "Creativity", "Creative thought"),
		MapNode::category(
			"art",
			CENTER_ID,
			NodeVariant::Art,
			"Art",
			"Visual expression",
		),
		MapNode::category(
			"science",
			CENTER_ID,
			NodeVariant::Science,
			"Science",
			"Problem-solving",
		),
		MapNode::category(
			"music",
			CENTER_ID,
			NodeVariant::Music,
			"Music",
			"Sound expression",
		),
		MapNode::category(
			"writing",
			CENTER_ID,
			NodeVariant::Writing,
			"Writing",
			"Written expression",
		),
		MapNode::category(
			"design",
			CENTER_ID,
			NodeVariant::Design,
			"Design",
			"Problem solutions",
		),
	]
}
