use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{MindMapState, NodeFrame};
use crate::layout::{NodeVariant, NodeView};

const BACKGROUND: &str = "#f1f5f9";
const BORDER: &str = "#e2e8f0";
const EDGE_COLOR: &str = "#aaaaaa";
const EDGE_WIDTH: f64 = 1.0;
const TOOLTIP_PADDING: f64 = 6.0;
const TOOLTIP_GAP: f64 = 8.0;

fn variant_color(variant: NodeVariant) -> &'static str {
	match variant {
		NodeVariant::Main => "#3b82f6",
		NodeVariant::Art => "#f97316",
		NodeVariant::Science => "#0ea5e9",
		NodeVariant::Music => "#a855f7",
		NodeVariant::Writing => "#6366f1",
		NodeVariant::Design => "#22c55e",
	}
}

fn variant_glyph(variant: NodeVariant) -> &'static str {
	match variant {
		NodeVariant::Main => "💡",
		NodeVariant::Art => "🎨",
		NodeVariant::Science => "🧠",
		NodeVariant::Music => "♪",
		NodeVariant::Writing => "✎",
		NodeVariant::Design => "📖",
	}
}

pub fn render(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.set_stroke_style_str(BORDER);
	ctx.set_line_width(1.0);
	ctx.stroke_rect(0.5, 0.5, state.width - 1.0, state.height - 1.0);

	let frames = state.frames();
	draw_edges(state, ctx);
	draw_nodes(state, &frames, ctx);
	draw_tooltip(state, &frames, ctx);
}

fn draw_edges(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	if !state.snapshot.expanded {
		return;
	}
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(EDGE_WIDTH);
	for edge in &state.snapshot.edges {
		ctx.begin_path();
		ctx.move_to(edge.start_x, edge.start_y);
		ctx.line_to(edge.end_x, edge.end_y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &MindMapState, frames: &[NodeFrame], ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for (node, frame) in state.snapshot.nodes.iter().zip(frames) {
		// Collapsed categories are hidden by scale, not removed.
		if frame.scale < 0.01 {
			continue;
		}
		draw_node(node, frame, ctx);
	}
}

fn draw_node(node: &NodeView, frame: &NodeFrame, ctx: &CanvasRenderingContext2d) {
	let NodeFrame { position, scale } = *frame;
	let (x, y) = (position.x, position.y);
	let size = node.size * scale;
	let radius = size / 2.0;

	ctx.set_global_alpha(scale.min(1.0));
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(variant_color(node.variant));
	ctx.fill();

	if node.is_center_expanded {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + 3.0, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str("rgba(59, 130, 246, 0.4)");
		ctx.set_line_width(2.0);
		ctx.stroke();
	}

	ctx.set_fill_style_str("white");
	ctx.set_font(&format!("{}px sans-serif", size * 0.3));
	let _ = ctx.fill_text(variant_glyph(node.variant), x, y - size * 0.15);
	ctx.set_font(&format!("500 {}px sans-serif", 9.0 * scale));
	let _ = ctx.fill_text(&node.label, x, y + size * 0.2);
	ctx.set_global_alpha(1.0);
}

fn draw_tooltip(state: &MindMapState, frames: &[NodeFrame], ctx: &CanvasRenderingContext2d) {
	let Some((idx, alpha)) = state.tooltip() else {
		return;
	};
	let (Some(node), Some(frame)) = (state.snapshot.nodes.get(idx), frames.get(idx)) else {
		return;
	};
	if node.description.is_empty() {
		return;
	}

	ctx.set_font("12px sans-serif");
	let text_width = ctx
		.measure_text(&node.description)
		.map(|m| m.width())
		.unwrap_or(node.description.len() as f64 * 6.0);
	let (box_w, box_h) = (text_width + TOOLTIP_PADDING * 2.0, 12.0 + TOOLTIP_PADDING * 2.0);
	let bottom = frame.position.y - node.size * frame.scale / 2.0 - TOOLTIP_GAP;
	let left = (frame.position.x - box_w / 2.0)
		.max(2.0)
		.min((state.width - box_w - 2.0).max(2.0));
	let top = (bottom - box_h).max(2.0);

	ctx.set_global_alpha(alpha);
	ctx.set_fill_style_str("#0f172a");
	ctx.fill_rect(left, top, box_w, box_h);
	ctx.set_fill_style_str("white");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&node.description, left + box_w / 2.0, top + box_h / 2.0);
	ctx.set_global_alpha(1.0);
}
