use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::GraphData;

/// Community palette (d3 category10).
const PALETTE: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const BASE_RADIUS: f64 = 4.0;
/// Extra radius given to the heaviest node.
pub const WEIGHT_RADIUS: f64 = 8.0;
/// Minimum pick distance in graph space, so small nodes stay grabbable.
const PICK_RADIUS: f64 = 10.0;

#[derive(Clone, Debug)]
pub struct NodeStyle {
	pub label: Option<String>,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
	pub x: f64,
	pub y: f64,
	pub zoom: f64,
}

impl Viewport {
	pub fn to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.zoom, (sy - self.y) / self.zoom)
	}

	/// Zooms around a fixed screen point.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let zoom = (self.zoom * factor).clamp(0.1, 10.0);
		let ratio = zoom / self.zoom;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.zoom = zoom;
	}
}

/// What the pointer is currently doing.
#[derive(Clone, Copy, Debug, Default)]
pub enum Gesture {
	#[default]
	Idle,
	DragNode {
		node: DefaultNodeIdx,
		grab_dx: f64,
		grab_dy: f64,
	},
	Pan {
		from_x: f64,
		from_y: f64,
		origin_x: f64,
		origin_y: f64,
	},
}

#[derive(Clone, Debug, Default)]
pub struct Focus {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	/// Eased 0..1 highlight strength.
	pub strength: f64,
}

pub struct GraphView {
	pub graph: ForceGraph<NodeStyle, ()>,
	pub viewport: Viewport,
	pub gesture: Gesture,
	pub focus: Focus,
	pub width: f64,
	pub height: f64,
	adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>>,
}

impl GraphView {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 120.0,
			force_spring: 0.04,
			force_max: 80.0,
			node_speed: 2500.0,
			damping_factor: 0.85,
		});
		let mut by_id = HashMap::with_capacity(data.nodes.len());
		let count = data.nodes.len().max(1) as f64;
		let spread = 40.0 + 4.0 * count.sqrt() * 10.0;

		for (i, node) in data.nodes.iter().enumerate() {
			let color = node.color.clone().unwrap_or_else(|| {
				let group = node.group.unwrap_or(0) as usize;
				PALETTE[group % PALETTE.len()].to_string()
			});
			let angle = i as f64 * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: (spread * angle.cos()) as f32,
				y: (spread * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeStyle {
					label: node.label.clone(),
					color,
					radius: BASE_RADIUS + WEIGHT_RADIUS * node.weight.unwrap_or(0.0),
				},
			});
			by_id.insert(node.id.as_str(), idx);
		}

		let mut adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>> = HashMap::new();
		for link in &data.links {
			let (Some(&src), Some(&tgt)) = (by_id.get(link.source.as_str()), by_id.get(link.target.as_str())) else {
				continue;
			};
			if src == tgt {
				continue;
			}
			graph.add_edge(src, tgt, EdgeData::default());
			adjacency.entry(src).or_default().insert(tgt);
			adjacency.entry(tgt).or_default().insert(src);
		}

		Self {
			graph,
			viewport: Viewport {
				x: width / 2.0,
				y: height / 2.0,
				zoom: 1.0,
			},
			gesture: Gesture::Idle,
			focus: Focus::default(),
			width,
			height,
			adjacency,
		}
	}

	pub fn node_at(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.viewport.to_graph(sx, sy);
		let mut best: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = (dx * dx + dy * dy).sqrt();
			let reach = node.data.user_data.radius.max(PICK_RADIUS);
			if dist < reach && best.is_none_or(|(_, d)| dist < d) {
				best = Some((node.index(), dist));
			}
		});
		best.map(|(idx, _)| idx)
	}

	fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut pos = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x() as f64, node.y() as f64));
			}
		});
		pos
	}

	pub fn press(&mut self, sx: f64, sy: f64) {
		self.gesture = match self.node_at(sx, sy) {
			Some(node) => {
				let (gx, gy) = self.viewport.to_graph(sx, sy);
				let (nx, ny) = self.node_position(node).unwrap_or((gx, gy));
				Gesture::DragNode {
					node,
					grab_dx: nx - gx,
					grab_dy: ny - gy,
				}
			}
			None => Gesture::Pan {
				from_x: sx,
				from_y: sy,
				origin_x: self.viewport.x,
				origin_y: self.viewport.y,
			},
		};
	}

	pub fn drag(&mut self, sx: f64, sy: f64) {
		match self.gesture {
			Gesture::Idle => {
				let hovered = self.node_at(sx, sy);
				self.set_focus(hovered);
			}
			Gesture::DragNode { node, grab_dx, grab_dy } => {
				let (gx, gy) = self.viewport.to_graph(sx, sy);
				let (x, y) = ((gx + grab_dx) as f32, (gy + grab_dy) as f32);
				self.graph.visit_nodes_mut(|n| {
					if n.index() == node {
						n.data.x = x;
						n.data.y = y;
						n.data.is_anchor = true;
					}
				});
			}
			Gesture::Pan { from_x, from_y, origin_x, origin_y } => {
				self.viewport.x = origin_x + (sx - from_x);
				self.viewport.y = origin_y + (sy - from_y);
			}
		}
	}

	/// Dragged nodes stay pinned where they were dropped.
	pub fn release(&mut self) {
		self.gesture = Gesture::Idle;
	}

	pub fn leave(&mut self) {
		self.release();
		self.set_focus(None);
	}

	fn set_focus(&mut self, node: Option<DefaultNodeIdx>) {
		if self.focus.node == node {
			return;
		}
		self.focus.node = node;
		self.focus.neighbors = node
			.and_then(|idx| self.adjacency.get(&idx).cloned())
			.unwrap_or_default();
	}

	pub fn is_focused(&self, idx: DefaultNodeIdx) -> bool {
		self.focus.node == Some(idx) || self.focus.neighbors.contains(&idx)
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		let target = if self.focus.node.is_some() { 1.0 } else { 0.0 };
		self.focus.strength += (target - self.focus.strength) * (4.0 * dt as f64).min(1.0);
		if self.focus.strength < 0.01 && self.focus.node.is_none() {
			self.focus.strength = 0.0;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::{GraphLink, GraphNode};
	use super::*;

	fn sample() -> GraphData {
		let node = |id: &str, weight| GraphNode {
			id: id.into(),
			label: Some(id.into()),
			color: None,
			group: Some(1),
			weight,
		};
		GraphData {
			nodes: vec![node("gin", Some(1.0)), node("tonic", None), node("lime", None)],
			links: vec![
				GraphLink { source: "gin".into(), target: "tonic".into() },
				GraphLink { source: "gin".into(), target: "missing".into() },
			],
		}
	}

	#[test]
	fn weight_scales_radius_and_group_picks_color() {
		let view = GraphView::new(&sample(), 800.0, 600.0);
		let mut radii = Vec::new();
		view.graph.visit_nodes(|n| radii.push((n.data.user_data.radius, n.data.user_data.color.clone())));
		assert!(radii.contains(&(BASE_RADIUS + WEIGHT_RADIUS, "#ff7f0e".to_string())));
		assert!(radii.contains(&(BASE_RADIUS, "#ff7f0e".to_string())));
	}

	#[test]
	fn hovering_focuses_neighbors_only() {
		let mut view = GraphView::new(&sample(), 800.0, 600.0);
		let mut gin = None;
		view.graph.visit_nodes(|n| {
			if n.data.user_data.label.as_deref() == Some("gin") {
				gin = Some((n.index(), n.x() as f64, n.y() as f64));
			}
		});
		let (idx, x, y) = gin.unwrap();
		view.drag(x + view.viewport.x, y + view.viewport.y);
		assert_eq!(view.focus.node, Some(idx));
		assert_eq!(view.focus.neighbors.len(), 1);
		view.leave();
		assert!(view.focus.node.is_none());
		assert!(view.focus.neighbors.is_empty());
	}

	#[test]
	fn zoom_keeps_anchor_point_fixed() {
		let mut viewport = Viewport { x: 100.0, y: 50.0, zoom: 1.0 };
		let before = viewport.to_graph(300.0, 200.0);
		viewport.zoom_at(300.0, 200.0, 2.0);
		let after = viewport.to_graph(300.0, 200.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		viewport.zoom_at(0.0, 0.0, 1000.0);
		assert_eq!(viewport.zoom, 10.0);
	}
}
