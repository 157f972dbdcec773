use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::GraphView;

const BACKGROUND: &str = "#1a1a2e";
/// Labels are hidden below this zoom unless the node is focused.
const LABEL_ZOOM: f64 = 1.2;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn draw(view: &GraphView, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, view.width, view.height);
	ctx.save();
	let _ = ctx.translate(view.viewport.x, view.viewport.y);
	let _ = ctx.scale(view.viewport.zoom, view.viewport.zoom);
	draw_links(view, ctx);
	draw_nodes(view, ctx);
	ctx.restore();
}

fn draw_links(view: &GraphView, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(view.focus.strength);
	let width = 1.0 / view.viewport.zoom;

	view.graph.visit_edges(|a, b, _| {
		let lit = view.focus.node.is_some()
			&& (view.focus.node == Some(a.index()) || view.focus.node == Some(b.index()));
		let alpha = if lit { 0.4 + 0.5 * t } else { 0.4 - 0.3 * t };

		ctx.set_stroke_style_str(&format!("rgba(100, 180, 255, {alpha})"));
		ctx.set_line_width(if lit { width * 2.0 } else { width });
		ctx.begin_path();
		ctx.move_to(a.x() as f64, a.y() as f64);
		ctx.line_to(b.x() as f64, b.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(view: &GraphView, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(view.focus.strength);
	let zoom = view.viewport.zoom;
	ctx.set_font(&format!("{}px sans-serif", 11.0 / zoom.max(0.5)));

	view.graph.visit_nodes(|node| {
		let style = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let focused = view.is_focused(node.index());
		let (alpha, radius) = if focused {
			(1.0, style.radius * (1.0 + 0.25 * t))
		} else {
			(1.0 - 0.75 * t, style.radius)
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style.color);
		ctx.fill();

		if view.focus.node == Some(node.index()) {
			ctx.set_stroke_style_str("white");
			ctx.set_line_width(1.5 / zoom);
			ctx.stroke();
		}

		if let Some(label) = &style.label {
			if focused || zoom >= LABEL_ZOOM {
				ctx.set_fill_style_str("white");
				let _ = ctx.fill_text(label, x + radius + 3.0, y + 3.0);
			}
		}
		ctx.set_global_alpha(1.0);
	});
}
