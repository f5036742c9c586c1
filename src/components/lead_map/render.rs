use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, CanvasWindingRule};

use super::projection;
use super::state::{LeadMapState, MARKER_RADIUS, MapLink, MapMarker, ease_out_cubic};
use super::types::DataFlow;
use crate::theme::{map as colors, with_alpha};

const FLOW_DASH: (f64, f64) = (10.0, 15.0);
const FLOW_PERIOD: f64 = 4.0;
const GLOW_PERIOD: f64 = 3.0;
const PING_SECS: f64 = 1.5;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

/// Position within a repeating cycle, in `[0, 1)`, after a start delay.
fn cycle(t: f64, period: f64, delay: f64) -> f64 {
	((t - delay) / period).rem_euclid(1.0)
}

/// Smooth 0 → 1 → 0 swell over one period.
fn swell(t: f64, period: f64, delay: f64) -> f64 {
	(1.0 - (2.0 * PI * cycle(t, period, delay)).cos()) / 2.0
}

/// Dash offset of the animated flow line; connections are staggered by 0.6 s.
fn flow_dash_offset(t: f64, index: usize) -> f64 {
	-cycle(t, FLOW_PERIOD, index as f64 * 0.6) * (FLOW_DASH.0 + FLOW_DASH.1)
}

/// How far the data packet has travelled along connection `index`.
fn packet_progress(t: f64, index: usize) -> f64 {
	cycle(t, 5.0 + index as f64, index as f64 * 1.2)
}

/// Packet positions along the drawn route; routes are drawn source to target.
fn packet_positions(flow: DataFlow, progress: f64) -> Vec<f64> {
	match flow {
		DataFlow::Outbound => vec![progress],
		DataFlow::Inbound => vec![1.0 - progress],
		DataFlow::Bidirectional => vec![progress, 1.0 - progress],
	}
}

pub fn render(state: &LeadMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(colors::BACKDROP);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_sphere(state, ctx);
	draw_countries(state, ctx);
	draw_links(state, ctx);
	draw_markers(state, ctx);
	ctx.restore();
}

fn stroke_polyline(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
	let Some(&(x0, y0)) = points.first() else {
		return;
	};
	ctx.begin_path();
	ctx.move_to(x0, y0);
	for &(x, y) in &points[1..] {
		ctx.line_to(x, y);
	}
	ctx.stroke();
}

fn circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, r.max(0.0), 0.0, 2.0 * PI);
}

fn set_dash(ctx: &CanvasRenderingContext2d, dash: Option<(f64, f64)>) {
	let pattern = match dash {
		Some((on, off)) => js_sys::Array::of2(&JsValue::from_f64(on), &JsValue::from_f64(off)),
		None => js_sys::Array::new(),
	};
	let _ = ctx.set_line_dash(&pattern);
}

fn draw_sphere(state: &LeadMapState, ctx: &CanvasRenderingContext2d) {
	let (x, y, w, h) = state.projection.sphere_bounds();
	ctx.set_fill_style_str(colors::OCEAN);
	ctx.fill_rect(x, y, w, h);
	ctx.set_stroke_style_str(&with_alpha(colors::PRIMARY, 0.2));
	ctx.set_line_width(0.3);
	ctx.stroke_rect(x, y, w, h);

	ctx.set_stroke_style_str(&with_alpha(colors::PRIMARY, 0.15));
	for line in &state.graticule {
		stroke_polyline(ctx, line);
	}
}

fn draw_countries(state: &LeadMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(colors::COUNTRY);
	ctx.set_stroke_style_str(&with_alpha(colors::PRIMARY, 0.3));
	ctx.set_line_width(0.5);
	for path in &state.countries {
		ctx.fill_with_path_2d_and_winding(path, CanvasWindingRule::Evenodd);
		ctx.stroke_with_path(path);
	}
}

fn draw_links(state: &LeadMapState, ctx: &CanvasRenderingContext2d) {
	let t = state.flow_time;
	ctx.set_line_cap("round");
	for link in &state.links {
		draw_link(link, t, ctx);
	}
	set_dash(ctx, None);
	ctx.set_line_cap("butt");
}

fn draw_link(link: &MapLink, t: f64, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(&with_alpha(colors::PRIMARY, 0.2));
	ctx.set_line_width(1.0);
	for segment in &link.segments {
		stroke_polyline(ctx, segment);
	}

	// Flow fades from 0.8 to 0.3 over each dash cycle.
	let fade = lerp(0.8, 0.3, cycle(t, FLOW_PERIOD, link.index as f64 * 0.6)) / 0.8;
	ctx.set_stroke_style_str(&with_alpha(colors::PRIMARY, link.strength * 0.8 * fade));
	ctx.set_line_width(2.5);
	set_dash(ctx, Some(FLOW_DASH));
	ctx.set_line_dash_offset(flow_dash_offset(t, link.index));
	for segment in &link.segments {
		stroke_polyline(ctx, segment);
	}
	set_dash(ctx, None);

	if link.strength > 0.8 {
		let s = swell(t, GLOW_PERIOD, link.index as f64 * 0.8);
		ctx.set_stroke_style_str(&with_alpha(colors::PRIMARY, lerp(0.1, 0.3, s)));
		ctx.set_line_width(lerp(4.0, 8.0, s));
		for segment in &link.segments {
			stroke_polyline(ctx, segment);
		}
	}

	// Packets ride the longest unbroken piece of the route.
	if let Some(segment) = link.segments.iter().max_by_key(|s| s.len()) {
		ctx.set_fill_style_str(colors::PRIMARY);
		for at in packet_positions(link.flow, packet_progress(t, link.index)) {
			if let Some((x, y)) = projection::point_along(segment, at) {
				circle(ctx, x, y, 2.0);
				ctx.fill();
			}
		}
	}
}

fn draw_markers(state: &LeadMapState, ctx: &CanvasRenderingContext2d) {
	let t = state.flow_time;
	for (i, marker) in state.markers.iter().enumerate() {
		if state.ping.marker == Some(i) {
			draw_ping(marker, (t - state.ping.started) / PING_SECS, ctx);
		}
		draw_marker(marker, i, t, ctx);
	}
	ctx.set_global_alpha(1.0);
	ctx.set_shadow_blur(0.0);
}

fn draw_ping(marker: &MapMarker, progress: f64, ctx: &CanvasRenderingContext2d) {
	if !(0.0..1.0).contains(&progress) {
		return;
	}
	let e = ease_out_cubic(progress);
	ctx.set_global_alpha(0.5 * (1.0 - progress));
	ctx.set_stroke_style_str(marker.status.color());
	ctx.set_line_width(1.5);
	circle(ctx, marker.x, marker.y, lerp(MARKER_RADIUS, 45.0, e));
	ctx.stroke();
	ctx.set_global_alpha(1.0);
}

fn draw_marker(marker: &MapMarker, i: usize, t: f64, ctx: &CanvasRenderingContext2d) {
	let (x, y) = (marker.x, marker.y);
	let e = ease_out_cubic(marker.emphasis);
	let color = marker.status.color();
	let delay = i as f64;

	// Detection and pulse rings breathe out of phase per marker.
	let rings = [
		(lerp(30.0, 35.0, e), 0.4, 0.05, 0.15, 4.0, delay * 0.5),
		(lerp(22.0, 25.0, e), 0.2, 0.1, 0.25, 3.0, delay * 0.3 + 0.5),
		(lerp(16.0, 18.0, e), 0.2, 0.15, 0.25, 3.0, delay * 0.3 + 1.0),
	];
	ctx.set_fill_style_str(color);
	for (radius, grow, alpha_lo, alpha_hi, period, phase) in rings {
		let s = swell(t, period, phase);
		ctx.set_global_alpha(lerp(alpha_lo, alpha_hi, s));
		circle(ctx, x, y, radius * (1.0 + grow * s));
		ctx.fill();
	}

	ctx.set_global_alpha(lerp(0.9, 1.0, e));
	ctx.set_shadow_color(&with_alpha(color, 0.4));
	ctx.set_shadow_blur(12.0);
	ctx.set_stroke_style_str(color);
	ctx.set_line_width(lerp(2.5, 3.0, e));
	circle(ctx, x, y, marker.ring_radius());
	ctx.stroke();
	ctx.set_shadow_blur(0.0);

	// Inner ring spins while the marker is at rest.
	ctx.set_global_alpha(0.6);
	ctx.set_line_width(1.5);
	if marker.emphasis < 0.5 {
		set_dash(ctx, Some((2.0, 2.0)));
		ctx.set_line_dash_offset(-cycle(t, 10.0, 0.0) * 2.0 * PI * 8.0);
	}
	circle(ctx, x, y, lerp(8.0, 10.0, e));
	ctx.stroke();
	set_dash(ctx, None);

	ctx.set_global_alpha(1.0);
	ctx.set_shadow_color(color);
	ctx.set_shadow_blur(8.0);
	circle(ctx, x, y, lerp(6.0, 8.0, e));
	ctx.fill();
	ctx.set_shadow_blur(0.0);

	ctx.set_global_alpha(0.9);
	ctx.set_fill_style_str("#FFFFFF");
	circle(ctx, x, y, lerp(3.0, 4.0, e));
	ctx.fill();

	ctx.set_text_align("center");
	ctx.set_global_alpha(1.0);
	ctx.set_shadow_color("rgba(0, 0, 0, 0.8)");
	ctx.set_shadow_blur(4.0);
	ctx.set_font(&format!("bold {}px sans-serif", lerp(11.0, 12.0, e)));
	let _ = ctx.fill_text(&marker.leads.to_string(), x, y + lerp(22.0, 24.0, e) + 4.0);

	ctx.set_global_alpha(lerp(0.7, 1.0, e));
	ctx.set_fill_style_str("#CBD5E1");
	ctx.set_font("8px monospace");
	let _ = ctx.fill_text(&marker.region, x, y - lerp(18.0, 20.0, e));
	ctx.set_shadow_blur(0.0);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cycle_wraps_and_respects_delay() {
		assert_eq!(cycle(0.0, 4.0, 0.0), 0.0);
		assert_eq!(cycle(5.0, 4.0, 0.0), 0.25);
		assert_eq!(cycle(0.0, 4.0, 1.0), 0.75);
	}

	#[test]
	fn swell_peaks_mid_period() {
		assert!(swell(0.0, 3.0, 0.0).abs() < 1e-12);
		assert!((swell(1.5, 3.0, 0.0) - 1.0).abs() < 1e-12);
	}

	#[test]
	fn flow_offset_covers_one_dash_pattern() {
		assert_eq!(flow_dash_offset(0.0, 0), 0.0);
		assert_eq!(flow_dash_offset(2.0, 0), -12.5);
		// The second connection runs 0.6 s behind the first.
		assert!((flow_dash_offset(2.6, 1) - flow_dash_offset(2.0, 0)).abs() < 1e-9);
	}

	#[test]
	fn packets_slow_down_for_later_connections() {
		assert_eq!(packet_progress(2.5, 0), 0.5);
		assert!((packet_progress(1.2 + 3.0, 1) - 0.5).abs() < 1e-9);
	}

	#[test]
	fn packets_follow_flow_direction() {
		assert_eq!(packet_positions(DataFlow::Outbound, 0.25), vec![0.25]);
		assert_eq!(packet_positions(DataFlow::Inbound, 0.25), vec![0.75]);
		assert_eq!(packet_positions(DataFlow::Bidirectional, 0.25), vec![0.25, 0.75]);
	}

	#[test]
	fn easing_endpoints() {
		assert_eq!(ease_out_cubic(0.0), 0.0);
		assert_eq!(ease_out_cubic(1.0), 1.0);
		assert!(ease_out_cubic(0.5) > 0.5);
	}
}
