//! SVG path geometry for the chart panels.

use std::f64::consts::PI;
use std::fmt::Write;

/// Inner drawing box of a chart inside its SVG view box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl PlotArea {
	pub fn width(&self) -> f64 {
		self.right - self.left
	}
}

fn sign(v: f64) -> f64 {
	if v > 0.0 {
		1.0
	} else if v < 0.0 {
		-1.0
	} else {
		0.0
	}
}

/// Tangents of a monotone cubic through `points`, whose x must increase.
///
/// Interior tangents are limited by the neighbouring secants so the curve
/// never overshoots monotone data; end tangents follow the first and last
/// segments.
pub fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
	let n = points.len();
	if n < 2 {
		return vec![0.0; n];
	}
	let secants: Vec<f64> = points
		.windows(2)
		.map(|w| {
			let h = w[1].0 - w[0].0;
			if h == 0.0 { 0.0 } else { (w[1].1 - w[0].1) / h }
		})
		.collect();
	if n == 2 {
		return vec![secants[0]; 2];
	}

	let mut tangents = vec![0.0; n];
	for k in 1..n - 1 {
		let (h0, h1) = (points[k].0 - points[k - 1].0, points[k + 1].0 - points[k].0);
		let (s0, s1) = (secants[k - 1], secants[k]);
		let p = if h0 + h1 == 0.0 { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
		tangents[k] = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
	}
	tangents[0] = (3.0 * secants[0] - tangents[1]) / 2.0;
	tangents[n - 1] = (3.0 * secants[n - 2] - tangents[n - 2]) / 2.0;
	tangents
}

/// Cubic Bézier segments `[control1, control2, end]` of the monotone curve.
pub fn monotone_segments(points: &[(f64, f64)]) -> Vec<[(f64, f64); 3]> {
	let tangents = monotone_tangents(points);
	points
		.windows(2)
		.enumerate()
		.map(|(i, w)| {
			let ((xa, ya), (xb, yb)) = (w[0], w[1]);
			let dx = (xb - xa) / 3.0;
			[
				(xa + dx, ya + dx * tangents[i]),
				(xb - dx, yb - dx * tangents[i + 1]),
				(xb, yb),
			]
		})
		.collect()
}

/// SVG path of the monotone curve through `points`.
pub fn monotone_path(points: &[(f64, f64)]) -> String {
	let Some(&(x0, y0)) = points.first() else {
		return String::new();
	};
	let mut d = format!("M{x0:.2},{y0:.2}");
	for [c1, c2, end] in monotone_segments(points) {
		let _ = write!(
			d,
			"C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
			c1.0, c1.1, c2.0, c2.1, end.0, end.1
		);
	}
	d
}

/// The monotone curve closed down to `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
	let (Some(first), Some(last)) = (points.first(), points.last()) else {
		return String::new();
	};
	let mut d = monotone_path(points);
	let _ = write!(d, "L{:.2},{baseline:.2}L{:.2},{baseline:.2}Z", last.0, first.0);
	d
}

/// Cumulative `(bottom, top)` pairs of one stacked row.
pub fn stack(values: &[f64]) -> Vec<(f64, f64)> {
	values
		.iter()
		.scan(0.0, |acc, &v| {
			let bottom = *acc;
			*acc += v;
			Some((bottom, *acc))
		})
		.collect()
}

/// Rectangle path with separately rounded top and bottom corners.
pub fn bar_path(x: f64, y: f64, width: f64, height: f64, top_radius: f64, bottom_radius: f64) -> String {
	let limit = (width / 2.0).min(height / 2.0).max(0.0);
	let (rt, rb) = (top_radius.clamp(0.0, limit), bottom_radius.clamp(0.0, limit));
	let (right, bottom) = (x + width, y + height);
	let mut d = format!("M{x:.2},{:.2}", y + rt);
	let corner = |d: &mut String, r: f64, to: (f64, f64)| {
		if r > 0.0 {
			let _ = write!(d, "A{r:.2},{r:.2},0,0,1,{:.2},{:.2}", to.0, to.1);
		}
	};
	corner(&mut d, rt, (x + rt, y));
	let _ = write!(d, "L{:.2},{y:.2}", right - rt);
	corner(&mut d, rt, (right, y + rt));
	let _ = write!(d, "L{right:.2},{:.2}", bottom - rb);
	corner(&mut d, rb, (right - rb, bottom));
	let _ = write!(d, "L{:.2},{bottom:.2}", x + rb);
	corner(&mut d, rb, (x, bottom - rb));
	d.push('Z');
	d
}

/// Angular extent of a pie slice in degrees, counterclockwise from 3 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
	pub start: f64,
	pub end: f64,
}

impl Sector {
	pub fn sweep(&self) -> f64 {
		self.end - self.start
	}

	pub fn mid(&self) -> f64 {
		(self.start + self.end) / 2.0
	}
}

/// Slices of a full donut, `padding` degrees between consecutive non-zero
/// slices.
pub fn donut_sectors(values: &[f64], padding: f64) -> Vec<Sector> {
	let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
	let non_zero = values.iter().filter(|v| **v > 0.0).count();
	let available = (360.0 - padding * non_zero as f64).max(0.0);

	let mut sectors: Vec<Sector> = Vec::with_capacity(values.len());
	for &value in values {
		let value = value.max(0.0);
		let start = match sectors.last() {
			Some(prev) if value > 0.0 => prev.end + padding,
			Some(prev) => prev.end,
			None => 0.0,
		};
		let sweep = if total > 0.0 { value / total * available } else { 0.0 };
		sectors.push(Sector {
			start,
			end: start + sweep,
		});
	}
	sectors
}

pub fn polar(center: (f64, f64), radius: f64, degrees: f64) -> (f64, f64) {
	let rad = -degrees * PI / 180.0;
	(center.0 + radius * rad.cos(), center.1 + radius * rad.sin())
}

/// SVG path of an annular slice.
pub fn sector_path(center: (f64, f64), inner: f64, outer: f64, sector: Sector) -> String {
	let large = u8::from(sector.sweep().abs() > 180.0);
	let clockwise = u8::from(sector.start > sector.end);
	let (os, oe) = (polar(center, outer, sector.start), polar(center, outer, sector.end));
	let mut d = format!(
		"M{:.2},{:.2}A{outer:.2},{outer:.2},0,{large},{clockwise},{:.2},{:.2}",
		os.0, os.1, oe.0, oe.1
	);
	if inner > 0.0 {
		let (is, ie) = (polar(center, inner, sector.start), polar(center, inner, sector.end));
		let _ = write!(
			d,
			"L{:.2},{:.2}A{inner:.2},{inner:.2},0,{large},{},{:.2},{:.2}Z",
			ie.0,
			ie.1,
			1 - clockwise,
			is.0,
			is.1
		);
	} else {
		let _ = write!(d, "L{:.2},{:.2}Z", center.0, center.1);
	}
	d
}

/// Index of the position closest to `x`.
pub fn nearest_index(positions: &[f64], x: f64) -> Option<usize> {
	positions
		.iter()
		.enumerate()
		.min_by(|a, b| (a.1 - x).abs().total_cmp(&(b.1 - x).abs()))
		.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	fn within(v: f64, a: f64, b: f64) -> bool {
		let (lo, hi) = if a < b { (a, b) } else { (b, a) };
		v >= lo - 1e-9 && v <= hi + 1e-9
	}

	#[test]
	fn monotone_curve_passes_through_points() {
		let points = [(0.0, 10.0), (10.0, 40.0), (20.0, 20.0), (30.0, 50.0)];
		let segments = monotone_segments(&points);
		assert_eq!(segments.len(), 3);
		for (seg, p) in segments.iter().zip(&points[1..]) {
			assert_eq!(seg[2], *p);
		}
		assert!(monotone_path(&points).starts_with("M0.00,10.00C"));
	}

	#[test]
	fn local_extrema_get_flat_tangents() {
		let tangents = monotone_tangents(&[(0.0, 0.0), (1.0, 5.0), (2.0, 1.0)]);
		assert_eq!(tangents[1], 0.0);
	}

	#[test]
	fn short_inputs() {
		assert_eq!(monotone_path(&[]), "");
		assert_eq!(monotone_path(&[(1.0, 2.0)]), "M1.00,2.00");
		assert_eq!(monotone_tangents(&[(0.0, 0.0), (2.0, 4.0)]), vec![2.0, 2.0]);
	}

	#[test]
	fn area_closes_on_baseline() {
		let d = area_path(&[(0.0, 10.0), (10.0, 5.0)], 100.0);
		assert!(d.ends_with("L10.00,100.00L0.00,100.00Z"), "{d}");
	}

	#[test]
	fn stack_accumulates() {
		assert_eq!(stack(&[12.0, 35.0, 53.0]), vec![(0.0, 12.0), (12.0, 47.0), (47.0, 100.0)]);
	}

	#[test]
	fn bar_path_rounds_only_requested_corners() {
		let square = bar_path(0.0, 0.0, 10.0, 20.0, 0.0, 0.0);
		assert_eq!(square, "M0.00,0.00L10.00,0.00L10.00,20.00L0.00,20.00Z");
		let rounded = bar_path(0.0, 0.0, 10.0, 20.0, 4.0, 0.0);
		assert_eq!(rounded.matches('A').count(), 2);
		// Radius never exceeds half the bar.
		let tiny = bar_path(0.0, 0.0, 10.0, 2.0, 4.0, 4.0);
		assert!(tiny.contains("A1.00,1.00"), "{tiny}");
	}

	#[test]
	fn donut_leaves_padding_between_slices() {
		let sectors = donut_sectors(&[52.0, 28.0, 15.0, 5.0], 3.0);
		let sweep: f64 = sectors.iter().map(Sector::sweep).sum();
		assert!((sweep - 348.0).abs() < 1e-9);
		assert_eq!(sectors[0].start, 0.0);
		for w in sectors.windows(2) {
			assert!((w[1].start - w[0].end - 3.0).abs() < 1e-9);
		}
		assert!((sectors[0].sweep() - 0.52 * 348.0).abs() < 1e-9);
	}

	#[test]
	fn sector_path_shape() {
		let d = sector_path((90.0, 90.0), 35.0, 65.0, Sector { start: 0.0, end: 90.0 });
		assert!(d.starts_with("M155.00,90.00A65.00,65.00,0,0,0,90.00,25.00"), "{d}");
		assert!(d.ends_with("A35.00,35.00,0,0,1,125.00,90.00Z"), "{d}");
	}

	#[test]
	fn nearest_index_picks_closest() {
		let xs = [40.0, 110.0, 180.0];
		assert_eq!(nearest_index(&xs, 0.0), Some(0));
		assert_eq!(nearest_index(&xs, 150.0), Some(2));
		assert_eq!(nearest_index(&xs, 1e6), Some(2));
		assert_eq!(nearest_index(&[], 5.0), None);
	}

	proptest! {
		#[test]
		fn monotone_data_never_overshoots(steps in prop::collection::vec((1.0f64..50.0, 0.0f64..100.0), 2..12)) {
			let mut points = vec![(0.0, 0.0)];
			for (dx, dy) in steps {
				let (x, y) = *points.last().unwrap();
				points.push((x + dx, y + dy));
			}
			for (seg, w) in monotone_segments(&points).iter().zip(points.windows(2)) {
				prop_assert!(within(seg[0].1, w[0].1, w[1].1));
				prop_assert!(within(seg[1].1, w[0].1, w[1].1));
			}
		}

		#[test]
		fn donut_sweeps_sum_to_circle_less_padding(values in prop::collection::vec(0.1f64..1000.0, 1..10)) {
			let sectors = donut_sectors(&values, 3.0);
			let sweep: f64 = sectors.iter().map(Sector::sweep).sum();
			prop_assert!((sweep - (360.0 - 3.0 * values.len() as f64)).abs() < 1e-6);
		}
	}
}
