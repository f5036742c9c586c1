use std::f64::consts::FRAC_PI_4;
use std::fmt::Write;

use super::topology::{Feature, Position};
use crate::config::MapConfig;

/// Latitude at which Web Mercator turns the world into a square.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Spherical Mercator projection into view-box coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
	pub scale: f64,
	pub translate: (f64, f64),
}

impl Mercator {
	/// Centered on (0°, 0°), which lands in the middle of the view box.
	pub fn centered(scale: f64, width: f64, height: f64) -> Self {
		Self {
			scale,
			translate: (width / 2.0, height / 2.0),
		}
	}

	pub fn from_config(config: &MapConfig) -> Self {
		Self::centered(config.projection_scale, config.view_width, config.view_height)
	}

	pub fn project(&self, (lon, lat): Position) -> (f64, f64) {
		let (lambda, phi) = (lon.to_radians(), lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians());
		(
			self.translate.0 + self.scale * lambda,
			self.translate.1 - self.scale * (FRAC_PI_4 + phi / 2.0).tan().ln(),
		)
	}

	/// Project a line, breaking it wherever it wraps across the antimeridian.
	///
	/// A wrap is a step between longitudes of opposite sign more than 180°
	/// apart; the shorter way round crosses ±180°.
	pub fn project_line(&self, line: &[Position]) -> Vec<Vec<(f64, f64)>> {
		let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
		let mut current: Vec<(f64, f64)> = Vec::new();
		let mut prev_lon: Option<f64> = None;
		for &p in line {
			if let Some(lon) = prev_lon {
				if lon.signum() != p.0.signum() && (p.0 - lon).abs() > 180.0 {
					segments.push(std::mem::take(&mut current));
				}
			}
			prev_lon = Some(p.0);
			current.push(self.project(p));
		}
		if current.len() > 1 {
			segments.push(current);
		}
		segments.retain(|s| s.len() > 1);
		segments
	}

	/// Bounding rectangle of the projected world, `(x, y, width, height)`.
	pub fn sphere_bounds(&self) -> (f64, f64, f64, f64) {
		let (x0, y0) = self.project((-180.0, MAX_LATITUDE));
		let (x1, y1) = self.project((180.0, -MAX_LATITUDE));
		(x0, y0, x1 - x0, y1 - y0)
	}

	/// SVG path data for every ring of a feature.
	pub fn feature_path(&self, feature: &Feature) -> String {
		let mut d = String::new();
		for ring in feature.polygons.iter().flatten() {
			for (i, &p) in ring.iter().enumerate() {
				let (x, y) = self.project(p);
				let cmd = if i == 0 { 'M' } else { 'L' };
				let _ = write!(d, "{cmd}{x:.2},{y:.2}");
			}
			if !ring.is_empty() {
				d.push('Z');
			}
		}
		d
	}
}

/// Graticule lines: meridians every 20° and parallels every 10°, within ±80°.
///
/// Parallels carry a point every 10° of longitude so no single step spans
/// the antimeridian.
pub fn graticule() -> Vec<Vec<Position>> {
	let meridians = (-9..9).map(|i| {
		let lon = f64::from(i) * 20.0;
		vec![(lon, -80.0), (lon, 80.0)]
	});
	let parallels = (-8..=8).map(|i| {
		let lat = f64::from(i) * 10.0;
		(-18..=18).map(|j| (f64::from(j) * 10.0, lat)).collect()
	});
	meridians.chain(parallels).collect()
}

/// Points along the great circle from `a` to `b`, both ends included.
pub fn great_circle(a: Position, b: Position, steps: usize) -> Vec<Position> {
	let (l1, p1) = (a.0.to_radians(), a.1.to_radians());
	let (l2, p2) = (b.0.to_radians(), b.1.to_radians());
	let hav = ((p2 - p1) / 2.0).sin().powi(2) + p1.cos() * p2.cos() * ((l2 - l1) / 2.0).sin().powi(2);
	let d = 2.0 * hav.sqrt().min(1.0).asin();
	if d < 1e-9 || steps == 0 {
		return vec![a, b];
	}

	(0..=steps)
		.map(|i| {
			let f = i as f64 / steps as f64;
			let (wa, wb) = (((1.0 - f) * d).sin() / d.sin(), (f * d).sin() / d.sin());
			let x = wa * p1.cos() * l1.cos() + wb * p2.cos() * l2.cos();
			let y = wa * p1.cos() * l1.sin() + wb * p2.cos() * l2.sin();
			let z = wa * p1.sin() + wb * p2.sin();
			(y.atan2(x).to_degrees(), z.atan2(x.hypot(y)).to_degrees())
		})
		.collect()
}

/// Total length of a polyline.
pub fn polyline_length(points: &[(f64, f64)]) -> f64 {
	points
		.windows(2)
		.map(|w| (w[1].0 - w[0].0).hypot(w[1].1 - w[0].1))
		.sum()
}

/// Point at fraction `t` (clamped to `[0, 1]`) of a polyline's length.
pub fn point_along(points: &[(f64, f64)], t: f64) -> Option<(f64, f64)> {
	let first = *points.first()?;
	let mut remaining = polyline_length(points) * t.clamp(0.0, 1.0);
	for w in points.windows(2) {
		let len = (w[1].0 - w[0].0).hypot(w[1].1 - w[0].1);
		if remaining <= len && len > 0.0 {
			let f = remaining / len;
			return Some((w[0].0 + (w[1].0 - w[0].0) * f, w[0].1 + (w[1].1 - w[0].1) * f));
		}
		remaining -= len;
	}
	points.last().copied().or(Some(first))
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-6
	}

	#[test]
	fn origin_lands_in_view_center() {
		let m = Mercator::centered(100.0, 800.0, 320.0);
		let (x, y) = m.project((0.0, 0.0));
		assert!(close(x, 400.0) && close(y, 160.0));
	}

	#[test]
	fn longitude_is_linear() {
		let m = Mercator::centered(100.0, 800.0, 320.0);
		let (x, _) = m.project((180.0, 0.0));
		assert!(close(x, 400.0 + 100.0 * PI));
	}

	#[test]
	fn latitude_is_monotonic_and_clamped() {
		let m = Mercator::centered(100.0, 800.0, 320.0);
		let ys: Vec<f64> = [-90.0, -60.0, -30.0, 0.0, 30.0, 60.0, 90.0]
			.iter()
			.map(|&lat| m.project((0.0, lat)).1)
			.collect();
		assert!(ys.windows(2).all(|w| w[0] > w[1]), "{ys:?}");
		assert!(ys.iter().all(|y| y.is_finite()));
		// Web Mercator is square at the clamp latitude.
		let (_, top, w, h) = m.sphere_bounds();
		assert!(close(w, h));
		assert!(close(top, m.project((0.0, 90.0)).1));
	}

	#[test]
	fn lines_split_at_antimeridian() {
		let m = Mercator::centered(100.0, 800.0, 320.0);
		let segments = m.project_line(&[(170.0, 0.0), (179.0, 0.0), (-179.0, 0.0), (-170.0, 0.0)]);
		assert_eq!(segments.len(), 2);
		assert!(segments.iter().all(|s| s.len() == 2));
	}

	#[test]
	fn great_circle_hits_endpoints() {
		let nyc = (-74.006, 40.7128);
		let berlin = (13.405, 52.52);
		let arc = great_circle(nyc, berlin, 16);
		assert_eq!(arc.len(), 17);
		assert!(close(arc[0].0, nyc.0) && close(arc[0].1, nyc.1));
		assert!(close(arc[16].0, berlin.0) && close(arc[16].1, berlin.1));
		// The route bows north of both endpoints.
		assert!(arc[8].1 > berlin.1);
	}

	#[test]
	fn great_circle_of_a_point_is_degenerate() {
		assert_eq!(great_circle((1.0, 2.0), (1.0, 2.0), 8), vec![(1.0, 2.0), (1.0, 2.0)]);
	}

	#[test]
	fn point_along_interpolates_by_length() {
		let line = [(0.0, 0.0), (10.0, 0.0), (10.0, 30.0)];
		assert_eq!(polyline_length(&line), 40.0);
		assert_eq!(point_along(&line, 0.0), Some((0.0, 0.0)));
		assert_eq!(point_along(&line, 0.125), Some((5.0, 0.0)));
		assert_eq!(point_along(&line, 0.5), Some((10.0, 10.0)));
		assert_eq!(point_along(&line, 2.0), Some((10.0, 30.0)));
		assert_eq!(point_along(&[], 0.5), None);
	}

	#[test]
	fn graticule_spacing() {
		let lines = graticule();
		assert_eq!(lines.len(), 18 + 17);
		assert!(lines.iter().flatten().all(|p| p.1.abs() <= 80.0));
	}

	#[test]
	fn full_parallel_stays_in_one_piece() {
		let m = Mercator::centered(100.0, 800.0, 320.0);
		let parallel: Vec<Position> = (-18..=18).map(|j| (f64::from(j) * 10.0, 30.0)).collect();
		let segments = m.project_line(&parallel);
		assert_eq!(segments.len(), 1);
		assert_eq!(segments[0].len(), 37);
		let width = segments[0][36].0 - segments[0][0].0;
		assert!(close(width, 2.0 * PI * 100.0));
	}

	#[test]
	fn crossing_the_prime_meridian_does_not_split() {
		let m = Mercator::centered(100.0, 800.0, 320.0);
		let segments = m.project_line(&[(-10.0, 50.0), (0.0, 51.0), (10.0, 52.0)]);
		assert_eq!(segments.len(), 1);
		assert_eq!(segments[0].len(), 3);
	}

	#[test]
	fn feature_path_closes_rings() {
		let m = Mercator::centered(100.0, 800.0, 320.0);
		let feature = Feature {
			id: None,
			name: None,
			polygons: vec![vec![vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]]],
		};
		let d = m.feature_path(&feature);
		assert!(d.starts_with("M400.00,160.00L"), "{d}");
		assert!(d.ends_with('Z'));
		assert_eq!(d.matches('L').count(), 2);
	}
}
