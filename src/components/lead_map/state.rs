use web_sys::Path2d;

use super::interaction::MapInteraction;
use super::projection::{self, Mercator};
use super::types::{DataFlow, LocationStatus, MapDataset};
use crate::config::MapConfig;

/// Radius of the status ring in view-box units, at rest and emphasized.
/// Hit testing uses the same ring.
pub const MARKER_RADIUS: f64 = 12.0;
pub const EMPHASIZED_RADIUS: f64 = 14.0;
/// Seconds for a marker to grow or shrink when (un)emphasized.
pub const EMPHASIS_SECS: f64 = 0.4;
const ARC_STEPS: usize = 48;

/// Maps view-box coordinates onto the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	/// Largest uniform scale that fits the view box, centered.
	pub fn fit(view_w: f64, view_h: f64, width: f64, height: f64) -> Self {
		let k = (width / view_w).min(height / view_h).max(f64::EPSILON);
		Self {
			x: (width - view_w * k) / 2.0,
			y: (height - view_h * k) / 2.0,
			k,
		}
	}
}

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Debug)]
pub struct MapMarker {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub status: LocationStatus,
	pub leads: u32,
	pub region: String,
	/// 0 at rest, 1 fully emphasized.
	pub emphasis: f64,
}

impl MapMarker {
	/// Current radius of the status ring, following the eased emphasis.
	pub fn ring_radius(&self) -> f64 {
		let e = ease_out_cubic(self.emphasis);
		MARKER_RADIUS + (EMPHASIZED_RADIUS - MARKER_RADIUS) * e
	}
}

#[derive(Clone, Debug)]
pub struct MapLink {
	/// Position in the dataset's connection list; staggers the animations.
	pub index: usize,
	pub strength: f64,
	pub flow: DataFlow,
	pub segments: Vec<Vec<(f64, f64)>>,
}

#[derive(Clone, Debug, Default)]
pub struct PingState {
	pub marker: Option<usize>,
	pub started: f64,
}

pub struct LeadMapState {
	pub projection: Mercator,
	pub transform: ViewTransform,
	pub width: f64,
	pub height: f64,
	pub view_width: f64,
	pub view_height: f64,
	pub countries: Vec<Path2d>,
	pub graticule: Vec<Vec<(f64, f64)>>,
	pub links: Vec<MapLink>,
	pub markers: Vec<MapMarker>,
	pub ping: PingState,
	pub animation_running: bool,
	pub flow_time: f64,
}

impl LeadMapState {
	pub fn new(data: &MapDataset, config: &MapConfig, width: f64, height: f64) -> Self {
		let mercator = Mercator::from_config(config);

		let markers = data
			.locations
			.iter()
			.map(|loc| {
				let (x, y) = mercator.project(loc.coordinates);
				MapMarker {
					id: loc.id.clone(),
					x,
					y,
					status: loc.status,
					leads: loc.leads,
					region: loc.region.clone(),
					emphasis: 0.0,
				}
			})
			.collect();

		let links = data
			.resolved_connections()
			.map(|(index, conn, from, to)| MapLink {
				index,
				strength: conn.strength.clamp(0.0, 1.0),
				flow: conn.flow,
				segments: mercator.project_line(&projection::great_circle(
					from.coordinates,
					to.coordinates,
					ARC_STEPS,
				)),
			})
			.collect();

		let graticule = projection::graticule()
			.iter()
			.flat_map(|line| mercator.project_line(line))
			.collect();

		Self {
			projection: mercator,
			transform: ViewTransform::fit(config.view_width, config.view_height, width, height),
			width,
			height,
			view_width: config.view_width,
			view_height: config.view_height,
			countries: Vec::new(),
			graticule,
			links,
			markers,
			ping: PingState::default(),
			animation_running: true,
			flow_time: 0.0,
		}
	}

	pub fn screen_to_view(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// The closest marker whose status ring contains a canvas position.
	/// Nearby markers (New York and Toronto) overlap, so the nearest center
	/// wins.
	pub fn marker_at_position(&self, sx: f64, sy: f64) -> Option<&str> {
		let (vx, vy) = self.screen_to_view(sx, sy);
		self.markers
			.iter()
			.map(|m| (m, (m.x - vx).hypot(m.y - vy)))
			.filter(|(m, dist)| *dist <= m.ring_radius())
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(m, _)| m.id.as_str())
	}

	pub fn set_countries(&mut self, countries: Vec<Path2d>) {
		self.countries = countries;
	}

	/// Start a ping ripple on the marker picked by the animation counter.
	pub fn set_ping(&mut self, counter: u64) {
		if self.markers.is_empty() {
			return;
		}
		self.ping = PingState {
			marker: Some((counter % self.markers.len() as u64) as usize),
			started: self.flow_time,
		};
	}

	pub fn tick(&mut self, dt: f64, interaction: &MapInteraction) {
		self.flow_time += dt;
		let step = (dt / EMPHASIS_SECS * 4.0).min(1.0);
		for marker in &mut self.markers {
			let target = if interaction.is_emphasized(&marker.id) { 1.0 } else { 0.0 };
			marker.emphasis += (target - marker.emphasis) * step;
			if (target - marker.emphasis).abs() < 0.01 {
				marker.emphasis = target;
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.transform = ViewTransform::fit(self.view_width, self.view_height, width, height);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::lead_map::data::sample_dataset;
	use crate::components::lead_map::types::Connection;

	fn sample_state(width: f64, height: f64) -> LeadMapState {
		LeadMapState::new(&sample_dataset(), &MapConfig::default(), width, height)
	}

	#[test]
	fn fit_preserves_aspect_and_centers() {
		let t = ViewTransform::fit(800.0, 320.0, 400.0, 400.0);
		assert_eq!(t.k, 0.5);
		assert_eq!((t.x, t.y), (0.0, 120.0));
	}

	#[test]
	fn one_marker_per_location_and_link_per_connection() {
		let state = sample_state(800.0, 320.0);
		assert_eq!(state.markers.len(), 6);
		assert_eq!(state.links.len(), 6);
		assert!(state.links.iter().all(|l| !l.segments.is_empty()));
	}

	#[test]
	fn dangling_connection_draws_nothing() {
		let mut data = sample_dataset();
		data.connections.push(Connection {
			from: "nyc".into(),
			to: "nowhere".into(),
			strength: 1.0,
			flow: DataFlow::Outbound,
		});
		let state = LeadMapState::new(&data, &MapConfig::default(), 800.0, 320.0);
		assert_eq!(state.links.len(), 6);
		assert!(state.links.iter().all(|l| l.index < 6));
	}

	#[test]
	fn hit_test_uses_canvas_coordinates() {
		let state = sample_state(1600.0, 640.0);
		let nyc = state.markers.iter().find(|m| m.id == "nyc").unwrap().clone();
		let (sx, sy) = (nyc.x * 2.0, nyc.y * 2.0);
		assert_eq!(state.marker_at_position(sx, sy), Some("nyc"));
		let toronto = state.markers.iter().find(|m| m.id == "toronto").unwrap();
		assert_eq!(state.marker_at_position(toronto.x * 2.0, toronto.y * 2.0), Some("toronto"));
		assert_eq!(state.marker_at_position(sx + 2.0 * (MARKER_RADIUS + 1.0), sy), None);
		assert_eq!(state.marker_at_position(5.0, 5.0), None);
	}

	#[test]
	fn hit_radius_follows_the_status_ring() {
		let mut state = sample_state(800.0, 320.0);
		let i = state.markers.iter().position(|m| m.id == "tokyo").unwrap();
		let (x, y) = (state.markers[i].x, state.markers[i].y);
		assert_eq!(state.markers[i].ring_radius(), MARKER_RADIUS);
		assert_eq!(state.marker_at_position(x + MARKER_RADIUS - 0.5, y), Some("tokyo"));
		assert_eq!(state.marker_at_position(x + 13.0, y), None);

		state.markers[i].emphasis = 1.0;
		assert_eq!(state.markers[i].ring_radius(), EMPHASIZED_RADIUS);
		assert_eq!(state.marker_at_position(x + 13.0, y), Some("tokyo"));
		assert_eq!(state.marker_at_position(x + 15.0, y), None);
	}

	#[test]
	fn parallels_survive_projection() {
		let state = sample_state(800.0, 320.0);
		let horizontal = state
			.graticule
			.iter()
			.filter(|line| line.len() > 2 && line.iter().all(|p| p.1 == line[0].1))
			.count();
		let vertical = state
			.graticule
			.iter()
			.filter(|line| line.len() == 2 && line[0].0 == line[1].0)
			.count();
		assert_eq!(horizontal, 17);
		assert_eq!(vertical, 18);
	}

	#[test]
	fn emphasis_eases_toward_interaction() {
		let mut state = sample_state(800.0, 320.0);
		let mut interaction = MapInteraction::default();
		interaction.select("tokyo");
		state.tick(0.05, &interaction);
		let tokyo = |s: &LeadMapState| s.markers.iter().find(|m| m.id == "tokyo").unwrap().emphasis;
		assert!(tokyo(&state) > 0.0 && tokyo(&state) < 1.0);
		for _ in 0..60 {
			state.tick(0.016, &interaction);
		}
		assert_eq!(tokyo(&state), 1.0);
		assert!(state.markers.iter().filter(|m| m.id != "tokyo").all(|m| m.emphasis == 0.0));

		interaction.dismiss();
		for _ in 0..60 {
			state.tick(0.016, &interaction);
		}
		assert_eq!(tokyo(&state), 0.0);
	}

	#[test]
	fn ping_cycles_through_markers() {
		let mut state = sample_state(800.0, 320.0);
		state.set_ping(7);
		assert_eq!(state.ping.marker, Some(1));
	}

	#[test]
	fn resize_refits() {
		let mut state = sample_state(800.0, 320.0);
		state.resize(1600.0, 320.0);
		assert_eq!(state.transform, ViewTransform { x: 400.0, y: 0.0, k: 1.0 });
	}
}
