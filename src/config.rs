//! Build-time configuration for the dashboard.
//!
//! Values default to what the hosted dashboard uses and can be overridden when
//! building through the `DASHBOARD_LOG_LEVEL` and `DASHBOARD_GEO_URL`
//! environment variables.

use std::str::FromStr;
use std::time::Duration;

use log::Level;

pub const DEFAULT_GEO_URL: &str = "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-50m.json";

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
	pub geo_url: String,
	/// Name of the geometry collection inside the topology.
	pub topology_object: String,
	pub clock_period: Duration,
	pub animation_period: Duration,
	pub view_width: f64,
	pub view_height: f64,
	pub projection_scale: f64,
	pub show_diagnostics: bool,
}

impl Default for MapConfig {
	fn default() -> Self {
		Self {
			geo_url: DEFAULT_GEO_URL.into(),
			topology_object: "countries".into(),
			clock_period: Duration::from_secs(1),
			animation_period: Duration::from_secs(3),
			view_width: 800.0,
			view_height: 320.0,
			projection_scale: 100.0,
			show_diagnostics: false,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
	pub log_level: Level,
	pub map: MapConfig,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			log_level: Level::Debug,
			map: MapConfig::default(),
		}
	}
}

impl DashboardConfig {
	/// Defaults with any overrides baked in at compile time.
	pub fn from_build_env() -> Self {
		Self::from_overrides(option_env!("DASHBOARD_LOG_LEVEL"), option_env!("DASHBOARD_GEO_URL"))
	}

	fn from_overrides(log_level: Option<&str>, geo_url: Option<&str>) -> Self {
		let mut config = Self::default();
		if let Some(level) = log_level.and_then(|l| Level::from_str(l.trim()).ok()) {
			config.log_level = level;
		}
		if let Some(url) = geo_url.map(str::trim).filter(|u| !u.is_empty()) {
			config.map.geo_url = url.into();
		}
		config
	}
}
