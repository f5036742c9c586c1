use gloo_net::http::Request;
use log::debug;

use super::topology::{self, WorldGeography};
use crate::error::GeoError;

/// Where the map's geography stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GeoStatus {
	#[default]
	Loading,
	Loaded { features: usize },
	Failed(GeoError),
}

impl GeoStatus {
	pub fn is_loaded(&self) -> bool {
		matches!(self, Self::Loaded { .. })
	}

	pub fn feature_count(&self) -> usize {
		match self {
			Self::Loaded { features } => *features,
			_ => 0,
		}
	}

	pub fn error(&self) -> Option<&GeoError> {
		match self {
			Self::Failed(err) => Some(err),
			_ => None,
		}
	}
}

/// Fetch and decode the world topology. Called once per map; never retried.
pub async fn fetch_world(url: &str, object: &str) -> Result<WorldGeography, GeoError> {
	debug!("Fetching geography from {url}");
	let response = Request::get(url).send().await?;
	if !response.ok() {
		return Err(GeoError::Status(response.status()));
	}
	let body = response.text().await?;
	let world = topology::decode(&body, object)?;
	debug!("Decoded {} geographies", world.len());
	Ok(world)
}
