use std::collections::HashSet;

use crate::error::DatasetError;
use crate::theme::map as colors;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationStatus {
	Active,
	Pending,
	Completed,
}

impl LocationStatus {
	pub const ALL: [LocationStatus; 3] = [Self::Active, Self::Pending, Self::Completed];

	pub fn color(self) -> &'static str {
		match self {
			Self::Active => colors::PRIMARY,
			Self::Pending => colors::WARNING,
			Self::Completed => colors::SUCCESS,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Active => "ACTIVE",
			Self::Pending => "PENDING",
			Self::Completed => "COMPLETED",
		}
	}

	/// CSS modifier used by the status badge.
	pub fn badge_class(self) -> &'static str {
		match self {
			Self::Active => "badge-active",
			Self::Pending => "badge-pending",
			Self::Completed => "badge-completed",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFlow {
	Inbound,
	Outbound,
	Bidirectional,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapLocation {
	pub id: String,
	pub name: String,
	pub country: String,
	/// `(longitude, latitude)` in degrees.
	pub coordinates: (f64, f64),
	pub leads: u32,
	pub status: LocationStatus,
	/// Realized value, e.g. `$2.4M`.
	pub value: String,
	/// Pipeline value, e.g. `$980K`.
	pub pipeline: String,
	pub last_activity: String,
	pub region: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	pub from: String,
	pub to: String,
	/// In `[0, 1]`.
	pub strength: f64,
	pub flow: DataFlow,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapDataset {
	pub locations: Vec<MapLocation>,
	pub connections: Vec<Connection>,
}

impl MapDataset {
	pub fn location(&self, id: &str) -> Option<&MapLocation> {
		self.locations.iter().find(|l| l.id == id)
	}

	/// Connections whose endpoints both resolve, paired with their index in
	/// `connections`. Dangling references are skipped.
	pub fn resolved_connections(
		&self,
	) -> impl Iterator<Item = (usize, &Connection, &MapLocation, &MapLocation)> + '_ {
		self.connections.iter().enumerate().filter_map(|(i, c)| {
			let from = self.location(&c.from)?;
			let to = self.location(&c.to)?;
			Some((i, c, from, to))
		})
	}

	/// Report every integrity problem without changing what gets rendered.
	pub fn validate(&self) -> Vec<DatasetError> {
		let mut problems = Vec::new();
		let mut seen = HashSet::new();
		for location in &self.locations {
			if !seen.insert(location.id.as_str()) {
				problems.push(DatasetError::DuplicateId(location.id.clone()));
			}
		}
		for c in &self.connections {
			for end in [&c.from, &c.to] {
				if !seen.contains(end.as_str()) {
					problems.push(DatasetError::UnknownEndpoint {
						from: c.from.clone(),
						to: c.to.clone(),
						missing: end.clone(),
					});
				}
			}
		}
		problems
	}
}
