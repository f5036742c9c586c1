use super::types::{Connection, DataFlow, LocationStatus, MapDataset, MapLocation};

#[allow(clippy::too_many_arguments)]
fn location(
	id: &str,
	name: &str,
	country: &str,
	coordinates: (f64, f64),
	leads: u32,
	status: LocationStatus,
	value: &str,
	pipeline: &str,
	last_activity: &str,
	region: &str,
) -> MapLocation {
	MapLocation {
		id: id.into(),
		name: name.into(),
		country: country.into(),
		coordinates,
		leads,
		status,
		value: value.into(),
		pipeline: pipeline.into(),
		last_activity: last_activity.into(),
		region: region.into(),
	}
}

fn connection(from: &str, to: &str, strength: f64, flow: DataFlow) -> Connection {
	Connection {
		from: from.into(),
		to: to.into(),
		strength,
		flow,
	}
}

/// The markets shown on the dashboard map.
pub fn sample_dataset() -> MapDataset {
	use DataFlow::*;
	use LocationStatus::*;

	MapDataset {
		locations: vec![
			location("nyc", "New York", "USA", (-74.006, 40.7128), 342, Active, "$2.4M", "$4.8M", "2 min ago", "Americas"),
			location("london", "London", "UK", (-0.1276, 51.5074), 156, Completed, "$890K", "$1.2M", "5 min ago", "EMEA"),
			location("tokyo", "Tokyo", "Japan", (139.6917, 35.6895), 89, Pending, "$1.2M", "$2.1M", "12 min ago", "APAC"),
			location("sydney", "Sydney", "Australia", (151.2093, -33.8688), 67, Active, "$650K", "$980K", "8 min ago", "APAC"),
			location("toronto", "Toronto", "Canada", (-79.3832, 43.6532), 234, Completed, "$1.8M", "$2.5M", "1 min ago", "Americas"),
			location("berlin", "Berlin", "Germany", (13.4050, 52.5200), 178, Active, "$1.1M", "$1.9M", "4 min ago", "EMEA"),
		],
		connections: vec![
			connection("nyc", "london", 0.9, Bidirectional),
			connection("london", "berlin", 0.7, Outbound),
			connection("berlin", "tokyo", 0.6, Outbound),
			connection("tokyo", "sydney", 0.8, Bidirectional),
			connection("toronto", "nyc", 0.85, Inbound),
			connection("nyc", "berlin", 0.75, Bidirectional),
		],
	}
}
