//! Aggregates the map overlays derive from the location list.
//!
//! Everything here is recomputed on demand from the static dataset; there is
//! no caching and the built-in data has no error path.

use super::types::{LocationStatus, MapLocation};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapTotals {
	pub regions: usize,
	pub leads: u64,
	/// Pipeline value in millions.
	pub pipeline: f64,
	pub active_regions: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusShare {
	pub status: LocationStatus,
	pub count: usize,
	/// Rounded share of all locations, `0..=100`.
	pub percent: u32,
}

/// Numeric portion of a currency label, normalized to millions.
///
/// `$2.4M` is 2.4, `$980K` is 0.98, `$1.5B` is 1500 and an unsuffixed figure
/// is read as whole currency units. Labels without digits contribute zero.
pub fn amount_in_millions(label: &str) -> f64 {
	let is_numeric = |c: char| c.is_ascii_digit() || c == '.' || c == ',';
	let Some(start) = label.find(|c: char| c.is_ascii_digit()) else {
		return 0.0;
	};
	let rest = &label[start..];
	let end = rest.find(|c: char| !is_numeric(c)).unwrap_or(rest.len());
	let digits: String = rest[..end].chars().filter(|&c| c != ',').collect();
	let Ok(mut amount) = digits.parse::<f64>() else {
		return 0.0;
	};
	if label[..start].contains('-') {
		amount = -amount;
	}
	// Only a letter directly after the figure counts as its magnitude.
	match rest[end..].trim_start().chars().next() {
		Some('K' | 'k') => amount / 1e3,
		Some('M' | 'm') => amount,
		Some('B' | 'b') => amount * 1e3,
		_ => amount / 1e6,
	}
}

pub fn total_leads(locations: &[MapLocation]) -> u64 {
	locations.iter().map(|l| u64::from(l.leads)).sum()
}

pub fn total_pipeline(locations: &[MapLocation]) -> f64 {
	locations.iter().map(|l| amount_in_millions(&l.pipeline)).sum()
}

pub fn count_with_status(locations: &[MapLocation], status: LocationStatus) -> usize {
	locations.iter().filter(|l| l.status == status).count()
}

pub fn totals(locations: &[MapLocation]) -> MapTotals {
	MapTotals {
		regions: locations.len(),
		leads: total_leads(locations),
		pipeline: total_pipeline(locations),
		active_regions: count_with_status(locations, LocationStatus::Active),
	}
}

/// Count and rounded percentage for every status, in display order.
pub fn status_breakdown(locations: &[MapLocation]) -> Vec<StatusShare> {
	LocationStatus::ALL
		.iter()
		.map(|&status| {
			let count = count_with_status(locations, status);
			let percent = if locations.is_empty() {
				0
			} else {
				(count as f64 / locations.len() as f64 * 100.0).round() as u32
			};
			StatusShare {
				status,
				count,
				percent,
			}
		})
		.collect()
}

/// Realized value as a rounded percentage of pipeline value.
pub fn conversion_rate(location: &MapLocation) -> u32 {
	let pipeline = amount_in_millions(&location.pipeline);
	if pipeline <= 0.0 {
		return 0;
	}
	(amount_in_millions(&location.value) / pipeline * 100.0)
		.round()
		.max(0.0) as u32
}
