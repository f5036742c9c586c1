use leptos::prelude::*;
use web_sys::MouseEvent;

use super::geometry::{self, Sector};
use super::tooltip::{ChartTooltip, TooltipData, TooltipEntry, format_value};
use crate::theme::{palette, with_alpha};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeadSource {
	pub name: &'static str,
	pub value: f64,
	pub color: &'static str,
}

pub const LEAD_SOURCES: [LeadSource; 4] = [
	LeadSource {
		name: "LinkedIn Outreach",
		value: 52.0,
		color: palette::PRIMARY,
	},
	LeadSource {
		name: "Email Campaigns",
		value: 28.0,
		color: palette::ACCENT,
	},
	LeadSource {
		name: "Referrals",
		value: 15.0,
		color: palette::SUCCESS,
	},
	LeadSource {
		name: "Intent Data",
		value: 5.0,
		color: palette::WARNING,
	},
];

const SIZE: f64 = 180.0;
const CENTER: (f64, f64) = (SIZE / 2.0, SIZE / 2.0);
const INNER_RADIUS: f64 = 35.0;
const OUTER_RADIUS: f64 = 65.0;
const PADDING_ANGLE: f64 = 3.0;

pub fn slices(sources: &[LeadSource]) -> Vec<Sector> {
	let values: Vec<f64> = sources.iter().map(|s| s.value).collect();
	geometry::donut_sectors(&values, PADDING_ANGLE)
}

/// Tooltip anchored at the middle of a slice's ring.
fn slice_tooltip(source: &LeadSource, sector: Sector) -> TooltipData {
	let (x, y) = geometry::polar(CENTER, (INNER_RADIUS + OUTER_RADIUS) / 2.0, sector.mid());
	TooltipData {
		label: source.name.to_string(),
		entries: vec![TooltipEntry {
			key: "value",
			value: format_value(source.value),
			color: source.color,
		}],
		x: x / SIZE * 100.0,
		y: y / SIZE * 100.0,
	}
}

#[component]
pub fn LeadSourcesChart() -> impl IntoView {
	let tooltip = RwSignal::new(None::<TooltipData>);

	let sectors = LEAD_SOURCES
		.iter()
		.zip(slices(&LEAD_SOURCES))
		.map(|(&source, sector)| {
			let d = geometry::sector_path(CENTER, INNER_RADIUS, OUTER_RADIUS, sector);
			view! {
				<path
					class="pie-sector"
					d=d
					fill=source.color
					on:mouseenter=move |_: MouseEvent| tooltip.set(Some(slice_tooltip(&source, sector)))
				/>
			}
		})
		.collect_view();

	let legend = LEAD_SOURCES
		.iter()
		.map(|source| {
			view! {
				<div class="source-row">
					<div class="source-name">
						<span
							class="source-dot"
							style:background-color=source.color
							style:box-shadow=format!("0 0 10px {}", with_alpha(source.color, 0.25))
						></span>
						<span>{source.name}</span>
					</div>
					<span class="source-value">{format!("{}%", format_value(source.value))}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="card chart-card">
			<div class="card-header">
				<div>
					<h2 class="card-title">"Lead Sources"</h2>
					<p class="card-subtitle">"Distribution by acquisition channel"</p>
				</div>
			</div>
			<div class="chart-body pie-body">
				<svg
					class="pie-svg"
					viewBox=format!("0 0 {SIZE} {SIZE}")
					on:mouseleave=move |_: MouseEvent| tooltip.set(None)
				>
					{sectors}
				</svg>
				<ChartTooltip data=tooltip />
			</div>
			<div class="source-list">{legend}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slices_are_proportional() {
		let sectors = slices(&LEAD_SOURCES);
		assert_eq!(sectors.len(), 4);
		let per_unit = sectors[0].sweep() / 52.0;
		for (sector, source) in sectors.iter().zip(&LEAD_SOURCES) {
			assert!((sector.sweep() - per_unit * source.value).abs() < 1e-9);
		}
		let total: f64 = sectors.iter().map(Sector::sweep).sum();
		assert!((total - (360.0 - 4.0 * PADDING_ANGLE)).abs() < 1e-9);
	}

	#[test]
	fn tooltip_sits_on_the_ring() {
		let sector = slices(&LEAD_SOURCES)[0];
		let tip = slice_tooltip(&LEAD_SOURCES[0], sector);
		assert_eq!(tip.label, "LinkedIn Outreach");
		assert_eq!(tip.entries[0].value, "52");
		let (dx, dy) = (tip.x / 100.0 * SIZE - CENTER.0, tip.y / 100.0 * SIZE - CENTER.1);
		assert!((dx.hypot(dy) - 50.0).abs() < 1e-9);
	}
}
