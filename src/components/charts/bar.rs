use leptos::prelude::*;
use web_sys::MouseEvent;

use super::geometry::{self, PlotArea, nearest_index};
use super::scale::LinearScale;
use super::tooltip::{ChartTooltip, Series, TooltipData, pointer_fraction};
use crate::theme::palette;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskWeek {
	pub name: &'static str,
	pub high: u32,
	pub medium: u32,
	pub low: u32,
}

pub const RISK_DATA: [RiskWeek; 4] = [
	RiskWeek {
		name: "Week 1",
		high: 12,
		medium: 35,
		low: 53,
	},
	RiskWeek {
		name: "Week 2",
		high: 18,
		medium: 42,
		low: 40,
	},
	RiskWeek {
		name: "Week 3",
		high: 8,
		medium: 38,
		low: 54,
	},
	RiskWeek {
		name: "Week 4",
		high: 15,
		medium: 33,
		low: 52,
	},
];

/// Stack order, bottom to top.
pub const RISK_SERIES: [Series<RiskWeek>; 3] = [
	Series {
		key: "high",
		label: "High Risk",
		color: palette::DANGER,
		value: |w| f64::from(w.high),
	},
	Series {
		key: "medium",
		label: "Medium",
		color: palette::WARNING,
		value: |w| f64::from(w.medium),
	},
	Series {
		key: "low",
		label: "Low Risk",
		color: palette::SUCCESS,
		value: |w| f64::from(w.low),
	},
];

const VIEW_W: f64 = 400.0;
const VIEW_H: f64 = 280.0;
const PLOT: PlotArea = PlotArea {
	left: 40.0,
	top: 20.0,
	right: 370.0,
	bottom: 250.0,
};
const TICKS: usize = 5;
/// Fraction of each category band left empty around its bar.
const BAND_GAP: f64 = 0.1;
const TOP_RADIUS: f64 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct BarSegment {
	pub color: &'static str,
	pub top: f64,
	pub path: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackedBar {
	pub center: f64,
	pub band: (f64, f64),
	pub segments: Vec<BarSegment>,
}

pub struct BarLayout {
	pub y: LinearScale,
	pub ticks: Vec<f64>,
	pub bars: Vec<StackedBar>,
}

pub fn bar_layout(rows: &[RiskWeek], series: &[Series<RiskWeek>], plot: PlotArea) -> BarLayout {
	let stacks: Vec<Vec<(f64, f64)>> = rows
		.iter()
		.map(|r| {
			let values: Vec<f64> = series.iter().map(|s| (s.value)(r)).collect();
			geometry::stack(&values)
		})
		.collect();
	let max = stacks
		.iter()
		.filter_map(|s| s.last().map(|&(_, top)| top))
		.fold(0.0_f64, f64::max);
	let y = LinearScale::new((0.0, max), (plot.bottom, plot.top)).nice(TICKS);

	let band = if rows.is_empty() { 0.0 } else { plot.width() / rows.len() as f64 };
	let width = band * (1.0 - 2.0 * BAND_GAP);
	let bars = stacks
		.iter()
		.enumerate()
		.map(|(i, stack)| {
			let band_start = plot.left + band * i as f64;
			let x = band_start + band * BAND_GAP;
			let segments = series
				.iter()
				.zip(stack)
				.enumerate()
				.map(|(j, (s, &(bottom, top)))| {
					let (y_top, y_bottom) = (y.apply(top), y.apply(bottom));
					let radius = if j + 1 == series.len() { TOP_RADIUS } else { 0.0 };
					BarSegment {
						color: s.color,
						top: y_top,
						path: geometry::bar_path(x, y_top, width, y_bottom - y_top, radius, 0.0),
					}
				})
				.collect();
			StackedBar {
				center: band_start + band / 2.0,
				band: (band_start, band),
				segments,
			}
		})
		.collect();

	BarLayout {
		ticks: y.ticks(TICKS),
		y,
		bars,
	}
}

/// Weekly high / medium / low risk split as stacked bars.
#[component]
pub fn CampaignHealthChart() -> impl IntoView {
	let layout = bar_layout(&RISK_DATA, &RISK_SERIES, PLOT);
	let tooltip = RwSignal::new(None::<TooltipData>);
	let hovered = RwSignal::new(None::<usize>);

	let centers: Vec<f64> = layout.bars.iter().map(|b| b.center).collect();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((fx, fy)) = pointer_fraction(&ev) else {
			return;
		};
		let Some(i) = nearest_index(&centers, fx * VIEW_W) else {
			return;
		};
		hovered.set(Some(i));
		let row = RISK_DATA[i];
		tooltip.set(Some(TooltipData::for_row(
			row.name,
			&RISK_SERIES,
			&row,
			centers[i] / VIEW_W * 100.0,
			fy * 100.0,
		)));
	};
	let on_mouseleave = move |_: MouseEvent| {
		hovered.set(None);
		tooltip.set(None);
	};

	let bands: Vec<(f64, f64)> = layout.bars.iter().map(|b| b.band).collect();
	let cursor = move || {
		hovered.get().and_then(|i| bands.get(i).copied()).map(|(x, w)| {
			view! {
				<rect
					class="chart-band"
					x=format!("{x:.2}")
					y=PLOT.top.to_string()
					width=format!("{w:.2}")
					height=(PLOT.bottom - PLOT.top).to_string()
				/>
			}
		})
	};

	let grid = layout
		.ticks
		.iter()
		.map(|&t| {
			let y = format!("{:.2}", layout.y.apply(t));
			view! {
				<line class="chart-grid" x1=PLOT.left.to_string() x2=PLOT.right.to_string() y1=y.clone() y2=y.clone() />
				<text class="chart-axis" x=(PLOT.left - 8.0).to_string() y=y text-anchor="end" dominant-baseline="middle">
					{t.to_string()}
				</text>
			}
		})
		.collect_view();

	let bars = layout
		.bars
		.into_iter()
		.zip(RISK_DATA)
		.map(|(bar, row)| {
			let label_x = format!("{:.2}", bar.center);
			let segments = bar
				.segments
				.into_iter()
				.map(|s| view! { <path class="bar-segment" d=s.path fill=s.color /> })
				.collect_view();
			view! {
				{segments}
				<text class="chart-axis" x=label_x y=(PLOT.bottom + 20.0).to_string() text-anchor="middle">
					{row.name}
				</text>
			}
		})
		.collect_view();

	let legend = RISK_SERIES
		.iter()
		.map(|s| {
			view! {
				<div class="legend-item">
					<span class="legend-dot" style:background-color=s.color></span>
					<span>{s.label}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="card chart-card">
			<div class="card-header">
				<div>
					<h2 class="card-title">"Campaign Health Score"</h2>
					<p class="card-subtitle">"Weekly performance assessment"</p>
				</div>
				<div class="chart-legend">{legend}</div>
			</div>
			<div class="chart-body">
				<svg
					class="chart-svg"
					viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
					on:mousemove=on_mousemove
					on:mouseleave=on_mouseleave
				>
					{cursor}
					{grid}
					{bars}
				</svg>
				<ChartTooltip data=tooltip />
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn axis_covers_full_stack() {
		let layout = bar_layout(&RISK_DATA, &RISK_SERIES, PLOT);
		assert_eq!(layout.y.domain(), (0.0, 100.0));
		assert_eq!(layout.ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
	}

	#[test]
	fn stack_top_matches_scaled_row_sum() {
		let layout = bar_layout(&RISK_DATA, &RISK_SERIES, PLOT);
		for (bar, row) in layout.bars.iter().zip(&RISK_DATA) {
			let sum = f64::from(row.high + row.medium + row.low);
			let top = bar.segments.last().unwrap().top;
			assert!((top - layout.y.apply(sum)).abs() < 1e-9);
		}
	}

	#[test]
	fn only_top_segment_is_rounded() {
		let layout = bar_layout(&RISK_DATA, &RISK_SERIES, PLOT);
		let segments = &layout.bars[0].segments;
		assert_eq!(segments.len(), 3);
		assert!(!segments[0].path.contains('A'));
		assert!(!segments[1].path.contains('A'));
		assert!(segments[2].path.contains('A'));
		assert_eq!(segments[0].color, palette::DANGER);
	}

	#[test]
	fn bars_sit_in_their_bands() {
		let layout = bar_layout(&RISK_DATA, &RISK_SERIES, PLOT);
		let band = PLOT.width() / 4.0;
		for (i, bar) in layout.bars.iter().enumerate() {
			assert!((bar.center - (PLOT.left + band * (i as f64 + 0.5))).abs() < 1e-9);
		}
	}
}
