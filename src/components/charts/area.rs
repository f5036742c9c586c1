use leptos::prelude::*;
use web_sys::MouseEvent;

use super::geometry::{self, PlotArea, nearest_index};
use super::scale::LinearScale;
use super::tooltip::{ChartTooltip, Series, TooltipData, pointer_fraction};
use crate::theme::palette;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendPoint {
	pub name: &'static str,
	pub messages: u32,
	pub replies: u32,
	pub meetings: u32,
	pub conversion: u32,
}

const fn point(name: &'static str, messages: u32, replies: u32, meetings: u32, conversion: u32) -> TrendPoint {
	TrendPoint {
		name,
		messages,
		replies,
		meetings,
		conversion,
	}
}

pub const TREND_DATA: [TrendPoint; 9] = [
	point("29 Oct", 156, 42, 8, 27),
	point("30 Oct", 189, 67, 15, 35),
	point("31 Oct", 134, 38, 9, 28),
	point("1 Nov", 234, 89, 23, 38),
	point("2 Nov", 287, 124, 31, 43),
	point("3 Nov", 198, 76, 18, 38),
	point("4 Nov", 312, 142, 38, 46),
	point("5 Nov", 267, 98, 24, 37),
	point("6 Nov", 345, 156, 42, 45),
];

pub const TREND_SERIES: [Series<TrendPoint>; 3] = [
	Series {
		key: "messages",
		label: "Messages",
		color: palette::PRIMARY,
		value: |p| f64::from(p.messages),
	},
	Series {
		key: "replies",
		label: "Replies",
		color: palette::ACCENT,
		value: |p| f64::from(p.replies),
	},
	Series {
		key: "meetings",
		label: "Meetings",
		color: palette::SUCCESS,
		value: |p| f64::from(p.meetings),
	},
];

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 280.0;
const PLOT: PlotArea = PlotArea {
	left: 44.0,
	top: 20.0,
	right: 590.0,
	bottom: 250.0,
};
const TICKS: usize = 5;

pub struct SeriesPaths {
	pub line: String,
	pub area: String,
}

pub struct TrendLayout {
	pub xs: Vec<f64>,
	pub y: LinearScale,
	pub ticks: Vec<f64>,
	pub paths: Vec<SeriesPaths>,
}

pub fn trend_layout(rows: &[TrendPoint], series: &[Series<TrendPoint>], plot: PlotArea) -> TrendLayout {
	let xs: Vec<f64> = match rows.len() {
		0 => Vec::new(),
		1 => vec![plot.left + plot.width() / 2.0],
		n => (0..n)
			.map(|i| plot.left + plot.width() * i as f64 / (n - 1) as f64)
			.collect(),
	};
	let max = rows
		.iter()
		.flat_map(|r| series.iter().map(move |s| (s.value)(r)))
		.fold(0.0_f64, f64::max);
	let y = LinearScale::new((0.0, max), (plot.bottom, plot.top)).nice(TICKS);

	let paths = series
		.iter()
		.map(|s| {
			let points: Vec<(f64, f64)> = rows
				.iter()
				.zip(&xs)
				.map(|(r, &x)| (x, y.apply((s.value)(r))))
				.collect();
			SeriesPaths {
				line: geometry::monotone_path(&points),
				area: geometry::area_path(&points, plot.bottom),
			}
		})
		.collect();

	TrendLayout {
		xs,
		ticks: y.ticks(TICKS),
		y,
		paths,
	}
}

pub fn average_conversion(rows: &[TrendPoint]) -> f64 {
	if rows.is_empty() {
		return 0.0;
	}
	rows.iter().map(|r| f64::from(r.conversion)).sum::<f64>() / rows.len() as f64
}

/// Daily messages, replies and meetings as stacked-behind monotone areas.
#[component]
pub fn TrendChart() -> impl IntoView {
	let layout = trend_layout(&TREND_DATA, &TREND_SERIES, PLOT);
	let tooltip = RwSignal::new(None::<TooltipData>);
	let hovered = RwSignal::new(None::<usize>);

	let xs = layout.xs.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((fx, fy)) = pointer_fraction(&ev) else {
			return;
		};
		let Some(i) = nearest_index(&xs, fx * VIEW_W) else {
			return;
		};
		hovered.set(Some(i));
		let row = TREND_DATA[i];
		tooltip.set(Some(TooltipData::for_row(
			row.name,
			&TREND_SERIES,
			&row,
			xs[i] / VIEW_W * 100.0,
			fy * 100.0,
		)));
	};
	let on_mouseleave = move |_: MouseEvent| {
		hovered.set(None);
		tooltip.set(None);
	};

	let cursor_xs = layout.xs.clone();
	let cursor = move || {
		hovered.get().and_then(|i| cursor_xs.get(i).copied()).map(|x| {
			view! {
				<line
					class="chart-cursor"
					x1=format!("{x:.2}")
					x2=format!("{x:.2}")
					y1=PLOT.top.to_string()
					y2=PLOT.bottom.to_string()
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

	let labels = TREND_DATA
		.iter()
		.zip(&layout.xs)
		.map(|(row, x)| {
			view! {
				<text class="chart-axis" x=format!("{x:.2}") y=(PLOT.bottom + 20.0).to_string() text-anchor="middle">
					{row.name}
				</text>
			}
		})
		.collect_view();

	let gradients = TREND_SERIES
		.iter()
		.map(|s| {
			view! {
				<linearGradient id=format!("trend-{}", s.key) x1="0" y1="0" x2="0" y2="1">
					<stop offset="5%" stop-color=s.color stop-opacity="0.8" />
					<stop offset="95%" stop-color=s.color stop-opacity="0.1" />
				</linearGradient>
			}
		})
		.collect_view();

	let areas = TREND_SERIES
		.iter()
		.zip(layout.paths)
		.map(|(s, p)| {
			view! {
				<path class="chart-area" d=p.area fill=format!("url(#trend-{})", s.key) />
				<path class="chart-line" d=p.line fill="none" stroke=s.color stroke-width="3" />
			}
		})
		.collect_view();

	let legend = TREND_SERIES
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
		<div class="card chart-card trend-card">
			<div class="card-header">
				<div>
					<h2 class="card-title">"Performance Analytics"</h2>
					<p class="card-subtitle">"Daily engagement metrics & conversion trends"</p>
				</div>
				<div class="chart-legend">
					{legend}
					<span class="chart-note">
						{format!("{:.1}% avg conversion", average_conversion(&TREND_DATA))}
					</span>
				</div>
			</div>
			<div class="chart-body">
				<svg
					class="chart-svg"
					viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
					on:mousemove=on_mousemove
					on:mouseleave=on_mouseleave
				>
					<defs>{gradients}</defs>
					{grid}
					{labels}
					{areas}
					{cursor}
				</svg>
				<ChartTooltip data=tooltip />
			</div>
		</div>
	}
}
