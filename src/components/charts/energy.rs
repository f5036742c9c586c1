use leptos::prelude::*;

use super::geometry;
use super::scale::LinearScale;
use crate::theme::palette;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CampaignModule {
	pub name: &'static str,
	pub value: u32,
	pub max: u32,
}

pub const MODULES: [CampaignModule; 3] = [
	CampaignModule {
		name: "Auto Prospecting",
		value: 89,
		max: 100,
	},
	CampaignModule {
		name: "Message Personalization",
		value: 76,
		max: 100,
	},
	CampaignModule {
		name: "Lead Enrichment",
		value: 92,
		max: 100,
	},
];

const GAUGE_W: f64 = 100.0;
const GAUGE_H: f64 = 128.0;
const GAUGE_INSET: f64 = 10.0;
const GAUGE_RADIUS: f64 = 4.0;

impl CampaignModule {
	/// Share of the maximum as a whole percentage, capped at 100.
	pub fn percent(&self) -> u32 {
		if self.max == 0 {
			return 0;
		}
		(self.value.min(self.max) * 100 + self.max / 2) / self.max
	}
}

/// Gauge bar rising from the bottom of a `GAUGE_W` by `GAUGE_H` box.
pub fn gauge_path(module: &CampaignModule) -> String {
	let y = LinearScale::new((0.0, f64::from(module.max)), (GAUGE_H, 0.0));
	let top = y.apply(f64::from(module.value.min(module.max)));
	geometry::bar_path(
		GAUGE_INSET,
		top,
		GAUGE_W - 2.0 * GAUGE_INSET,
		GAUGE_H - top,
		GAUGE_RADIUS,
		GAUGE_RADIUS,
	)
}

#[component]
pub fn CampaignModules() -> impl IntoView {
	let cards = MODULES
		.iter()
		.enumerate()
		.map(|(i, module)| {
			let gradient = format!("module-gradient-{i}");
			let percent = module.percent();
			view! {
				<div class="module">
					<div class="module-head">
						<span class="module-name">{module.name}</span>
						<button class="module-menu">"⋮"</button>
					</div>
					<svg class="module-gauge" viewBox=format!("0 0 {GAUGE_W} {GAUGE_H}") preserveAspectRatio="none">
						<defs>
							<linearGradient id=gradient.clone() x1="0" y1="0" x2="0" y2="1">
								<stop offset="0%" stop-color=palette::PERFORMANCE stop-opacity="1" />
								<stop offset="100%" stop-color=palette::PERFORMANCE stop-opacity="0.3" />
							</linearGradient>
						</defs>
						<path d=gauge_path(module) fill=format!("url(#{gradient})") />
					</svg>
					<div class="module-score">{format!("{percent}%")}</div>
					<div class="module-caption">"Performance Score"</div>
					<div class="progress-track">
						<div
							class="progress-fill"
							style:width=format!("{percent}%")
							style:background-color=palette::PERFORMANCE
						></div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="card performance-card">
			<div class="card-header">
				<h2 class="card-title">"Campaign Performance Modules"</h2>
				<button class="pill-button">"Optimize"</button>
			</div>
			<div class="module-grid">{cards}</div>
		</div>
	}
}
