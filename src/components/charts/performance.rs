use leptos::prelude::*;

use crate::format;
use crate::theme::palette;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceShare {
	pub name: &'static str,
	pub share: u32,
	pub leads: u64,
	pub color: &'static str,
}

impl SourceShare {
	pub fn label(&self) -> String {
		format!("{}% • {} Leads", self.share, format::thousands(self.leads))
	}
}

const EFFICIENCY: u32 = 82;
const PARAMETERS: u32 = 56;

const SUMMARY: [(&str, &str); 3] = [
	("Reply Rate", "65%"),
	("Conversion Rate", "28%"),
	("Active Campaigns", "12"),
];

pub const SOURCES: [SourceShare; 4] = [
	SourceShare {
		name: "LinkedIn Outreach",
		share: 61,
		leads: 7_512,
		color: palette::PERFORMANCE,
	},
	SourceShare {
		name: "Email Campaigns",
		share: 19,
		leads: 12_987,
		color: "#60A5FA",
	},
	SourceShare {
		name: "Referrals",
		share: 12,
		leads: 8_902,
		color: "#C084FC",
	},
	SourceShare {
		name: "Intent Data",
		share: 8,
		leads: 4_201,
		color: "#FACC15",
	},
];

#[component]
pub fn SdrPerformance() -> impl IntoView {
	let summary = SUMMARY
		.iter()
		.map(|&(label, value)| {
			view! {
				<div class="summary-row">
					<span class="summary-label">{label}</span>
					<span class="summary-value">{value}</span>
				</div>
			}
		})
		.collect_view();

	let sources = SOURCES
		.iter()
		.map(|source| {
			view! {
				<div class="summary-row">
					<div class="source-name">
						<span class="source-dot" style:background-color=source.color></span>
						<span class="summary-label">{source.name}</span>
					</div>
					<span class="summary-value small">{source.label()}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="card performance-card">
			<div class="card-header">
				<div class="card-title-row">
					<span class="source-dot" style:background-color=palette::PERFORMANCE></span>
					<h2 class="card-title">"LinkedIn AI SDR Performance"</h2>
				</div>
				<button class="pill-button">"Last 30 days"</button>
			</div>
			<div class="performance-grid">
				<div>
					<div class="efficiency">
						<div class="efficiency-value">{format!("{EFFICIENCY}%")}</div>
						<p class="efficiency-caption">
							"Efficiency is above average" <br />
							"based on "
							<span class="efficiency-highlight">{format!("{PARAMETERS} parameters")}</span>
						</p>
					</div>
					<div class="summary">{summary}</div>
				</div>
				<div>
					<h3 class="summary-title">"Lead Sources"</h3>
					<div class="summary">{sources}</div>
				</div>
			</div>
		</div>
	}
}
