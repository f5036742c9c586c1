use leptos::prelude::*;

use crate::theme::{palette, with_alpha};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub change: &'static str,
	pub icon: &'static str,
	pub color: &'static str,
}

pub const STATS: [Stat; 4] = [
	Stat {
		title: "2,847",
		subtitle: "Messages Sent Today",
		change: "+23.5%",
		icon: "💬",
		color: palette::PRIMARY,
	},
	Stat {
		title: "1,156",
		subtitle: "Replies Received",
		change: "+18.2%",
		icon: "✉",
		color: palette::ACCENT,
	},
	Stat {
		title: "342",
		subtitle: "Meetings Booked",
		change: "+24.7%",
		icon: "📅",
		color: palette::SUCCESS,
	},
	Stat {
		title: "89.2%",
		subtitle: "Response Rate",
		change: "+5.1%",
		icon: "◎",
		color: palette::WARNING,
	},
];

#[component]
pub fn StatCards() -> impl IntoView {
	view! {
		<div class="stats-grid">
			{STATS.iter().map(|&stat| view! { <StatCard stat=stat /> }).collect_view()}
		</div>
	}
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
	view! {
		<div
			class="card stat-card"
			style:background-image=format!(
				"linear-gradient(135deg, {} 0%, {} 100%)",
				with_alpha(stat.color, 0.125),
				with_alpha(stat.color, 0.02),
			)
		>
			<div class="stat-head">
				<div
					class="stat-icon"
					style:color=stat.color
					style:background-color=with_alpha(stat.color, 0.125)
				>
					{stat.icon}
				</div>
				<div class="stat-change">"↗ " {stat.change}</div>
			</div>
			<h3 class="stat-value">{stat.title}</h3>
			<p class="stat-label">{stat.subtitle}</p>
		</div>
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
	Success,
	Info,
	Warning,
}

impl ActivityKind {
	pub fn color(self) -> &'static str {
		match self {
			Self::Success => palette::SUCCESS,
			Self::Info => palette::PRIMARY,
			Self::Warning => palette::WARNING,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activity {
	pub icon: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub time: &'static str,
	pub kind: ActivityKind,
}

pub const ACTIVITY: [Activity; 5] = [
	Activity {
		icon: "📞",
		title: "High-value meeting confirmed",
		description: "Sarah Wilson - Enterprise SaaS CEO • $50k potential",
		time: "2 min ago",
		kind: ActivityKind::Success,
	},
	Activity {
		icon: "★",
		title: "Premium lead responded",
		description: "John Smith from TechCorp • Fortune 500 company",
		time: "8 min ago",
		kind: ActivityKind::Success,
	},
	Activity {
		icon: "◎",
		title: "Intent signals detected",
		description: "23 new high-intent prospects identified",
		time: "12 min ago",
		kind: ActivityKind::Info,
	},
	Activity {
		icon: "⚠",
		title: "Rate limit approaching",
		description: "85% of daily LinkedIn quota used",
		time: "25 min ago",
		kind: ActivityKind::Warning,
	},
	Activity {
		icon: "▶",
		title: "Campaign launched",
		description: "Enterprise outreach sequence activated",
		time: "1h ago",
		kind: ActivityKind::Info,
	},
];

#[component]
pub fn ActivityFeed() -> impl IntoView {
	let events = ACTIVITY
		.iter()
		.map(|event| {
			let color = event.kind.color();
			view! {
				<div class="activity">
					<div
						class="activity-icon"
						style:color=color
						style:background-color=with_alpha(color, 0.125)
						style:box-shadow=format!("0 4px 20px {}", with_alpha(color, 0.19))
					>
						{event.icon}
					</div>
					<div class="activity-body">
						<p class="activity-title">{event.title}</p>
						<p class="activity-description">{event.description}</p>
						<p class="activity-time">{event.time}</p>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="card activity-card">
			<div class="card-header">
				<div>
					<h2 class="card-title">"Live Activity Stream"</h2>
					<p class="card-subtitle">"Real-time system events & notifications"</p>
				</div>
				<button class="outline-button">"⋯"</button>
			</div>
			<div class="activity-list">{events}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn activity_colors_by_kind() {
		assert_eq!(ActivityKind::Success.color(), palette::SUCCESS);
		assert_eq!(ActivityKind::Info.color(), palette::PRIMARY);
		assert_eq!(ActivityKind::Warning.color(), palette::WARNING);
	}

	#[test]
	fn feed_mixes_kinds() {
		let count = |kind| ACTIVITY.iter().filter(|a| a.kind == kind).count();
		assert_eq!(
			(count(ActivityKind::Success), count(ActivityKind::Info), count(ActivityKind::Warning)),
			(2, 2, 1)
		);
	}

	#[test]
	fn stat_cards_match_headline_numbers() {
		let titles: Vec<&str> = STATS.iter().map(|s| s.title).collect();
		assert_eq!(titles, vec!["2,847", "1,156", "342", "89.2%"]);
	}
}
