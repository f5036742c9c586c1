use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
	pub icon: &'static str,
	pub label: &'static str,
	pub badge: Option<&'static str>,
	pub active: bool,
}

const fn nav(icon: &'static str, label: &'static str, badge: Option<&'static str>) -> NavItem {
	NavItem {
		icon,
		label,
		badge,
		active: false,
	}
}

pub const NAV_ITEMS: [NavItem; 8] = [
	NavItem {
		active: true,
		..nav("⌂", "Dashboard", None)
	},
	nav("👥", "Leads", Some("2.4k")),
	nav("✉", "Campaigns", Some("18")),
	nav("▥", "Analytics", None),
	nav("◎", "Intent Data", Some("156")),
	nav("📅", "Meetings", Some("42")),
	nav("⛁", "CRM Sync", None),
	nav("⛨", "Security", None),
];

/// Navigation rail; collapses to icons when `open` is false.
#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
	let items = NAV_ITEMS
		.iter()
		.map(|item| {
			view! {
				<a class="nav-item" class:active=item.active title=item.label href="#">
					<span class="nav-icon">{item.icon}</span>
					<span class="nav-label">{item.label}</span>
					{item.badge.map(|badge| view! { <span class="nav-badge">{badge}</span> })}
				</a>
			}
		})
		.collect_view();

	view! {
		<aside class="sidebar" class:collapsed=move || !open.get()>
			<div class="sidebar-header">
				<div class="brand-mark">"⚡"</div>
				<div class="brand-text">
					<h2>"Prospera AI"</h2>
					<p>"LinkedIn AI SDR Platform"</p>
				</div>
			</div>
			<nav class="sidebar-nav">{items}</nav>
			<div class="sidebar-separator"></div>
			<a class="nav-item" title="Settings" href="#">
				<span class="nav-icon">"⚙"</span>
				<span class="nav-label">"Settings"</span>
			</a>
			<div class="sidebar-footer">
				<div class="avatar">"👤"</div>
				<div class="brand-text">
					<p class="user-name">"Admin User"</p>
					<p class="user-email">"admin@prospera.ai"</p>
				</div>
			</div>
		</aside>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dashboard_is_the_only_active_item() {
		let active: Vec<&str> = NAV_ITEMS.iter().filter(|i| i.active).map(|i| i.label).collect();
		assert_eq!(active, vec!["Dashboard"]);
	}

	#[test]
	fn badges() {
		let badges: Vec<(&str, &str)> = NAV_ITEMS
			.iter()
			.filter_map(|i| i.badge.map(|b| (i.label, b)))
			.collect();
		assert_eq!(
			badges,
			vec![
				("Leads", "2.4k"),
				("Campaigns", "18"),
				("Intent Data", "156"),
				("Meetings", "42")
			]
		);
	}
}
