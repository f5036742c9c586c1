use leptos::prelude::*;
use log::debug;
use web_sys::MouseEvent;

#[component]
pub fn DashboardHeader(sidebar_open: RwSignal<bool>) -> impl IntoView {
	let toggle = move |_: MouseEvent| {
		sidebar_open.update(|open| *open = !*open);
		debug!("Sidebar open: {}", sidebar_open.get_untracked());
	};

	view! {
		<header class="dashboard-header">
			<div class="header-title">
				<button class="sidebar-trigger" title="Toggle sidebar" on:click=toggle>
					"☰"
				</button>
				<div>
					<h1>"AI SDR Analytics"</h1>
					<p>"Real-time performance monitoring & insights"</p>
				</div>
			</div>
			<div class="header-actions">
				<label class="search">
					<span class="search-icon">"⌕"</span>
					<input type="search" placeholder="Search campaigns, leads, locations..." />
				</label>
				<button class="icon-button" title="Notifications">
					"🔔"
					<span class="notification-dot"></span>
				</button>
				<button class="primary-button">
					"+"
					<span class="button-label">"New Campaign"</span>
				</button>
			</div>
		</header>
	}
}
