use leptos::prelude::*;

use crate::components::charts::{
	CampaignHealthChart, CampaignModules, LeadSourcesChart, SdrPerformance, TrendChart,
};
use crate::components::lead_map::LeadMap;
use crate::components::shell::{ActivityFeed, DashboardHeader, Sidebar, StatCards};

/// Dashboard page: every widget on one grid.
#[component]
pub fn Dashboard() -> impl IntoView {
	let sidebar_open = RwSignal::new(false);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="dashboard">
				<Sidebar open=sidebar_open />
				<main class="dashboard-main">
					<DashboardHeader sidebar_open=sidebar_open />
					<div class="dashboard-content">
						<StatCards />
						<div class="grid-3">
							<div class="span-2">
								<TrendChart />
							</div>
							<LeadSourcesChart />
						</div>
						<div class="grid-3">
							<div class="span-2 card map-card">
								<div class="card-header">
									<div>
										<h2 class="card-title">"Global Lead Distribution"</h2>
										<p class="card-subtitle">"Real-time outreach activity across regions"</p>
									</div>
									<button class="outline-button">"🌐 View All"</button>
								</div>
								<div class="map-frame">
									<LeadMap />
								</div>
							</div>
							<CampaignHealthChart />
							<ActivityFeed />
						</div>
						<div class="grid-2">
							<CampaignModules />
							<SdrPerformance />
						</div>
					</div>
				</main>
			</div>
		</ErrorBoundary>
	}
}
