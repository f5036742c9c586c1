//! HTML overlays drawn on top of the map canvas.

use std::sync::Arc;

use leptos::prelude::*;

use super::interaction::MapInteraction;
use super::loader::GeoStatus;
use super::metrics::{self, MapTotals, StatusShare};
use super::types::{MapDataset, MapLocation};
use crate::format;

#[component]
pub fn MapHeader(clock: RwSignal<f64>) -> impl IntoView {
	view! {
		<div class="map-hud map-header">
			<div class="map-header-row">
				<span class="pulse-dot"></span>
				<span class="map-brand">"PROSPER AI"</span>
				<span class="map-clock">{move || format::utc_clock(clock.get())}</span>
			</div>
			<div class="map-header-caption">"Global Lead Distribution System"</div>
		</div>
	}
}

#[component]
pub fn GeoIndicator(status: RwSignal<GeoStatus>) -> impl IntoView {
	move || match status.get() {
		GeoStatus::Loading => Some(
			view! {
				<div class="map-indicator">
					<div class="map-loading">"Loading Global Map..."</div>
				</div>
			}
			.into_any(),
		),
		GeoStatus::Failed(err) => Some(
			view! {
				<div class="map-indicator">
					<div class="map-error">{format!("Map Error: {err}")}</div>
				</div>
			}
			.into_any(),
		),
		GeoStatus::Loaded { .. } => None,
	}
}

#[component]
pub fn MapDiagnostics(status: RwSignal<GeoStatus>) -> impl IntoView {
	view! {
		<div class="map-diagnostics">
			<div>
				"Map Loaded: " {move || if status.with(GeoStatus::is_loaded) { "Yes" } else { "No" }}
			</div>
			<div>"Geographies: " {move || status.with(GeoStatus::feature_count)}</div>
			<div>
				"Error: "
				{move || {
					status.with(|s| s.error().map(ToString::to_string)).unwrap_or_else(|| "None".into())
				}}
			</div>
		</div>
	}
}

#[component]
pub fn StatsPanel(totals: MapTotals) -> impl IntoView {
	view! {
		<div class="map-hud map-stats">
			<div class="hud-title">
				<span class="pulse-dot"></span>
				"GLOBAL ANALYTICS"
			</div>
			<div class="map-stats-grid">
				<div class="map-stat">
					<div class="map-stat-label">"REGIONS"</div>
					<div class="map-stat-value">{totals.regions}</div>
					<div class="map-stat-caption cyan">{format!("{} ACTIVE", totals.active_regions)}</div>
				</div>
				<div class="map-stat">
					<div class="map-stat-label">"TOTAL LEADS"</div>
					<div class="map-stat-value emerald">{format::thousands(totals.leads)}</div>
					<div class="map-stat-caption emerald">"IDENTIFIED"</div>
				</div>
				<div class="map-stat">
					<div class="map-stat-label">"PIPELINE"</div>
					<div class="map-stat-value amber">{format::millions(totals.pipeline)}</div>
					<div class="map-stat-caption amber">"VALUE"</div>
				</div>
			</div>
			<div class="map-system-status">
				<span>"SYSTEM STATUS"</span>
				<span class="emerald">"OPERATIONAL"</span>
			</div>
		</div>
	}
}

#[component]
pub fn StatusMatrix(shares: Vec<StatusShare>) -> impl IntoView {
	view! {
		<div class="map-hud map-legend">
			<div class="hud-title">
				<span class="pulse-dot"></span>
				"STATUS MATRIX"
			</div>
			{shares
				.into_iter()
				.map(|share| {
					let color = share.status.color();
					view! {
						<div class="legend-row">
							<div class="legend-head">
								<span class="legend-swatch" style:background-color=color></span>
								<span class="legend-label">{share.status.label()}</span>
								<span class="legend-count">{share.count}</span>
								<span class="legend-percent">{format!("{}%", share.percent)}</span>
							</div>
							<div class="legend-track">
								<div
									class="legend-fill"
									style:background-color=color
									style:width=format!("{}%", share.percent)
								></div>
							</div>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

#[component]
pub fn LocationDetails(dataset: Arc<MapDataset>, interaction: RwSignal<MapInteraction>) -> impl IntoView {
	let selected = move || {
		interaction.with(|i| i.selected().and_then(|id| dataset.location(id)).cloned())
	};
	move || selected().map(|location| view! { <LocationCard location=location interaction=interaction /> })
}

#[component]
fn LocationCard(location: MapLocation, interaction: RwSignal<MapInteraction>) -> impl IntoView {
	let rate = metrics::conversion_rate(&location);
	let status = location.status;
	view! {
		<div class="map-hud location-card">
			<div class="location-card-head">
				<div>
					<h3>{location.name}</h3>
					<p class="location-country">{location.country}</p>
					<p class="location-region">{format!("{} Region", location.region)}</p>
				</div>
				<button class="location-close" on:click=move |_| interaction.update(|i| i.dismiss())>
					"✕"
				</button>
			</div>
			<div class=format!("status-badge {}", status.badge_class())>
				<span class="pulse-dot" style:background-color=status.color()></span>
				{status.label()}
				<span class="status-zone">"ZONE"</span>
			</div>
			<div class="location-metrics">
				<div>
					<div class="metric-label">"ACTIVE LEADS"</div>
					<div class="metric-value">{location.leads}</div>
					<div class="metric-caption cyan">"IDENTIFIED"</div>
				</div>
				<div>
					<div class="metric-label">"PIPELINE VALUE"</div>
					<div class="metric-value amber">{location.pipeline}</div>
					<div class="metric-caption amber">"PROJECTED"</div>
				</div>
				<div>
					<div class="metric-label">"CLOSED DEALS"</div>
					<div class="metric-value emerald">{location.value}</div>
					<div class="metric-caption emerald">"REALIZED"</div>
				</div>
				<div>
					<div class="metric-label">"LAST ACTIVITY"</div>
					<div class="metric-value small cyan">{location.last_activity}</div>
					<div class="metric-caption cyan">"UPDATED"</div>
				</div>
			</div>
			<div class="location-progress">
				<div class="progress-head">
					<span>"CONVERSION RATE"</span>
					<span>{format!("{rate}%")}</span>
				</div>
				<div class="progress-track">
					<div class="progress-fill conversion" style:width=format!("{}%", rate.min(100))></div>
				</div>
				<div class="progress-head">
					<span>"ACTIVITY LEVEL"</span>
					<span class="emerald">"HIGH"</span>
				</div>
				<div class="progress-track thin">
					<div class="progress-fill activity-level"></div>
				</div>
			</div>
		</div>
	}
}
