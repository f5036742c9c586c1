use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Path2d};

use super::data::sample_dataset;
use super::interaction::MapInteraction;
use super::loader::{self, GeoStatus};
use super::metrics;
use super::panels::{GeoIndicator, LocationDetails, MapDiagnostics, MapHeader, StatsPanel, StatusMatrix};
use super::projection::Mercator;
use super::render;
use super::state::LeadMapState;
use super::types::MapDataset;
use crate::config::DashboardConfig;

const FALLBACK_SIZE: (f64, f64) = (800.0, 320.0);

fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(FALLBACK_SIZE)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn canvas_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Cancel the pending frame, detach the resize listener and drop both closures.
fn release_callbacks(
	animate: &RefCell<Option<Closure<dyn FnMut(f64)>>>,
	resize_cb: &RefCell<Option<Closure<dyn FnMut()>>>,
	frame: &Cell<Option<i32>>,
) {
	let window = web_sys::window();
	if let (Some(win), Some(id)) = (&window, frame.take()) {
		let _ = win.cancel_animation_frame(id);
	}
	if let Some(cb) = resize_cb.borrow_mut().take() {
		if let Some(ref win) = window {
			let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
	animate.borrow_mut().take();
}

/// World map of lead activity with selectable markers.
///
/// All state is owned by this instance: the interaction signal, the canvas
/// state, the two display timers and the animation loop are dropped or
/// stopped when the component unmounts.
#[component]
pub fn LeadMap(#[prop(optional)] dataset: Option<MapDataset>) -> impl IntoView {
	let config = use_context::<DashboardConfig>().unwrap_or_default().map;
	let dataset = Arc::new(dataset.unwrap_or_else(sample_dataset));
	for problem in dataset.validate() {
		warn!("Lead map dataset: {problem}");
	}
	info!("Lead map mounted with {} locations", dataset.locations.len());

	let interaction = RwSignal::new(MapInteraction::default());
	let geo_status = RwSignal::new(GeoStatus::Loading);
	let clock = RwSignal::new(js_sys::Date::now());
	let animation_key = RwSignal::new(0_u64);

	match set_interval_with_handle(move || clock.set(js_sys::Date::now()), config.clock_period) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => error!("Could not start map clock: {err:?}"),
	}
	match set_interval_with_handle(
		move || animation_key.update(|k| *k += 1),
		config.animation_period,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => error!("Could not start map animation timer: {err:?}"),
	}

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<LeadMapState>>> = Rc::new(RefCell::new(None));
	let countries: Rc<RefCell<Vec<Path2d>>> = Rc::new(RefCell::new(Vec::new()));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let alive = Arc::new(AtomicBool::new(true));
	{
		let alive = alive.clone();
		let handles = SendWrapper::new((animate.clone(), resize_cb.clone(), frame.clone()));
		on_cleanup(move || {
			debug!("Lead map unmounted");
			alive.store(false, Ordering::Relaxed);
			let (animate, resize_cb, frame) = handles.take();
			release_callbacks(&animate, &resize_cb, &frame);
		});
	}

	let (state_geo, countries_geo, alive_geo) = (state.clone(), countries.clone(), alive.clone());
	let (geo_url, geo_object, mercator) = (
		config.geo_url.clone(),
		config.topology_object.clone(),
		Mercator::from_config(&config),
	);
	spawn_local(async move {
		let result = loader::fetch_world(&geo_url, &geo_object).await;
		if !alive_geo.load(Ordering::Relaxed) {
			return;
		}
		match result {
			Ok(world) => {
				let paths: Vec<Path2d> = world
					.features
					.iter()
					.filter_map(|f| Path2d::new_with_path_string(&mercator.feature_path(f)).ok())
					.collect();
				info!("Map geography ready: {} countries", paths.len());
				if let Some(ref mut s) = *state_geo.borrow_mut() {
					s.set_countries(paths.clone());
				}
				*countries_geo.borrow_mut() = paths;
				geo_status.set(GeoStatus::Loaded {
					features: world.len(),
				});
			}
			Err(err) => {
				error!("Map geography failed to load: {err}");
				geo_status.set(GeoStatus::Failed(err));
			}
		}
	});

	let (state_init, countries_init, animate_init, resize_cb_init, alive_init) = (
		state.clone(),
		countries.clone(),
		animate.clone(),
		resize_cb.clone(),
		alive.clone(),
	);
	let frame_init = frame.clone();
	let (dataset_init, config_init) = (dataset.clone(), config.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("Lead map has no window to draw in");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			error!("Lead map canvas has no 2d context");
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let mut map_state = LeadMapState::new(&dataset_init, &config_init, w, h);
		map_state.set_countries(countries_init.borrow().clone());
		*state_init.borrow_mut() = Some(map_state);

		let (state_resize, canvas_resize, alive_resize) =
			(state_init.clone(), canvas.clone(), alive_init.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_resize.load(Ordering::Relaxed) {
				return;
			}
			let (nw, nh) = container_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, alive_anim, frame_inner) =
			(state_init.clone(), animate_init.clone(), alive_init.clone(), frame_init.clone());
		let mut last_frame: Option<f64> = None;
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			if !alive_anim.load(Ordering::Relaxed) {
				return;
			}
			let dt = last_frame.map_or(0.0, |prev| ((now - prev) / 1000.0).clamp(0.0, 0.1));
			last_frame = Some(now);
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.animation_running {
					interaction.with_untracked(|i| s.tick(dt, i));
				}
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					frame_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			frame_init.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	});

	let state_ping = state.clone();
	Effect::new(move |_| {
		let key = animation_key.get();
		if key == 0 {
			return;
		}
		if let Some(ref mut s) = *state_ping.borrow_mut() {
			s.set_ping(key);
		}
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};
		let hit = state_mm
			.borrow()
			.as_ref()
			.and_then(|s| s.marker_at_position(x, y).map(String::from));
		interaction.maybe_update(|i| i.set_hover(hit.as_deref()));
	};

	let on_mouseleave = move |_: MouseEvent| {
		interaction.maybe_update(|i| i.set_hover(None));
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};
		let hit = state_click
			.borrow()
			.as_ref()
			.and_then(|s| s.marker_at_position(x, y).map(String::from));
		if let Some(id) = hit {
			debug!("Selected location {id}");
			interaction.update(|i| i.select(&id));
		}
	};

	let totals = metrics::totals(&dataset.locations);
	let shares = metrics::status_breakdown(&dataset.locations);
	let show_diagnostics = config.show_diagnostics;

	view! {
		<div class="lead-map">
			<div class="map-backdrop">
				<div class="map-grid"></div>
				<div class="map-grid fine"></div>
				<div class="map-radar"></div>
				<div class="map-scanlines"></div>
			</div>
			<canvas
				node_ref=canvas_ref
				class="lead-map-canvas"
				class:hovering=move || interaction.with(|i| i.hovered().is_some())
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				on:click=on_click
			/>
			{show_diagnostics.then(|| view! { <MapDiagnostics status=geo_status /> })}
			<MapHeader clock=clock />
			<GeoIndicator status=geo_status />
			<StatsPanel totals=totals />
			<StatusMatrix shares=shares />
			<LocationDetails dataset=dataset interaction=interaction />
		</div>
	}
}
