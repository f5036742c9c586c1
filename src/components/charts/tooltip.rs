use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// One plotted field of a chart row.
#[derive(Clone, Copy)]
pub struct Series<R> {
	pub key: &'static str,
	pub label: &'static str,
	pub color: &'static str,
	pub value: fn(&R) -> f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
	pub key: &'static str,
	pub value: String,
	pub color: &'static str,
}

/// Hovered row of a chart. `x` and `y` place the box, in percent of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
	pub label: String,
	pub entries: Vec<TooltipEntry>,
	pub x: f64,
	pub y: f64,
}

impl TooltipData {
	pub fn for_row<R>(label: &str, series: &[Series<R>], row: &R, x: f64, y: f64) -> Self {
		Self {
			label: label.to_string(),
			entries: series
				.iter()
				.map(|s| TooltipEntry {
					key: s.key,
					value: format_value((s.value)(row)),
					color: s.color,
				})
				.collect(),
			x,
			y,
		}
	}
}

/// Whole numbers without decimals, anything else with one.
pub fn format_value(v: f64) -> String {
	if v.fract() == 0.0 {
		format!("{}", v as i64)
	} else {
		format!("{v:.1}")
	}
}

/// Pointer position across the element the listener sits on, each axis in `[0, 1]`.
pub fn pointer_fraction(ev: &MouseEvent) -> Option<(f64, f64)> {
	let target: Element = ev.current_target()?.dyn_into().ok()?;
	let rect = target.get_bounding_client_rect();
	if rect.width() <= 0.0 || rect.height() <= 0.0 {
		return None;
	}
	Some((
		((ev.client_x() as f64 - rect.left()) / rect.width()).clamp(0.0, 1.0),
		((ev.client_y() as f64 - rect.top()) / rect.height()).clamp(0.0, 1.0),
	))
}

#[component]
pub fn ChartTooltip(data: RwSignal<Option<TooltipData>>) -> impl IntoView {
	move || {
		data.get().map(|d| {
			view! {
				<div
					class="chart-tooltip"
					style:left=format!("{:.1}%", d.x)
					style:top=format!("{:.1}%", d.y)
				>
					<p class="chart-tooltip-label">{d.label}</p>
					{d
						.entries
						.into_iter()
						.map(|e| {
							view! {
								<div class="chart-tooltip-row">
									<span class="chart-tooltip-swatch" style:background-color=e.color></span>
									<span class="chart-tooltip-key">
										{format!("{}: ", e.key)}
										<span class="chart-tooltip-value">{e.value}</span>
									</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	struct Row {
		high: u32,
		ratio: f64,
	}

	#[test]
	fn entries_follow_series_order() {
		let series = [
			Series::<Row> {
				key: "high",
				label: "High",
				color: "#EF4444",
				value: |r| f64::from(r.high),
			},
			Series::<Row> {
				key: "ratio",
				label: "Ratio",
				color: "#10B981",
				value: |r| r.ratio,
			},
		];
		let tip = TooltipData::for_row("Week 1", &series, &Row { high: 12, ratio: 0.75 }, 10.0, 50.0);
		assert_eq!(tip.label, "Week 1");
		assert_eq!(
			tip.entries,
			vec![
				TooltipEntry {
					key: "high",
					value: "12".into(),
					color: "#EF4444"
				},
				TooltipEntry {
					key: "ratio",
					value: "0.8".into(),
					color: "#10B981"
				},
			]
		);
	}

	#[test]
	fn format_value_drops_zero_fraction() {
		assert_eq!(format_value(345.0), "345");
		assert_eq!(format_value(37.44), "37.4");
	}
}
