/// Selection and hover of map markers.
///
/// The two axes are independent: hovering never changes the selection and
/// selecting never changes the hover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapInteraction {
	selected: Option<String>,
	hovered: Option<String>,
}

impl MapInteraction {
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	pub fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	/// Select a location. Re-selecting the current location is a no-op, it
	/// does not toggle the selection off.
	pub fn select(&mut self, id: &str) {
		if self.selected.as_deref() != Some(id) {
			self.selected = Some(id.to_owned());
		}
	}

	pub fn dismiss(&mut self) {
		self.selected = None;
	}

	pub fn hover(&mut self, id: &str) {
		if self.hovered.as_deref() != Some(id) {
			self.hovered = Some(id.to_owned());
		}
	}

	pub fn unhover(&mut self) {
		self.hovered = None;
	}

	/// Pointer moved: hover whatever is under it, if anything. Returns whether
	/// the hover changed.
	pub fn set_hover(&mut self, id: Option<&str>) -> bool {
		if self.hovered.as_deref() == id {
			return false;
		}
		match id {
			Some(id) => self.hover(id),
			None => self.unhover(),
		}
		true
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id)
	}

	pub fn is_emphasized(&self, id: &str) -> bool {
		self.is_selected(id) || self.is_hovered(id)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[derive(Clone, Debug)]
	enum Event {
		Select(String),
		Dismiss,
		Hover(String),
		Unhover,
	}

	fn event_strategy() -> impl Strategy<Value = Event> {
		let id = prop::sample::select(vec!["nyc", "london", "tokyo"]).prop_map(String::from);
		prop_oneof![
			id.clone().prop_map(Event::Select),
			Just(Event::Dismiss),
			id.prop_map(Event::Hover),
			Just(Event::Unhover),
		]
	}

	fn apply(state: &mut MapInteraction, event: &Event) {
		match event {
			Event::Select(id) => state.select(id),
			Event::Dismiss => state.dismiss(),
			Event::Hover(id) => state.hover(id),
			Event::Unhover => state.unhover(),
		}
	}

	#[test]
	fn starts_empty() {
		let state = MapInteraction::default();
		assert_eq!(state.selected(), None);
		assert_eq!(state.hovered(), None);
	}

	#[test]
	fn second_select_replaces_first() {
		let mut state = MapInteraction::default();
		state.select("nyc");
		state.select("tokyo");
		assert_eq!(state.selected(), Some("tokyo"));
		assert!(!state.is_selected("nyc"));
	}

	#[test]
	fn reselect_does_not_toggle_off() {
		let mut state = MapInteraction::default();
		state.select("nyc");
		state.select("nyc");
		assert_eq!(state.selected(), Some("nyc"));
	}

	#[test]
	fn hover_while_selected_only_moves_hover() {
		let mut state = MapInteraction::default();
		state.select("nyc");
		state.hover("london");
		assert_eq!(state.selected(), Some("nyc"));
		assert_eq!(state.hovered(), Some("london"));
		assert!(state.is_emphasized("nyc") && state.is_emphasized("london"));
		assert!(!state.is_emphasized("tokyo"));
		state.unhover();
		assert_eq!(state.selected(), Some("nyc"));
	}

	#[test]
	fn set_hover_reports_changes() {
		let mut state = MapInteraction::default();
		assert!(state.set_hover(Some("nyc")));
		assert!(!state.set_hover(Some("nyc")));
		assert!(state.set_hover(None));
		assert!(!state.set_hover(None));
	}

	proptest! {
		#[test]
		fn dismiss_always_clears(events in prop::collection::vec(event_strategy(), 0..20)) {
			let mut state = MapInteraction::default();
			for e in &events {
				apply(&mut state, e);
			}
			let hovered = state.hovered().map(String::from);
			state.dismiss();
			prop_assert_eq!(state.selected(), None);
			prop_assert_eq!(state.hovered().map(String::from), hovered);
		}

		#[test]
		fn hover_events_never_touch_selection(events in prop::collection::vec(event_strategy(), 0..20)) {
			let mut state = MapInteraction::default();
			for e in &events {
				let before = state.selected().map(String::from);
				apply(&mut state, e);
				if matches!(e, Event::Hover(_) | Event::Unhover) {
					prop_assert_eq!(state.selected().map(String::from), before);
				}
			}
		}

		#[test]
		fn selection_is_last_selected(events in prop::collection::vec(event_strategy(), 0..20)) {
			let mut state = MapInteraction::default();
			let mut expected: Option<String> = None;
			for e in &events {
				apply(&mut state, e);
				match e {
					Event::Select(id) => expected = Some(id.clone()),
					Event::Dismiss => expected = None,
					_ => {}
				}
			}
			prop_assert_eq!(state.selected().map(String::from), expected);
		}
	}
}
