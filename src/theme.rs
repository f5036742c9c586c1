//! Color palettes shared by the dashboard shell, charts and the lead map.

pub mod palette {
	pub const PRIMARY: &str = "#00D9FF";
	pub const ACCENT: &str = "#7C3AED";
	pub const SUCCESS: &str = "#10B981";
	pub const WARNING: &str = "#F59E0B";
	pub const DANGER: &str = "#EF4444";
	/// Green used by the campaign performance cards.
	pub const PERFORMANCE: &str = "rgb(7, 167, 33)";
}

/// Map-specific colors; the map runs a brighter scheme than the shell.
pub mod map {
	pub const PRIMARY: &str = "#00E6FF";
	pub const SUCCESS: &str = "#00D084";
	pub const WARNING: &str = "#FFB800";
	pub const COUNTRY: &str = "#374151";
	pub const OCEAN: &str = "#111827";
	pub const BACKDROP: &str = "#020617";
}

/// `#RRGGBB` plus an alpha in `[0, 1]` as a CSS `rgba()` string.
pub fn with_alpha(hex: &str, alpha: f64) -> String {
	let channel = |i: usize| {
		hex.get(i..i + 2)
			.and_then(|c| u8::from_str_radix(c, 16).ok())
			.unwrap_or(0)
	};
	format!(
		"rgba({}, {}, {}, {})",
		channel(1),
		channel(3),
		channel(5),
		alpha.clamp(0.0, 1.0)
	)
}
