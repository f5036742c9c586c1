//! Display formatting helpers.

/// Format an integer with comma thousands separators.
pub fn thousands(n: u64) -> String {
	let s = n.to_string();
	let mut result = String::with_capacity(s.len() + s.len() / 3);
	for (i, c) in s.chars().enumerate() {
		if i > 0 && (s.len() - i) % 3 == 0 {
			result.push(',');
		}
		result.push(c);
	}
	result
}

/// Wall-clock time of a Unix timestamp in milliseconds, as `HH:MM:SS UTC`.
pub fn utc_clock(epoch_ms: f64) -> String {
	let secs = (epoch_ms / 1000.0).floor() as i64;
	let of_day = secs.rem_euclid(86_400);
	format!(
		"{:02}:{:02}:{:02} UTC",
		of_day / 3600,
		(of_day % 3600) / 60,
		of_day % 60
	)
}

/// Amount in millions, as `$X.XM`.
pub fn millions(amount: f64) -> String {
	format!("${:.1}M", amount)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn thousands_inserts_separators() {
		assert_eq!(thousands(0), "0");
		assert_eq!(thousands(999), "999");
		assert_eq!(thousands(1066), "1,066");
		assert_eq!(thousands(12_987), "12,987");
		assert_eq!(thousands(1_000_000), "1,000,000");
	}

	#[test]
	fn utc_clock_wraps_at_midnight() {
		assert_eq!(utc_clock(0.0), "00:00:00 UTC");
		// 2024-01-01T13:45:30.900Z
		assert_eq!(utc_clock(1_704_116_730_900.0), "13:45:30 UTC");
		assert_eq!(utc_clock(86_399_999.0), "23:59:59 UTC");
	}

	#[test]
	fn millions_uses_one_decimal() {
		assert_eq!(millions(13.48), "$13.5M");
		assert_eq!(millions(0.0), "$0.0M");
	}
}
