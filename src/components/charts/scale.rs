/// Maps a numeric domain linearly onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	pub fn domain(&self) -> (f64, f64) {
		self.domain
	}

	pub fn apply(&self, value: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		if d1 == d0 {
			return (r0 + r1) / 2.0;
		}
		r0 + (value - d0) / (d1 - d0) * (r1 - r0)
	}

	/// Widen the domain so both ends fall on a tick for `count` ticks.
	pub fn nice(mut self, count: usize) -> Self {
		let (mut start, mut stop) = self.domain;
		let mut prev_step = None;
		for _ in 0..10 {
			let step = tick_step(start, stop, count);
			if step <= 0.0 || !step.is_finite() || prev_step == Some(step) {
				break;
			}
			start = (start / step).floor() * step;
			stop = (stop / step).ceil() * step;
			prev_step = Some(step);
		}
		self.domain = (start, stop);
		self
	}

	pub fn ticks(&self, count: usize) -> Vec<f64> {
		ticks(self.domain.0, self.domain.1, count)
	}
}

/// A 1, 2 or 5 times power-of-ten step giving roughly `count` intervals.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
	if count == 0 || stop <= start {
		return 0.0;
	}
	let raw = (stop - start) / count as f64;
	let power = raw.log10().floor();
	let error = raw / 10f64.powf(power);
	let factor = if error >= 50f64.sqrt() {
		10.0
	} else if error >= 10f64.sqrt() {
		5.0
	} else if error >= 2f64.sqrt() {
		2.0
	} else {
		1.0
	};
	factor * 10f64.powf(power)
}

/// Round tick values within `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
	let step = tick_step(start, stop, count);
	if step <= 0.0 || !step.is_finite() {
		return vec![start];
	}
	// Dividing by the inverse keeps sub-unit steps like 0.1 exact.
	let first = (start / step - 1e-9).ceil() as i64;
	let last = (stop / step + 1e-9).floor() as i64;
	if step < 1.0 {
		let inverse = (1.0 / step).round();
		(first..=last).map(|i| i as f64 / inverse).collect()
	} else {
		(first..=last).map(|i| i as f64 * step).collect()
	}
}
