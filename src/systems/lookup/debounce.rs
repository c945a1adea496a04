use std::time::{Duration, Instant};

/// Collapses a burst of values into the last one once `window` has passed
/// without a new value.
///
/// The debouncer owns no timer: callers push values as they arrive and poll
/// from their own tick, passing the current instant both times.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	window: Duration,
	pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
	#[must_use]
	pub fn new(window: Duration) -> Self {
		Self {
			window,
			pending: None,
		}
	}

	/// Replace any pending value and restart the quiet period.
	pub fn push(&mut self, value: T, now: Instant) {
		self.pending = Some((value, now + self.window));
	}

	/// Take the pending value if its quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
			_ => None,
		}
	}

	/// Drop the pending value without firing.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(_, deadline)| *deadline)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const WINDOW: Duration = Duration::from_millis(500);

	#[test]
	fn fires_once_after_the_window() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WINDOW);
		debouncer.push("love", start);

		assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
		assert_eq!(debouncer.poll(start + WINDOW), Some("love"));
		assert_eq!(debouncer.poll(start + WINDOW * 2), None);
	}

	#[test]
	fn a_burst_collapses_to_the_last_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WINDOW);
		debouncer.push("a", start);
		debouncer.push("ab", start + Duration::from_millis(200));
		debouncer.push("abc", start + Duration::from_millis(400));

		assert_eq!(debouncer.poll(start + Duration::from_millis(800)), None);
		assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(900)));
		assert_eq!(debouncer.poll(start + Duration::from_millis(900)), Some("abc"));
		assert_eq!(debouncer.deadline(), None);
	}

	#[test]
	fn cancel_discards_the_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WINDOW);
		debouncer.push("a", start);
		debouncer.cancel();
		assert_eq!(debouncer.poll(start + WINDOW), None);
	}

	#[test]
	fn zero_window_fires_on_the_next_poll() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::ZERO);
		debouncer.push(1, start);
		assert_eq!(debouncer.poll(start), Some(1));
	}
}
