//! Wall-clock time source for navigation expiry

use parking_lot::RwLock;
use std::sync::Arc;

/// Source of the current time in whole seconds since the Unix epoch
///
/// Injected into the navigation store so expiry and eviction can be tested
/// without sleeping.
pub trait Clock: Send + Sync {
	/// Seconds since the Unix epoch
	fn now(&self) -> i64;
}

/// Clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
	/// Create a system clock
	pub fn new() -> Self {
		Self
	}
}

impl Clock for SystemClock {
	fn now(&self) -> i64 {
		chrono::Utc::now().timestamp()
	}
}

/// Manually driven clock for tests
///
/// Clones share the same time.
///
/// # Examples
///
/// ```
/// use better_tables_navigation::clock::{Clock, MockClock};
///
/// let clock = MockClock::new(1_000);
/// clock.advance(30);
/// assert_eq!(clock.now(), 1_030);
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
	current: Arc<RwLock<i64>>,
}

impl MockClock {
	/// Create a clock frozen at `start`
	pub fn new(start: i64) -> Self {
		Self {
			current: Arc::new(RwLock::new(start)),
		}
	}

	/// Move the clock forward by `seconds`
	pub fn advance(&self, seconds: i64) {
		*self.current.write() += seconds;
	}

	/// Jump to an absolute time
	pub fn set(&self, now: i64) {
		*self.current.write() = now;
	}
}

impl Default for MockClock {
	fn default() -> Self {
		Self::new(SystemClock.now())
	}
}

impl Clock for MockClock {
	fn now(&self) -> i64 {
		*self.current.read()
	}
}
