//! Wall-clock time as a swappable feature.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{Container, Feature};

/// A time source reporting elapsed time since the Unix epoch.
///
/// Loads as [`Clock::system`] by default; install [`Clock::fixed`] through
/// [`set_feature`](crate::Container::set_feature) to freeze time in tests.
///
/// # Examples
///
/// ```rust
/// use feature_container::common::Clock;
/// use feature_container::Container;
/// use std::time::Duration;
///
/// let container = Container::new();
/// container.set_feature::<Clock>(Clock::fixed(Duration::from_secs(1_700_000_000)));
/// let clock = container.feature::<Clock>();
/// assert_eq!(clock.now().as_secs(), 1_700_000_000);
/// ```
#[derive(Clone)]
pub struct Clock {
    clock: Arc<dyn Fn() -> Duration + Send + Sync>,
}

impl Clock {
    /// Wraps an arbitrary time-reading closure.
    pub fn new(clock: impl Fn() -> Duration + Send + Sync + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// The current reading of this clock.
    pub fn now(&self) -> Duration {
        (self.clock)()
    }

    /// Reads the real system clock. A clock set before the epoch reads as
    /// zero.
    pub fn system() -> Self {
        Self::new(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or(Duration::ZERO)
        })
    }

    /// Always reads `at`.
    pub fn fixed(at: Duration) -> Self {
        Self::new(move || at)
    }
}

impl Feature for Clock {
    type Instance = Clock;

    fn load(_container: &Container) -> Clock {
        Clock::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reads_its_instant() {
        let clock = Clock::fixed(Duration::from_millis(1234));
        assert_eq!(clock.now(), Duration::from_millis(1234));
        assert_eq!(clock.now(), Duration::from_millis(1234));
    }

    #[test]
    fn system_clock_is_non_decreasing() {
        let clock = Clock::system();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn loads_lazily_as_system_clock() {
        let container = Container::new();
        // A system clock read after 2020 is far beyond this bound.
        assert!(container.feature::<Clock>().now().as_secs() > 1_500_000_000);
    }
}
