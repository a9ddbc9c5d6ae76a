use chrono::{Local, NaiveTime};

/// Source of the current time of day.
///
/// The open/closed check is the only time-dependent operation in the crate,
/// so the wall clock is kept behind this trait and injected where needed.
/// Production code uses [`SystemClock`]; tests substitute a fixed time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current local time of day.
    fn current_time(&self) -> NaiveTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_time(&self) -> NaiveTime {
        Local::now().time()
    }
}
