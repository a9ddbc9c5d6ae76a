use std::sync::Arc;

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

use restaurant_rs::{Clock, RestaurantService};

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Install the test tracing subscriber once per test binary.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Clock pinned to a single time of day.
pub struct FixedClock(NaiveTime);

impl FixedClock {
    pub fn at(hour: u32, min: u32, sec: u32) -> Self {
        Self(hms(hour, min, sec))
    }
}

impl From<NaiveTime> for FixedClock {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl Clock for FixedClock {
    fn current_time(&self) -> NaiveTime {
        self.0
    }
}

pub fn hms(hour: u32, min: u32, sec: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, sec).expect("valid time of day")
}

/// Directory seeded with the canonical cafe fixture: one restaurant open
/// 10:30-22:00 with a two-item menu.
pub fn seeded_directory(clock: Arc<dyn Clock>) -> RestaurantService {
    let mut service = RestaurantService::with_clock(clock);
    let cafe = service.add_restaurant("Amelie's cafe", "Chennai", hms(10, 30, 0), hms(22, 0, 0));
    cafe.add_to_menu("Sweet corn soup", 119);
    cafe.add_to_menu("Vegetable lasagne", 269);
    service
}
