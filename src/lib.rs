//! In-memory restaurant directory.
//!
//! A [`RestaurantService`] registry owns an ordered collection of
//! [`Restaurant`] entries, each with a location, daily operating hours and a
//! menu of priced items. The registry supports creating, finding and removing
//! restaurants by name; a restaurant answers open/closed queries against an
//! injectable [`Clock`] and sums the cost of a selection of menu items.

pub mod clock;
pub mod models;
pub mod services;

pub use clock::{Clock, SystemClock};
pub use models::{MenuItem, Restaurant, ServiceError, ServiceResult};
pub use services::RestaurantService;
