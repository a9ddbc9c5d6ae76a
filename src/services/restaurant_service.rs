use chrono::NaiveTime;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::clock::{Clock, SystemClock};
use crate::models::{Restaurant, ServiceError, ServiceResult};

/// Registry of all known restaurants.
///
/// The registry owns its restaurants in insertion order. Names are matched
/// case-sensitively; duplicates are allowed and every lookup returns the
/// first match.
pub struct RestaurantService {
    restaurants: Vec<Restaurant>,
    clock: Arc<dyn Clock>,
}

impl RestaurantService {
    /// Create an empty registry backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty registry with an injected clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            restaurants: Vec::new(),
            clock,
        }
    }

    /// Create a restaurant and append it to the registry.
    ///
    /// Always succeeds; duplicate names are not rejected. Returns a mutable
    /// reference to the stored entry so callers can populate its menu.
    #[instrument(skip(self), fields(name = %name, location = %location))]
    pub fn add_restaurant(
        &mut self,
        name: &str,
        location: &str,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> &mut Restaurant {
        info!("Adding restaurant to the directory");

        self.restaurants
            .push(Restaurant::new(name, location, opening_time, closing_time));

        let index = self.restaurants.len() - 1;
        &mut self.restaurants[index]
    }

    /// Find the first restaurant whose name matches exactly.
    #[instrument(skip(self), fields(name = %name))]
    pub fn find_restaurant_by_name(&self, name: &str) -> ServiceResult<&Restaurant> {
        match self
            .restaurants
            .iter()
            .find(|restaurant| restaurant.name() == name)
        {
            Some(restaurant) => Ok(restaurant),
            None => {
                warn!("Restaurant not found");
                Err(ServiceError::RestaurantNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Mutable variant of [`find_restaurant_by_name`], for growing a stored
    /// restaurant's menu after creation.
    ///
    /// [`find_restaurant_by_name`]: Self::find_restaurant_by_name
    #[instrument(skip(self), fields(name = %name))]
    pub fn find_restaurant_by_name_mut(&mut self, name: &str) -> ServiceResult<&mut Restaurant> {
        match self
            .restaurants
            .iter_mut()
            .find(|restaurant| restaurant.name() == name)
        {
            Some(restaurant) => Ok(restaurant),
            None => {
                warn!("Restaurant not found");
                Err(ServiceError::RestaurantNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Remove and return the first restaurant whose name matches exactly.
    ///
    /// On failure the registry is unchanged; on success the remaining
    /// entries keep their relative order.
    #[instrument(skip(self), fields(name = %name))]
    pub fn remove_restaurant(&mut self, name: &str) -> ServiceResult<Restaurant> {
        match self
            .restaurants
            .iter()
            .position(|restaurant| restaurant.name() == name)
        {
            Some(index) => {
                info!("Removing restaurant from the directory");
                Ok(self.restaurants.remove(index))
            }
            None => {
                warn!("Restaurant not found");
                Err(ServiceError::RestaurantNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// All registered restaurants, in insertion order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Whether the named restaurant is open at the registry clock's current
    /// time. Lookup failures propagate as [`ServiceError::RestaurantNotFound`].
    #[instrument(skip(self), fields(name = %name))]
    pub fn is_restaurant_open(&self, name: &str) -> ServiceResult<bool> {
        let restaurant = self.find_restaurant_by_name(name)?;
        Ok(restaurant.is_open(self.clock.as_ref()))
    }
}

impl Default for RestaurantService {
    fn default() -> Self {
        Self::new()
    }
}
