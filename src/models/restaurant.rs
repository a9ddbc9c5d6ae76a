use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{MenuItem, ServiceError, ServiceResult};
use crate::clock::Clock;

/// A restaurant with a location, daily operating hours and a menu.
///
/// Name, location and hours are fixed at construction; only the menu mutates
/// over the restaurant's lifetime. Menu order is insertion order, and item
/// names are matched case-sensitively with first-match-wins semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Create a new restaurant with an empty menu.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    /// The current menu, in insertion order.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Append a new item to the menu.
    ///
    /// Duplicate names are not checked; lookups only ever see the first
    /// entry with a given name.
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        self.menu.push(MenuItem::new(name, price));
    }

    /// Remove and return the first menu item whose name matches exactly.
    pub fn remove_from_menu(&mut self, name: &str) -> ServiceResult<MenuItem> {
        match self.menu.iter().position(|item| item.name == name) {
            Some(index) => Ok(self.menu.remove(index)),
            None => Err(ServiceError::ItemNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Look up the first menu item with the given name.
    pub fn menu_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.name == name)
    }

    /// Whether the restaurant is open at the clock's current time.
    ///
    /// The operating window is inclusive at both ends and must not cross
    /// midnight; a window with `closing_time < opening_time` is never open.
    /// Each bound is compared against a fresh clock reading.
    pub fn is_open(&self, clock: &dyn Clock) -> bool {
        let opened = self.opening_time <= clock.current_time();
        let not_yet_closed = clock.current_time() <= self.closing_time;
        opened && not_yet_closed
    }

    /// Total price of the selected items.
    ///
    /// Each input name is looked up against the menu independently: a name
    /// that appears twice in the selection is charged twice, and names with
    /// no matching menu item contribute nothing.
    pub fn total_items_cost<S: AsRef<str>>(&self, item_names: &[S]) -> u32 {
        item_names
            .iter()
            .filter_map(|name| self.menu_item(name.as_ref()))
            .map(|item| item.price)
            .sum()
    }
}
