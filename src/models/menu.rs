use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, priced line entry on a restaurant's menu.
///
/// Prices are integers in the smallest currency denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}
