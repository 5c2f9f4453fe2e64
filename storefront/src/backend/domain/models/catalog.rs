//! Product catalog: size variants with their base prices and the add-on list.
//!
//! The catalog is supplied by page configuration and never changes at runtime.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::OrderError;
use super::money::Rupees;
use super::order::MAX_QUANTITY;

/// Hamper sizes offered on the item page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    Small,
    Regular,
    Large,
}

impl SizeVariant {
    pub const ALL: [SizeVariant; 3] = [SizeVariant::Small, SizeVariant::Regular, SizeVariant::Large];

    /// Key used by the page markup (`data-size`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeVariant::Small => "small",
            SizeVariant::Regular => "regular",
            SizeVariant::Large => "large",
        }
    }
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeVariant {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(SizeVariant::Small),
            "regular" => Ok(SizeVariant::Regular),
            "large" => Ok(SizeVariant::Large),
            _ => Err(OrderError::InvalidSize(s.to_string())),
        }
    }
}

/// Display name and price of one add-on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnCatalogEntry {
    pub name: String,
    pub price: Rupees,
}

impl AddOnCatalogEntry {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price: Rupees::new(price),
        }
    }
}

/// Everything the order configurator needs to price a hamper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCatalog {
    pub product_name: String,
    pub default_size: SizeVariant,
    pub sizes: BTreeMap<SizeVariant, Rupees>,
    /// Keyed by add-on identifier (`data-addon` in the markup)
    pub add_ons: BTreeMap<String, AddOnCatalogEntry>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        let sizes = BTreeMap::from([
            (SizeVariant::Small, Rupees::new(1999)),
            (SizeVariant::Regular, Rupees::new(2999)),
            (SizeVariant::Large, Rupees::new(4499)),
        ]);
        let add_ons = BTreeMap::from([
            ("card".to_string(), AddOnCatalogEntry::new("Personalized Greeting Card", 199)),
            ("flowers".to_string(), AddOnCatalogEntry::new("Fresh Flower Bouquet", 499)),
            ("balloon".to_string(), AddOnCatalogEntry::new("Birthday Balloons", 299)),
        ]);

        Self {
            product_name: "Premium Birthday Celebration Hamper".to_string(),
            default_size: SizeVariant::Regular,
            sizes,
            add_ons,
        }
    }
}

impl ProductCatalog {
    /// Base unit price for a size; a size the page does not offer is rejected
    pub fn base_price(&self, size: SizeVariant) -> Result<Rupees, OrderError> {
        self.sizes
            .get(&size)
            .copied()
            .ok_or_else(|| OrderError::InvalidSize(size.to_string()))
    }

    pub fn add_on(&self, id: &str) -> Result<&AddOnCatalogEntry, OrderError> {
        self.add_ons
            .get(id)
            .ok_or_else(|| OrderError::UnknownAddOn(id.to_string()))
    }

    /// Display name for an add-on, falling back to the identifier itself
    pub fn add_on_display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.add_ons.get(id).map(|entry| entry.name.as_str()).unwrap_or(id)
    }

    /// Check that the catalog can price every order the page can build
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.product_name.trim().is_empty(), "catalog product name is empty");
        ensure!(
            self.sizes.contains_key(&self.default_size),
            "default size '{}' has no price",
            self.default_size
        );
        for (size, price) in &self.sizes {
            ensure!(*price > Rupees::ZERO, "size '{}' must have a positive price", size);
        }
        for (id, entry) in &self.add_ons {
            ensure!(!id.trim().is_empty(), "add-on identifier is empty");
            ensure!(!entry.name.trim().is_empty(), "add-on '{}' has no display name", id);
            ensure!(entry.price > Rupees::ZERO, "add-on '{}' must have a positive price", id);
        }
        ensure!(
            self.largest_possible_total().is_some(),
            "catalog prices are too large: the most expensive order overflows"
        );
        Ok(())
    }

    /// Total of the largest size with every add-on at the highest quantity,
    /// or `None` if it does not fit in a `Rupees`
    fn largest_possible_total(&self) -> Option<Rupees> {
        let largest_size = self.sizes.values().copied().max().unwrap_or(Rupees::ZERO);
        self.add_ons
            .values()
            .try_fold(largest_size, |total, entry| total.checked_add(entry.price))?
            .checked_mul(MAX_QUANTITY)
    }
}
