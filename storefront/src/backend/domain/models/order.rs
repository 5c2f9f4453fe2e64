//! Order state for one page view of the item detail page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::SizeVariant;
use super::money::Rupees;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// An add-on the customer ticked, with name and price copied from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAddOn {
    pub id: String,
    pub name: String,
    pub price: Rupees,
}

/// Current order choices plus the derived total.
///
/// `total_price` is recomputed by the configurator after every change to
/// size, quantity or add-ons, so it is always safe to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfiguration {
    pub size: SizeVariant,
    pub base_price: Rupees,
    /// Always within `MIN_QUANTITY..=MAX_QUANTITY`
    pub quantity: u32,
    /// Selection order, no duplicate ids
    pub selected_add_ons: Vec<SelectedAddOn>,
    pub special_message: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub total_price: Rupees,
}

impl OrderConfiguration {
    pub fn is_selected(&self, add_on_id: &str) -> bool {
        self.selected_add_ons.iter().any(|add_on| add_on.id == add_on_id)
    }

    pub fn add_on_total(&self) -> Rupees {
        self.selected_add_ons.iter().map(|add_on| add_on.price).sum()
    }
}

/// Immutable copy of an order taken when the customer sends an inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub product_name: String,
    pub configuration: OrderConfiguration,
}

pub fn is_valid_quantity(quantity: i64) -> bool {
    (i64::from(MIN_QUANTITY)..=i64::from(MAX_QUANTITY)).contains(&quantity)
}
