//! Order configuration and price computation for the item detail page.
//!
//! The configurator owns one `OrderConfiguration` and keeps its total current:
//! every mutating call recomputes `(base price + add-ons) * quantity` before
//! returning, so reads are constant time and never stale.
//!
//! Out-of-range quantities are ignored rather than reported. The page shows the
//! retained quantity again, which is how the quantity box "reverts" on bad input.

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::models::{
    is_valid_quantity, OrderConfiguration, OrderError, OrderSnapshot, ProductCatalog, Rupees,
    SelectedAddOn, SizeVariant, MAX_QUANTITY, MIN_QUANTITY,
};

/// Earliest date the delivery picker offers: the day after `today`
pub fn earliest_delivery_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

/// Optional sign followed by digits, after leading whitespace. Digits that
/// overflow `i64` are far outside any valid quantity and read as `None`.
fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digit_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse().ok()
}

/// Owns the order state of one page view
#[derive(Debug, Clone)]
pub struct OrderConfigurator {
    catalog: ProductCatalog,
    order: OrderConfiguration,
}

impl OrderConfigurator {
    /// Start an order with the catalog's default size, quantity 1, no add-ons
    /// and delivery pre-set to tomorrow
    pub fn new(catalog: ProductCatalog, today: NaiveDate) -> Result<Self, OrderError> {
        let size = catalog.default_size;
        let base_price = catalog.base_price(size)?;

        let mut configurator = Self {
            catalog,
            order: OrderConfiguration {
                size,
                base_price,
                quantity: MIN_QUANTITY,
                selected_add_ons: Vec::new(),
                special_message: None,
                delivery_date: Some(earliest_delivery_date(today)),
                total_price: Rupees::ZERO,
            },
        };
        configurator.recompute_total();
        Ok(configurator)
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn configuration(&self) -> &OrderConfiguration {
        &self.order
    }

    pub fn select_size(&mut self, size: SizeVariant) -> Result<Rupees, OrderError> {
        let base_price = self.catalog.base_price(size)?;
        self.order.size = size;
        self.order.base_price = base_price;
        info!("Selected size {} (base price {})", size, base_price);
        Ok(self.recompute_total())
    }

    /// Select a size from its markup key, e.g. `"large"`
    pub fn select_size_named(&mut self, size: &str) -> Result<Rupees, OrderError> {
        let size = size.parse::<SizeVariant>()?;
        self.select_size(size)
    }

    /// Add or remove an add-on. Selecting an add-on that is already selected
    /// changes nothing.
    pub fn toggle_add_on(&mut self, id: &str, selected: bool) -> Result<Rupees, OrderError> {
        let entry = self.catalog.add_on(id)?;

        if selected {
            if !self.order.is_selected(id) {
                self.order.selected_add_ons.push(SelectedAddOn {
                    id: id.to_string(),
                    name: entry.name.clone(),
                    price: entry.price,
                });
                info!("Added add-on {} (+{})", id, entry.price);
            }
        } else if let Some(position) = self.selected_position(id) {
            self.order.selected_add_ons.remove(position);
            info!("Removed add-on {}", id);
        }

        Ok(self.recompute_total())
    }

    /// Set the quantity if it lies within 1..=10; otherwise keep the current one.
    /// Returns the quantity in effect afterwards.
    pub fn set_quantity(&mut self, quantity: i64) -> u32 {
        if !is_valid_quantity(quantity) {
            warn!(
                "Ignoring quantity {} outside {}..={}, keeping {}",
                quantity, MIN_QUANTITY, MAX_QUANTITY, self.order.quantity
            );
            return self.order.quantity;
        }

        // In range, so the conversion cannot truncate.
        self.order.quantity = quantity as u32;
        self.recompute_total();
        self.order.quantity
    }

    /// Quantity typed into the text box, read like the browser's `parseInt`:
    /// the leading integer counts and anything after it is dropped ("3.5" is 3,
    /// "7abc" is 7). Input without a leading integer is ignored.
    pub fn set_quantity_input(&mut self, input: &str) -> u32 {
        match parse_leading_integer(input) {
            Some(quantity) => self.set_quantity(quantity),
            None => {
                warn!("Ignoring non-numeric quantity input {:?}", input);
                self.order.quantity
            }
        }
    }

    pub fn increment_quantity(&mut self) -> u32 {
        self.set_quantity(i64::from(self.order.quantity) + 1)
    }

    pub fn decrement_quantity(&mut self) -> u32 {
        self.set_quantity(i64::from(self.order.quantity) - 1)
    }

    /// Empty text clears the message
    pub fn set_special_message(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.order.special_message = if text.is_empty() { None } else { Some(text) };
    }

    pub fn set_delivery_date(&mut self, date: Option<NaiveDate>) {
        self.order.delivery_date = date;
    }

    pub fn current_total(&self) -> Rupees {
        self.order.total_price
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            product_name: self.catalog.product_name.clone(),
            configuration: self.order.clone(),
        }
    }

    fn selected_position(&self, id: &str) -> Option<usize> {
        self.order
            .selected_add_ons
            .iter()
            .position(|add_on| add_on.id == id)
    }

    fn recompute_total(&mut self) -> Rupees {
        let unit_price = self.order.base_price + self.order.add_on_total();
        self.order.total_price = unit_price * self.order.quantity;
        debug!(
            "Total recomputed: ({} + add-ons {}) x {} = {}",
            self.order.base_price,
            self.order.add_on_total(),
            self.order.quantity,
            self.order.total_price
        );
        self.order.total_price
    }
}
