//! Description / specifications / reviews tabs on the item detail page.

use log::{info, warn};
use shared::ProductTab;

/// Markup key (`data-tab`) for a tab
pub fn tab_key(tab: ProductTab) -> &'static str {
    match tab {
        ProductTab::Description => "description",
        ProductTab::Specifications => "specifications",
        ProductTab::Reviews => "reviews",
    }
}

pub fn parse_tab(key: &str) -> Option<ProductTab> {
    match key.trim() {
        "description" => Some(ProductTab::Description),
        "specifications" => Some(ProductTab::Specifications),
        "reviews" => Some(ProductTab::Reviews),
        _ => None,
    }
}

/// Element id of the panel a tab shows
pub fn panel_id(tab: ProductTab) -> String {
    format!("{}-tab", tab_key(tab))
}

/// Exactly one tab is active at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    active: ProductTab,
}

impl TabController {
    pub fn new() -> Self {
        Self {
            active: ProductTab::Description,
        }
    }

    pub fn active(&self) -> ProductTab {
        self.active
    }

    pub fn select(&mut self, tab: ProductTab) -> ProductTab {
        if self.active != tab {
            info!("Switched tab {} -> {}", tab_key(self.active), tab_key(tab));
        }
        self.active = tab;
        self.active
    }

    /// Select from a markup key; unknown keys leave the active tab alone
    pub fn select_named(&mut self, key: &str) -> Option<ProductTab> {
        match parse_tab(key) {
            Some(tab) => Some(self.select(tab)),
            None => {
                warn!("Unknown tab '{}'", key);
                None
            }
        }
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new()
    }
}
