//! # Backend Module
//!
//! Contains all non-UI logic for the Gracias storefront pages.
//!
//! This module brings together:
//! - **Domain**: pricing, inquiry messages and the small UI state machines
//! - **IO**: page controllers that turn host events into page effects
//! - **Config**: catalog, messaging destination and timings
//!
//! The backend does not depend on any UI framework. A host (browser binding,
//! test harness or the demo binary) forwards `shared` events and applies the
//! returned effects.
//!
//! ## Architecture
//!
//! ```text
//! Page host (DOM)
//!     ↓ events        ↑ effects
//! IO Layer (ItemDetailPage, MarketingPage)
//!     ↓
//! Domain Layer (OrderConfigurator, MessageComposer, ...)
//! ```

pub mod config;
pub mod domain;
pub mod io;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;

pub use config::PageConfig;
pub use io::{ItemDetailPage, MarketingPage};

/// Page controllers for one visitor session
pub struct AppState {
    pub item_page: ItemDetailPage,
    pub marketing_page: MarketingPage,
}

/// Build both page controllers from a validated configuration
pub fn initialize_backend(config: &PageConfig, today: NaiveDate) -> Result<AppState> {
    info!("Setting up item detail page for {}", config.catalog.product_name);
    let item_page = ItemDetailPage::new(config, today).context("Failed to set up item detail page")?;

    info!("Setting up marketing page");
    let marketing_page = MarketingPage::from_entropy(config);

    Ok(AppState {
        item_page,
        marketing_page,
    })
}
