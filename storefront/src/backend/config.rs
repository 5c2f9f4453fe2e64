//! # Page Configuration
//!
//! Everything the pages need that the markup would otherwise carry: the
//! product catalog, the WhatsApp destination, timings and effect constants.
//! Read from a YAML file; any section left out falls back to the live site's
//! values.
//!
//! ```yaml
//! messaging:
//!   whatsapp_number: "919800000000"
//! catalog:
//!   sizes:
//!     small: 1999
//!     regular: 2999
//!     large: 4499
//! ```

use anyhow::{ensure, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::domain::models::ProductCatalog;
use crate::backend::domain::{EffectsConfig, FeedbackConfig, MessagingConfig, NavigationConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPageConfig {
    pub gallery_image_count: usize,
    /// Width assumed until the host reports the real viewport
    pub initial_viewport_width: f64,
    pub feedback: FeedbackConfig,
}

impl Default for ItemPageConfig {
    fn default() -> Self {
        Self {
            gallery_image_count: 4,
            initial_viewport_width: 1024.0,
            feedback: FeedbackConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingPageConfig {
    pub testimonial_count: usize,
    pub testimonial_interval_ms: u64,
    /// How long the contact button shows "Message Sent!"
    pub submit_confirmation_ms: u64,
    /// Deferred image sources, in page order
    pub lazy_images: Vec<String>,
    pub navigation: NavigationConfig,
    pub effects: EffectsConfig,
}

impl Default for MarketingPageConfig {
    fn default() -> Self {
        Self {
            testimonial_count: 3,
            testimonial_interval_ms: 5000,
            submit_confirmation_ms: 3000,
            lazy_images: Vec::new(),
            navigation: NavigationConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub messaging: MessagingConfig,
    pub catalog: ProductCatalog,
    pub item_page: ItemPageConfig,
    pub marketing_page: MarketingPageConfig,
}

impl PageConfig {
    /// Load and validate a YAML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page config {:?}", path))?;
        let config: PageConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse page config {:?}", path))?;
        config.validate()?;

        info!("Loaded page config from {:?}", path);
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("No page config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.catalog.validate().context("Invalid product catalog")?;
        ensure!(
            !self.messaging.whatsapp_number.trim().is_empty(),
            "messaging.whatsapp_number is empty"
        );
        ensure!(
            self.messaging.whatsapp_base_url.starts_with("https://"),
            "messaging.whatsapp_base_url must be an https URL"
        );
        ensure!(
            self.marketing_page.testimonial_interval_ms > 0,
            "marketing_page.testimonial_interval_ms must be positive"
        );
        Ok(())
    }
}
