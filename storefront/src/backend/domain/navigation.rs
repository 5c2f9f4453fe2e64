//! Marketing page navigation bar: mobile menu, scrolled style and anchor
//! scrolling.

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scroll depth (px) past which the navbar switches to its solid style
    pub scrolled_threshold: f64,
    /// Height (px) of the fixed navbar, kept clear when scrolling to a section
    pub anchor_offset: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            anchor_offset: 80.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigation {
    config: NavigationConfig,
    menu_open: bool,
    scrolled: bool,
}

impl Navigation {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            menu_open: false,
            scrolled: false,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        debug!("Mobile menu open: {}", self.menu_open);
        self.menu_open
    }

    /// Following a link closes the menu. Returns where to scroll, if the
    /// link points at a section on this page.
    pub fn follow_link(&mut self, section_top: Option<f64>) -> Option<f64> {
        self.menu_open = false;
        section_top.map(|top| (top - self.config.anchor_offset).max(0.0))
    }

    /// Returns the new style only when it changes
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.config.scrolled_threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}
