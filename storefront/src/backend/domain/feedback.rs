//! Transient confirmation banners ("WhatsApp inquiry sent successfully!").
//!
//! A banner stays for `visible` time, then plays its exit animation for
//! `exit` time and is removed.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub visible_ms: u64,
    pub exit_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            visible_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTransition {
    /// Start the exit animation
    Dismiss(u64),
    Remove(u64),
}

#[derive(Debug, Clone)]
struct Banner {
    id: u64,
    age: Duration,
    dismissed: bool,
}

#[derive(Debug, Clone)]
pub struct FeedbackBanners {
    visible: Duration,
    exit: Duration,
    next_id: u64,
    banners: Vec<Banner>,
}

impl FeedbackBanners {
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            visible: Duration::from_millis(config.visible_ms),
            exit: Duration::from_millis(config.exit_ms),
            next_id: 1,
            banners: Vec::new(),
        }
    }

    /// Returns the id the host should attach to the new banner
    pub fn show(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.banners.push(Banner {
            id,
            age: Duration::ZERO,
            dismissed: false,
        });
        debug!("Showing feedback banner {}", id);
        id
    }

    pub fn active_count(&self) -> usize {
        self.banners.len()
    }

    pub fn tick(&mut self, dt: Duration) -> Vec<FeedbackTransition> {
        let mut transitions = Vec::new();
        let lifetime = self.visible + self.exit;

        for banner in &mut self.banners {
            banner.age += dt;
            if !banner.dismissed && banner.age >= self.visible {
                banner.dismissed = true;
                transitions.push(FeedbackTransition::Dismiss(banner.id));
            }
            if banner.age >= lifetime {
                transitions.push(FeedbackTransition::Remove(banner.id));
            }
        }
        self.banners.retain(|banner| banner.age < lifetime);
        transitions
    }
}

impl Default for FeedbackBanners {
    fn default() -> Self {
        Self::new(&FeedbackConfig::default())
    }
}
