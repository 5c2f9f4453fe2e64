//! Decorative effects on the marketing page: parallax, staggered reveals,
//! floating particles, lazy images and the page loader.
//!
//! Only the arithmetic lives here; the host does the drawing.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::{ParticlePosition, ParticleSpec, RevealGroup};
use std::collections::HashSet;
use std::time::Duration;

use super::timers::Timeout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub particle_count: usize,
    /// Hero showcase moves by `scroll_y * parallax_rate`
    pub parallax_rate: f64,
    /// Delay between consecutive cards in a reveal group, seconds
    pub reveal_stagger_s: f64,
    pub loader_fade_delay_ms: u64,
    pub loader_fade_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            parallax_rate: -0.5,
            reveal_stagger_s: 0.1,
            loader_fade_delay_ms: 1000,
            loader_fade_ms: 500,
        }
    }
}

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// Remembers which cards already animated in; each reveals once
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    stagger_s: f64,
    revealed: HashSet<(RevealGroup, usize)>,
}

impl RevealTracker {
    pub fn new(stagger_s: f64) -> Self {
        Self {
            stagger_s,
            revealed: HashSet::new(),
        }
    }

    /// Animation delay for a card entering the viewport for the first time
    pub fn intersect(&mut self, group: RevealGroup, index: usize) -> Option<f64> {
        if !self.revealed.insert((group, index)) {
            return None;
        }
        Some(index as f64 * self.stagger_s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    animation_delay_s: f64,
}

/// Background particles drifting across the viewport and wrapping at its edges
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn scatter<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                vx: (rng.gen::<f64>() - 0.5) * 0.5,
                vy: (rng.gen::<f64>() - 0.5) * 0.5,
                size: rng.gen::<f64>() * 3.0 + 2.0,
                animation_delay_s: rng.gen::<f64>() * 3.0,
            })
            .collect();

        debug!("Scattered {} particles over {}x{}", count, width, height);
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn specs(&self) -> Vec<ParticleSpec> {
        self.particles
            .iter()
            .map(|p| ParticleSpec {
                x: p.x,
                y: p.y,
                size: p.size,
                animation_delay_s: p.animation_delay_s,
            })
            .collect()
    }

    pub fn positions(&self) -> Vec<ParticlePosition> {
        self.particles
            .iter()
            .map(|p| ParticlePosition { x: p.x, y: p.y })
            .collect()
    }

    /// Advance one animation frame
    pub fn step(&mut self) -> Vec<ParticlePosition> {
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;

            if particle.x < 0.0 {
                particle.x = self.width;
            }
            if particle.x > self.width {
                particle.x = 0.0;
            }
            if particle.y < 0.0 {
                particle.y = self.height;
            }
            if particle.y > self.height {
                particle.y = 0.0;
            }
        }
        self.positions()
    }

    /// New viewport size: particles are scattered again, velocities kept
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        for particle in &mut self.particles {
            particle.x = rng.gen::<f64>() * width;
            particle.y = rng.gen::<f64>() * height;
        }
    }
}

/// Images whose real source is swapped in the first time they become visible
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    deferred: Vec<Option<String>>,
}

impl LazyImages {
    pub fn new(sources: Vec<String>) -> Self {
        Self {
            deferred: sources.into_iter().map(Some).collect(),
        }
    }

    /// Source to load, once per image
    pub fn intersect(&mut self, index: usize) -> Option<String> {
        self.deferred.get_mut(index).and_then(Option::take)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStage {
    Fade,
    Remove,
}

/// Full-screen loader shown until the page has loaded
#[derive(Debug, Clone)]
pub struct Loader {
    fade_delay: Duration,
    fade: Duration,
    fade_timer: Option<Timeout>,
    remove_timer: Option<Timeout>,
}

impl Loader {
    pub fn new(fade_delay: Duration, fade: Duration) -> Self {
        Self {
            fade_delay,
            fade,
            fade_timer: None,
            remove_timer: None,
        }
    }

    pub fn page_loaded(&mut self) {
        self.fade_timer = Some(Timeout::new(self.fade_delay));
    }

    pub fn tick(&mut self, dt: Duration) -> Vec<LoaderStage> {
        let mut stages = Vec::new();

        if let Some(timer) = self.fade_timer.as_mut() {
            if timer.advance(dt) {
                stages.push(LoaderStage::Fade);
                self.fade_timer = None;
                // The fade starts now; the leftover of this tick does not count.
                self.remove_timer = Some(Timeout::new(self.fade));
                return stages;
            }
        }

        if let Some(timer) = self.remove_timer.as_mut() {
            if timer.advance(dt) {
                stages.push(LoaderStage::Remove);
                self.remove_timer = None;
            }
        }
        stages
    }
}
