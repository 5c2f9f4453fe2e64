//! Image galleries: the item page's main slider with its thumbnail strip, and
//! the marketing page lightbox.

use log::info;
use serde::{Deserialize, Serialize};

use super::carousel::Carousel;

/// Viewport widths (px) at which the thumbnail strip changes its slide count
const THUMBNAIL_BREAKPOINTS: [(f64, usize); 2] = [(768.0, 4), (320.0, 3)];
const DEFAULT_THUMBNAILS_PER_VIEW: usize = 4;

/// Thumbnails visible at once for a viewport width
pub fn thumbnails_per_view(viewport_width: f64) -> usize {
    THUMBNAIL_BREAKPOINTS
        .iter()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map_or(DEFAULT_THUMBNAILS_PER_VIEW, |(_, per_view)| *per_view)
}

/// Main image slider kept in sync with a thumbnail strip
#[derive(Debug, Clone)]
pub struct ItemGallery {
    slides: Carousel,
    per_view: usize,
    first_visible: usize,
}

impl ItemGallery {
    pub fn new(image_count: usize, viewport_width: f64) -> Self {
        Self {
            slides: Carousel::new(image_count),
            per_view: thumbnails_per_view(viewport_width),
            first_visible: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.slides.current()
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn next(&mut self) -> usize {
        self.slides.next();
        self.sync_thumbnails()
    }

    pub fn previous(&mut self) -> usize {
        self.slides.previous();
        self.sync_thumbnails()
    }

    pub fn select_thumbnail(&mut self, index: usize) -> Option<usize> {
        self.slides.go_to(index)?;
        Some(self.sync_thumbnails())
    }

    pub fn resize(&mut self, viewport_width: f64) -> usize {
        self.per_view = thumbnails_per_view(viewport_width);
        self.sync_thumbnails();
        self.per_view
    }

    /// Scroll the strip just enough to keep the active thumbnail in view
    fn sync_thumbnails(&mut self) -> usize {
        let active = self.slides.current();
        if active < self.first_visible {
            self.first_visible = active;
        } else if active >= self.first_visible + self.per_view {
            self.first_visible = active + 1 - self.per_view;
        }
        let last_start = self.slides.count().saturating_sub(self.per_view);
        self.first_visible = self.first_visible.min(last_start);
        active
    }
}

/// Two-stop diagonal gradient used as a placeholder gallery image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientImage {
    pub start: String,
    pub end: String,
}

impl GradientImage {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Placeholder images for the six marketing gallery tiles
pub fn default_gallery_gradients() -> Vec<GradientImage> {
    vec![
        GradientImage::new("#ff69b4", "#ff1493"),
        GradientImage::new("#ffd700", "#ffb347"),
        GradientImage::new("#87ceeb", "#4169e1"),
        GradientImage::new("#98fb98", "#32cd32"),
        GradientImage::new("#dda0dd", "#9370db"),
        GradientImage::new("#f0e68c", "#daa520"),
    ]
}

/// Full-screen image viewer. While open, page scrolling is locked.
#[derive(Debug, Clone)]
pub struct Lightbox {
    images: Vec<GradientImage>,
    open: Option<usize>,
}

impl Lightbox {
    pub fn new(images: Vec<GradientImage>) -> Self {
        Self { images, open: None }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn open(&mut self, index: usize) -> Option<&GradientImage> {
        let image = self.images.get(index)?;
        self.open = Some(index);
        info!("Opened lightbox image {}", index);
        Some(image)
    }

    /// Returns true if the lightbox was open
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Escape closes an open lightbox; every other key is ignored
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}
