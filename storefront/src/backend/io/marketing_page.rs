//! Controller for the marketing landing page.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{MarketingPageEvent, PageEffect};
use std::time::Duration;

use crate::backend::config::PageConfig;
use crate::backend::domain::{
    default_gallery_gradients, parallax_offset, Carousel, ContactForm, EffectsConfig, LazyImages,
    Lightbox, Loader, LoaderStage, MessageComposer, Navigation, ParticleField, RevealTracker,
};

pub struct MarketingPage {
    navigation: Navigation,
    lightbox: Lightbox,
    testimonials: Carousel,
    contact_form: ContactForm,
    composer: MessageComposer,
    reveals: RevealTracker,
    particles: Option<ParticleField>,
    lazy_images: LazyImages,
    loader: Loader,
    effects: EffectsConfig,
    rng: StdRng,
}

impl MarketingPage {
    /// `rng` places the background particles
    pub fn new(config: &PageConfig, rng: StdRng) -> Self {
        let page = &config.marketing_page;
        let effects = page.effects.clone();

        Self {
            navigation: Navigation::new(page.navigation.clone()),
            lightbox: Lightbox::new(default_gallery_gradients()),
            testimonials: Carousel::with_autoplay(
                page.testimonial_count,
                Duration::from_millis(page.testimonial_interval_ms),
            ),
            contact_form: ContactForm::new(Duration::from_millis(page.submit_confirmation_ms)),
            composer: MessageComposer::new(config.messaging.clone()),
            reveals: RevealTracker::new(effects.reveal_stagger_s),
            particles: None,
            lazy_images: LazyImages::new(page.lazy_images.clone()),
            loader: Loader::new(
                Duration::from_millis(effects.loader_fade_delay_ms),
                Duration::from_millis(effects.loader_fade_ms),
            ),
            effects,
            rng,
        }
    }

    pub fn from_entropy(config: &PageConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_open()
    }

    pub fn current_testimonial(&self) -> usize {
        self.testimonials.current()
    }

    pub fn handle(&mut self, event: MarketingPageEvent) -> Vec<PageEffect> {
        match event {
            MarketingPageEvent::PageLoaded { width, height } => {
                let field = ParticleField::scatter(
                    self.effects.particle_count,
                    width,
                    height,
                    &mut self.rng,
                );
                let particles = field.specs();
                self.particles = Some(field);
                self.loader.page_loaded();

                info!("Marketing page loaded at {}x{}", width, height);
                vec![
                    PageEffect::PlaceParticles { particles },
                    PageEffect::ShowTestimonial {
                        index: self.testimonials.current(),
                    },
                ]
            }

            MarketingPageEvent::AnimationFrame => match self.particles.as_mut() {
                Some(field) => vec![PageEffect::MoveParticles {
                    positions: field.step(),
                }],
                None => Vec::new(),
            },

            MarketingPageEvent::Resized { width, height } => match self.particles.as_mut() {
                Some(field) => {
                    field.resize(width, height, &mut self.rng);
                    vec![PageEffect::MoveParticles {
                        positions: field.positions(),
                    }]
                }
                None => Vec::new(),
            },

            MarketingPageEvent::MenuToggleClicked => vec![PageEffect::SetMenuOpen {
                open: self.navigation.toggle_menu(),
            }],

            MarketingPageEvent::NavLinkClicked { section_top } => {
                let mut effects = vec![PageEffect::SetMenuOpen { open: false }];
                if let Some(top) = self.navigation.follow_link(section_top) {
                    effects.push(PageEffect::ScrollTo { top });
                }
                effects
            }

            MarketingPageEvent::Scrolled { y } => {
                let mut effects = Vec::new();
                if let Some(scrolled) = self.navigation.on_scroll(y) {
                    effects.push(PageEffect::SetNavbarScrolled { scrolled });
                }
                effects.push(PageEffect::SetParallaxOffset {
                    offset_px: parallax_offset(y, self.effects.parallax_rate),
                });
                effects
            }

            MarketingPageEvent::GalleryItemClicked { index } => match self.lightbox.open(index) {
                Some(image) => vec![
                    PageEffect::OpenLightbox {
                        index,
                        gradient_start: image.start.clone(),
                        gradient_end: image.end.clone(),
                    },
                    PageEffect::SetPageScrollLocked { locked: true },
                ],
                None => Vec::new(),
            },

            MarketingPageEvent::LightboxCloseClicked | MarketingPageEvent::LightboxBackdropClicked => {
                let closed = self.lightbox.close();
                Self::lightbox_closed_effects(closed)
            }

            MarketingPageEvent::KeyPressed { key } => {
                let closed = self.lightbox.handle_key(&key);
                Self::lightbox_closed_effects(closed)
            }

            MarketingPageEvent::TestimonialPrevious => vec![PageEffect::ShowTestimonial {
                index: self.testimonials.previous(),
            }],

            MarketingPageEvent::TestimonialNext => vec![PageEffect::ShowTestimonial {
                index: self.testimonials.next(),
            }],

            MarketingPageEvent::TestimonialDotClicked { index } => self
                .testimonials
                .go_to(index)
                .map(|index| PageEffect::ShowTestimonial { index })
                .into_iter()
                .collect(),

            MarketingPageEvent::ContactSubmitted { submission } => {
                let url = self.contact_form.submit(&self.composer, &submission);
                vec![
                    PageEffect::OpenUrl { url },
                    PageEffect::ResetContactForm,
                    PageEffect::SetSubmitButtonSent { sent: true },
                ]
            }

            MarketingPageEvent::ElementIntersected { group, index } => self
                .reveals
                .intersect(group, index)
                .map(|delay_s| PageEffect::RevealElement {
                    group,
                    index,
                    delay_s,
                })
                .into_iter()
                .collect(),

            MarketingPageEvent::LazyImageIntersected { index } => self
                .lazy_images
                .intersect(index)
                .map(|src| PageEffect::LoadImage { index, src })
                .into_iter()
                .collect(),

            MarketingPageEvent::Tick { elapsed_ms } => self.tick(Duration::from_millis(elapsed_ms)),
        }
    }

    fn tick(&mut self, dt: Duration) -> Vec<PageEffect> {
        let mut effects = Vec::new();

        if let Some(index) = self.testimonials.tick(dt) {
            effects.push(PageEffect::ShowTestimonial { index });
        }
        if self.contact_form.tick(dt) {
            effects.push(PageEffect::SetSubmitButtonSent { sent: false });
        }
        for stage in self.loader.tick(dt) {
            debug!("Loader stage {:?}", stage);
            effects.push(match stage {
                LoaderStage::Fade => PageEffect::FadeLoader,
                LoaderStage::Remove => PageEffect::RemoveLoader,
            });
        }
        effects
    }

    fn lightbox_closed_effects(closed: bool) -> Vec<PageEffect> {
        if !closed {
            return Vec::new();
        }
        vec![
            PageEffect::CloseLightbox,
            PageEffect::SetPageScrollLocked { locked: false },
        ]
    }
}
