//! Controller for the hamper item detail page.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{ItemPageEvent, PageEffect};
use std::time::Duration;

use super::mappers::order_mapper::OrderMapper;
use crate::backend::config::PageConfig;
use crate::backend::domain::models::{OrderError, Rupees};
use crate::backend::domain::{
    earliest_delivery_date, panel_id, star_slots, FeedbackBanners, FeedbackTransition,
    ItemGallery, MessageComposer, OrderConfigurator, ReviewFeed, TabController,
};

const INQUIRY_SENT_MESSAGE: &str = "WhatsApp inquiry sent successfully!";

/// Owns every component on the item detail page for one page view
#[derive(Debug)]
pub struct ItemDetailPage {
    configurator: OrderConfigurator,
    composer: MessageComposer,
    gallery: ItemGallery,
    tabs: TabController,
    reviews: ReviewFeed,
    feedback: FeedbackBanners,
    today: NaiveDate,
}

impl ItemDetailPage {
    pub fn new(config: &PageConfig, today: NaiveDate) -> Result<Self, OrderError> {
        Ok(Self {
            configurator: OrderConfigurator::new(config.catalog.clone(), today)?,
            composer: MessageComposer::new(config.messaging.clone()),
            gallery: ItemGallery::new(
                config.item_page.gallery_image_count,
                config.item_page.initial_viewport_width,
            ),
            tabs: TabController::new(),
            reviews: ReviewFeed::default(),
            feedback: FeedbackBanners::new(&config.item_page.feedback),
            today,
        })
    }

    pub fn configurator(&self) -> &OrderConfigurator {
        &self.configurator
    }

    pub fn composer(&self) -> &MessageComposer {
        &self.composer
    }

    /// Apply one host event and return what the host should change.
    ///
    /// Errors only come from events that name something the catalog does not
    /// have (a size or add-on key), which means the markup and the catalog
    /// disagree.
    pub fn handle(&mut self, event: ItemPageEvent) -> Result<Vec<PageEffect>, OrderError> {
        let effects = match event {
            ItemPageEvent::PageReady => self.initial_effects(),

            ItemPageEvent::SizeClicked { size } => {
                self.configurator.select_size_named(&size)?;
                vec![
                    PageEffect::ActivateSize {
                        size: self.configurator.configuration().size.as_str().to_string(),
                    },
                    self.total_effect(),
                ]
            }

            ItemPageEvent::AddOnToggled { add_on, checked } => {
                self.configurator.toggle_add_on(&add_on, checked)?;
                vec![self.total_effect()]
            }

            ItemPageEvent::QuantityDecrement => {
                self.configurator.decrement_quantity();
                self.quantity_effects()
            }

            ItemPageEvent::QuantityIncrement => {
                self.configurator.increment_quantity();
                self.quantity_effects()
            }

            ItemPageEvent::QuantityEntered { value } => {
                // Rejected input still redisplays the kept quantity.
                self.configurator.set_quantity_input(&value);
                self.quantity_effects()
            }

            ItemPageEvent::SpecialMessageChanged { text } => {
                self.configurator.set_special_message(text);
                Vec::new()
            }

            ItemPageEvent::DeliveryDateChanged { date } => {
                self.configurator.set_delivery_date(date);
                Vec::new()
            }

            ItemPageEvent::WhatsAppInquiryClicked => self.send_order_inquiry()?,

            ItemPageEvent::CallInquiryClicked => {
                let call = self.composer.build_call_link();
                vec![PageEffect::ConfirmThenNavigate {
                    prompt: call.prompt,
                    url: call.url,
                }]
            }

            ItemPageEvent::CheckDeliveryClicked => {
                let message = self.composer.delivery_availability_message();
                vec![PageEffect::OpenUrl {
                    url: self.composer.build_deep_link(message),
                }]
            }

            ItemPageEvent::RelatedInquiryClicked { product, price } => {
                let message = self.composer.format_simple_inquiry(&product, Rupees::new(price));
                info!("Related product inquiry for {}", product);
                vec![PageEffect::OpenUrl {
                    url: self.composer.build_deep_link(&message),
                }]
            }

            ItemPageEvent::TabClicked { tab } => match self.tabs.select_named(&tab) {
                Some(tab) => vec![PageEffect::ActivateTab {
                    tab,
                    panel_id: panel_id(tab),
                }],
                None => Vec::new(),
            },

            ItemPageEvent::LoadMoreReviewsClicked => {
                let mut effects: Vec<PageEffect> = self
                    .reviews
                    .load_more()
                    .into_iter()
                    .map(|review| PageEffect::AppendReview {
                        stars: star_slots(review.rating),
                        review,
                    })
                    .collect();
                if !effects.is_empty() {
                    effects.push(PageEffect::HideLoadMoreReviews);
                }
                effects
            }

            ItemPageEvent::GalleryNext => {
                self.gallery.next();
                self.gallery_effects()
            }

            ItemPageEvent::GalleryPrevious => {
                self.gallery.previous();
                self.gallery_effects()
            }

            ItemPageEvent::ThumbnailClicked { index } => match self.gallery.select_thumbnail(index) {
                Some(_) => self.gallery_effects(),
                None => Vec::new(),
            },

            ItemPageEvent::ViewportResized { width } => {
                self.gallery.resize(width);
                vec![self.thumbnail_effect()]
            }

            ItemPageEvent::Tick { elapsed_ms } => self
                .feedback
                .tick(Duration::from_millis(elapsed_ms))
                .into_iter()
                .map(|transition| match transition {
                    FeedbackTransition::Dismiss(id) => PageEffect::DismissFeedback { id },
                    FeedbackTransition::Remove(id) => PageEffect::RemoveFeedback { id },
                })
                .collect(),
        };

        Ok(effects)
    }

    fn initial_effects(&self) -> Vec<PageEffect> {
        let order = self.configurator.configuration();
        let earliest = earliest_delivery_date(self.today);
        vec![
            PageEffect::ActivateSize {
                size: order.size.as_str().to_string(),
            },
            PageEffect::DisplayQuantity {
                quantity: order.quantity,
            },
            self.total_effect(),
            PageEffect::SetDeliveryDateBounds {
                min: earliest,
                value: order.delivery_date.unwrap_or(earliest),
            },
            PageEffect::ActivateTab {
                tab: self.tabs.active(),
                panel_id: panel_id(self.tabs.active()),
            },
        ]
    }

    fn send_order_inquiry(&mut self) -> Result<Vec<PageEffect>, OrderError> {
        let details = OrderMapper::to_dto(&self.configurator.snapshot());
        let message = self.composer.format_order_message(&details).map_err(|e| {
            warn!("Could not format order inquiry: {}", e);
            e
        })?;
        let url = self.composer.build_deep_link(&message);
        let id = self.feedback.show();

        info!("Sending order inquiry, total {}", self.configurator.current_total());
        Ok(vec![
            PageEffect::OpenUrl { url },
            PageEffect::ShowFeedback {
                id,
                message: INQUIRY_SENT_MESSAGE.to_string(),
            },
        ])
    }

    fn total_effect(&self) -> PageEffect {
        let total = self.configurator.current_total();
        PageEffect::DisplayTotal {
            amount: total.value(),
            formatted: total.grouped(),
        }
    }

    fn quantity_effects(&self) -> Vec<PageEffect> {
        vec![
            PageEffect::DisplayQuantity {
                quantity: self.configurator.configuration().quantity,
            },
            self.total_effect(),
        ]
    }

    fn thumbnail_effect(&self) -> PageEffect {
        PageEffect::SyncThumbnails {
            active: self.gallery.current(),
            first_visible: self.gallery.first_visible(),
            per_view: self.gallery.per_view(),
        }
    }

    fn gallery_effects(&self) -> Vec<PageEffect> {
        vec![
            PageEffect::ShowGallerySlide {
                index: self.gallery.current(),
            },
            self.thumbnail_effect(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::decode_uri_component;
    use shared::ProductTab;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn create_test_page() -> ItemDetailPage {
        ItemDetailPage::new(&PageConfig::default(), today()).unwrap()
    }

    fn opened_message(effects: &[PageEffect]) -> String {
        let url = effects
            .iter()
            .find_map(|effect| match effect {
                PageEffect::OpenUrl { url } => Some(url.clone()),
                _ => None,
            })
            .expect("an OpenUrl effect");
        let encoded = url.split_once("?text=").expect("a text parameter").1;
        decode_uri_component(encoded).unwrap()
    }

    #[test]
    fn test_page_ready_publishes_initial_state() {
        let mut page = create_test_page();

        let effects = page.handle(ItemPageEvent::PageReady).unwrap();

        assert!(effects.contains(&PageEffect::DisplayTotal {
            amount: 2999,
            formatted: "2,999".to_string()
        }));
        assert!(effects.contains(&PageEffect::SetDeliveryDateBounds {
            min: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            value: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
        }));
    }

    #[test]
    fn test_price_updates_follow_every_change() {
        let mut page = create_test_page();

        page.handle(ItemPageEvent::SizeClicked { size: "large".to_string() }).unwrap();
        page.handle(ItemPageEvent::AddOnToggled { add_on: "balloon".to_string(), checked: true })
            .unwrap();
        let effects = page.handle(ItemPageEvent::QuantityIncrement).unwrap();

        assert_eq!(
            effects,
            vec![
                PageEffect::DisplayQuantity { quantity: 2 },
                PageEffect::DisplayTotal {
                    amount: (4499 + 299) * 2,
                    formatted: "9,596".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_invalid_quantity_input_redisplays_kept_value() {
        let mut page = create_test_page();
        page.handle(ItemPageEvent::QuantityEntered { value: "3".to_string() }).unwrap();

        let effects = page.handle(ItemPageEvent::QuantityEntered { value: "0".to_string() }).unwrap();

        assert_eq!(effects[0], PageEffect::DisplayQuantity { quantity: 3 });
        assert_eq!(page.configurator().configuration().quantity, 3);
    }

    #[test]
    fn test_unknown_add_on_is_an_error() {
        let mut page = create_test_page();

        let result = page.handle(ItemPageEvent::AddOnToggled {
            add_on: "teddy".to_string(),
            checked: true,
        });

        assert_eq!(result, Err(OrderError::UnknownAddOn("teddy".to_string())));
    }

    #[test]
    fn test_whatsapp_inquiry_uses_current_order() {
        let mut page = create_test_page();
        page.handle(ItemPageEvent::AddOnToggled { add_on: "card".to_string(), checked: true })
            .unwrap();
        page.handle(ItemPageEvent::QuantityIncrement).unwrap();
        page.handle(ItemPageEvent::SpecialMessageChanged { text: "Love you Maa".to_string() })
            .unwrap();

        let effects = page.handle(ItemPageEvent::WhatsAppInquiryClicked).unwrap();
        let message = opened_message(&effects);

        assert!(message.contains("*Quantity:* 2\n"));
        assert!(message.contains("• Personalized Greeting Card (+₹199)\n"));
        assert!(message.contains("*Total Amount:* ₹6,396\n"));
        assert!(message.contains("*Special Message:* Love you Maa\n"));
        assert!(message.contains("*Preferred Delivery:* Tuesday, 20 October 2026\n"));
        assert!(effects.contains(&PageEffect::ShowFeedback {
            id: 1,
            message: "WhatsApp inquiry sent successfully!".to_string()
        }));
    }

    #[test]
    fn test_feedback_banner_is_dismissed_then_removed() {
        let mut page = create_test_page();
        page.handle(ItemPageEvent::WhatsAppInquiryClicked).unwrap();

        let dismissed = page.handle(ItemPageEvent::Tick { elapsed_ms: 3000 }).unwrap();
        let removed = page.handle(ItemPageEvent::Tick { elapsed_ms: 300 }).unwrap();

        assert_eq!(dismissed, vec![PageEffect::DismissFeedback { id: 1 }]);
        assert_eq!(removed, vec![PageEffect::RemoveFeedback { id: 1 }]);
    }

    #[test]
    fn test_related_inquiry() {
        let mut page = create_test_page();

        let effects = page
            .handle(ItemPageEvent::RelatedInquiryClicked {
                product: "Anniversary Delight".to_string(),
                price: 3499,
            })
            .unwrap();

        assert_eq!(
            opened_message(&effects),
            "Hi! I'm interested in the *Anniversary Delight* (₹3,499). Could you please provide more details and availability? Thank you!"
        );
    }

    #[test]
    fn test_call_and_delivery_check() {
        let mut page = create_test_page();

        let call = page.handle(ItemPageEvent::CallInquiryClicked).unwrap();
        let delivery = page.handle(ItemPageEvent::CheckDeliveryClicked).unwrap();

        assert_eq!(
            call,
            vec![PageEffect::ConfirmThenNavigate {
                prompt: "Would you like to call +91XXXXXXXXXX for inquiry?".to_string(),
                url: "tel:+91XXXXXXXXXX".to_string(),
            }]
        );
        assert!(opened_message(&delivery).starts_with("Hi! I would like to check delivery availability"));
    }

    #[test]
    fn test_tabs_and_reviews() {
        let mut page = create_test_page();

        let tab = page.handle(ItemPageEvent::TabClicked { tab: "reviews".to_string() }).unwrap();
        let unknown = page.handle(ItemPageEvent::TabClicked { tab: "faq".to_string() }).unwrap();
        let reviews = page.handle(ItemPageEvent::LoadMoreReviewsClicked).unwrap();
        let again = page.handle(ItemPageEvent::LoadMoreReviewsClicked).unwrap();

        assert_eq!(
            tab,
            vec![PageEffect::ActivateTab {
                tab: ProductTab::Reviews,
                panel_id: "reviews-tab".to_string()
            }]
        );
        assert!(unknown.is_empty());
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews.last(), Some(&PageEffect::HideLoadMoreReviews));
        assert!(again.is_empty());
    }

    #[test]
    fn test_gallery_navigation_syncs_thumbnails() {
        let mut page = create_test_page();

        let effects = page.handle(ItemPageEvent::GalleryPrevious).unwrap();

        assert_eq!(
            effects,
            vec![
                PageEffect::ShowGallerySlide { index: 3 },
                PageEffect::SyncThumbnails {
                    active: 3,
                    first_visible: 0,
                    per_view: 4
                },
            ]
        );
        assert!(page
            .handle(ItemPageEvent::ThumbnailClicked { index: 9 })
            .unwrap()
            .is_empty());
    }
}
