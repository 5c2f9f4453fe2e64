use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A selected add-on as it appears in an order snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnLine {
    /// Catalog identifier (e.g. "card")
    pub id: String,
    /// Display name shown to the customer
    pub name: String,
    /// Price in whole rupees
    pub price: u64,
}

/// Order details handed to the message composer.
///
/// Product name, size, quantity, base price and total are required for an
/// order message. They are optional here because the page host can post a
/// snapshot of its own as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetails {
    pub product_name: Option<String>,
    /// Lowercase size key ("small", "regular", "large")
    pub size: Option<String>,
    pub quantity: Option<u32>,
    /// Base unit price of the selected size, whole rupees
    pub base_price: Option<u64>,
    /// Selected add-ons in selection order
    pub add_ons: Vec<AddOnLine>,
    /// (base price + add-ons) * quantity, whole rupees
    pub total_price: Option<u64>,
    pub special_message: Option<String>,
    pub delivery_date: Option<NaiveDate>,
}

/// A customer review on the item detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    /// 1 to 5 stars
    pub rating: u8,
    /// Relative date as displayed, e.g. "3 weeks ago"
    pub date: String,
    pub text: String,
}

/// One slot of a five-star rating row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarSlot {
    Filled,
    Empty,
}

/// Contact form fields as submitted on the marketing page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Tabs on the item detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductTab {
    Description,
    Specifications,
    Reviews,
}

/// Groups of marketing page elements that animate in when scrolled into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealGroup {
    OccasionCards,
    GalleryItems,
}

/// Initial placement of one background particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSpec {
    pub x: f64,
    pub y: f64,
    /// Diameter in pixels
    pub size: f64,
    /// CSS animation delay in seconds
    pub animation_delay_s: f64,
}

/// Current position of one background particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticlePosition {
    pub x: f64,
    pub y: f64,
}

/// Events forwarded by the host from the item detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemPageEvent {
    /// DOM is ready; the page publishes its initial state
    PageReady,
    SizeClicked { size: String },
    AddOnToggled { add_on: String, checked: bool },
    QuantityDecrement,
    QuantityIncrement,
    /// Raw text typed into the quantity box
    QuantityEntered { value: String },
    SpecialMessageChanged { text: String },
    DeliveryDateChanged { date: Option<NaiveDate> },
    WhatsAppInquiryClicked,
    CallInquiryClicked,
    CheckDeliveryClicked,
    RelatedInquiryClicked { product: String, price: u64 },
    TabClicked { tab: String },
    LoadMoreReviewsClicked,
    GalleryNext,
    GalleryPrevious,
    ThumbnailClicked { index: usize },
    ViewportResized { width: f64 },
    Tick { elapsed_ms: u64 },
}

/// Events forwarded by the host from the marketing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarketingPageEvent {
    PageLoaded { width: f64, height: f64 },
    AnimationFrame,
    Resized { width: f64, height: f64 },
    MenuToggleClicked,
    /// `section_top` is the offset of the anchor target, if it exists
    NavLinkClicked { section_top: Option<f64> },
    Scrolled { y: f64 },
    GalleryItemClicked { index: usize },
    LightboxCloseClicked,
    LightboxBackdropClicked,
    KeyPressed { key: String },
    TestimonialPrevious,
    TestimonialNext,
    TestimonialDotClicked { index: usize },
    ContactSubmitted { submission: ContactSubmission },
    ElementIntersected { group: RevealGroup, index: usize },
    LazyImageIntersected { index: usize },
    Tick { elapsed_ms: u64 },
}

/// Everything a page controller asks the host to do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum PageEffect {
    // Item detail page
    ActivateSize { size: String },
    /// `formatted` uses Indian digit grouping without the currency sign
    DisplayTotal { amount: u64, formatted: String },
    DisplayQuantity { quantity: u32 },
    SetDeliveryDateBounds { min: NaiveDate, value: NaiveDate },
    ActivateTab { tab: ProductTab, panel_id: String },
    AppendReview { review: Review, stars: Vec<StarSlot> },
    HideLoadMoreReviews,
    ShowGallerySlide { index: usize },
    SyncThumbnails { active: usize, first_visible: usize, per_view: usize },
    ShowFeedback { id: u64, message: String },
    DismissFeedback { id: u64 },
    RemoveFeedback { id: u64 },

    // Shared by both pages
    /// Open in a new tab/window
    OpenUrl { url: String },
    /// Ask the visitor first, then navigate the current window
    ConfirmThenNavigate { prompt: String, url: String },

    // Marketing page
    SetMenuOpen { open: bool },
    SetNavbarScrolled { scrolled: bool },
    ScrollTo { top: f64 },
    OpenLightbox { index: usize, gradient_start: String, gradient_end: String },
    CloseLightbox,
    SetPageScrollLocked { locked: bool },
    ShowTestimonial { index: usize },
    ResetContactForm,
    SetSubmitButtonSent { sent: bool },
    SetParallaxOffset { offset_px: f64 },
    RevealElement { group: RevealGroup, index: usize, delay_s: f64 },
    LoadImage { index: usize, src: String },
    PlaceParticles { particles: Vec<ParticleSpec> },
    MoveParticles { positions: Vec<ParticlePosition> },
    FadeLoader,
    RemoveLoader,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_details_missing_fields_default_to_none() {
        let details: OrderDetails = serde_json::from_str(r#"{"product_name": "Gift Box"}"#).unwrap();

        assert_eq!(details.product_name.as_deref(), Some("Gift Box"));
        assert!(details.size.is_none());
        assert!(details.add_ons.is_empty());
    }

    #[test]
    fn test_item_page_event_from_host_json() {
        let event: ItemPageEvent =
            serde_json::from_str(r#"{"type": "add_on_toggled", "add_on": "card", "checked": true}"#).unwrap();

        assert_eq!(
            event,
            ItemPageEvent::AddOnToggled { add_on: "card".to_string(), checked: true }
        );
    }

    #[test]
    fn test_page_effect_is_tagged() {
        let json = serde_json::to_value(PageEffect::DisplayQuantity { quantity: 3 }).unwrap();

        assert_eq!(json["effect"], "display_quantity");
        assert_eq!(json["quantity"], 3);
    }
}
