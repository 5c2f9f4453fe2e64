//! Inquiry messages sent to the shop over WhatsApp.
//!
//! Orders are not submitted anywhere: the customer's choices are rendered into
//! a text message and handed to the messaging app through a deep link, where
//! the shop confirms availability by hand.

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use shared::OrderDetails;

use super::deep_link::messaging_link;
use super::models::{OrderError, Rupees};

const ORDER_HEADER: &str = "🎁 *HAMPER INQUIRY* 🎁";
const ORDER_CLOSING: &str =
    "✨ Please confirm availability and provide further details for this hamper. Thank you!";
const DELIVERY_AVAILABILITY_MESSAGE: &str =
    "Hi! I would like to check delivery availability for my area. Can you please help me with this?";

/// Where inquiries go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    pub whatsapp_base_url: String,
    /// Destination number in international format without '+'
    pub whatsapp_number: String,
    /// Number offered for phone inquiries, with '+'
    pub call_number: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            whatsapp_base_url: "https://wa.me".to_string(),
            whatsapp_number: "91XXXXXXXXXX".to_string(),
            call_number: "+91XXXXXXXXXX".to_string(),
        }
    }
}

/// A `tel:` link together with the confirmation question shown first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallLink {
    pub prompt: String,
    pub url: String,
}

/// Long date as shown in the order message, e.g. "Tuesday, 20 October 2026"
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone)]
pub struct MessageComposer {
    config: MessagingConfig,
}

impl MessageComposer {
    pub fn new(config: MessagingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MessagingConfig {
        &self.config
    }

    /// Render the full hamper inquiry.
    ///
    /// Sections appear in a fixed order. Add-ons, special message and
    /// delivery date are left out when absent; the other fields are required.
    pub fn format_order_message(&self, details: &OrderDetails) -> Result<String, OrderError> {
        let product_name = details
            .product_name
            .as_deref()
            .ok_or(OrderError::IncompleteOrder("product_name"))?;
        let size = details.size.as_deref().ok_or(OrderError::IncompleteOrder("size"))?;
        let quantity = details.quantity.ok_or(OrderError::IncompleteOrder("quantity"))?;
        let base_price = details
            .base_price
            .map(Rupees::new)
            .ok_or(OrderError::IncompleteOrder("base_price"))?;
        let total_price = details
            .total_price
            .map(Rupees::new)
            .ok_or(OrderError::IncompleteOrder("total_price"))?;

        let mut message = format!("{}\n\n", ORDER_HEADER);
        message.push_str(&format!("*Product:* {}\n", product_name));
        message.push_str(&format!("*Size:* {}\n", capitalize(size)));
        message.push_str(&format!("*Quantity:* {}\n", quantity));
        message.push_str(&format!("*Base Price:* {}\n", base_price));

        if !details.add_ons.is_empty() {
            message.push_str("\n*Add-ons:*\n");
            for add_on in &details.add_ons {
                message.push_str(&format!("• {} (+{})\n", add_on.name, Rupees::new(add_on.price)));
            }
        }

        message.push_str(&format!("\n*Total Amount:* {}\n", total_price));

        if let Some(special_message) = details.special_message.as_deref().filter(|m| !m.is_empty()) {
            message.push_str(&format!("\n*Special Message:* {}\n", special_message));
        }

        if let Some(date) = details.delivery_date {
            message.push_str(&format!("*Preferred Delivery:* {}\n", format_delivery_date(date)));
        }

        message.push('\n');
        message.push_str(ORDER_CLOSING);

        info!(
            "Formatted order inquiry for {} x{} ({} add-ons, total {})",
            product_name,
            quantity,
            details.add_ons.len(),
            total_price
        );
        Ok(message)
    }

    /// One-line inquiry for a related product
    pub fn format_simple_inquiry(&self, product_name: &str, price: Rupees) -> String {
        format!(
            "Hi! I'm interested in the *{}* ({}). Could you please provide more details and availability? Thank you!",
            product_name, price
        )
    }

    /// Message sent from the marketing page contact form
    pub fn format_contact_message(&self, name: &str, email: &str, message: &str) -> String {
        format!("Hi! I'm {} ({}). {}", name, email, message)
    }

    pub fn delivery_availability_message(&self) -> &'static str {
        DELIVERY_AVAILABILITY_MESSAGE
    }

    pub fn build_deep_link(&self, message: &str) -> String {
        messaging_link(&self.config.whatsapp_base_url, &self.config.whatsapp_number, message)
    }

    pub fn build_call_link(&self) -> CallLink {
        CallLink {
            prompt: format!("Would you like to call {} for inquiry?", self.config.call_number),
            url: format!("tel:{}", self.config.call_number),
        }
    }
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::new(MessagingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::deep_link::decode_uri_component;
    use shared::AddOnLine;

    fn create_test_details() -> OrderDetails {
        OrderDetails {
            product_name: Some("Premium Birthday Celebration Hamper".to_string()),
            size: Some("regular".to_string()),
            quantity: Some(2),
            base_price: Some(2999),
            add_ons: vec![AddOnLine {
                id: "card".to_string(),
                name: "Personalized Greeting Card".to_string(),
                price: 199,
            }],
            total_price: Some(6396),
            special_message: Some("Happy birthday Asha!".to_string()),
            delivery_date: NaiveDate::from_ymd_opt(2026, 10, 20),
        }
    }

    #[test]
    fn test_format_order_message_full() {
        let composer = MessageComposer::default();

        let message = composer.format_order_message(&create_test_details()).unwrap();

        assert_eq!(
            message,
            "🎁 *HAMPER INQUIRY* 🎁\n\n\
             *Product:* Premium Birthday Celebration Hamper\n\
             *Size:* Regular\n\
             *Quantity:* 2\n\
             *Base Price:* ₹2,999\n\
             \n*Add-ons:*\n\
             • Personalized Greeting Card (+₹199)\n\
             \n*Total Amount:* ₹6,396\n\
             \n*Special Message:* Happy birthday Asha!\n\
             *Preferred Delivery:* Tuesday, 20 October 2026\n\
             \n✨ Please confirm availability and provide further details for this hamper. Thank you!"
        );
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let composer = MessageComposer::default();
        let mut details = create_test_details();
        details.add_ons.clear();
        details.special_message = Some(String::new());
        details.delivery_date = None;

        let message = composer.format_order_message(&details).unwrap();

        assert!(!message.contains("Add-ons"));
        assert!(!message.contains("Special Message"));
        assert!(!message.contains("Preferred Delivery"));
        assert!(message.contains("*Base Price:* ₹2,999\n\n*Total Amount:* ₹6,396\n\n✨"));
    }

    #[test]
    fn test_large_amounts_use_indian_grouping() {
        let composer = MessageComposer::default();
        let mut details = create_test_details();
        details.total_price = Some(1234567);

        let message = composer.format_order_message(&details).unwrap();

        assert!(message.contains("*Total Amount:* ₹12,34,567\n"));
    }

    #[test]
    fn test_missing_fields_are_incomplete() {
        let composer = MessageComposer::default();

        let cases: [(&'static str, fn(&mut OrderDetails)); 5] = [
            ("product_name", |d| d.product_name = None),
            ("size", |d| d.size = None),
            ("quantity", |d| d.quantity = None),
            ("base_price", |d| d.base_price = None),
            ("total_price", |d| d.total_price = None),
        ];

        for (field, strip) in cases {
            let mut details = create_test_details();
            strip(&mut details);
            assert_eq!(
                composer.format_order_message(&details),
                Err(OrderError::IncompleteOrder(field))
            );
        }
    }

    #[test]
    fn test_simple_inquiry() {
        let composer = MessageComposer::default();

        let message = composer.format_simple_inquiry("Gift Box", Rupees::new(1500));

        assert!(message.contains("₹1,500"));
        assert!(message.contains("Gift Box"));
        assert_eq!(
            message,
            "Hi! I'm interested in the *Gift Box* (₹1,500). Could you please provide more details and availability? Thank you!"
        );
    }

    #[test]
    fn test_contact_message() {
        let composer = MessageComposer::default();

        assert_eq!(
            composer.format_contact_message("Ravi", "ravi@example.com", "Do you deliver to Pune?"),
            "Hi! I'm Ravi (ravi@example.com). Do you deliver to Pune?"
        );
    }

    #[test]
    fn test_deep_link_round_trip() {
        let composer = MessageComposer::default();
        let message = composer.format_order_message(&create_test_details()).unwrap();

        let link = composer.build_deep_link(&message);
        let encoded = link
            .strip_prefix("https://wa.me/91XXXXXXXXXX?text=")
            .expect("link should start with the base URL and number");

        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert_eq!(decode_uri_component(encoded).unwrap(), message);
    }

    #[test]
    fn test_call_link() {
        let composer = MessageComposer::default();

        let call = composer.build_call_link();

        assert_eq!(call.url, "tel:+91XXXXXXXXXX");
        assert_eq!(call.prompt, "Would you like to call +91XXXXXXXXXX for inquiry?");
    }

    #[test]
    fn test_format_delivery_date() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();

        assert_eq!(format_delivery_date(date), "Friday, 1 January 2027");
    }
}
