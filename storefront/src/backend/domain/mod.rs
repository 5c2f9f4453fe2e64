//! # Domain Module
//!
//! Business rules and UI state for the Gracias storefront pages, free of any
//! UI framework. Page controllers in `io` forward host events to these types.
//!
//! ## Module Organization
//!
//! - **order_configurator**: size, quantity, add-ons and the derived total
//! - **message_composer**: order, related-product and contact inquiry texts
//! - **deep_link**: WhatsApp deep links with `encodeURIComponent` encoding
//! - **carousel / gallery / tabs / reviews**: small index state machines
//! - **navigation / effects**: marketing page navbar and decorative effects
//! - **feedback / contact_form / timers**: host-driven timed UI feedback
//! - **models**: money, catalog, order state and the domain error
//!
//! ## Business Rules
//!
//! - Total = (base price of size + selected add-ons) x quantity, recomputed on
//!   every change
//! - Quantity stays within 1..=10; anything else is ignored
//! - Add-ons come from the catalog only and are never charged twice
//! - Amounts are whole rupees, grouped the Indian way (₹1,00,000)

pub mod carousel;
pub mod contact_form;
pub mod deep_link;
pub mod effects;
pub mod feedback;
pub mod gallery;
pub mod message_composer;
pub mod models;
pub mod navigation;
pub mod order_configurator;
pub mod reviews;
pub mod tabs;
pub mod timers;

pub use carousel::*;
pub use contact_form::*;
pub use deep_link::*;
pub use effects::*;
pub use feedback::*;
pub use gallery::*;
pub use message_composer::*;
pub use navigation::*;
pub use order_configurator::*;
pub use reviews::*;
pub use tabs::*;
pub use timers::*;
