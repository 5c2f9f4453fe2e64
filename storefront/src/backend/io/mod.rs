//! # IO Module
//!
//! The boundary between the page host and the domain. Each page controller
//! takes the events the host observes (clicks, input changes, key presses,
//! scroll positions, timer ticks) and answers with `PageEffect`s for the host
//! to apply. No controller touches the DOM itself.

pub mod item_detail_page;
pub mod mappers;
pub mod marketing_page;

pub use item_detail_page::ItemDetailPage;
pub use marketing_page::MarketingPage;
