use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use gracias_storefront::backend::{initialize_backend, PageConfig};
use shared::{ContactSubmission, ItemPageEvent, MarketingPageEvent, PageEffect};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_effects(source: &str, effects: &[PageEffect]) -> Result<()> {
    for effect in effects {
        let json = serde_json::to_string(effect).context("Failed to serialize page effect")?;
        println!("{} {}", source, json);
    }
    Ok(())
}

/// Walks through a typical visit: configure a hamper, send the inquiry, then
/// browse the landing page and use the contact form.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = PageConfig::load_or_default(config_path.as_deref())?;
    let today = Local::now().date_naive();

    info!("Starting storefront demo for {}", today);
    let mut state = initialize_backend(&config, today)?;

    let item_events = vec![
        ItemPageEvent::PageReady,
        ItemPageEvent::SizeClicked { size: "large".to_string() },
        ItemPageEvent::AddOnToggled { add_on: "card".to_string(), checked: true },
        ItemPageEvent::AddOnToggled { add_on: "flowers".to_string(), checked: true },
        ItemPageEvent::QuantityIncrement,
        ItemPageEvent::QuantityEntered { value: "42".to_string() },
        ItemPageEvent::SpecialMessageChanged { text: "Happy birthday!".to_string() },
        ItemPageEvent::TabClicked { tab: "reviews".to_string() },
        ItemPageEvent::LoadMoreReviewsClicked,
        ItemPageEvent::GalleryNext,
        ItemPageEvent::WhatsAppInquiryClicked,
        ItemPageEvent::Tick { elapsed_ms: 3300 },
    ];
    for event in item_events {
        let effects = state
            .item_page
            .handle(event)
            .context("Item page rejected an event")?;
        print_effects("item", &effects)?;
    }

    let marketing_events = vec![
        MarketingPageEvent::PageLoaded { width: 1280.0, height: 720.0 },
        MarketingPageEvent::Scrolled { y: 240.0 },
        MarketingPageEvent::GalleryItemClicked { index: 1 },
        MarketingPageEvent::KeyPressed { key: "Escape".to_string() },
        MarketingPageEvent::ContactSubmitted {
            submission: ContactSubmission {
                name: "Anita".to_string(),
                email: "anita@example.com".to_string(),
                message: "Do you deliver on Sundays?".to_string(),
            },
        },
        MarketingPageEvent::Tick { elapsed_ms: 5000 },
    ];
    for event in marketing_events {
        let effects = state.marketing_page.handle(event);
        print_effects("marketing", &effects)?;
    }

    info!("Demo finished");
    Ok(())
}
