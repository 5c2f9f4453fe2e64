//! Review list on the item detail page with its one-shot "load more" button.

use log::info;
use shared::{Review, StarSlot};

pub const MAX_RATING: u8 = 5;

/// Five slots, filled up to the rating
pub fn star_slots(rating: u8) -> Vec<StarSlot> {
    (1..=MAX_RATING)
        .map(|slot| if slot <= rating { StarSlot::Filled } else { StarSlot::Empty })
        .collect()
}

/// Reviews appended when the customer asks for more
pub fn additional_reviews() -> Vec<Review> {
    vec![
        Review {
            name: "Suresh P.".to_string(),
            rating: 5,
            date: "3 weeks ago".to_string(),
            text: "Outstanding quality and presentation. The hamper made our celebration extra special. Thank you Gracias!".to_string(),
        },
        Review {
            name: "Meera J.".to_string(),
            rating: 4,
            date: "1 month ago".to_string(),
            text: "Very good hamper with nice variety. The packaging was elegant and everything was fresh. Would recommend!".to_string(),
        },
    ]
}

#[derive(Debug, Clone)]
pub struct ReviewFeed {
    pending: Vec<Review>,
    loaded_more: bool,
}

impl ReviewFeed {
    pub fn new(pending: Vec<Review>) -> Self {
        Self {
            pending,
            loaded_more: false,
        }
    }

    pub fn has_more(&self) -> bool {
        !self.loaded_more
    }

    /// Hand out the extra reviews. The button disappears afterwards, so a
    /// second call returns nothing.
    pub fn load_more(&mut self) -> Vec<Review> {
        if self.loaded_more {
            return Vec::new();
        }
        self.loaded_more = true;
        let reviews = std::mem::take(&mut self.pending);
        info!("Loaded {} more reviews", reviews.len());
        reviews
    }
}

impl Default for ReviewFeed {
    fn default() -> Self {
        Self::new(additional_reviews())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_slots() {
        assert_eq!(
            star_slots(4),
            vec![StarSlot::Filled, StarSlot::Filled, StarSlot::Filled, StarSlot::Filled, StarSlot::Empty]
        );
        assert!(star_slots(0).iter().all(|slot| *slot == StarSlot::Empty));
        assert_eq!(star_slots(9).len(), 5);
    }

    #[test]
    fn test_load_more_only_once() {
        let mut feed = ReviewFeed::default();

        let first = feed.load_more();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].name, "Suresh P.");
        assert!(!feed.has_more());
        assert!(feed.load_more().is_empty());
    }
}
