//! Customer reviews and rating aggregation.

use serde::{Deserialize, Serialize};

use crate::ids::{ProductId, ReviewId};

/// A customer review of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Product being reviewed.
    pub product_id: ProductId,
    /// Display name of the reviewer.
    pub author: String,
    /// Star rating, 1 to 5.
    pub rating: i64,
    /// Review text.
    pub comment: String,
    /// Unix timestamp when posted.
    pub posted_at: i64,
}

/// Aggregated rating shown on product cards and the detail page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RatingSummary {
    /// Average star rating.
    pub average: f64,
    /// Number of ratings.
    pub count: i64,
}

impl RatingSummary {
    /// Create a summary from known values.
    pub fn new(average: f64, count: i64) -> Self {
        Self { average, count }
    }

    /// Aggregate a list of reviews. An empty list yields a zero summary.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }
        let sum: i64 = reviews.iter().map(|r| r.rating).sum();
        Self {
            average: sum as f64 / reviews.len() as f64,
            count: reviews.len() as i64,
        }
    }

    /// Whole stars for display (average rounded down).
    pub fn full_stars(&self) -> i64 {
        self.average.floor() as i64
    }

    /// Check if the product has any ratings.
    pub fn is_rated(&self) -> bool {
        self.count > 0
    }
}
