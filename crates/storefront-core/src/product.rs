use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record as consumed by listing, filter, and sort logic,
/// normalized from whatever shape the backend returned it in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier, stored as a string to avoid precision loss on
    /// numeric backend IDs.
    pub id: String,
    /// Display name. May be empty.
    pub name: String,
    /// Current price. Missing or unparseable input coerces to `0.0`.
    pub price: f64,
    /// Percentage off `price` (0–100). Informational for display only;
    /// filtering and sorting operate on `price`.
    pub discount: Option<f64>,
    /// Size labels, trimmed and non-empty. The backend sends these either
    /// as an array of strings or as one comma-separated string; both forms
    /// normalize to this.
    pub size_tags: Vec<String>,
    /// Popularity signal used by the best-selling sort. Missing coerces to 0.
    pub sales_count: u64,
    /// Creation timestamp. Missing or unparseable input coerces to the Unix
    /// epoch so date sorts stay total.
    pub created_at: DateTime<Utc>,
    /// Every category-identifying string found on the raw record (slug,
    /// display name, nested object fields). Collected once at normalization
    /// time so category matching never re-inspects raw JSON.
    pub category_labels: Vec<String>,
}

impl Product {
    /// Price after applying `discount`, for display purposes.
    ///
    /// Discounts outside 0–100 are clamped into range rather than rejected.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        match self.discount {
            Some(pct) => self.price * (1.0 - pct.clamp(0.0, 100.0) / 100.0),
            None => self.price,
        }
    }

    /// Returns `true` if the product carries the given size tag (exact match).
    #[must_use]
    pub fn has_size_tag(&self, tag: &str) -> bool {
        self.size_tags.iter().any(|t| t == tag)
    }
}
