//! Sort stage for product listings.
//!
//! Every ordering is total: equal primary keys fall back to ascending `id`,
//! so repeated sorts of the same sequence always agree.

use std::cmp::Ordering;

use storefront_core::Product;

/// The sort orderings a listing can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by sales count.
    BestSelling,
    /// Ascending by name, case-insensitive.
    NameAsc,
    /// Descending by name, case-insensitive.
    NameDesc,
    /// Ascending by price.
    PriceLow,
    /// Descending by price.
    PriceHigh,
    /// Newest first.
    DateNew,
    /// Oldest first.
    DateOld,
}

impl SortKey {
    /// Parses a frontend sort token. Returns `None` for unrecognized tokens;
    /// callers treat that as "leave the sequence unchanged".
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "best" => Some(SortKey::BestSelling),
            "az" => Some(SortKey::NameAsc),
            "za" => Some(SortKey::NameDesc),
            "priceLow" => Some(SortKey::PriceLow),
            "priceHigh" => Some(SortKey::PriceHigh),
            "dateNew" => Some(SortKey::DateNew),
            "dateOld" => Some(SortKey::DateOld),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_token(&self) -> &'static str {
        match self {
            SortKey::BestSelling => "best",
            SortKey::NameAsc => "az",
            SortKey::NameDesc => "za",
            SortKey::PriceLow => "priceLow",
            SortKey::PriceHigh => "priceHigh",
            SortKey::DateNew => "dateNew",
            SortKey::DateOld => "dateOld",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::BestSelling => b.sales_count.cmp(&a.sales_count),
            SortKey::NameAsc => compare_names(a, b),
            SortKey::NameDesc => compare_names(b, a),
            SortKey::PriceLow => a.price.total_cmp(&b.price),
            SortKey::PriceHigh => b.price.total_cmp(&a.price),
            SortKey::DateNew => b.created_at.cmp(&a.created_at),
            SortKey::DateOld => a.created_at.cmp(&b.created_at),
        }
    }
}

/// Case-insensitive name comparison. Missing names compare as empty strings
/// by construction (normalization defaults them).
fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Returns a newly ordered copy of `products`; the input is left unmodified.
///
/// Ties on the primary key break ascending by `id`, keeping every ordering
/// deterministic.
#[must_use]
pub fn sorted(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut out = products.to_vec();
    out.sort_by(|a, b| key.compare(a, b).then_with(|| a.id.cmp(&b.id)));
    out
}

/// Sorts by a frontend token. Unrecognized tokens return the sequence
/// unchanged (stable passthrough).
#[must_use]
pub fn sorted_by_token(products: &[Product], token: &str) -> Vec<Product> {
    match SortKey::parse(token) {
        Some(key) => sorted(products, key),
        None => products.to_vec(),
    }
}
