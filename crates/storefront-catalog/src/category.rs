//! Tolerant category membership matching.
//!
//! Category identifiers arrive inconsistently from the backend — slug vs.
//! display name, hyphenated vs. spaced, mixed case — and the route token the
//! frontend navigates with may use yet another spelling. Matching normalizes
//! both sides and accepts hyphen/space variants so no backend change is
//! needed to reconcile them.

use storefront_core::Product;

/// Normalizes a category label or route token: lowercase, trim, collapse
/// internal whitespace runs to single spaces.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decides whether a product belongs to the category identified by `token`.
///
/// An empty token matches every product (no filtering). Otherwise the token
/// is accepted in its normalized form and its hyphenated form, and every
/// candidate label on the product is checked both as-is and hyphenated.
#[must_use]
pub fn matches_route_token(product: &Product, token: &str) -> bool {
    let normalized_token = normalize_label(token);
    if normalized_token.is_empty() {
        return true;
    }
    let hyphenated_token = normalized_token.replace(' ', "-");
    let accepted = [normalized_token.as_str(), hyphenated_token.as_str()];

    product.category_labels.iter().any(|label| {
        let normalized = normalize_label(label);
        let hyphenated = normalized.replace(' ', "-");
        accepted.contains(&normalized.as_str()) || accepted.contains(&hyphenated.as_str())
    })
}

/// Keeps only the products matching the route token. Empty token keeps all.
#[must_use]
pub fn filter_by_category(products: &[Product], token: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_route_token(p, token))
        .cloned()
        .collect()
}
