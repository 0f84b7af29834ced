pub mod category;
pub mod listing;
pub mod price;
pub mod sizes;
pub mod sort;

pub use category::filter_by_category;
pub use listing::Listing;
pub use price::{filter_by_price, price_bounds, PriceWindow};
pub use sizes::{filter_by_sizes, SizeFacets};
pub use sort::{sorted, sorted_by_token, SortKey};
