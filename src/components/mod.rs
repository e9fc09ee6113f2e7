//! UI Components
//!
//! Reusable Leptos components.

mod category_grid;
mod navbar;
mod product_card;
mod product_detail;
mod product_filters;
mod product_search;
mod product_table;
mod related_products;

pub use category_grid::CategoryGrid;
pub use navbar::Navbar;
pub use product_card::{ProductCard, StockBadge};
pub use product_detail::ProductDetail;
pub use product_filters::ProductFilters;
pub use product_search::ProductSearch;
pub use product_table::ProductTable;
pub use related_products::RelatedProducts;
