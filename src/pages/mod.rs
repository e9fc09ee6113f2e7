//! Pages
//!
//! One component per route.

mod categories_page;
mod home;
mod listing_page;
mod product_page;

pub use categories_page::CategoriesPage;
pub use home::HomePage;
pub use listing_page::ListingPage;
pub use product_page::ProductPage;
