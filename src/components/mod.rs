//! UI Components
//!
//! Leptos components for the explore feed.

mod category_bar;
mod explore_page;
mod header;
mod masonry_grid;
mod pin_card;

pub use category_bar::{CategoryBar, CATEGORIES};
pub use explore_page::ExplorePage;
pub use header::Header;
pub use masonry_grid::MasonryGrid;
pub use pin_card::PinCard;
