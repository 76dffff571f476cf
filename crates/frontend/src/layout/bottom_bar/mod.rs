pub mod bottom_bar;
pub mod items;

pub use bottom_bar::BottomBar;
pub use items::{use_bottom_bar_items, NavigationItem};
