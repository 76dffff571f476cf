pub mod left_bar;
pub mod more_menu;
pub mod nav_items;

pub use left_bar::LeftBar;
