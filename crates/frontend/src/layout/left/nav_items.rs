use crate::layout::bottom_bar::NavigationItem;
use crate::shared::config::TRANSLATOR_URL;

/// Position of the Translator entry in the left bar
pub const TRANSLATOR_INDEX: usize = 1;

pub fn translator_item() -> NavigationItem {
    NavigationItem {
        name: "Translator",
        href: TRANSLATOR_URL,
        icon: "translator",
    }
}

/// Left bar entries: the tab list with Translator placed right after the first tab.
///
/// An empty tab list yields Translator alone.
pub fn build_left_bar_items(items: Vec<NavigationItem>) -> Vec<NavigationItem> {
    let mut built = items;
    let at = TRANSLATOR_INDEX.min(built.len());
    built.insert(at, translator_item());
    built
}
