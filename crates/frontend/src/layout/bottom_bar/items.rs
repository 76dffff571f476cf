use contracts::enums::Tab;
use leptos::prelude::*;

use crate::system::auth::context::use_session;

/// One linked, iconified entry of a navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub href: &'static str,
    /// Key understood by `shared::icons::icon`
    pub icon: &'static str,
}

impl NavigationItem {
    /// Absolute URLs leave the app instead of going through the router
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

impl From<Tab> for NavigationItem {
    fn from(tab: Tab) -> Self {
        let icon = match tab {
            Tab::Learn => "learn",
            Tab::Profile => "profile",
            Tab::Leaderboards => "leaderboards",
            Tab::Shop => "shop",
        };
        Self {
            name: tab.name(),
            href: tab.href(),
            icon,
        }
    }
}

/// Tabs available for the given login state, in display order.
pub fn bottom_bar_items(logged_in: bool) -> Vec<NavigationItem> {
    let tabs = if logged_in {
        vec![Tab::Learn, Tab::Profile, Tab::Leaderboards, Tab::Shop]
    } else {
        vec![Tab::Learn, Tab::Shop]
    };
    tabs.into_iter().map(NavigationItem::from).collect()
}

/// Reactive tab list that follows the session's login state
pub fn use_bottom_bar_items() -> Memo<Vec<NavigationItem>> {
    let session = use_session();
    Memo::new(move |_| bottom_bar_items(session.logged_in.get()))
}

/// Exact, case-sensitive name match
pub fn name_matches(item: &NavigationItem, name: &str) -> bool {
    item.name == name
}

/// Whether `item` is the selected tab's entry
pub fn is_selected(item: &NavigationItem, selected_tab: Option<Tab>) -> bool {
    selected_tab.is_some_and(|tab| name_matches(item, tab.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::context::SessionStore;
    use crate::system::auth::storage::StoredSession;

    fn names(items: &[NavigationItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.name).collect()
    }

    #[test]
    fn test_logged_out_items() {
        assert_eq!(names(&bottom_bar_items(false)), vec!["Learn", "Shop"]);
    }

    #[test]
    fn test_logged_in_items() {
        assert_eq!(
            names(&bottom_bar_items(true)),
            vec!["Learn", "Profile", "Leaderboards", "Shop"]
        );
    }

    #[test]
    fn test_item_from_tab() {
        let item = NavigationItem::from(Tab::Leaderboards);
        assert_eq!(item.href, "/leaderboard");
        assert_eq!(item.icon, "leaderboards");
        assert!(!item.is_external());
    }

    #[test]
    fn test_is_selected() {
        let shop = NavigationItem::from(Tab::Shop);
        assert!(is_selected(&shop, Some(Tab::Shop)));
        assert!(!is_selected(&shop, Some(Tab::Learn)));
        assert!(!is_selected(&shop, None));
    }

    #[test]
    fn test_name_matches_is_exact() {
        let learn = NavigationItem::from(Tab::Learn);
        assert!(name_matches(&learn, "Learn"));
        assert!(!name_matches(&learn, "learn"));
        assert!(!name_matches(&learn, "Lear"));
    }

    #[test]
    fn test_items_follow_login_state() {
        let owner = Owner::new();
        owner.with(|| {
            let session = SessionStore::from_stored(StoredSession::default());
            provide_context(session);
            let items = use_bottom_bar_items();
            assert_eq!(names(&items.get_untracked()), vec!["Learn", "Shop"]);

            session.log_in("ada".to_string());
            assert_eq!(
                names(&items.get_untracked()),
                vec!["Learn", "Profile", "Leaderboards", "Shop"]
            );

            session.log_out();
            assert_eq!(names(&items.get_untracked()), vec!["Learn", "Shop"]);
        });
    }

    #[test]
    fn test_is_external() {
        let item = NavigationItem {
            name: "Help",
            href: "https://example.com/help",
            icon: "help",
        };
        assert!(item.is_external());
    }
}
