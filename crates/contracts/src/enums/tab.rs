use serde::{Deserialize, Serialize};

/// Primary navigation tabs of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Learn,
    Profile,
    Leaderboards,
    Shop,
}

impl Tab {
    /// Display label, also the key the navigation highlighter matches on
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Learn => "Learn",
            Tab::Profile => "Profile",
            Tab::Leaderboards => "Leaderboards",
            Tab::Shop => "Shop",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Tab::Learn => "/learn",
            Tab::Profile => "/profile",
            Tab::Leaderboards => "/leaderboard",
            Tab::Shop => "/shop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboards_route_differs_from_name() {
        assert_eq!(Tab::Leaderboards.name(), "Leaderboards");
        assert_eq!(Tab::Leaderboards.href(), "/leaderboard");
    }

    #[test]
    fn test_serde_uses_variant_names() {
        assert_eq!(serde_json::to_string(&Tab::Leaderboards).unwrap(), "\"Leaderboards\"");
        let tab: Tab = serde_json::from_str("\"Profile\"").unwrap();
        assert_eq!(tab, Tab::Profile);
    }
}
