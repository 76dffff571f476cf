//! Static configuration baked into the client bundle.

/// Brand shown at the top of the left bar
pub const APP_TITLE: &str = "Fluent Flow";

pub const LEARN_PATH: &str = "/learn";
pub const SETTINGS_PATH: &str = "/settings/account";

pub const SUPPORT_URL: &str = "https://support.duolingo.com/hc/en-us";
pub const TRANSLATOR_URL: &str = "https://translator-soham-2024.web.app";

/// localStorage key holding the serialized session
pub const SESSION_STORAGE_KEY: &str = "fluent_flow_session";
