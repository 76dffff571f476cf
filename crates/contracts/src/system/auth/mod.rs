use serde::{Deserialize, Serialize};

/// Which variant of the login overlay is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginScreenState {
    #[default]
    Hidden,
    Login,
    Signup,
}

impl LoginScreenState {
    pub fn is_shown(&self) -> bool {
        !matches!(self, LoginScreenState::Hidden)
    }

    /// Login <-> Signup switch offered inside the overlay
    pub fn switched(&self) -> Self {
        match self {
            LoginScreenState::Hidden => LoginScreenState::Hidden,
            LoginScreenState::Login => LoginScreenState::Signup,
            LoginScreenState::Signup => LoginScreenState::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Only collected on signup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
}
