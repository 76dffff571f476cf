use contracts::system::auth::{LoginRequest, LoginScreenState};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{use_session, SessionStore};

/// Check the overlay form and build the request for the active variant.
pub fn validate_login_form(
    state: LoginScreenState,
    username: &str,
    password: &str,
    age: &str,
) -> Result<LoginRequest, String> {
    if !state.is_shown() {
        return Err("Login screen is not open".to_string());
    }
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    if password.trim().is_empty() {
        return Err("Password is required".to_string());
    }

    let age = match state {
        LoginScreenState::Signup => {
            let parsed: i64 = age
                .trim()
                .parse()
                .map_err(|_| "Age must be a number".to_string())?;
            if !(1..=150).contains(&parsed) {
                return Err("Age must be between 1 and 150".to_string());
            }
            u8::try_from(parsed).ok()
        }
        _ => None,
    };

    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
        age,
    })
}

/// Field values of the overlay form
#[derive(Clone, Copy)]
pub struct LoginForm {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub age: RwSignal<String>,
    pub error_message: RwSignal<Option<String>>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            age: RwSignal::new(String::new()),
            error_message: RwSignal::new(None),
        }
    }

    /// Validate and log in. Secrets are cleared on success; the username is kept.
    pub fn submit(&self, state: LoginScreenState, session: &SessionStore) -> bool {
        let result = validate_login_form(
            state,
            &self.username.get_untracked(),
            &self.password.get_untracked(),
            &self.age.get_untracked(),
        );

        match result {
            Ok(request) => {
                log::debug!("login screen: accepted form for '{}'", request.username);
                self.error_message.set(None);
                self.password.set(String::new());
                self.age.set(String::new());
                session.log_in(request.username);
                true
            }
            Err(e) => {
                log::debug!("login screen: rejected form: {}", e);
                self.error_message.set(Some(e));
                false
            }
        }
    }
}

/// Sign-in / sign-up overlay driven by the owner's `LoginScreenState`
#[component]
pub fn LoginScreen(
    login_screen_state: ReadSignal<LoginScreenState>,
    set_login_screen_state: WriteSignal<LoginScreenState>,
) -> impl IntoView {
    let session = use_session();
    let form = LoginForm::new();
    let LoginForm {
        username,
        password,
        age,
        error_message,
    } = form;

    // A session that became active elsewhere closes the overlay
    Effect::new(move |_| {
        if session.logged_in.get() && login_screen_state.get().is_shown() {
            set_login_screen_state.set(LoginScreenState::Hidden);
        }
    });

    let is_signup = move || login_screen_state.get() == LoginScreenState::Signup;

    let close = move |_| {
        error_message.set(None);
        set_login_screen_state.set(LoginScreenState::Hidden);
    };

    let switch_variant = move |_| {
        error_message.set(None);
        set_login_screen_state.update(|state| *state = state.switched());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if form.submit(login_screen_state.get_untracked(), &session) {
            set_login_screen_state.set(LoginScreenState::Hidden);
        }
    };

    view! {
        <div class="login-screen" class:hidden=move || !login_screen_state.get().is_shown()>
            <header class="login-screen__header">
                <button class="login-screen__close" on:click=close title="Close">
                    {icon("x")}
                </button>
                <button class="login-screen__switch" on:click=switch_variant>
                    {move || if is_signup() { "Login" } else { "Sign up" }}
                </button>
            </header>

            <div class="login-screen__box">
                <h2>{move || if is_signup() { "Create your profile" } else { "Log in" }}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=is_signup>
                        <div class="form-group">
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="Age"
                                prop:value=move || age.get()
                                on:input=move |ev| age.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <input
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        {move || if is_signup() { "Create account" } else { "Log in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::StoredSession;

    #[test]
    fn test_login_variant_ignores_age() {
        let req = validate_login_form(LoginScreenState::Login, " ada ", "pw", "abc").unwrap();
        assert_eq!(req.username, "ada");
        assert_eq!(req.password, "pw");
        assert_eq!(req.age, None);
    }

    #[test]
    fn test_signup_requires_valid_age() {
        let req = validate_login_form(LoginScreenState::Signup, "ada", "pw", " 36 ").unwrap();
        assert_eq!(req.age, Some(36));

        assert!(validate_login_form(LoginScreenState::Signup, "ada", "pw", "").is_err());
        assert!(validate_login_form(LoginScreenState::Signup, "ada", "pw", "0").is_err());
        assert!(validate_login_form(LoginScreenState::Signup, "ada", "pw", "151").is_err());
    }

    #[test]
    fn test_out_of_range_age_reports_range() {
        let range = Err("Age must be between 1 and 150".to_string());
        assert_eq!(validate_login_form(LoginScreenState::Signup, "ada", "pw", "300"), range);
        assert_eq!(validate_login_form(LoginScreenState::Signup, "ada", "pw", "-5"), range);
        assert_eq!(
            validate_login_form(LoginScreenState::Signup, "ada", "pw", "old"),
            Err("Age must be a number".to_string())
        );
    }

    #[test]
    fn test_submit_clears_secrets_for_next_signup() {
        let owner = Owner::new();
        owner.with(|| {
            let session = SessionStore::from_stored(StoredSession::default());
            let form = LoginForm::new();
            form.username.set("ada".to_string());
            form.password.set("secret".to_string());
            form.age.set("36".to_string());

            assert!(form.submit(LoginScreenState::Signup, &session));
            assert!(session.logged_in.get_untracked());
            assert_eq!(form.password.get_untracked(), "");
            assert_eq!(form.age.get_untracked(), "");
            assert_eq!(form.username.get_untracked(), "ada");

            // signed out and reopened: the cleared password must be entered again
            session.log_out();
            assert!(!form.submit(LoginScreenState::Signup, &session));
            assert_eq!(
                form.error_message.get_untracked().as_deref(),
                Some("Password is required")
            );
            assert!(!session.logged_in.get_untracked());
        });
    }

    #[test]
    fn test_missing_credentials() {
        assert_eq!(
            validate_login_form(LoginScreenState::Login, "  ", "pw", ""),
            Err("Username is required".to_string())
        );
        assert_eq!(
            validate_login_form(LoginScreenState::Login, "ada", "", ""),
            Err("Password is required".to_string())
        );
    }

    #[test]
    fn test_hidden_screen_rejects_submit() {
        assert!(validate_login_form(LoginScreenState::Hidden, "ada", "pw", "").is_err());
    }
}
