use contracts::enums::Tab;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::layout::Shell;
use crate::shared::config::LEARN_PATH;
use crate::system::auth::context::use_session;

#[component]
fn TabPage(tab: Tab) -> impl IntoView {
    view! {
        <Shell selected_tab=tab>
            <h1 class="page__title">{tab.name()}</h1>
        </Shell>
    }
}

#[component]
fn ProfilePage() -> impl IntoView {
    let session = use_session();

    view! {
        <Shell selected_tab=Tab::Profile>
            <h1 class="page__title">{Tab::Profile.name()}</h1>
            <p class="page__text">
                {move || session.username.get().unwrap_or_else(|| "Guest".to_string())}
            </p>
        </Shell>
    }
}

#[component]
fn SettingsPage() -> impl IntoView {
    let session = use_session();

    view! {
        <Shell>
            <h1 class="page__title">"Account settings"</h1>
            <p class="page__text">
                {move || match session.username.get() {
                    Some(name) => format!("Signed in as {}", name),
                    None => "You are not signed in".to_string(),
                }}
            </p>
        </Shell>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Shell>
            <h1 class="page__title">"Page not found"</h1>
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=LEARN_PATH /> } />
                <Route path=path!("/learn") view=|| view! { <TabPage tab=Tab::Learn /> } />
                <Route path=path!("/profile") view=ProfilePage />
                <Route path=path!("/leaderboard") view=|| view! { <TabPage tab=Tab::Leaderboards /> } />
                <Route path=path!("/shop") view=|| view! { <TabPage tab=Tab::Shop /> } />
                <Route path=path!("/settings/account") view=SettingsPage />
            </Routes>
        </Router>
    }
}
