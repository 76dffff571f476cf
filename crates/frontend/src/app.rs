use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
