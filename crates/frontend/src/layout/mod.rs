pub mod bottom_bar;
pub mod left;
pub mod nav_link;

use bottom_bar::BottomBar;
use contracts::enums::Tab;
use left::LeftBar;
use leptos::prelude::*;

/// Page frame shared by every route.
///
/// ```text
/// +----------+------------------------+
/// |          |                        |
/// | LeftBar  |        Content         |
/// |          |                        |
/// |          +------------------------+
/// |          |  BottomBar (mobile)    |
/// +----------+------------------------+
/// ```
#[component]
pub fn Shell(
    #[prop(default = None, into)] selected_tab: Option<Tab>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <LeftBar selected_tab=selected_tab />
            <main class="app-main">
                {children()}
            </main>
            <BottomBar selected_tab=selected_tab />
        </div>
    }
}
