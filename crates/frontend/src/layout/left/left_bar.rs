use contracts::enums::Tab;
use contracts::system::auth::LoginScreenState;
use leptos::prelude::*;
use leptos_router::components::A;

use super::more_menu::MoreMenu;
use super::nav_items::build_left_bar_items;
use crate::layout::bottom_bar::items::{is_selected, use_bottom_bar_items};
use crate::layout::nav_link::NavLink;
use crate::shared::config::{APP_TITLE, LEARN_PATH};
use crate::system::pages::login::LoginScreen;

/// Fixed left navigation bar with the "More" menu and the login overlay it controls.
#[component]
pub fn LeftBar(#[prop(default = None, into)] selected_tab: Option<Tab>) -> impl IntoView {
    let bottom_bar_items = use_bottom_bar_items();
    let (login_screen_state, set_login_screen_state) = signal(LoginScreenState::Hidden);

    view! {
        <nav class="left-bar">
            <A href=LEARN_PATH attr:class="left-bar__brand">
                {APP_TITLE}
            </A>
            <ul class="left-bar__list">
                {move || build_left_bar_items(bottom_bar_items.get()).into_iter().map(|item| {
                    let class = if is_selected(&item, selected_tab) {
                        "left-bar__link left-bar__link--active"
                    } else {
                        "left-bar__link"
                    };
                    view! {
                        <li class="left-bar__entry">
                            <NavLink item=item link_class=class />
                        </li>
                    }
                }).collect_view()}
                <li class="left-bar__entry">
                    <MoreMenu set_login_screen_state=set_login_screen_state />
                </li>
            </ul>
        </nav>

        <LoginScreen
            login_screen_state=login_screen_state
            set_login_screen_state=set_login_screen_state
        />
    }
}
