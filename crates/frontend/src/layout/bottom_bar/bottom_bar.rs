use contracts::enums::Tab;
use leptos::prelude::*;

use super::items::{is_selected, use_bottom_bar_items};
use crate::layout::nav_link::NavLink;

/// Compact tab bar shown on narrow screens
#[component]
pub fn BottomBar(#[prop(default = None, into)] selected_tab: Option<Tab>) -> impl IntoView {
    let items = use_bottom_bar_items();

    view! {
        <nav class="bottom-bar">
            <ul class="bottom-bar__list">
                {move || items.get().into_iter().map(|item| {
                    let class = if is_selected(&item, selected_tab) {
                        "bottom-bar__link bottom-bar__link--active"
                    } else {
                        "bottom-bar__link"
                    };
                    view! {
                        <li class="bottom-bar__entry">
                            <NavLink item=item link_class=class />
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
