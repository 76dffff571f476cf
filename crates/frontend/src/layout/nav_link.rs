use leptos::prelude::*;
use leptos_router::components::A;

use super::bottom_bar::NavigationItem;
use crate::shared::icons::icon;

/// Renders an item as a router link, or a plain anchor for external targets
#[component]
pub fn NavLink(item: NavigationItem, link_class: &'static str) -> impl IntoView {
    if item.is_external() {
        view! {
            <a href=item.href class=link_class>
                {icon(item.icon)}
                <span class="nav-link__label">{item.name}</span>
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=item.href attr:class=link_class>
                {icon(item.icon)}
                <span class="nav-link__label">{item.name}</span>
            </A>
        }
        .into_any()
    }
}
