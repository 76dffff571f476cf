//! "More" overflow menu of the left bar.
//!
//! The panel opens on click or hover. Hover events always win over the
//! click toggle: entering forces it open, leaving forces it closed.

use contracts::system::auth::LoginScreenState;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::config::{SETTINGS_PATH, SUPPORT_URL};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoreMenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoreMenuEvent {
    Click,
    PointerEnter,
    PointerLeave,
}

impl MoreMenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MoreMenuState::Open)
    }

    pub fn next(self, event: MoreMenuEvent) -> Self {
        match event {
            MoreMenuEvent::Click => match self {
                MoreMenuState::Closed => MoreMenuState::Open,
                MoreMenuState::Open => MoreMenuState::Closed,
            },
            MoreMenuEvent::PointerEnter => MoreMenuState::Open,
            MoreMenuEvent::PointerLeave => MoreMenuState::Closed,
        }
    }
}

/// Actions offered inside the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateProfile,
    SignOut,
}

impl MenuAction {
    pub fn run(self, set_login_screen: impl FnOnce(LoginScreenState), log_out: impl FnOnce()) {
        match self {
            MenuAction::CreateProfile => set_login_screen(LoginScreenState::Signup),
            MenuAction::SignOut => log_out(),
        }
    }
}

#[component]
pub fn MoreMenu(set_login_screen_state: WriteSignal<LoginScreenState>) -> impl IntoView {
    let session = use_session();
    let menu_state = RwSignal::new(MoreMenuState::default());

    let dispatch = move |event: MoreMenuEvent| {
        menu_state.update(|state| *state = state.next(event));
    };

    let run_action = move |action: MenuAction| {
        log::debug!("more menu: {:?}", action);
        action.run(
            |state| set_login_screen_state.set(state),
            || session.log_out(),
        );
    };

    view! {
        <div
            class="left-bar__more"
            role="button"
            tabindex="0"
            on:click=move |_| dispatch(MoreMenuEvent::Click)
            on:mouseenter=move |_| dispatch(MoreMenuEvent::PointerEnter)
            on:mouseleave=move |_| dispatch(MoreMenuEvent::PointerLeave)
        >
            {icon("more")}
            <span class="left-bar__more-label">"More"</span>

            // Stays mounted while closed
            <div class="more-menu" class:hidden=move || !menu_state.get().is_open()>
                <div class="more-menu__section">
                    <button
                        class="more-menu__item"
                        on:click=move |_| run_action(MenuAction::CreateProfile)
                    >
                        "Create a profile"
                    </button>
                    <A href=SETTINGS_PATH attr:class="more-menu__item">
                        "Settings"
                    </A>
                    <a class="more-menu__item" href=SUPPORT_URL>
                        "Help"
                    </a>
                    <button
                        class="more-menu__item"
                        on:click=move |_| run_action(MenuAction::SignOut)
                    >
                        "Sign out"
                    </button>
                </div>
            </div>
        </div>
    }
}
