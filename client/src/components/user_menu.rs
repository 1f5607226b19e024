//! Header dropdown with the signed-in user's identity and sign-out.

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::session::{MenuIdentity, SessionProvider, SessionState};
use crate::state::user_menu::UserMenuState;

/// Renders nothing while nobody is signed in.
#[component]
pub fn UserMenu(session: RwSignal<SessionState>, provider: Arc<dyn SessionProvider>) -> impl IntoView {
    let menu = RwSignal::new(UserMenuState::default());
    let identity = move || session.with(|s| s.info.as_ref().map(MenuIdentity::from_session));
    let field = move |pick: fn(MenuIdentity) -> String| move || identity().map(pick).unwrap_or_default();

    let sign_out = Callback::new(move |()| {
        if !menu.try_update(UserMenuState::begin_sign_out).unwrap_or(false) {
            return;
        }
        let provider = Arc::clone(&provider);
        leptos::task::spawn_local(async move {
            let result = provider.sign_out().await;
            session.update(|s| {
                menu.update(|m| {
                    m.finish_sign_out(result, s);
                });
            });
        });
    });

    view! {
        <Show when=move || session.with(SessionState::is_signed_in)>
            <div class="user-menu">
                <button type="button" class="user-menu__trigger" on:click=move |_| menu.update(UserMenuState::toggle)>
                    <span class="user-menu__avatar">{field(|i| i.initial)}</span>
                    <span class="user-menu__label">{field(|i| i.button_label)}</span>
                    <span
                        class="user-menu__chevron"
                        class:user-menu__chevron--open=move || menu.with(UserMenuState::is_open)
                    >
                        "▾"
                    </span>
                </button>

                <Show when=move || menu.with(UserMenuState::is_open)>
                    <div class="user-menu__overlay" on:click=move |_| menu.update(UserMenuState::close)></div>
                    <div class="user-menu__dropdown">
                        <div class="user-menu__identity">
                            <p class="user-menu__name">{field(|i| i.header_name)}</p>
                            <p class="user-menu__email">{field(|i| i.email)}</p>
                            {move || {
                                identity()
                                    .and_then(|i| i.cargo)
                                    .map(|cargo| view! { <p class="user-menu__cargo">{cargo}</p> })
                            }}
                            {move || {
                                identity()
                                    .map(|i| {
                                        view! {
                                            <span class=format!("user-menu__badge {}", i.badge.css_modifier())>
                                                {i.badge.label()}
                                            </span>
                                        }
                                    })
                            }}
                        </div>
                        <div class="user-menu__items">
                            <button
                                type="button"
                                class="user-menu__item"
                                on:click=move |_| menu.update(UserMenuState::close)
                            >
                                "Meu Perfil"
                            </button>
                            <Show when=move || identity().is_some_and(|i| i.can_manage_users)>
                                <button
                                    type="button"
                                    class="user-menu__item"
                                    on:click=move |_| menu.update(UserMenuState::close)
                                >
                                    "Gerenciar Usuários"
                                </button>
                            </Show>
                            <div class="user-menu__divider"></div>
                            <button
                                type="button"
                                class="user-menu__item user-menu__item--danger"
                                disabled=move || menu.with(UserMenuState::is_signing_out)
                                on:click=move |_| sign_out.run(())
                            >
                                "Sair"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
