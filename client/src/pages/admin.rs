//! Content administration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. Shows the header user menu and the actions that open
//! the content modal for a news article or a training item. Categories are
//! fetched once when the page mounts. The page has no listing, so it always
//! opens the form empty; see `AdminModal` for edit mode.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::admin_modal::AdminModal;
use crate::components::user_menu::UserMenu;
use crate::config::PortalConfig;
use crate::net::types::Category;
use crate::state::content_form::{ContentForm, ContentSaver};
use crate::state::draft::ContentKind;
use crate::state::session::{SessionProvider, SessionState};

#[component]
pub fn AdminPage(
    session: RwSignal<SessionState>,
    provider: Arc<dyn SessionProvider>,
    saver: Arc<dyn ContentSaver>,
) -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let max_upload_bytes = config.max_upload_bytes;
    let categories = RwSignal::new(Vec::<Category>::new());
    let form = RwSignal::new(ContentForm::new(ContentKind::News, max_upload_bytes));
    let modal_open = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let api_base = config.api_base.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories(&api_base).await {
                Ok(list) => categories.set(list),
                Err(err) => log::warn!("could not load categories: {err}"),
            }
        });
    }

    let open_modal = move |kind: ContentKind| {
        let mut next = ContentForm::new(kind, max_upload_bytes);
        next.open(None);
        form.set(next);
        notice.set(None);
        modal_open.set(true);
    };
    let on_close = Callback::new(move |()| modal_open.set(false));
    let on_saved = Callback::new(move |()| {
        let kind = form.with_untracked(ContentForm::kind);
        notice.set(Some(kind.saved_notice().to_owned()));
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Painel Administrativo"</h1>
                <UserMenu session=session provider=provider/>
            </header>

            <Show
                when=move || session.with(SessionState::is_signed_in)
                fallback=move || {
                    view! {
                        <p class="admin-page__empty">
                            {move || {
                                if session.with(|s| s.loading) {
                                    "Carregando sessão..."
                                } else {
                                    "Faça login para acessar o painel."
                                }
                            }}
                        </p>
                    }
                }
            >
                <div class="admin-page__actions">
                    <button type="button" class="btn btn--primary" on:click=move |_| open_modal(ContentKind::News)>
                        "Adicionar Notícia"
                    </button>
                    <button type="button" class="btn btn--primary" on:click=move |_| open_modal(ContentKind::Training)>
                        "Adicionar Treinamento"
                    </button>
                </div>
                {move || notice.get().map(|text| view! { <p class="admin-page__notice">{text}</p> })}
            </Show>

            {move || {
                modal_open
                    .get()
                    .then(|| {
                        view! {
                            <AdminModal
                                form=form
                                saver=Arc::clone(&saver)
                                categories=categories
                                on_close=on_close
                                on_saved=on_saved
                            />
                        }
                    })
            }}
        </div>
    }
}
