//! Root application component with routing and the session lifecycle.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PortalConfig;
use crate::net::api::{HttpContentSaver, HttpSessionProvider};
use crate::pages::admin::AdminPage;
use crate::state::content_form::ContentSaver;
use crate::state::session::{SessionProvider, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session once at startup and hands it, with the REST
/// collaborators, to the admin page as props.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::from_env();
    let provider: Arc<dyn SessionProvider> = Arc::new(HttpSessionProvider::new(config.api_base.clone()));
    let saver: Arc<dyn ContentSaver> = Arc::new(HttpContentSaver::new(config.api_base.clone()));
    let session = RwSignal::new(SessionState::default());
    provide_context(config);

    #[cfg(feature = "hydrate")]
    {
        let provider = Arc::clone(&provider);
        session.update(SessionState::begin_loading);
        leptos::task::spawn_local(async move {
            let result = provider.current_session().await;
            session.update(|s| s.finish_loading(result));
        });
    }

    let admin_view = move || {
        view! { <AdminPage session=session provider=Arc::clone(&provider) saver=Arc::clone(&saver)/> }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal - Administração"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=admin_view.clone()/>
                <Route path=StaticSegment("admin") view=admin_view/>
            </Routes>
        </Router>
    }
}
