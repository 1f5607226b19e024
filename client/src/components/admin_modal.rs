//! Modal form for creating and editing news and training items.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the `RwSignal<ContentForm>` and opens it; this component
//! only forwards events to the controller and runs the save through the
//! `ContentSaver` it is given. News shows the rich-text body, author and
//! featured flag; training shows the attachment, description and tags.
//!
//! Edit mode is entered by the owner calling `ContentForm::open` with the
//! record before mounting the modal. `AdminPage` only creates new items, so
//! editing is for screens that embed the modal next to a listing.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::category_selector::CategorySelector;
use crate::components::form_dialog::FormDialogView;
use crate::components::rich_text_editor::RichTextEditor;
use crate::components::tag_editor::TagEditor;
use crate::config::PortalConfig;
use crate::net::types::Category;
use crate::state::attachment::ACCEPT_ATTRIBUTE;
use crate::state::content_form::{ContentForm, ContentSaver, FormDialog, SubmitOutcome};
use crate::state::draft::FieldEdit;
use crate::util::file_input::picked_label;

#[component]
pub fn AdminModal(
    form: RwSignal<ContentForm>,
    saver: Arc<dyn ContentSaver>,
    categories: RwSignal<Vec<Category>>,
    on_close: Callback<()>,
    #[prop(optional)] on_saved: Option<Callback<()>>,
) -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let max_mb = config.max_upload_bytes / (1024 * 1024);
    let is_training = form.with_untracked(|f| f.kind().is_training());
    let title_placeholder = if is_training { "Nome do treinamento" } else { "Título da notícia" };

    let close = move || {
        if form.try_update(ContentForm::close).unwrap_or(false) {
            on_close.run(());
        }
    };
    let saving = move || form.with(ContentForm::is_submitting);

    let submit = Callback::new(move |()| {
        let Some(Ok(request)) = form.try_update(ContentForm::begin_submit) else {
            return;
        };
        let saver = Arc::clone(&saver);
        leptos::task::spawn_local(async move {
            let result = saver.save(&request).await;
            if form.try_update(|f| f.finish_submit(result)).flatten() == Some(SubmitOutcome::Saved) {
                on_close.run(());
                if let Some(on_saved) = on_saved {
                    on_saved.run(());
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.run(());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let dialog_open = form.with_untracked(|f| *f.dialog() != FormDialog::None);
        if ev.key() == "Escape" && !dialog_open {
            ev.prevent_default();
            close();
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::file_input::{describe, picked_file, read_bytes};

            let picked = picked_file(&ev);
            let pick = form.try_update(|f| f.pick_file(picked.as_ref().map(describe))).flatten();
            if let (Some(pick), Some(file)) = (pick, picked) {
                leptos::task::spawn_local(async move {
                    match read_bytes(&file).await {
                        Ok(bytes) => form.update(|f| {
                            f.attach_contents(pick, file.type_(), bytes);
                        }),
                        Err(err) => {
                            log::warn!("could not read {}: {err}", file.name());
                            form.update(|f| {
                                f.contents_failed(pick);
                            });
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let text_field = move |edit: fn(String) -> FieldEdit| move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set_field(edit(value)));
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--content"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{move || form.with(ContentForm::heading)}</h2>
                    <button
                        type="button"
                        class="dialog__close"
                        title="Fechar"
                        disabled=saving
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                </div>

                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Título *"
                        <input
                            class="form__input"
                            type="text"
                            required=true
                            placeholder=title_placeholder
                            prop:value=move || form.with(|f| f.draft().title.clone())
                            on:input=text_field(FieldEdit::Title)
                        />
                    </label>

                    <div class="form__label">
                        "Categoria *"
                        <CategorySelector form=form categories=categories/>
                    </div>

                    <Show when=move || is_training>
                        <div class="form__label">
                            {move || format!("Arquivo (PPT/PDF) {}", form.with(ContentForm::file_required_marker))}
                            <label class="upload">
                                <input
                                    class="upload__input"
                                    type="file"
                                    accept=ACCEPT_ATTRIBUTE
                                    on:change=on_file_change
                                />
                                <span class="upload__hint">"Clique para selecionar um arquivo ou arraste aqui"</span>
                                <span class="upload__formats">
                                    {format!("Formatos aceitos: PDF, PPT, PPTX (máx. {max_mb}MB)")}
                                </span>
                                <Show when=move || form.with(ContentForm::shows_keep_file_hint)>
                                    <span class="upload__keep">"Deixe vazio para manter o arquivo atual"</span>
                                </Show>
                            </label>
                            {move || {
                                form.with(|f| f.pending_file().map(picked_label))
                                    .map(|label| view! { <div class="upload__picked">{label}</div> })
                            }}
                            <Show when=move || !form.with(|f| f.validation().is_valid())>
                                <div class="upload__errors">
                                    <span class="upload__errors-title">"Arquivo inválido:"</span>
                                    <ul>
                                        {move || {
                                            form.with(|f| f.validation().errors.clone())
                                                .into_iter()
                                                .map(|err| view! { <li>{err}</li> })
                                                .collect_view()
                                        }}
                                    </ul>
                                </div>
                            </Show>
                        </div>
                    </Show>

                    <div class="form__label">
                        {if is_training { "Descrição *" } else { "Conteúdo *" }}
                        <Show
                            when=move || is_training
                            fallback=move || view! { <RichTextEditor form=form/> }
                        >
                            <textarea
                                class="form__input form__textarea"
                                required=true
                                placeholder="Descrição do treinamento"
                                prop:value=move || form.with(|f| f.draft().description.clone())
                                on:input=text_field(FieldEdit::Description)
                            ></textarea>
                        </Show>
                    </div>

                    <Show when=move || is_training>
                        <div class="form__label">
                            "Tags"
                            <TagEditor form=form/>
                        </div>
                    </Show>

                    <Show when=move || !is_training>
                        <label class="form__label">
                            "Autor"
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Nome do autor"
                                prop:value=move || form.with(|f| f.draft().author.clone())
                                on:input=text_field(FieldEdit::Author)
                            />
                        </label>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.draft().featured)
                                on:change=move |ev| {
                                    form.update(|f| f.set_field(FieldEdit::Featured(event_target_checked(&ev))));
                                }
                            />
                            "Marcar como destaque"
                        </label>
                    </Show>

                    <div class="dialog__actions">
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || !form.with(ContentForm::can_submit)
                        >
                            {move || form.with(ContentForm::submit_label)}
                        </button>
                        <button type="button" class="btn" disabled=saving on:click=move |_| close()>
                            "Cancelar"
                        </button>
                    </div>
                </form>

                <FormDialogView form=form/>
            </div>
        </div>
    }
}
