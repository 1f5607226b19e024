//! Tag input and removable tag chips for training items.

use leptos::prelude::*;

use crate::state::content_form::ContentForm;

#[component]
pub fn TagEditor(form: RwSignal<ContentForm>) -> impl IntoView {
    let add = move || {
        form.update(|f| {
            f.add_tag_from_input();
        });
    };

    view! {
        <div class="tag-editor">
            <div class="tag-editor__input-row">
                <input
                    class="form__input"
                    type="text"
                    placeholder="Digite uma tag"
                    prop:value=move || form.with(|f| f.tag_input().to_owned())
                    on:input=move |ev| form.update(|f| f.set_tag_input(event_target_value(&ev)))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button type="button" class="btn" on:click=move |_| add()>
                    "Adicionar"
                </button>
            </div>
            <div class="tag-editor__chips">
                <For
                    each=move || form.with(|f| f.draft().tags.clone())
                    key=Clone::clone
                    children=move |tag| {
                        let removed = tag.clone();
                        view! {
                            <span class="tag-editor__chip">
                                {tag}
                                <button
                                    type="button"
                                    class="tag-editor__remove"
                                    title="Remover tag"
                                    on:click=move |_| {
                                        form.update(|f| {
                                            f.remove_tag(&removed);
                                        });
                                    }
                                >
                                    "✕"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </div>
    }
}
