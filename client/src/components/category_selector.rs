//! Category dropdown, with ad-hoc creation for training items.

use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::categories::{new_category, options_for};
use crate::state::content_form::ContentForm;
use crate::state::draft::FieldEdit;

#[component]
pub fn CategorySelector(form: RwSignal<ContentForm>, categories: RwSignal<Vec<Category>>) -> impl IntoView {
    let kind = form.with_untracked(ContentForm::kind);
    let creating = RwSignal::new(String::new());

    let current = move || form.with(|f| f.draft().category.clone());
    let options = move || categories.with(|all| options_for(all, kind, &current()));

    let on_create = move || {
        let Some(name) = new_category(kind, &creating.get_untracked()) else {
            return;
        };
        categories.update(|all| {
            if !all.iter().any(|c| c.nome == name && c.tipo == kind.collection()) {
                all.push(Category { id: None, nome: name.clone(), tipo: kind.collection().to_owned() });
            }
        });
        form.update(|f| f.set_field(FieldEdit::Category(name)));
        creating.set(String::new());
    };

    view! {
        <div class="category-selector">
            <select
                class="form__input category-selector__select"
                required=true
                prop:value=current
                on:change=move |ev| form.update(|f| f.set_field(FieldEdit::Category(event_target_value(&ev))))
            >
                <option value="">"Selecione uma categoria"</option>
                {move || {
                    options()
                        .into_iter()
                        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                        .collect_view()
                }}
            </select>
            <Show when=move || kind.allows_category_creation()>
                <div class="category-selector__create">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Nova categoria"
                        prop:value=move || creating.get()
                        on:input=move |ev| creating.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_create();
                            }
                        }
                    />
                    <button type="button" class="btn" on:click=move |_| on_create()>
                        "Criar"
                    </button>
                </div>
            </Show>
        </div>
    }
}
