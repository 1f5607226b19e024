//! Alert and link-prompt dialog layered over the content form.

use leptos::prelude::*;

use crate::state::content_form::{ContentForm, FormDialog};

/// Renders whatever `FormDialog` the form currently holds.
#[component]
pub fn FormDialogView(form: RwSignal<ContentForm>) -> impl IntoView {
    let url = RwSignal::new(String::new());
    let dialog = move || form.with(|f| f.dialog().clone());
    let dismiss = move || form.update(ContentForm::dismiss_dialog);
    let confirm = move || {
        let value = url.get_untracked();
        url.set(String::new());
        form.update(|f| f.confirm_link(&value));
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            ev.stop_propagation();
            url.set(String::new());
            dismiss();
        }
        "Enter" => {
            ev.prevent_default();
            ev.stop_propagation();
            if matches!(form.with_untracked(|f| f.dialog().clone()), FormDialog::LinkPrompt) {
                confirm();
            } else {
                dismiss();
            }
        }
        _ => {}
    };

    move || match dialog() {
        FormDialog::None => ().into_any(),
        FormDialog::Alert(message) => view! {
            <div class="dialog-backdrop dialog-backdrop--nested" on:click=move |_| dismiss()>
                <div
                    class="dialog dialog--alert"
                    role="alertdialog"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <p class="dialog__message">{message}</p>
                    <div class="dialog__actions">
                        <button type="button" class="btn btn--primary" on:click=move |_| dismiss() autofocus=true>
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        FormDialog::LinkPrompt => view! {
            <div class="dialog-backdrop dialog-backdrop--nested" on:click=move |_| dismiss()>
                <div
                    class="dialog dialog--link"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <label class="dialog__label">
                        "Digite a URL do link:"
                        <input
                            class="dialog__input"
                            type="url"
                            placeholder="https://"
                            prop:value=move || url.get()
                            on:input=move |ev| url.set(event_target_value(&ev))
                            autofocus=true
                        />
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| dismiss()>
                            "Cancelar"
                        </button>
                        <button type="button" class="btn btn--primary" on:click=move |_| confirm()>
                            "Inserir"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}
