//! Rich-text body editor for news articles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editable surface is a render of the draft's `richtext::Document`.
//! Browser edits are cancelled in `beforeinput` and replayed as `BodyEdit`s
//! on the form; toolbar buttons apply `richtext::Command`s. After each
//! re-render the caret is written back from the form's selection.

use leptos::prelude::*;
use richtext::Command;

use crate::state::content_form::ContentForm;
use crate::util::editor_dom::body_edit_for;
use crate::util::toolbar::{COLOR_SWATCHES, FONT_SIZE_OPTIONS, FONT_SIZE_PLACEHOLDER, ToolbarButton, font_size_command};

const PLACEHOLDER: &str = "Digite o conteúdo da notícia...";

#[component]
pub fn RichTextEditor(form: RwSignal<ContentForm>) -> impl IntoView {
    let surface = NodeRef::<leptos::html::Div>::new();
    let body_html = move || form.with(|f| richtext::html::to_html_annotated(&f.draft().body));
    let body_empty = move || form.with(|f| f.draft().body.is_empty());
    let size_choice = RwSignal::new(String::new());

    let sync_selection = move || {
        #[cfg(feature = "hydrate")]
        if let Some(el) = surface.get_untracked() {
            if let Some(range) = crate::util::editor_dom::read_selection(&el) {
                form.update(|f| f.set_selection(range));
            }
        }
    };

    let run_command = move |command: Command| {
        sync_selection();
        form.update(|f| f.apply_command(&command));
    };

    let on_beforeinput = move |ev: leptos::ev::InputEvent| {
        ev.prevent_default();
        sync_selection();
        let data = ev.data().or_else(|| {
            #[cfg(feature = "hydrate")]
            {
                ev.data_transfer().and_then(|dt| dt.get_data("text/plain").ok())
            }
            #[cfg(not(feature = "hydrate"))]
            {
                None
            }
        });
        if let Some(edit) = body_edit_for(&ev.input_type(), data) {
            form.update(|f| f.edit_body(edit));
        }
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let selection = form.with(ContentForm::selection);
        // Wait for the surface to show the new body before placing the caret.
        request_animation_frame(move || {
            let Some(el) = surface.get_untracked() else {
                return;
            };
            let focused = document().active_element().is_some_and(|active| active.is_same_node(Some(el.as_ref())));
            if focused {
                crate::util::editor_dom::write_selection(&el, selection);
            }
        });
    });

    let toolbar_button = move |button: ToolbarButton| {
        let label = match button {
            ToolbarButton::Bold => view! { <strong>{button.label()}</strong> }.into_any(),
            ToolbarButton::Italic => view! { <em>{button.label()}</em> }.into_any(),
            ToolbarButton::Underline => view! { <u>{button.label()}</u> }.into_any(),
            _ => button.label().into_any(),
        };
        view! {
            <button
                type="button"
                class="rich-text__button"
                title=button.title()
                on:mousedown=|ev| ev.prevent_default()
                on:click=move |_| match button.command() {
                    Some(command) => run_command(command),
                    None => {
                        sync_selection();
                        form.update(ContentForm::request_link);
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="rich-text">
            <div class="rich-text__toolbar">
                {ToolbarButton::FORMATTING.into_iter().map(toolbar_button).collect_view()}
                <div class="rich-text__divider"></div>
                <select
                    class="rich-text__size"
                    prop:value=move || size_choice.get()
                    on:change=move |ev| {
                        if let Some(command) = font_size_command(&event_target_value(&ev)) {
                            run_command(command);
                        }
                        size_choice.set(String::new());
                    }
                >
                    <option value="">{FONT_SIZE_PLACEHOLDER}</option>
                    {FONT_SIZE_OPTIONS
                        .into_iter()
                        .map(|(step, label)| view! { <option value=step.to_string()>{label}</option> })
                        .collect_view()}
                </select>
                <div class="rich-text__divider"></div>
                {COLOR_SWATCHES
                    .into_iter()
                    .map(|swatch| {
                        view! {
                            <button
                                type="button"
                                class="rich-text__swatch"
                                style=format!("background:{};", swatch.hex)
                                title=swatch.title
                                on:mousedown=|ev| ev.prevent_default()
                                on:click=move |_| {
                                    if let Some(command) = swatch.command() {
                                        run_command(command);
                                    }
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
                <div class="rich-text__divider"></div>
                {ToolbarButton::LISTS.into_iter().map(toolbar_button).collect_view()}
                <div class="rich-text__divider"></div>
                {toolbar_button(ToolbarButton::Link)}
                {toolbar_button(ToolbarButton::ClearFormatting)}
            </div>
            <div class="rich-text__body">
                <div
                    node_ref=surface
                    class="rich-text__surface"
                    contenteditable="true"
                    dir="ltr"
                    inner_html=body_html
                    on:beforeinput=on_beforeinput
                    on:keyup=move |_| sync_selection()
                    on:mouseup=move |_| sync_selection()
                ></div>
                <Show when=body_empty>
                    <div class="rich-text__placeholder">{PLACEHOLDER}</div>
                </Show>
            </div>
        </div>
    }
}
