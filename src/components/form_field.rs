//! Form Field Component
//!
//! Labelled text input with its validation message.

use leptos::prelude::*;

use crate::validation::ValidationErrors;

/// Input bound to `value`; shows `error` below when present
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form-control">
            <label class="form-label">{label}</label>
            <input
                type=input_type
                class="form-input"
                class:invalid=move || error.get().is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <span class="error-message">{message}</span>
            })}
        </div>
    }
}

/// Message for `field`, tracked from the form's error set
pub fn field_error(errors: RwSignal<ValidationErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}
