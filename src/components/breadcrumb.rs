//! Breadcrumb Component

use leptos::prelude::*;

/// `parent / current` trail; the parent is a link
#[component]
pub fn Breadcrumb(
    #[prop(into)] parent_label: String,
    #[prop(into)] parent_href: String,
    #[prop(into)] current: String,
) -> impl IntoView {
    view! {
        <nav class="breadcrumb">
            <a class="breadcrumb-link" href=parent_href>{parent_label}</a>
            <span class="breadcrumb-separator">"/"</span>
            <span class="breadcrumb-current" aria-current="page">{current}</span>
        </nav>
    }
}
