//! Theme Creation Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_toast::use_toast;

use crate::api::HttpBackend;
use crate::capabilities::RouterNavigator;
use crate::components::{field_error, Breadcrumb, FormField};
use crate::config::routes;
use crate::forms::theme::{self, submit_theme, ThemeForm};
use crate::validation::ValidationErrors;

#[component]
pub fn ThemeCreatePage() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();

    let tmanome = RwSignal::new(String::new());
    let tmapreco = RwSignal::new(String::new());
    let icnnome = RwSignal::new(String::new());
    let icnurl = RwSignal::new(String::new());
    let imgnome = RwSignal::new(String::new());
    let imgurl = RwSignal::new(String::new());
    let pcanome = RwSignal::new(String::new());
    let pcaurl = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() { return; }

        let form = ThemeForm {
            tmanome: tmanome.get_untracked(),
            tmapreco: tmapreco.get_untracked(),
            icnnome: icnnome.get_untracked(),
            icnurl: icnurl.get_untracked(),
            imgnome: imgnome.get_untracked(),
            imgurl: imgurl.get_untracked(),
            pcanome: pcanome.get_untracked(),
            pcaurl: pcaurl.get_untracked(),
        };
        let navigator = RouterNavigator::new(navigate.clone());
        set_submitting.set(true);

        spawn_local(async move {
            let backend = HttpBackend::default();
            let outcome = submit_theme(&form, &backend, &toast, &navigator).await;
            errors.set(outcome.errors().cloned().unwrap_or_default());
            set_submitting.set(false);
        });
    };

    view! {
        <form class="theme-form" on:submit=on_submit>
            <Breadcrumb parent_label="Temas" parent_href=routes::THEME_LIST current="Criar" />

            <h3 class="section-heading">"Tema"</h3>
            <hr class="divider" />
            <FormField label="Nome do Tema" value=tmanome error=field_error(errors, theme::FIELD_TMANOME) />
            <FormField
                label="Preço do Tema"
                input_type="number"
                value=tmapreco
                error=field_error(errors, theme::FIELD_TMAPRECO)
            />

            <h3 class="section-heading">"Ícone"</h3>
            <hr class="divider" />
            <FormField label="Nome do Ícone" value=icnnome error=field_error(errors, theme::FIELD_ICNNOME) />
            <FormField label="URL do Ícone" value=icnurl error=field_error(errors, theme::FIELD_ICNURL) />

            <h3 class="section-heading">"Imagem"</h3>
            <hr class="divider" />
            <FormField label="Nome da Imagem" value=imgnome error=field_error(errors, theme::FIELD_IMGNOME) />
            <FormField label="URL da Imagem" value=imgurl error=field_error(errors, theme::FIELD_IMGURL) />

            <h3 class="section-heading">"Peça"</h3>
            <hr class="divider" />
            <FormField label="Nome da Peça" value=pcanome error=field_error(errors, theme::FIELD_PCANOME) />
            <FormField label="URL da Peça" value=pcaurl error=field_error(errors, theme::FIELD_PCAURL) />

            <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                "Salvar"
            </button>
        </form>
    }
}
