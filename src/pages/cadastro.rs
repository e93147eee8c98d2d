//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_toast::use_toast;

use crate::api::HttpBackend;
use crate::capabilities::RouterNavigator;
use crate::components::{field_error, FormField};
use crate::config::routes;
use crate::forms::registration::{
    submit_registration, RegistrationForm, FIELD_CONFIRMAR_SENHA, FIELD_EMAIL, FIELD_NOME, FIELD_SENHA,
};
use crate::validation::ValidationErrors;

#[component]
pub fn CadastroPage() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let confirmar_senha = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() { return; }

        let form = RegistrationForm {
            nome: nome.get_untracked(),
            email: email.get_untracked(),
            senha: senha.get_untracked(),
            confirmar_senha: confirmar_senha.get_untracked(),
        };
        let navigator = RouterNavigator::new(navigate.clone());
        set_submitting.set(true);

        spawn_local(async move {
            let backend = HttpBackend::default();
            let outcome = submit_registration(&form, &backend, &toast, &navigator).await;
            errors.set(outcome.errors().cloned().unwrap_or_default());
            set_submitting.set(false);
        });
    };

    view! {
        <main class="cadastro-container">
            <div class="machine">
                <div class="screen">
                    <form class="form-cadastro" on:submit=on_submit>
                        <label class="label-cadastro">"CADASTRO"</label>

                        <FormField
                            label="Nome"
                            placeholder="Nome do Usuário"
                            value=nome
                            error=field_error(errors, FIELD_NOME)
                        />
                        <FormField
                            label="Email"
                            placeholder="Email do Usuário"
                            value=email
                            error=field_error(errors, FIELD_EMAIL)
                        />
                        <FormField
                            label="Senha"
                            placeholder="Senha"
                            input_type="password"
                            value=senha
                            error=field_error(errors, FIELD_SENHA)
                        />
                        <FormField
                            label="Confirmar senha"
                            placeholder="Confirmar senha"
                            input_type="password"
                            value=confirmar_senha
                            error=field_error(errors, FIELD_CONFIRMAR_SENHA)
                        />

                        <div class="buttons">
                            <button type="submit" class="button-salvar" disabled=move || submitting.get()>
                                "SALVAR"
                            </button>
                            <a href=routes::LOGIN class="button-salvar">"VOLTAR"</a>
                        </div>
                    </form>
                </div>
            </div>
        </main>
    }
}
