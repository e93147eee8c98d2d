//! Login Page
//!
//! Landing target after registration.

use leptos::prelude::*;

use crate::config::routes;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <main class="login-page">
            <h1>"Entrar"</h1>
            <a href=routes::CADASTRO class="button-salvar">"Criar conta"</a>
        </main>
    }
}
