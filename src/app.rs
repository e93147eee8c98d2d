//! Dotboard Frontend App
//!
//! Router and app-wide providers.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};
use leptos_toast::{provide_toast_context, Toaster};

use crate::pages::{BoardPage, CadastroPage, ImageListPage, LoginPage, ThemeCreatePage};

#[component]
pub fn App() -> impl IntoView {
    // Toasts outlive page changes
    provide_toast_context();

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=(StaticSegment("pages"), StaticSegment("cadastro")) view=CadastroPage />
                    <Route path=(StaticSegment("pages"), StaticSegment("login")) view=LoginPage />
                    <Route
                        path=(StaticSegment("pages"), StaticSegment("temas"), StaticSegment("criar"))
                        view=ThemeCreatePage
                    />
                    <Route
                        path=(StaticSegment("pages"), StaticSegment("images"), StaticSegment("lista"), ParamSegment("id"))
                        view=ImageListPage
                    />
                    <Route path=(StaticSegment("pages"), StaticSegment("board")) view=BoardPage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
