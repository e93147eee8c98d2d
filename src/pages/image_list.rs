//! Theme Image List Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use leptos_toast::use_toast;

use crate::api::HttpBackend;
use crate::components::Breadcrumb;
use crate::config::routes;
use crate::images::{delete_image, load_images, ImageList};
use crate::models::ImageRecord;

#[component]
pub fn ImageListPage() -> impl IntoView {
    let toast = use_toast();
    let params = use_params_map();
    let theme_id = move || params.read().get("id").and_then(|id| id.parse::<u32>().ok());

    let images = RwSignal::new(ImageList::default());

    // Fetch on mount
    Effect::new(move |_| {
        let Some(id) = theme_id() else {
            log::warn!("[ImageList] Missing or invalid theme id in route");
            return;
        };
        spawn_local(async move {
            let list = load_images(&HttpBackend::default(), id).await;
            images.set(list);
        });
    });

    // Guard and removal both run against the live signal
    let on_delete = move |image_id: u32| {
        spawn_local(async move {
            delete_image(&images, image_id, &HttpBackend::default(), &toast).await;
        });
    };

    let create_href = move || theme_id().map(routes::image_create).unwrap_or_default();

    view! {
        <div class="image-list-page">
            <Breadcrumb parent_label="Temas" parent_href=routes::THEME_LIST current="Imagens" />

            <h2 class="page-heading">"Lista de Imagens"</h2>
            <a href=create_href class="primary-btn">"Cadastrar"</a>

            <table class="image-table">
                <thead>
                    <tr>
                        <th>"Imagem"</th>
                        <th>"Nome"</th>
                        <th>"Ações"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || images.with(|list| list.iter().cloned().collect::<Vec<ImageRecord>>())
                        key=|image| image.imgcodigo
                        children=move |image| {
                            let id = image.imgcodigo;
                            let can_delete = move || images.with(ImageList::can_delete);
                            view! {
                                <tr>
                                    <td>
                                        <img class="image-thumb" src=image.imgurl.clone() alt=image.imgnome.clone() />
                                    </td>
                                    <td>{image.imgnome.clone()}</td>
                                    <td class="image-actions">
                                        <a href=routes::image_edit(id) title="Editar">"✎"</a>
                                        <span class="action-separator">"|"</span>
                                        <Show when=can_delete>
                                            <button
                                                class="delete-btn"
                                                title="Excluir"
                                                on:click=move |_| on_delete(id)
                                            >
                                                "🗑"
                                            </button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
