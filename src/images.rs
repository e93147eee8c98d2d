//! Theme Image List
//!
//! Per-page list of a theme's images, with guarded delete.

use leptos::prelude::*;

use crate::api::Backend;
use crate::capabilities::{Notice, Notifier};
use crate::models::ImageRecord;

const TOAST_TITLE: &str = "Exclusão de Imagem";
const TOAST_DELETED: &str = "Imagem excluída com Sucesso";

/// Images of one theme, as fetched on mount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageList {
    images: Vec<ImageRecord>,
    /// Image whose delete request has not returned yet
    deleting: Option<u32>,
}

impl ImageList {
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self { images, deleting: None }
    }

    /// A theme always keeps at least one image, and deletes run one at a time
    pub fn can_delete(&self) -> bool {
        self.deleting.is_none() && self.images.len() > 1
    }

    /// Claim the delete slot for `image_id`. False if refused.
    pub fn begin_delete(&mut self, image_id: u32) -> bool {
        let known = self.images.iter().any(|image| image.imgcodigo == image_id);
        if !known || !self.can_delete() {
            return false;
        }
        self.deleting = Some(image_id);
        true
    }

    /// Release the delete slot; drop the record only if the backend agreed
    pub fn finish_delete(&mut self, image_id: u32, deleted: bool) {
        if self.deleting == Some(image_id) {
            self.deleting = None;
        }
        if deleted {
            self.images.retain(|image| image.imgcodigo != image_id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.images.iter()
    }
}

/// Live holder of the page's list. Returns `None` once the page is gone.
pub trait ImageListStore {
    fn update_list<R>(&self, f: impl FnOnce(&mut ImageList) -> R) -> Option<R>;
}

impl ImageListStore for RwSignal<ImageList> {
    fn update_list<R>(&self, f: impl FnOnce(&mut ImageList) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Last image, or another delete in flight; nothing was sent
    Refused,
    Failed,
}

/// Fetch a theme's images. Failures are logged and yield an empty list.
pub async fn load_images<B: Backend>(backend: &B, theme_id: u32) -> ImageList {
    match backend.list_images_by_theme(theme_id).await {
        Ok(images) => {
            log::info!("[ImageList] Loaded {} images for theme {}", images.len(), theme_id);
            ImageList::new(images)
        }
        Err(e) => {
            log::error!("[ImageList] Erro ao buscar imagens: {}", e);
            ImageList::default()
        }
    }
}

/// Delete remotely, then from the live list. The list is untouched on failure.
pub async fn delete_image<S, B, N>(store: &S, image_id: u32, backend: &B, notifier: &N) -> DeleteOutcome
where
    S: ImageListStore,
    B: Backend,
    N: Notifier,
{
    if !store.update_list(|list| list.begin_delete(image_id)).unwrap_or(false) {
        log::warn!("[ImageList] Delete of image {} refused", image_id);
        return DeleteOutcome::Refused;
    }

    match backend.delete_image(image_id).await {
        Ok(()) => {
            notifier.notify(Notice::success(TOAST_TITLE, TOAST_DELETED));
            store.update_list(|list| list.finish_delete(image_id, true));
            DeleteOutcome::Deleted
        }
        Err(e) => {
            log::error!("[ImageList] Erro ao excluir imagem {}: {}", image_id, e);
            store.update_list(|list| list.finish_delete(image_id, false));
            DeleteOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::capabilities::fakes::RecordingNotifier;
    use crate::error::ApiError;
    use crate::forms::fake_backend::{Call, FakeBackend};

    impl ImageListStore for RefCell<ImageList> {
        fn update_list<R>(&self, f: impl FnOnce(&mut ImageList) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    fn make_image(id: u32, theme: u32) -> ImageRecord {
        ImageRecord {
            imgcodigo: id,
            imgnome: format!("Imagem {}", id),
            imgurl: format!("https://cdn.example/{}.png", id),
            tmacodigo: theme,
        }
    }

    fn make_store(ids: &[u32]) -> RefCell<ImageList> {
        RefCell::new(ImageList::new(ids.iter().map(|id| make_image(*id, 7)).collect()))
    }

    fn ids(list: &ImageList) -> Vec<u32> {
        list.iter().map(|image| image.imgcodigo).collect()
    }

    #[test]
    fn test_single_image_cannot_be_deleted() {
        let list = ImageList::new(vec![make_image(1, 7)]);
        assert!(!list.can_delete());
        assert!(ImageList::new(vec![make_image(1, 7), make_image(2, 7)]).can_delete());
    }

    #[test]
    fn test_delete_refused_for_last_image() {
        let store = make_store(&[1]);
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();

        let outcome = block_on(delete_image(&store, 1, &backend, &notifier));

        assert_eq!(outcome, DeleteOutcome::Refused);
        assert!(backend.calls.borrow().is_empty());
        assert_eq!(ids(&store.borrow()), vec![1]);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let store = make_store(&[1, 2, 3]);
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();

        let outcome = block_on(delete_image(&store, 2, &backend, &notifier));

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(ids(&store.borrow()), vec![1, 3]);
        assert!(store.borrow().can_delete());
        assert_eq!(*backend.calls.borrow(), vec![Call::DeleteImage(2)]);
        assert_eq!(notifier.notices.borrow()[0].description, TOAST_DELETED);
    }

    #[test]
    fn test_overlapping_deletes_keep_last_image() {
        let store = make_store(&[1, 2]);
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();

        let (first, second) = block_on(futures::future::join(
            delete_image(&store, 1, &backend, &notifier),
            delete_image(&store, 2, &backend, &notifier),
        ));

        assert_eq!(first, DeleteOutcome::Deleted);
        assert_eq!(second, DeleteOutcome::Refused);
        assert_eq!(*backend.calls.borrow(), vec![Call::DeleteImage(1)]);
        assert_eq!(ids(&store.borrow()), vec![2]);
    }

    #[test]
    fn test_delete_blocks_controls_while_in_flight() {
        let mut list = ImageList::new(vec![make_image(1, 7), make_image(2, 7), make_image(3, 7)]);
        assert!(list.begin_delete(1));
        assert!(!list.can_delete());
        assert!(!list.begin_delete(2));

        list.finish_delete(1, true);
        assert!(list.can_delete());
        assert_eq!(ids(&list), vec![2, 3]);
    }

    #[test]
    fn test_unknown_image_not_claimed() {
        let mut list = ImageList::new(vec![make_image(1, 7), make_image(2, 7)]);
        assert!(!list.begin_delete(9));
        assert!(list.can_delete());
    }

    #[test]
    fn test_failed_delete_keeps_list() {
        let store = make_store(&[1, 2]);
        let backend = FakeBackend::failing(ApiError::Status(404));
        let notifier = RecordingNotifier::default();

        let outcome = block_on(delete_image(&store, 1, &backend, &notifier));

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(ids(&store.borrow()), vec![1, 2]);
        assert!(store.borrow().can_delete());
        assert!(notifier.notices.borrow().is_empty());
    }

    #[test]
    fn test_load_images_filters_by_theme() {
        let backend = FakeBackend {
            images: vec![make_image(1, 7), make_image(2, 8), make_image(3, 7)],
            ..Default::default()
        };

        let list = block_on(load_images(&backend, 7));

        assert_eq!(ids(&list), vec![1, 3]);
        assert_eq!(*backend.calls.borrow(), vec![Call::ListImages(7)]);
    }

    #[test]
    fn test_load_failure_yields_empty_list() {
        let backend = FakeBackend::failing(ApiError::Network("offline".to_string()));
        let list = block_on(load_images(&backend, 7));
        assert!(list.is_empty());
    }
}
