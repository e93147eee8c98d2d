//! Leptos Toast Utilities
//!
//! Transient success/error banners for Leptos.
//! A toast disappears on its own after its duration, or when closed.

use leptos::prelude::*;

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Error,
}

impl ToastStatus {
    fn class(self) -> &'static str {
        match self {
            ToastStatus::Success => "toast toast-success",
            ToastStatus::Error => "toast toast-error",
        }
    }
}

/// A toast waiting to be shown
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub status: ToastStatus,
    /// Auto-dismiss delay; `None` keeps the toast until closed
    pub duration_ms: Option<u32>,
    pub closable: bool,
}

/// A toast on screen, with its queue id
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Ordered queue of visible toasts (oldest first)
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    entries: Vec<ToastEntry>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToastEntry> {
        self.entries.iter()
    }
}

/// Toast state shared through context
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Show a toast and schedule its removal
    pub fn push(&self, toast: Toast) -> u64 {
        let duration = toast.duration_ms;
        let Some(id) = self.queue.try_update(|queue| queue.push(toast)) else {
            log::warn!("[Toast] Queue disposed, toast dropped");
            return 0;
        };

        if let Some(ms) = duration {
            let ctx = *self;
            gloo_timers::callback::Timeout::new(ms, move || ctx.dismiss(id)).forget();
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        // Timers may fire after the owning page is gone
        let _ = self.queue.try_update(|queue| queue.dismiss(id));
    }

    pub fn entries(&self) -> Vec<ToastEntry> {
        self.queue.with(|queue| queue.iter().cloned().collect())
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a toast context and provide it to children
pub fn provide_toast_context() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

/// Get the toast context
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Renders all visible toasts, newest at the bottom
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_toast();

    view! {
        <div class="toaster">
            <For
                each=move || ctx.entries()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let toast = entry.toast;
                    let closable = toast.closable;
                    view! {
                        <div class=toast.status.class() role="status">
                            <strong class="toast-title">{toast.title}</strong>
                            <p class="toast-description">{toast.description}</p>
                            <Show when=move || closable>
                                <button class="toast-close" on:click=move |_| ctx.dismiss(id)>
                                    "×"
                                </button>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_toast(title: &str) -> Toast {
        Toast {
            title: title.to_string(),
            description: String::new(),
            status: ToastStatus::Success,
            duration_ms: Some(9000),
            closable: true,
        }
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(make_toast("a"));
        let b = queue.push(make_toast("b"));
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(make_toast("a"));
        let b = queue.push(make_toast("b"));
        let c = queue.push(make_toast("c"));

        assert!(queue.dismiss(b));
        let ids: Vec<u64> = queue.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_dismiss_twice_is_noop() {
        let mut queue = ToastQueue::default();
        let a = queue.push(make_toast("a"));
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(make_toast("a"));
        queue.dismiss(a);
        let b = queue.push(make_toast("b"));
        assert_ne!(a, b);
    }
}
