//! Page Capabilities
//!
//! Notification and navigation as injected services, so form and list
//! flows run against the real router/toaster in the browser and fakes in tests.

use leptos_router::NavigateOptions;
use leptos_toast::{Toast, ToastContext, ToastStatus};

use crate::config::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStatus {
    Success,
    Error,
}

/// User-visible transient message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub status: NoticeStatus,
    pub duration_ms: u32,
}

impl Notice {
    pub fn success(title: &str, description: &str) -> Self {
        Self::with_status(title, description, NoticeStatus::Success)
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self::with_status(title, description, NoticeStatus::Error)
    }

    fn with_status(title: &str, description: &str, status: NoticeStatus) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            status,
            duration_ms: TOAST_DURATION_MS,
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl Notifier for ToastContext {
    fn notify(&self, notice: Notice) {
        let status = match notice.status {
            NoticeStatus::Success => ToastStatus::Success,
            NoticeStatus::Error => ToastStatus::Error,
        };
        self.push(Toast {
            title: notice.title,
            description: notice.description,
            status,
            duration_ms: Some(notice.duration_ms),
            closable: true,
        });
    }
}

/// Adapts the router's navigate function
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

#[cfg(test)]
pub mod fakes {
    //! Recording fakes for page flows.

    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    #[derive(Default)]
    pub struct RecordingNavigator {
        pub visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }
}
