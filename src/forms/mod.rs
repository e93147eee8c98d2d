//! Form Schemas and Submission
//!
//! validate → one backend call → toast + navigation.

pub mod registration;
pub mod theme;

use crate::error::ApiError;
use crate::validation::ValidationErrors;

pub use registration::{submit_registration, RegistrationForm};
pub use theme::{submit_theme, ThemeForm};

/// Result of pressing a form's submit button
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blocked client-side; no request was made
    Invalid(ValidationErrors),
    /// Backend accepted the request
    Submitted,
    /// Backend call failed; the user was shown a generic error
    Failed(ApiError),
}

impl SubmitOutcome {
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitOutcome::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod fake_backend {
    //! In-memory `Backend` that records every call.

    use std::cell::RefCell;
    use std::task::Poll;

    use crate::api::Backend;
    use crate::error::{ApiError, ApiResult};
    use crate::models::{ImageRecord, NewUser, ThemeBundle};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        CreateUser(NewUser),
        CreateTheme(ThemeBundle),
        ListImages(u32),
        DeleteImage(u32),
    }

    #[derive(Default)]
    pub struct FakeBackend {
        pub calls: RefCell<Vec<Call>>,
        pub images: Vec<ImageRecord>,
        pub fail_with: Option<ApiError>,
    }

    impl FakeBackend {
        pub fn failing(error: ApiError) -> Self {
            Self {
                fail_with: Some(error),
                ..Default::default()
            }
        }

        fn record(&self, call: Call) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    impl Backend for FakeBackend {
        async fn create_user(&self, user: &NewUser) -> ApiResult<()> {
            self.record(Call::CreateUser(user.clone()))
        }

        async fn create_theme(&self, bundle: &ThemeBundle) -> ApiResult<()> {
            self.record(Call::CreateTheme(bundle.clone()))
        }

        async fn list_images_by_theme(&self, theme_id: u32) -> ApiResult<Vec<ImageRecord>> {
            self.record(Call::ListImages(theme_id))?;
            Ok(self
                .images
                .iter()
                .filter(|image| image.tmacodigo == theme_id)
                .cloned()
                .collect())
        }

        /// Suspends once, so joined deletes overlap like real requests
        async fn delete_image(&self, image_id: u32) -> ApiResult<()> {
            let result = self.record(Call::DeleteImage(image_id));
            let mut yielded = false;
            futures::future::poll_fn(|cx| {
                if yielded {
                    return Poll::Ready(());
                }
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            })
            .await;
            result
        }
    }
}
