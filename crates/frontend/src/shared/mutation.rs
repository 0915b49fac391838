//! Create / update / delete flow shared by the forms and row actions.
//!
//! Runs the request, raises a success or failure toast and hands the
//! result to the caller, who closes its form and reloads its list.

use crate::shared::api_client::ApiError;
use crate::shared::notify::{Notifier, ToastKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Toast text for a failed request. `None` for 401, which already
/// redirected to the login page.
pub fn failure_message(err: &ApiError, fallback: &str) -> Option<String> {
    if err.is_unauthorized() {
        None
    } else {
        Some(err.user_message(fallback))
    }
}

pub struct Mutation {
    pub notifier: Notifier,
    pub busy: Option<RwSignal<bool>>,
    pub success: String,
    pub success_kind: ToastKind,
    pub fallback: String,
}

impl Mutation {
    pub fn new(notifier: Notifier, success: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            notifier,
            busy: None,
            success: success.into(),
            success_kind: ToastKind::Success,
            fallback: fallback.into(),
        }
    }

    /// Toggles `busy` for the duration of the request.
    pub fn with_busy(mut self, busy: RwSignal<bool>) -> Self {
        self.busy = Some(busy);
        self
    }

    /// Announces success with a different toast kind (revocations use `Info`).
    pub fn announce_as(mut self, kind: ToastKind) -> Self {
        self.success_kind = kind;
        self
    }

    pub fn run<T, Fut, S>(self, request: Fut, on_success: S)
    where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        S: FnOnce(T) + 'static,
    {
        let Mutation {
            notifier,
            busy,
            success,
            success_kind,
            fallback,
        } = self;
        if let Some(busy) = busy {
            busy.set(true);
        }
        spawn_local(async move {
            match request.await {
                Ok(value) => {
                    log::info!("{}", success);
                    notifier.notify(success_kind, success);
                    on_success(value);
                }
                Err(err) => {
                    log::warn!("mutation failed: {}", err);
                    if let Some(message) = failure_message(&err, &fallback) {
                        notifier.error(message);
                    }
                }
            }
            if let Some(busy) = busy {
                busy.set(false);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_server_text() {
        let err = ApiError::Http {
            status: 409,
            message: Some("Username already exists".into()),
        };
        assert_eq!(
            failure_message(&err, "Operation failed").as_deref(),
            Some("Username already exists")
        );
    }

    #[test]
    fn test_failure_message_fallback() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(
            failure_message(&err, "Something went wrong").as_deref(),
            Some("Something went wrong")
        );
    }

    #[test]
    fn test_failure_message_silent_on_unauthorized() {
        assert!(failure_message(&ApiError::Unauthorized, "Operation failed").is_none());
    }
}
