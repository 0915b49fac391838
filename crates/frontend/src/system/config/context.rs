//! Tenant configuration and option catalog, loaded once per session.

use super::api;
use crate::shared::api_client::{ApiClient, ApiError};
use crate::system::session::Session;
use chrono::{DateTime, Utc};
use contracts::system::config::{AppConfig, OptionsCatalog};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigState {
    pub config: Option<AppConfig>,
    pub options: OptionsCatalog,
    pub loading: bool,
    pub is_expired: bool,
}

impl ConfigState {
    /// Folds the two startup responses into the state.
    ///
    /// A 403 from either endpoint marks the subscription as expired; the
    /// config endpoint may still hand back a partial profile with it.
    pub fn from_results(
        config: Result<AppConfig, ApiError>,
        options: Result<OptionsCatalog, ApiError>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut state = ConfigState::default();
        match config {
            Ok(config) => {
                state.is_expired = config.is_expired_at(now);
                state.config = Some(config);
            }
            Err(ApiError::Forbidden { data, .. }) => {
                state.is_expired = true;
                state.config = data.and_then(|d| serde_json::from_value(d).ok());
            }
            Err(err) => log::warn!("failed to load config: {}", err),
        }
        match options {
            Ok(options) => state.options = options,
            Err(ApiError::Forbidden { .. }) => state.is_expired = true,
            Err(err) => log::warn!("failed to load options: {}", err),
        }
        state
    }

    /// Awaits both startup requests concurrently, then folds them.
    pub async fn load_from<C, O>(config: C, options: O, now: DateTime<Utc>) -> Self
    where
        C: Future<Output = Result<AppConfig, ApiError>>,
        O: Future<Output = Result<OptionsCatalog, ApiError>>,
    {
        let (config, options) = futures_util::join!(config, options);
        Self::from_results(config, options, now)
    }
}

#[derive(Clone, Copy)]
pub struct ConfigContext {
    state: RwSignal<ConfigState>,
    client: ApiClient,
    session: Session,
}

impl ConfigContext {
    pub fn new(client: ApiClient, session: Session) -> Self {
        Self {
            state: RwSignal::new(ConfigState {
                loading: true,
                ..Default::default()
            }),
            client,
            session,
        }
    }

    /// Loads config and options; skipped entirely without a token.
    pub fn load(&self) {
        if !self.session.is_signed_in_untracked() {
            self.state.update(|s| s.loading = false);
            return;
        }
        let this = *self;
        self.state.update(|s| s.loading = true);
        spawn_local(async move {
            let next = ConfigState::load_from(
                api::fetch_config(this.client),
                api::fetch_options(this.client),
                Utc::now(),
            )
            .await;
            if next.is_expired {
                log::warn!("subscription expired, restricting dashboard");
            }
            this.state.set(next);
        });
    }

    /// Re-reads only the option catalog, after an option mutation.
    pub fn refresh_options(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_options(this.client).await {
                Ok(options) => this.state.update(|s| s.options = options),
                Err(ApiError::Forbidden { .. }) => {
                    log::warn!("subscription expired, restricting dashboard");
                    this.state.update(|s| s.is_expired = true);
                }
                Err(err) => log::warn!("failed to refresh options: {}", err),
            }
        });
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn is_expired(&self) -> bool {
        self.state.with(|s| s.is_expired)
    }

    pub fn config(&self) -> Option<AppConfig> {
        self.state.with(|s| s.config.clone())
    }

    pub fn options(&self) -> OptionsCatalog {
        self.state.with(|s| s.options.clone())
    }

    pub fn with_options<R>(&self, f: impl FnOnce(&OptionsCatalog) -> R) -> R {
        self.state.with(|s| f(&s.options))
    }

    pub fn company_name(&self) -> String {
        self.state.with(|s| {
            s.config
                .as_ref()
                .and_then(|c| c.company_name.clone())
                .unwrap_or_else(|| "Atelier".to_string())
        })
    }
}

pub fn use_config() -> ConfigContext {
    use_context::<ConfigContext>().expect("ConfigContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use futures_util::task::noop_waker;
    use serde_json::json;
    use std::cell::Cell;
    use std::future::poll_fn;
    use std::pin::pin;
    use std::task::{Context, Poll};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
    }

    fn config(expiry: &str) -> AppConfig {
        AppConfig {
            company_name: Some("Acme Apparel".into()),
            subscription_expiry: Some(expiry.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_active_subscription() {
        let state = ConfigState::from_results(
            Ok(config("2025-12-31")),
            Ok(OptionsCatalog::default()),
            now(),
        );
        assert!(!state.is_expired);
        assert!(!state.loading);
        assert_eq!(state.config.unwrap().company_name.as_deref(), Some("Acme Apparel"));
    }

    #[test]
    fn test_past_expiry_marks_expired() {
        let state = ConfigState::from_results(
            Ok(config("2024-12-31")),
            Ok(OptionsCatalog::default()),
            now(),
        );
        assert!(state.is_expired);
    }

    #[test]
    fn test_forbidden_keeps_partial_config() {
        let forbidden = ApiError::Forbidden {
            message: Some("Subscription expired".into()),
            data: Some(json!({ "companyName": "Acme Apparel", "companyPhone": "042-111" })),
        };
        let state = ConfigState::from_results(Err(forbidden), Ok(OptionsCatalog::default()), now());
        assert!(state.is_expired);
        let config = state.config.unwrap();
        assert_eq!(config.company_phone.as_deref(), Some("042-111"));
    }

    #[test]
    fn test_network_failure_is_not_expiry() {
        let state = ConfigState::from_results(
            Err(ApiError::Network("offline".into())),
            Err(ApiError::Network("offline".into())),
            now(),
        );
        assert!(!state.is_expired);
        assert!(state.config.is_none());
    }

    #[test]
    fn test_startup_requests_run_concurrently() {
        // The config reply only arrives once the options request has gone out.
        let options_sent = Cell::new(false);
        let config_reply = poll_fn(|_| {
            if options_sent.get() {
                Poll::Ready(Ok::<_, ApiError>(config("2025-12-31")))
            } else {
                Poll::Pending
            }
        });
        let options_reply = async {
            options_sent.set(true);
            Ok::<_, ApiError>(OptionsCatalog::default())
        };

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut load = pin!(ConfigState::load_from(config_reply, options_reply, now()));
        let state = (0..3)
            .find_map(|_| match load.as_mut().poll(&mut cx) {
                Poll::Ready(state) => Some(state),
                Poll::Pending => None,
            })
            .expect("both requests should be in flight together");
        assert!(!state.is_expired);
        assert!(state.config.is_some());
    }
}
