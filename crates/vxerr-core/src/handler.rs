//! Retry-aware async wrapper with observable busy/error state.
//!
//! An `ErrorHandler` wraps caller operations, classifies their failures,
//! retries the transient ones and records the final outcome. State is
//! published on a `watch` channel so UI code can follow `is_loading` and the
//! current error without holding the handler.
//!
//! The async methods take `&mut self`, so a handler runs one loop at a time.
//! Use one handler per concurrent call; handlers share only the registry.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::failure::{AsRawFailure, RawFailure};
use crate::handle::{handle_with, HandleOptions, HandledErrorResult};
use crate::registry::Registry;
use crate::retry::{run_with_retry, RetryPolicy, Sleeper, TokioSleeper};

/// Called with the handled result and the original failure.
pub type OnError = Box<dyn Fn(&HandledErrorResult, &RawFailure) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Emit diagnostics for handled errors.
    pub auto_log: bool,
    /// Include description and technical message in stored details.
    pub show_details: bool,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            auto_log: true,
            show_details: false,
        }
    }
}

/// Snapshot of a handler's observable state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandlerState {
    pub is_loading: bool,
    pub error: Option<Arc<RawFailure>>,
    pub details: Option<HandledErrorResult>,
}

pub struct ErrorHandler<S = TokioSleeper> {
    registry: &'static Registry,
    policy: RetryPolicy,
    options: HandlerOptions,
    sleeper: S,
    sink: Box<dyn DiagnosticSink + Send + Sync>,
    on_error: Option<OnError>,
    state: watch::Sender<HandlerState>,
}

impl ErrorHandler<TokioSleeper> {
    pub fn new(options: HandlerOptions) -> Self {
        Self::with_sleeper(options, TokioSleeper)
    }
}

impl Default for ErrorHandler<TokioSleeper> {
    fn default() -> Self {
        Self::new(HandlerOptions::default())
    }
}

impl<S: Sleeper> ErrorHandler<S> {
    pub fn with_sleeper(options: HandlerOptions, sleeper: S) -> Self {
        let (state, _) = watch::channel(HandlerState::default());
        Self {
            registry: Registry::global(),
            policy: RetryPolicy::default(),
            options,
            sleeper,
            sink: Box::new(TracingSink),
            on_error: None,
            state,
        }
    }

    /// Backoff settings for `retry`. `max_attempts` is still taken per call.
    pub fn policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn sink(mut self, sink: impl DiagnosticSink + Send + Sync + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn on_error(
        mut self,
        callback: impl Fn(&HandledErrorResult, &RawFailure) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<HandlerState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> HandlerState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn has_error(&self) -> bool {
        self.state.borrow().error.is_some()
    }

    pub fn error(&self) -> Option<Arc<RawFailure>> {
        self.state.borrow().error.clone()
    }

    pub fn details(&self) -> Option<HandledErrorResult> {
        self.state.borrow().details.clone()
    }

    /// Handle `failure`, store it as the current error and notify `on_error`.
    pub fn handle_error<E: AsRawFailure + ?Sized>(&self, failure: &E) -> HandledErrorResult {
        self.handle_error_with(failure, self.options)
    }

    /// Like `handle_error`, with options for this call only.
    pub fn handle_error_with<E: AsRawFailure + ?Sized>(
        &self,
        failure: &E,
        options: HandlerOptions,
    ) -> HandledErrorResult {
        let raw = Arc::new(failure.to_raw_failure());
        let opts = HandleOptions {
            log_diagnostics: options.auto_log,
            show_details: options.show_details,
            include_stack: false,
        };
        let details = handle_with(self.registry, self.sink.as_ref(), &raw, &opts);
        self.state.send_modify(|s| {
            s.error = Some(Arc::clone(&raw));
            s.details = Some(details.clone());
        });
        // State is already visible to subscribers when the callback runs.
        if let Some(callback) = &self.on_error {
            callback(&details, &raw);
        }
        details
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| {
            s.error = None;
            s.details = None;
        });
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|s| s.is_loading = loading);
    }

    /// Run `op` once. On failure the error is handled and handed back.
    pub async fn with_error_handling<F, Fut, T, E>(&mut self, op: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: AsRawFailure,
    {
        self.set_loading(true);
        self.clear_error();
        let result = op().await;
        self.set_loading(false);
        if let Err(err) = &result {
            self.handle_error(err);
        }
        result
    }

    /// Run `op` with retries and backoff, at most `max_attempts` times.
    ///
    /// Stays loading through backoff waits. When the loop gives up the last
    /// failure is handled and returned as the caller's original error.
    pub async fn retry<F, Fut, T, E>(&mut self, op: F, max_attempts: u32) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: AsRawFailure,
    {
        self.set_loading(true);
        self.clear_error();
        let policy = self.policy.with_max_attempts(max_attempts);
        let result = run_with_retry(&policy, self.registry, &self.sleeper, op).await;
        self.set_loading(false);
        if let Err(err) = &result {
            self.handle_error(err);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::MemorySink;
    use crate::failure::ResponseFailure;
    use crate::retry::testing::RecordingSleeper;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn handler() -> ErrorHandler<RecordingSleeper> {
        ErrorHandler::with_sleeper(HandlerOptions::default(), RecordingSleeper::default())
            .sink(MemorySink::default())
    }

    #[tokio::test]
    async fn retry_succeeds_on_third_attempt() {
        let mut h = handler();
        let calls = AtomicU32::new(0);
        let out: Result<u32, RawFailure> = h
            .retry(
                || {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    async move {
                        if n < 2 {
                            Err(RawFailure::from(ResponseFailure::new(502)))
                        } else {
                            Ok(7)
                        }
                    }
                },
                3,
            )
            .await;
        assert_eq!(out.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(
            h.sleeper.delays(),
            vec![Duration::from_millis(1000), Duration::from_millis(2000)]
        );
        assert!(!h.is_loading());
        assert!(!h.has_error());
    }

    #[tokio::test]
    async fn non_retryable_failure_is_handled_and_returned() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_cb = Arc::clone(&seen);
        let mut h = handler().on_error(move |details, _raw| {
            seen_cb.lock().unwrap().push(details.code.clone());
        });
        let calls = AtomicU32::new(0);
        let failure = RawFailure::from(ResponseFailure::new(404).with_status_text("Not Found"));
        let out: Result<(), RawFailure> = h
            .retry(
                || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    let failure = failure.clone();
                    async move { Err(failure) }
                },
                3,
            )
            .await;
        assert_eq!(out.unwrap_err(), failure);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(h.sleeper.delays().is_empty());
        assert!(!h.is_loading());
        assert_eq!(h.error().as_deref(), Some(&failure));
        assert_eq!(h.details().unwrap().code, "HTTP_404");
        assert_eq!(*seen.lock().unwrap(), vec!["HTTP_404".to_string()]);
    }

    #[tokio::test]
    async fn exhausted_attempts_keep_last_error() {
        let mut h = handler();
        let out: Result<(), String> = h
            .retry(|| async { Err("FUNCTION_INVOCATION_TIMEOUT".to_string()) }, 2)
            .await;
        assert_eq!(out.unwrap_err(), "FUNCTION_INVOCATION_TIMEOUT");
        assert_eq!(h.sleeper.delays(), vec![Duration::from_millis(1000)]);
        let details = h.details().unwrap();
        assert_eq!(details.code, "FUNCTION_INVOCATION_TIMEOUT");
        assert_eq!(details.status_code, 504);
    }

    #[tokio::test]
    async fn new_call_clears_previous_error() {
        let mut h = handler();
        let _: Result<(), &str> = h.with_error_handling(|| async { Err("NOT_FOUND") }).await;
        assert!(h.has_error());
        let out: Result<u8, &str> = h.with_error_handling(|| async { Ok(1) }).await;
        assert_eq!(out.unwrap(), 1);
        assert!(!h.has_error());
        assert!(h.details().is_none());
    }

    #[tokio::test]
    async fn with_error_handling_never_retries() {
        let mut h = handler();
        let calls = AtomicU32::new(0);
        let out: Result<(), RawFailure> = h
            .with_error_handling(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(RawFailure::from(ResponseFailure::new(503))) }
            })
            .await;
        assert!(out.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(h.sleeper.delays().is_empty());
        assert_eq!(h.details().unwrap().code, "HTTP_503");
    }

    #[tokio::test]
    async fn subscribers_see_loading_during_the_operation() {
        let mut h = handler();
        let rx = h.subscribe();
        let out: Result<bool, RawFailure> = h
            .with_error_handling(|| {
                let loading = rx.borrow().is_loading;
                async move { Ok(loading) }
            })
            .await;
        assert!(out.unwrap());
        assert!(!rx.borrow().is_loading);
    }

    #[test]
    fn show_details_option_flows_into_stored_details() {
        let h = ErrorHandler::with_sleeper(
            HandlerOptions {
                auto_log: false,
                show_details: true,
            },
            RecordingSleeper::default(),
        );
        let details = h.handle_error("DNS_HOSTNAME_EMPTY");
        assert_eq!(details.technical_message.as_deref(), Some("DNS hostname is empty"));
        assert_eq!(h.state().details, Some(details));
        h.clear_error();
        assert_eq!(h.state(), HandlerState::default());
    }

    #[test]
    fn on_error_runs_after_state_is_stored() {
        let h = handler();
        let rx = h.subscribe();
        let seen = Arc::new(Mutex::new(None));
        let seen_cb = Arc::clone(&seen);
        let h = h.on_error(move |_details, _raw| {
            let state = rx.borrow();
            *seen_cb.lock().unwrap() = state.details.as_ref().map(|d| d.code.clone());
        });
        h.handle_error("DEPLOYMENT_PAUSED");
        assert_eq!(
            seen.lock().unwrap().as_deref(),
            Some("DEPLOYMENT_PAUSED")
        );
    }

    #[test]
    fn per_call_options_override_handler_options() {
        let h = handler();
        let plain = h.handle_error("DNS_HOSTNAME_EMPTY");
        assert!(plain.technical_message.is_none());

        let detailed = h.handle_error_with(
            "DNS_HOSTNAME_EMPTY",
            HandlerOptions {
                auto_log: false,
                show_details: true,
            },
        );
        assert_eq!(
            detailed.technical_message.as_deref(),
            Some("DNS hostname is empty")
        );
        assert!(!detailed.actionable);
        assert_eq!(h.details(), Some(detailed));
    }

    #[test]
    fn auto_log_controls_sink() {
        let sink = Arc::new(MemorySink::default());
        struct Shared(Arc<MemorySink>);
        impl DiagnosticSink for Shared {
            fn emit(&self, record: &crate::diagnostics::DiagnosticRecord) {
                self.0.emit(record);
            }
        }

        let h = handler().sink(Shared(Arc::clone(&sink)));
        h.handle_error("SANDBOX_NOT_LISTENING");
        assert_eq!(sink.records().len(), 1);

        let quiet = ErrorHandler::with_sleeper(
            HandlerOptions {
                auto_log: false,
                show_details: false,
            },
            RecordingSleeper::default(),
        )
        .sink(Shared(Arc::clone(&sink)));
        quiet.handle_error("SANDBOX_NOT_LISTENING");
        assert_eq!(sink.records().len(), 1);
    }
}
