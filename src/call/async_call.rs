use crate::call::CallState;
use crate::errors::{ErrorResult, OpenAIError, OpenAIResult};
use crate::types::RequestOptions;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::{oneshot, watch};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

type Operation<T> = Box<dyn FnOnce(RequestOptions) -> BoxFuture<'static, OpenAIResult<T>> + Send>;

/// One deferred request and its lifecycle.
///
/// The operation receives the call's `RequestOptions`, which carry the URL override and the
/// cancellation token, and is expected to hand them to a service method:
///
/// ```ignore
/// let client = client.clone();
/// let handle = AsyncCall::new(move |options| async move {
///     client.models().list(&auth, &options).await
/// })
/// .with_url_override("http://localhost:8080")
/// .activate();
///
/// let models = handle.await?;
/// ```
pub struct AsyncCall<T> {
    operation: Operation<T>,
    options: RequestOptions,
    state: watch::Sender<CallState>,
}

impl<T: Send + 'static> AsyncCall<T> {
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: FnOnce(RequestOptions) -> Fut + Send + 'static,
        Fut: Future<Output = OpenAIResult<T>> + Send + 'static,
    {
        let (state, _) = watch::channel(CallState::Idle);
        Self {
            operation: Box::new(move |options| operation(options).boxed()),
            options: RequestOptions::default(),
            state,
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Targets this call at `url` instead of the configured base URL. Empty values are ignored.
    pub fn with_url_override(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.trim().is_empty() {
            self.options = self.options.with_url_override(url);
        }
        self
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn state(&self) -> CallState {
        *self.state.borrow()
    }

    /// Starts the call on the tokio runtime. The returned handle resolves exactly once.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(self) -> CallHandle<T> {
        let (tx, rx) = oneshot::channel();
        let state = self.state.subscribe();
        let token = self.spawn(move |outcome| {
            let _ = tx.send(outcome);
        });

        CallHandle {
            receiver: rx,
            token,
            state,
        }
    }

    /// Starts the call and reports the outcome through exactly one of the two callbacks.
    ///
    /// Neither callback runs once the returned guard has been dropped.
    pub fn activate_with<S, E>(self, on_success: S, on_error: E) -> CallGuard
    where
        S: FnOnce(T) + Send + 'static,
        E: FnOnce(ErrorResult) + Send + 'static,
    {
        let alive = Arc::new(AtomicBool::new(true));
        let state = self.state.subscribe();
        let task_alive = alive.clone();

        let token = self.spawn(move |outcome| {
            // Exactly one of this task and `CallGuard::drop` claims the flag.
            if !task_alive.swap(false, Ordering::AcqRel) {
                tracing::debug!("call guard dropped, discarding outcome");
                return;
            }
            match outcome {
                Ok(value) => on_success(value),
                Err(error) => on_error(error),
            }
        });

        CallGuard {
            token,
            state,
            alive,
        }
    }

    fn spawn<D>(self, deliver: D) -> CancellationToken
    where
        D: FnOnce(Result<T, ErrorResult>) + Send + 'static,
    {
        // Child token: cancelling this call never cancels a caller-supplied token.
        let token = self
            .options
            .cancellation
            .as_ref()
            .map(CancellationToken::child_token)
            .unwrap_or_default();

        let options = self.options.with_cancellation(token.clone());
        let url_override = options.effective_url_override().is_some();
        let state = self.state;
        let operation = self.operation;
        let task_token = token.clone();

        state.send_replace(CallState::Pending);

        let span = tracing::debug_span!("openai.call", url_override);
        tokio::spawn(
            async move {
                let guarded =
                    AssertUnwindSafe(async move { operation(options).await }).catch_unwind();
                let result = tokio::select! {
                    biased;
                    _ = task_token.cancelled() => Err(OpenAIError::Cancelled),
                    result = guarded => result.unwrap_or_else(|panic| {
                        let message = panic_message(panic.as_ref());
                        tracing::warn!(%message, "call operation panicked");
                        Err(OpenAIError::Internal(format!("operation panicked: {}", message)))
                    }),
                };

                let (terminal, outcome) = match result {
                    Ok(value) => (CallState::Completed, Ok(value)),
                    Err(OpenAIError::Cancelled) => (
                        CallState::Cancelled,
                        Err(ErrorResult::from(OpenAIError::Cancelled)),
                    ),
                    Err(error) => (CallState::Failed, Err(ErrorResult::from(error))),
                };

                tracing::debug!(state = %terminal, "call finished");
                state.send_replace(terminal);
                deliver(outcome);
            }
            .instrument(span),
        );

        token
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Awaitable result of [`AsyncCall::activate`]. Dropping it before completion cancels the call.
pub struct CallHandle<T> {
    receiver: oneshot::Receiver<Result<T, ErrorResult>>,
    token: CancellationToken,
    state: watch::Receiver<CallState>,
}

impl<T> CallHandle<T> {
    pub fn state(&self) -> CallState {
        *self.state.borrow()
    }

    /// Requests cancellation; awaiting the handle afterwards yields `OpenAIError::Cancelled`
    /// unless the call had already finished.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_terminal()
    }
}

impl<T> Future for CallHandle<T> {
    type Output = Result<T, ErrorResult>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // The task ended without delivering, which only happens when the runtime shut down.
            Poll::Ready(Err(_)) => Poll::Ready(Err(ErrorResult::from(OpenAIError::Cancelled))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> Drop for CallHandle<T> {
    fn drop(&mut self) {
        if !self.state().is_terminal() {
            self.token.cancel();
        }
    }
}

/// Keeps a callback-style call alive. Dropping it cancels the call and suppresses both callbacks.
pub struct CallGuard {
    token: CancellationToken,
    state: watch::Receiver<CallState>,
    alive: Arc<AtomicBool>,
}

impl CallGuard {
    pub fn state(&self) -> CallState {
        *self.state.borrow()
    }

    /// Requests cancellation; `on_error` then fires with `OpenAIError::Cancelled` unless the
    /// call had already finished.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_terminal()
    }
}

impl Drop for CallGuard {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
        if !self.state().is_terminal() {
            self.token.cancel();
        }
    }
}

impl std::fmt::Debug for CallGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallGuard")
            .field("state", &self.state())
            .finish()
    }
}
