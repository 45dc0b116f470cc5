//! Correlation id for a single users API request.
//!
//! The `Trace` middleware mints one id per request and runs the handler inside
//! [`TraceId::scope`]. Anything awaited within that future, including the
//! service and repository calls, can read it back with [`TraceId::current`];
//! [`crate::domain::Error`] does so to stamp `traceId` on error bodies.
//! Work handed to `tokio::spawn` leaves the scope and sees `None`.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

tokio::task_local! {
    static ACTIVE_TRACE_ID: TraceId;
}

/// UUID identifying one request in logs, the `trace-id` header and error
/// payloads.
///
/// # Examples
/// ```
/// use users_api::TraceId;
///
/// async fn log_lookup(user_id: i32) {
///     match TraceId::current() {
///         Some(trace_id) => tracing::debug!(%trace_id, user_id, "looking up user"),
///         None => tracing::debug!(user_id, "looking up user outside a request"),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random id for an incoming request.
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Id of the request currently being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        ACTIVE_TRACE_ID.try_with(|trace_id| *trace_id).ok()
    }

    /// Drive `fut` with `trace_id` visible to [`TraceId::current`].
    ///
    /// ```
    /// use users_api::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let trace_id: TraceId = "6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b"
    ///     .parse()
    ///     .expect("valid UUID");
    /// let seen = TraceId::scope(trace_id, async { TraceId::current() }).await;
    /// assert_eq!(seen, Some(trace_id));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        ACTIVE_TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
