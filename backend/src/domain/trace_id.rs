//! Correlation identifier for one request.
//!
//! The HTTP middleware installs a [`TraceId`] in task-local storage before a
//! handler runs; [`Error`](super::Error) constructors pick it up from there so
//! every failure payload and log line can be tied back to its request.
//! Task-locals do not follow `tokio::spawn` or `spawn_blocking`; wrap such
//! work in [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Header used to exchange the trace identifier with clients.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// UUID naming a single request.
///
/// # Examples
/// ```
/// use dinos::TraceId;
///
/// let supplied = TraceId::from_header_value(Some("3fa85f64-5717-4562-b3fc-2c963f66afa6"));
/// assert_eq!(supplied.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
///
/// let fresh = TraceId::from_header_value(Some("not a uuid"));
/// assert_ne!(fresh.to_string(), "not a uuid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuse a caller-supplied identifier when it parses as a UUID, otherwise
    /// start a new one.
    #[must_use]
    pub fn from_header_value(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Run `fut` with `trace_id` installed as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use dinos::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id = TraceId::generate();
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// assert_eq!(TraceId::current(), None);
    /// # });
    /// ```
    pub async fn scope<F: Future>(trace_id: Self, fut: F) -> F::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl From<Uuid> for TraceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
