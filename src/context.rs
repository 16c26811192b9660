//! Call context carried from an inbound request into outbound calls.
//!
//! A `CallContext` pairs a cancellation token with an optional deadline.
//! Handlers receive a root context per request; code that calls another
//! service derives a child with a tighter ceiling and runs the call under it.
//!
//! ## Example
//!
//! ```ignore
//! let inbound = CallContext::with_timeout(Duration::from_secs(30));
//! let peer = inbound.child_with_timeout(Duration::from_secs(3));
//! let user = peer.run(client.get(url).send()).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Why a context stopped a call before it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Interrupted {
    #[error("request cancelled")]
    Cancelled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation signal plus deadline for one unit of work.
#[derive(Debug, Clone)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for CallContext {
    fn default() -> Self {
        Self::background()
    }
}

impl CallContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
        }
    }

    /// A root context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Derive a child bounded by `ceiling`.
    ///
    /// The child's deadline is the earlier of this context's deadline and
    /// `now + ceiling`. Cancelling this context cancels the child; cancelling
    /// the child leaves this context untouched.
    pub fn child_with_timeout(&self, ceiling: Duration) -> Self {
        let capped = Instant::now() + ceiling;
        let deadline = match self.deadline {
            Some(parent) => parent.min(capped),
            None => capped,
        };

        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// The instant after which calls under this context are abandoned.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline. `None` means unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Cancel this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A guard that cancels this context when dropped.
    ///
    /// Held by request middleware so that dropping the handler future
    /// (client went away) cancels outbound calls still in flight.
    pub fn cancel_on_drop(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }

    /// Drive `future` until it completes, the context is cancelled, or the
    /// deadline passes, whichever happens first.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, Interrupted>
    where
        F: Future,
    {
        let expiry = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(Interrupted::Cancelled),
            _ = expiry => Err(Interrupted::DeadlineExceeded),
            output = future => Ok(output),
        }
    }
}
