//! Outbound delivery port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::dialog::domain::Reply;
use crate::task::domain::OperatorId;

/// Result type for outbox operations.
pub type OutboxResult<T> = Result<T, OutboxError>;

/// Delivers replies to operators over the chat transport.
///
/// Implementations render [`Reply::choice`] as two buttons whose callback
/// payloads come back as [`Choice`](crate::dialog::domain::Choice) events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Outbox: Send + Sync {
    /// Sends one reply to the operator.
    ///
    /// # Errors
    ///
    /// Returns [`OutboxError::Delivery`] when the transport fails.
    async fn send(&self, operator: &OperatorId, reply: Reply) -> OutboxResult<()>;
}

/// Errors returned by outbox implementations.
#[derive(Debug, Clone, Error)]
pub enum OutboxError {
    /// Transport-level failure.
    #[error("delivery error: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl OutboxError {
    /// Wraps a transport error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
