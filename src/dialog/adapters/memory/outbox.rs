//! Outbox that records replies instead of delivering them.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::dialog::{
    domain::Reply,
    ports::{Outbox, OutboxError, OutboxResult},
};
use crate::task::domain::OperatorId;

/// Thread-safe outbox keeping every reply in delivery order.
///
/// Suitable for tests and for embedding the controller behind a transport
/// that polls for replies.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutbox {
    sent: Arc<RwLock<Vec<(OperatorId, Reply)>>>,
}

impl RecordingOutbox {
    /// Creates an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded reply with its recipient.
    #[must_use]
    pub fn sent(&self) -> Vec<(OperatorId, Reply)> {
        self.sent
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the replies sent to one operator.
    #[must_use]
    pub fn replies_for(&self, operator: &OperatorId) -> Vec<Reply> {
        self.sent()
            .into_iter()
            .filter(|(recipient, _)| recipient == operator)
            .map(|(_, reply)| reply)
            .collect()
    }

    /// Returns the texts sent to one operator.
    #[must_use]
    pub fn texts_for(&self, operator: &OperatorId) -> Vec<String> {
        self.replies_for(operator)
            .into_iter()
            .map(|reply| reply.text)
            .collect()
    }

    /// Returns the last reply sent to one operator.
    #[must_use]
    pub fn last_for(&self, operator: &OperatorId) -> Option<Reply> {
        self.replies_for(operator).pop()
    }

    /// Removes and returns every recorded reply.
    #[must_use]
    pub fn drain(&self) -> Vec<(OperatorId, Reply)> {
        self.sent
            .write()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }
}

#[async_trait]
impl Outbox for RecordingOutbox {
    async fn send(&self, operator: &OperatorId, reply: Reply) -> OutboxResult<()> {
        let mut sent = self
            .sent
            .write()
            .map_err(|err| OutboxError::delivery(std::io::Error::other(err.to_string())))?;
        sent.push((operator.clone(), reply));
        Ok(())
    }
}
