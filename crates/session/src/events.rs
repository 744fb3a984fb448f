//! Session transition audit log.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use schoolhub_auth::{Principal, Role};
use schoolhub_core::PrincipalId;

/// What happened to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEventKind {
    LoggedIn,
    Restored,
    RoleSwitched { from: Role },
    LoggedOut,
}

/// A successful session transition. Failed operations are not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionEvent {
    #[serde(flatten)]
    pub kind: SessionEventKind,
    pub principal_id: PrincipalId,
    pub role: Role,
    pub occurred_at: DateTime<Utc>,
}

impl SessionEvent {
    pub fn new(kind: SessionEventKind, principal: &Principal, occurred_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            principal_id: principal.id().clone(),
            role: principal.role(),
            occurred_at,
        }
    }
}

/// Bounded FIFO of session events; the oldest entry is dropped when full.
#[derive(Debug, Clone)]
pub(crate) struct EventLog {
    events: VecDeque<SessionEvent>,
    limit: usize,
}

impl EventLog {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(limit.min(256)),
            limit,
        }
    }

    pub(crate) fn push(&mut self, event: SessionEvent) {
        if self.limit == 0 {
            return;
        }
        while self.events.len() >= self.limit {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub(crate) fn snapshot(&self) -> Vec<SessionEvent> {
        self.events.iter().cloned().collect()
    }
}
