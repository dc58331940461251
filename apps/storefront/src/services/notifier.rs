//! # Notices
//!
//! Toast-style messages raised by the views. Fire-and-forget: views never
//! wait on, or react to, a notice being shown.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::debug;

/// How loud a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

/// One toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// How long the toast stays up.
    pub life_ms: u64,
}

impl Notice {
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Notice {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            life_ms: 2000,
        }
    }

    pub fn with_life(mut self, life_ms: u64) -> Self {
        self.life_ms = life_ms;
        self
    }
}

/// Presentation surface for notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Collects notices in memory until they are taken.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything raised so far.
    pub fn take(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *notices)
    }

    pub fn last(&self) -> Option<Notice> {
        let notices = self.notices.lock().unwrap_or_else(PoisonError::into_inner);
        notices.last().cloned()
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        debug!(severity = ?notice.severity, summary = %notice.summary, "Notice");
        let mut notices = self.notices.lock().unwrap_or_else(PoisonError::into_inner);
        notices.push(notice);
    }
}
