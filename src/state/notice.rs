//! Transient user-visible notices (success/info/error toasts).
//!
//! DESIGN
//! ======
//! Each failed or completed user action pushes exactly one notice. Notices
//! are dismissed by the user or by a timer in the tray component.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::config::DEFAULT_NOTICE_TIMEOUT_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Queue of visible notices, oldest first.
#[derive(Clone, Debug)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    /// Auto-dismiss delay applied by the tray.
    pub timeout_ms: u32,
    next_id: u64,
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_NOTICE_TIMEOUT_MS)
    }
}

impl NoticeState {
    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self { items: Vec::new(), timeout_ms, next_id: 0 }
    }

    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, text: text.into() });
        id
    }

    /// Returns `false` if the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
