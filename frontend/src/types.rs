//! Types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - browser file handle adapter
//! - **Toast Types** - transient notifications
//! - **Tab Types** - result panel tabs

use seamap_workflow::{FileHandle, Notice, NoticeLevel, UploadState};

// =============================================================================
// File Types
// =============================================================================

/// A `web_sys::File` offered to the workflow.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(pub web_sys::File);

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Workflow state as rendered by the tool page.
pub type BrowserState = UploadState<BrowserFile>;

// =============================================================================
// Toast Types
// =============================================================================

/// A notification on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Used to dismiss this toast once its timeout fires.
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    /// HH:MM:SS
    pub timestamp: String,
}

impl Toast {
    pub fn from_notice(id: u64, notice: Notice, timestamp: String) -> Self {
        Self {
            id,
            level: notice.level,
            message: notice.message,
            timestamp,
        }
    }

    /// CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "toast toast-info",
            NoticeLevel::Success => "toast toast-success",
            NoticeLevel::Error => "toast toast-error",
        }
    }
}

/// Append a toast, dropping the oldest ones beyond `max`.
pub fn push_toast(toasts: &mut Vec<Toast>, toast: Toast, max: usize) {
    toasts.push(toast);
    if toasts.len() > max {
        let excess = toasts.len() - max;
        toasts.drain(..excess);
    }
}

// =============================================================================
// Tab Types
// =============================================================================

/// Result panel tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultTab {
    #[default]
    Map,
    Analysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast::from_notice(id, Notice::info(format!("n{}", id)), "12:00:00".into())
    }

    #[test]
    fn test_push_toast_keeps_newest() {
        let mut toasts = Vec::new();
        for id in 0..7 {
            push_toast(&mut toasts, toast(id), 5);
        }
        let ids: Vec<u64> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_css_class() {
        let t = Toast::from_notice(1, Notice::error("bad columns"), String::new());
        assert_eq!(t.css_class(), "toast toast-error");
        assert_eq!(t.message, "bad columns");
    }
}
