//! Terminal output for the workflow's notifier, navigator and observer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use seamap_workflow::{CsvFile, Navigator, Notice, Notifier, UploadState};

/// Prints notices to stderr with a level emoji.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{} {}", notice.level.emoji(), notice.message);
    }
}

/// Remembers the last URL the workflow asked to open, so the caller can
/// fetch it instead of launching a browser.
#[derive(Clone, Debug, Default)]
pub struct DownloadRecorder {
    last: Rc<RefCell<Option<String>>>,
}

impl DownloadRecorder {
    pub fn take(&self) -> Option<String> {
        self.last.borrow_mut().take()
    }
}

impl Navigator for DownloadRecorder {
    fn open_in_new_context(&self, url: &str) {
        *self.last.borrow_mut() = Some(url.to_string());
    }
}

/// Observer printing a progress line whenever the upload percentage changes.
pub fn progress_printer() -> impl Fn(UploadState<CsvFile>) {
    let last = Cell::new(None::<u8>);
    move |state| {
        if !state.is_uploading() && last.get().is_none() {
            return;
        }
        if let Some(line) = progress_line(last.get(), state.progress_percent) {
            eprintln!("{}", line);
        }
        last.set(if state.is_uploading() { Some(state.progress_percent) } else { None });
    }
}

/// Line to print for a progress change, or `None` if nothing changed.
pub fn progress_line(previous: Option<u8>, current: u8) -> Option<String> {
    if previous == Some(current) {
        return None;
    }
    Some(format!("   ⏳ Progress: {}%", current))
}
