//! Browser implementations of the workflow's platform hooks.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use seamap_workflow::{Navigator, Notice, NoticeLevel, Notifier, Scheduler};

use crate::config::{MAX_TOASTS, TOAST_TIMEOUT_MS};
use crate::types::{push_toast, Toast};

// =============================================================================
// Progress timer
// =============================================================================

/// `setInterval` scheduler. Dropping the [`Interval`] clears it.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn repeat(&self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period.as_millis() as u32, tick)
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Opens URLs in a new tab.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn open_in_new_context(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window available to open {}", url);
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::error!("Failed to open {}: {:?}", url, e);
        }
    }
}

// =============================================================================
// Toasts
// =============================================================================

/// Pushes notices onto the toast list and removes each one after
/// [`TOAST_TIMEOUT_MS`].
#[derive(Clone)]
pub struct ToastNotifier {
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: Rc<Cell<u64>>,
}

impl ToastNotifier {
    pub fn new(set_toasts: WriteSignal<Vec<Toast>>) -> Self {
        Self {
            set_toasts,
            next_id: Rc::new(Cell::new(0)),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => log::warn!("{} {}", notice.level.emoji(), notice.message),
            _ => log::info!("{} {}", notice.level.emoji(), notice.message),
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let toast = Toast::from_notice(id, notice, timestamp);
        self.set_toasts.update(|toasts| push_toast(toasts, toast, MAX_TOASTS));

        let set_toasts = self.set_toasts;
        Timeout::new(TOAST_TIMEOUT_MS, move || {
            // The page may be gone by now.
            set_toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }
}
