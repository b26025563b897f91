//! The upload / analyze / download state machine.
//!
//! ```text
//!            submit_upload()
//!   Idle ───────────────────▶ Uploading ──┬──▶ Succeeded ──▶ analyze() ──▶ Analyzing ──▶ {Succeeded, Failed}
//!    ▲                                    └──▶ Failed
//!    └──────── submit_upload() re-enters Uploading from any terminal phase
//! ```
//!
//! All state lives behind an `Rc<RefCell<_>>`; clones of [`UploadWorkflow`]
//! share it, so UI callbacks and spawned futures can each hold one.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::api::{Navigator, Notifier, PredictionApi};
use crate::config::BackendConfig;
use crate::error::*;
use crate::progress::{next_progress, ProgressTimer, Scheduler, PROGRESS_DONE};
use crate::types::*;

type Observer<F> = Box<dyn Fn(UploadState<F>)>;

struct Inner<F, A, S> {
    config: BackendConfig,
    api: A,
    scheduler: S,
    notifier: Box<dyn Notifier>,
    navigator: Box<dyn Navigator>,
    state: RefCell<UploadState<F>>,
    observer: RefCell<Option<Observer<F>>>,
    /// Bumped by every `submit_upload`; responses carrying an older value are dropped.
    attempt: Cell<u64>,
    disposed: Cell<bool>,
}

/// Client-side workflow driving the prediction backend.
pub struct UploadWorkflow<F, A, S> {
    inner: Rc<Inner<F, A, S>>,
}

impl<F, A, S> Clone for UploadWorkflow<F, A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F, A, S> UploadWorkflow<F, A, S>
where
    F: FileHandle,
    A: PredictionApi<F> + 'static,
    S: Scheduler + 'static,
{
    pub fn new(
        config: BackendConfig,
        api: A,
        scheduler: S,
        notifier: impl Notifier + 'static,
        navigator: impl Navigator + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                api,
                scheduler,
                notifier: Box::new(notifier),
                navigator: Box::new(navigator),
                state: RefCell::new(UploadState::default()),
                observer: RefCell::new(None),
                attempt: Cell::new(0),
                disposed: Cell::new(false),
            }),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    pub fn api(&self) -> &A {
        &self.inner.api
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UploadState<F> {
        self.inner.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&UploadState<F>) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Register a callback that receives a snapshot after every mutation.
    ///
    /// The callback must not call back into the workflow.
    pub fn set_observer(&self, observer: impl Fn(UploadState<F>) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Box::new(observer));
        self.emit();
    }

    /// Mark the workflow dead. Late responses and timer ticks are ignored
    /// afterwards and no further notifications are emitted.
    pub fn dispose(&self) {
        if !self.inner.disposed.replace(true) {
            log::debug!("🧹 Upload workflow disposed");
            self.inner.observer.borrow_mut().take();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    // =========================================================================
    // Control predicates (bound to `disabled` in the UI)
    // =========================================================================

    pub fn controls_locked(&self) -> bool {
        self.with_state(|s| s.controls_locked())
    }

    pub fn can_submit(&self) -> bool {
        self.with_state(|s| s.can_submit())
    }

    pub fn can_analyze(&self) -> bool {
        self.inner.config.analysis_enabled && self.with_state(|s| s.can_analyze())
    }

    pub fn can_download(&self) -> bool {
        self.with_state(|s| s.can_download())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Offer a file from the picker or a drop. Only names ending in `.csv`
    /// (case-sensitive) are accepted; a rejection keeps the previous selection.
    pub fn select_file(&self, candidate: F, source: FileSource) -> WorkflowResult<()> {
        if self.controls_locked() {
            return Err(WorkflowError::Busy);
        }

        let name = candidate.name();
        if !name.ends_with(".csv") {
            let message = match source {
                FileSource::Picker => MSG_PICK_CSV,
                FileSource::Drop => MSG_DROP_CSV,
            };
            log::warn!("🚫 Rejected '{}': not a .csv file", name);
            self.notify(Notice::error(message));
            return Err(WorkflowError::Validation(message.to_string()));
        }

        log::info!("📄 Selected {} ({})", name, format_kb(candidate.size()));
        self.update(|s| s.selected_file = Some(candidate));
        self.notify(Notice::success(match source {
            FileSource::Picker => "CSV file selected successfully",
            FileSource::Drop => "CSV file dropped successfully",
        }));
        Ok(())
    }

    /// Forget the selected file. Prior results are kept.
    pub fn clear_file(&self) {
        self.update(|s| s.selected_file = None);
    }

    pub fn set_species(&self, species: Species) -> WorkflowResult<()> {
        if self.with_state(|s| s.species_locked()) {
            return Err(WorkflowError::Busy);
        }
        self.update(|s| s.species = species);
        Ok(())
    }

    /// Upload the selected file for the selected species.
    ///
    /// Returns the absolute map URL on success.
    pub async fn submit_upload(&self) -> WorkflowResult<String> {
        if self.controls_locked() {
            return Err(WorkflowError::Busy);
        }

        let Some(file) = self.with_state(|s| s.selected_file.clone()) else {
            self.notify(Notice::error(MSG_NO_FILE));
            return Err(WorkflowError::Validation(MSG_NO_FILE.to_string()));
        };
        let species = self.with_state(|s| s.species);

        let attempt = self.inner.attempt.get() + 1;
        self.inner.attempt.set(attempt);
        self.update(|s| {
            s.upload_phase = UploadPhase::Uploading;
            s.progress_percent = 0;
            s.analysis_text = None;
            s.analysis_phase = AnalysisPhase::Idle;
        });

        let mut timer = ProgressTimer::start(&self.inner.scheduler, self.progress_tick(attempt));

        log::info!("📤 Uploading {} for {}...", file.name(), species);
        let url = self.inner.config.upload_url();
        let result = self.inner.api.upload(&url, &file, species).await;
        timer.stop();

        if !self.is_current(attempt) {
            log::warn!("⏭️ Ignoring upload response for a closed workflow");
            return Err(WorkflowError::Stale);
        }

        match result {
            Ok(response) => {
                let image = self.inner.config.image_url(&response.image_path);
                log::info!("🗺️ Map ready: {}", image);
                self.update(|s| {
                    s.upload_phase = UploadPhase::Succeeded;
                    s.progress_percent = PROGRESS_DONE;
                    s.result_image = Some(image.clone());
                    s.result_species = Some(species);
                });
                self.notify(Notice::success(format!(
                    "{} prediction map generated successfully",
                    species.label()
                )));
                Ok(image)
            }
            Err(e) => {
                log::error!("❌ Upload failed: {}", e);
                let err = WorkflowError::from_api(e, MSG_UPLOAD_FAILED, MSG_UPLOAD_UNKNOWN);
                self.update(|s| s.upload_phase = UploadPhase::Failed);
                self.notify(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Ask the backend to comment on the current map.
    pub async fn analyze(&self) -> WorkflowResult<String> {
        if !self.inner.config.analysis_enabled {
            log::warn!("Analysis requested on a variant without it");
            return Err(WorkflowError::AnalysisDisabled);
        }
        if self.with_state(|s| s.is_uploading() || s.is_analyzing()) {
            return Err(WorkflowError::Busy);
        }
        if self.with_state(|s| s.result_image.is_none()) {
            self.notify(Notice::error(MSG_NO_MAP));
            return Err(WorkflowError::Precondition(MSG_NO_MAP.to_string()));
        }

        let species = self.with_state(|s| s.analysis_species());
        let attempt = self.inner.attempt.get();
        self.update(|s| s.analysis_phase = AnalysisPhase::Analyzing);

        log::info!("🔎 Analyzing {} map...", species);
        let url = self.inner.config.analyze_url();
        let result = self.inner.api.analyze(&url, species).await;

        if !self.is_current(attempt) {
            log::warn!("⏭️ Discarding analysis for a superseded map");
            return Err(WorkflowError::Stale);
        }

        match result {
            Ok(response) => {
                self.update(|s| {
                    s.analysis_text = Some(response.analysis.clone());
                    s.analysis_phase = AnalysisPhase::Succeeded;
                });
                self.notify(Notice::success("Analysis completed successfully"));
                Ok(response.analysis)
            }
            Err(e) => {
                log::error!("❌ Analysis failed: {}", e);
                let err = WorkflowError::from_api(e, MSG_ANALYSIS_FAILED, MSG_ANALYSIS_UNKNOWN);
                self.update(|s| s.analysis_phase = AnalysisPhase::Failed);
                self.notify(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Open the download endpoint for the selected species.
    ///
    /// Returns `false` (and does nothing) without a map or while uploading.
    pub fn download(&self) -> bool {
        if !self.can_download() {
            log::debug!("Download ignored: no map available");
            return false;
        }
        let species = self.with_state(|s| s.species);
        let url = self.inner.config.download_url(species);
        log::info!("⬇️ Opening {}", url);
        self.inner.navigator.open_in_new_context(&url);
        true
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn is_current(&self, attempt: u64) -> bool {
        !self.is_disposed() && self.inner.attempt.get() == attempt
    }

    fn update(&self, f: impl FnOnce(&mut UploadState<F>)) {
        if self.is_disposed() {
            return;
        }
        f(&mut self.inner.state.borrow_mut());
        self.emit();
    }

    fn emit(&self) {
        if let Some(observer) = self.inner.observer.borrow().as_ref() {
            observer(self.state());
        }
    }

    fn notify(&self, notice: Notice) {
        if !self.is_disposed() {
            self.inner.notifier.notify(notice);
        }
    }

    fn progress_tick(&self, attempt: u64) -> Box<dyn FnMut()> {
        let weak: Weak<Inner<F, A, S>> = Rc::downgrade(&self.inner);
        Box::new(move || {
            let Some(inner) = weak.upgrade() else { return };
            let workflow = UploadWorkflow { inner };
            if !workflow.is_current(attempt) {
                return;
            }
            workflow.update(|s| {
                if s.is_uploading() {
                    s.progress_percent = next_progress(s.progress_percent);
                }
            });
        })
    }
}
