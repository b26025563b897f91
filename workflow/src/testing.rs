//! Fake capabilities for workflow tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::api::{Navigator, Notifier, PredictionApi};
use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::progress::Scheduler;
use crate::types::*;
use crate::workflow::UploadWorkflow;

// =============================================================================
// Scheduler
// =============================================================================

type Tick = Box<dyn FnMut()>;

/// Scheduler whose ticks only fire when the test says so.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    tasks: Rc<RefCell<Vec<(u64, Tick)>>>,
    next_id: Rc<Cell<u64>>,
    cancelled: Rc<Cell<u32>>,
}

pub struct ManualHandle {
    id: u64,
    scheduler: ManualScheduler,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.scheduler.tasks.borrow_mut().retain(|(id, _)| *id != self.id);
        self.scheduler.cancelled.set(self.scheduler.cancelled.get() + 1);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn repeat(&self, _period: Duration, tick: Tick) -> ManualHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.tasks.borrow_mut().push((id, tick));
        ManualHandle { id, scheduler: self.clone() }
    }
}

impl ManualScheduler {
    /// Fire every live task `n` times.
    pub fn fire(&self, n: usize) {
        for _ in 0..n {
            for (_, tick) in self.tasks.borrow_mut().iter_mut() {
                tick();
            }
        }
    }

    pub fn cancelled(&self) -> u32 {
        self.cancelled.get()
    }

    pub fn live(&self) -> usize {
        self.tasks.borrow().len()
    }
}

// =============================================================================
// API
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct UploadCall {
    pub url: String,
    pub file_name: String,
    pub species: Species,
}

type Hook = Box<dyn Fn()>;
type AsyncHook = Box<dyn Fn() -> LocalBoxFuture<'static, ()>>;

/// Scripted backend. Responses are consumed in push order.
pub struct FakeApi {
    scheduler: ManualScheduler,
    ticks_during_upload: Cell<usize>,
    uploads: RefCell<VecDeque<Result<UploadResponse, ApiError>>>,
    analyses: RefCell<VecDeque<Result<AnalysisResponse, ApiError>>>,
    upload_log: RefCell<Vec<UploadCall>>,
    analysis_log: RefCell<Vec<(String, Species)>>,
    upload_hook: RefCell<Option<Rc<Hook>>>,
    analyze_hook: RefCell<Option<Rc<AsyncHook>>>,
}

impl FakeApi {
    pub fn new(scheduler: ManualScheduler) -> Self {
        Self {
            scheduler,
            ticks_during_upload: Cell::new(0),
            uploads: RefCell::default(),
            analyses: RefCell::default(),
            upload_log: RefCell::default(),
            analysis_log: RefCell::default(),
            upload_hook: RefCell::default(),
            analyze_hook: RefCell::default(),
        }
    }

    pub fn push_upload(&self, response: Result<UploadResponse, ApiError>) {
        self.uploads.borrow_mut().push_back(response);
    }

    pub fn push_analysis(&self, response: Result<AnalysisResponse, ApiError>) {
        self.analyses.borrow_mut().push_back(response);
    }

    /// Progress ticks to fire while an upload is pending.
    pub fn set_ticks_during_upload(&self, n: usize) {
        self.ticks_during_upload.set(n);
    }

    /// Run `hook` while an upload is pending.
    pub fn on_upload(&self, hook: impl Fn() + 'static) {
        *self.upload_hook.borrow_mut() = Some(Rc::new(Box::new(hook)));
    }

    /// Await `hook` while an analysis is pending.
    pub fn on_analyze(&self, hook: impl Fn() -> LocalBoxFuture<'static, ()> + 'static) {
        *self.analyze_hook.borrow_mut() = Some(Rc::new(Box::new(hook)));
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_log.borrow().len()
    }

    pub fn analysis_calls(&self) -> usize {
        self.analysis_log.borrow().len()
    }

    pub fn last_upload(&self) -> Option<UploadCall> {
        self.upload_log.borrow().last().cloned()
    }

    pub fn last_analysis(&self) -> Option<(String, Species)> {
        self.analysis_log.borrow().last().cloned()
    }
}

impl PredictionApi<CsvFile> for FakeApi {
    async fn upload(&self, url: &str, file: &CsvFile, species: Species) -> Result<UploadResponse, ApiError> {
        self.upload_log.borrow_mut().push(UploadCall {
            url: url.to_string(),
            file_name: file.name.clone(),
            species,
        });
        self.scheduler.fire(self.ticks_during_upload.get());
        let hook = self.upload_hook.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted upload response".into())))
    }

    async fn analyze(&self, url: &str, species: Species) -> Result<AnalysisResponse, ApiError> {
        self.analysis_log.borrow_mut().push((url.to_string(), species));
        let hook = self.analyze_hook.borrow_mut().take();
        if let Some(hook) = hook {
            hook().await;
        }
        self.analyses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted analysis response".into())))
    }
}

// =============================================================================
// Notifier / Navigator
// =============================================================================

#[derive(Clone, Default)]
pub struct RecordingNotifier(Rc<RefCell<Vec<Notice>>>);

impl RecordingNotifier {
    pub fn last(&self) -> Option<Notice> {
        self.0.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.0.borrow_mut().push(notice);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator(Rc<RefCell<Vec<String>>>);

impl RecordingNavigator {
    pub fn all(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_in_new_context(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

// =============================================================================
// Harness
// =============================================================================

pub type TestWorkflow = UploadWorkflow<CsvFile, FakeApi, ManualScheduler>;

pub struct Harness {
    pub workflow: TestWorkflow,
    pub scheduler: ManualScheduler,
    pub notices: RecordingNotifier,
    pub opened: RecordingNavigator,
}

impl Harness {
    pub fn new(config: BackendConfig) -> Self {
        let scheduler = ManualScheduler::default();
        let notices = RecordingNotifier::default();
        let opened = RecordingNavigator::default();
        let workflow = UploadWorkflow::new(
            config,
            FakeApi::new(scheduler.clone()),
            scheduler.clone(),
            notices.clone(),
            opened.clone(),
        );
        Self { workflow, scheduler, notices, opened }
    }

    pub fn api(&self) -> &FakeApi {
        self.workflow.api()
    }
}
