//! Tokio implementation of the workflow's [`Scheduler`].
//!
//! The workflow is `!Send`, so everything here runs on a current-thread
//! runtime inside a [`tokio::task::LocalSet`].

use std::time::Duration;

use seamap_workflow::Scheduler;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Spawns repeating tasks with `spawn_local`.
///
/// Must be used from within a `LocalSet`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

/// Aborts the task when dropped.
#[derive(Debug)]
pub struct TaskHandle(JoinHandle<()>);

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TaskHandle;

    fn repeat(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> TaskHandle {
        TaskHandle(tokio::task::spawn_local(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick();
            }
        }))
    }
}
