//! Simulated upload progress.
//!
//! The upload request carries no byte-level progress, so the bar is driven
//! by a repeating timer that creeps towards [`PROGRESS_CAP`] and is forced to
//! [`PROGRESS_DONE`] once the response arrives.

use std::time::Duration;

/// Tick period of the simulator.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(200);

/// Increment per tick.
pub const PROGRESS_STEP: u8 = 10;

/// Highest value reachable before the response arrives.
pub const PROGRESS_CAP: u8 = 90;

/// Value after a successful response.
pub const PROGRESS_DONE: u8 = 100;

/// Next simulated value. Never decreases.
pub fn next_progress(current: u8) -> u8 {
    if current >= PROGRESS_CAP {
        return current;
    }
    current.saturating_add(PROGRESS_STEP).min(PROGRESS_CAP)
}

/// Platform hook for repeating tasks.
///
/// Dropping the returned handle must cancel the task.
pub trait Scheduler {
    type Handle;

    fn repeat(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// A running simulator, owned by one upload attempt.
pub struct ProgressTimer<H> {
    handle: Option<H>,
}

impl<H> ProgressTimer<H> {
    pub fn start<S>(scheduler: &S, tick: Box<dyn FnMut()>) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        Self {
            handle: Some(scheduler.repeat(PROGRESS_INTERVAL, tick)),
        }
    }

    /// Cancel the repeating task. Calling this again is a no-op.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
            log::debug!("⏱️ Progress timer stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Drop for ProgressTimer<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_next_progress_caps_at_ninety() {
        let mut p = 0;
        let mut seen = Vec::new();
        for _ in 0..12 {
            p = next_progress(p);
            seen.push(p);
        }
        assert_eq!(&seen[..9], &[10, 20, 30, 40, 50, 60, 70, 80, 90]);
        assert!(seen[9..].iter().all(|&v| v == 90));
    }

    #[test]
    fn test_next_progress_never_decreases() {
        assert_eq!(next_progress(95), 95);
        assert_eq!(next_progress(85), 90);
    }

    struct Guard(Rc<Cell<u32>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    struct CountingScheduler(Rc<Cell<u32>>);

    impl Scheduler for CountingScheduler {
        type Handle = Guard;

        fn repeat(&self, period: Duration, _tick: Box<dyn FnMut()>) -> Guard {
            assert_eq!(period, PROGRESS_INTERVAL);
            Guard(self.0.clone())
        }
    }

    #[test]
    fn test_stop_cancels_exactly_once() {
        let cancelled = Rc::new(Cell::new(0));
        let scheduler = CountingScheduler(cancelled.clone());

        let mut timer = ProgressTimer::start(&scheduler, Box::new(|| {}));
        assert!(timer.is_running());
        timer.stop();
        timer.stop();
        drop(timer);

        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn test_drop_cancels() {
        let cancelled = Rc::new(Cell::new(0));
        let scheduler = CountingScheduler(cancelled.clone());
        {
            let _timer = ProgressTimer::start(&scheduler, Box::new(|| {}));
        }
        assert_eq!(cancelled.get(), 1);
    }
}
