//! One-shot timers.
//!
//! Alert and toast removal are the only timed work on a page. Timers are
//! fire-and-forget: once scheduled they cannot be cancelled, and each task
//! only touches the element it captured.

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// `setTimeout`-backed scheduler for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
