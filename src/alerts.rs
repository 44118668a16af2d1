//! Auto-dismiss for server-rendered flash alerts.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use std::rc::Rc;

use crate::schedule::Scheduler;

/// Schedule `dismiss` for each alert after `delay_ms`.
///
/// Each timer owns exactly one alert. Returns how many were scheduled.
pub fn schedule_auto_dismiss<A, I, F>(scheduler: &impl Scheduler, alerts: I, delay_ms: u32, dismiss: F) -> usize
where
    A: 'static,
    I: IntoIterator<Item = A>,
    F: Fn(A) + 'static,
{
    let dismiss = Rc::new(dismiss);
    let mut scheduled = 0;
    for alert in alerts {
        let dismiss = Rc::clone(&dismiss);
        scheduler.schedule(delay_ms, Box::new(move || dismiss(alert)));
        scheduled += 1;
    }
    scheduled
}
