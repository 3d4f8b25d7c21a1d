//! Hooks shared by the playground views

use dioxus::core::Task;
use dioxus::prelude::*;
use md3_common::debounce::Debouncer;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;
use tracing::trace;

/// Holds at most one pending timer task for a component.
///
/// Starting a new timer cancels the previous one. Created by
/// `use_timer_slot()`, which also cancels the timer on unmount.
#[derive(Clone)]
pub struct TimerSlot(Rc<Cell<Option<Task>>>);

impl PartialEq for TimerSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl TimerSlot {
    /// Run `then` after `delay_ms`, replacing any timer still waiting
    pub fn start<F>(&self, delay_ms: u64, then: impl FnOnce() -> F + 'static)
    where
        F: Future<Output = ()> + 'static,
    {
        self.cancel();
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            then().await;
        });
        self.0.set(Some(task));
    }

    pub fn cancel(&self) {
        if let Some(task) = self.0.take() {
            trace!("Cancelling pending timer");
            task.cancel();
        }
    }
}

/// One timer per component, cancelled when the component unmounts
pub fn use_timer_slot() -> TimerSlot {
    let slot = use_hook(|| TimerSlot(Rc::new(Cell::new(None))));
    {
        let slot = slot.clone();
        use_drop(move || slot.cancel());
    }
    slot
}

/// Handle for a trailing-edge debounced value.
///
/// Created by `use_debounced()`. Each `schedule()` replaces the pending
/// value and restarts the quiet period; the callback runs once with the
/// last value after `delay` passes without another schedule.
pub struct DebounceHandle<T: 'static> {
    debouncer: Signal<Debouncer<T>>,
    timer: TimerSlot,
    delay_ms: u64,
    on_fire: Callback<T>,
}

impl<T: 'static> Clone for DebounceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            debouncer: self.debouncer,
            timer: self.timer.clone(),
            delay_ms: self.delay_ms,
            on_fire: self.on_fire,
        }
    }
}

impl<T: 'static> PartialEq for DebounceHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.timer == other.timer
    }
}

impl<T: 'static> DebounceHandle<T> {
    pub fn schedule(&self, value: T) {
        let mut debouncer = self.debouncer;
        let ticket = debouncer.write().schedule(value);
        let on_fire = self.on_fire;
        self.timer.start(self.delay_ms, move || async move {
            // Bind first so the write borrow ends before the callback runs
            let fired = debouncer.write().fire(ticket);
            if let Some(value) = fired {
                on_fire.call(value);
            }
        });
    }

    /// Deliver the pending value now instead of waiting
    pub fn flush(&self) {
        self.timer.cancel();
        let mut debouncer = self.debouncer;
        let pending = debouncer.write().flush();
        if let Some(value) = pending {
            self.on_fire.call(value);
        }
    }

    /// Drop the pending value without delivering it
    pub fn cancel(&self) {
        self.timer.cancel();
        let mut debouncer = self.debouncer;
        debouncer.write().cancel();
    }

    /// Reactive: re-renders the reader when the pending state changes
    pub fn is_pending(&self) -> bool {
        self.debouncer.read().is_pending()
    }
}

/// Debounce values through `on_fire` with a `delay` quiet period.
///
/// The timer is cancelled when the calling component unmounts, so a value
/// scheduled right before teardown is never delivered.
pub fn use_debounced<T: 'static>(
    delay: Duration,
    on_fire: impl FnMut(T) + 'static,
) -> DebounceHandle<T> {
    let debouncer = use_signal(Debouncer::new);
    let timer = use_timer_slot();
    let on_fire = use_callback(on_fire);

    DebounceHandle {
        debouncer,
        timer,
        delay_ms: duration_ms(delay),
        on_fire,
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
pub fn duration_ms(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    // Browser timers take a u32; longer waits are clamped
    gloo_timers::future::TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_ms_saturates() {
        assert_eq!(duration_ms(Duration::from_millis(300)), 300);
        assert_eq!(duration_ms(Duration::MAX), u64::MAX);
    }
}
