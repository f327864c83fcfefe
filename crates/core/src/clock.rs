//! Game clock - ownership of the one recurring gravity registration.
//!
//! The timer primitive itself is a host capability behind the [`Scheduler`]
//! trait; the clock only tracks the single live registration handle. Every
//! period change cancels the old registration before installing the new one,
//! so at most one gravity fire is ever pending: two overlapping registrations
//! would double-advance gravity.
//!
//! Two schedulers ship with the crate: [`DeadlineScheduler`] for a real
//! event loop and [`ManualScheduler`] for deterministic tests.

use std::time::{Duration, Instant};

/// Opaque identifier for a timer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Recurring-timer capability provided by the host.
///
/// `register` arms a recurring fire every `period_ms`; `cancel` disarms it.
/// The game clock is the sole client, so implementations only need to track
/// one live registration at a time.
pub trait Scheduler {
    fn register(&mut self, period_ms: u32) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Owner of the gravity timer registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameClock {
    handle: Option<TimerHandle>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the clock at `period_ms`, cancelling any current registration
    /// first.
    pub fn start(&mut self, sched: &mut impl Scheduler, period_ms: u32) {
        if let Some(handle) = self.handle.take() {
            sched.cancel(handle);
        }
        self.handle = Some(sched.register(period_ms));
    }

    /// Switch to a new period after a level change.
    ///
    /// Cancel-then-register, so gravity speeds up without a double-fire
    /// window.
    pub fn reschedule(&mut self, sched: &mut impl Scheduler, period_ms: u32) {
        self.start(sched, period_ms);
    }

    /// Disarm the clock; used on game over.
    pub fn stop(&mut self, sched: &mut impl Scheduler) {
        if let Some(handle) = self.handle.take() {
            sched.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

/// Wall-clock scheduler for the host event loop.
///
/// Single-slot: the game clock is its only client. The loop sleeps until
/// [`DeadlineScheduler::next_deadline`] and then calls
/// [`DeadlineScheduler::poll`]; a due poll advances the deadline a full
/// period past `now`, so a stalled host catches up with one fire instead of
/// a burst.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    slot: Option<Registration>,
    next_id: u64,
}

#[derive(Debug)]
struct Registration {
    handle: TimerHandle,
    period: Duration,
    due: Instant,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the pending fire is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slot.as_ref().map(|reg| reg.due)
    }

    /// Fire the registration if it is due, advancing the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &mut self.slot {
            Some(reg) if now >= reg.due => {
                reg.due = now + reg.period;
                true
            }
            _ => false,
        }
    }

    fn fresh_handle(&mut self) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        handle
    }
}

impl Scheduler for DeadlineScheduler {
    fn register(&mut self, period_ms: u32) -> TimerHandle {
        let handle = self.fresh_handle();
        let period = Duration::from_millis(u64::from(period_ms));
        self.slot = Some(Registration {
            handle,
            period,
            due: Instant::now() + period,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.slot.as_ref().map(|reg| reg.handle) == Some(handle) {
            self.slot = None;
        }
    }
}

/// Deterministic scheduler for tests: records registrations instead of
/// keeping time.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    active: Option<(TimerHandle, u32)>,
    next_id: u64,
    registrations: u32,
    cancellations: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the live registration, if any.
    pub fn active_period(&self) -> Option<u32> {
        self.active.map(|(_, period)| period)
    }

    /// Total `register` calls observed.
    pub fn registrations(&self) -> u32 {
        self.registrations
    }

    /// Total `cancel` calls that hit a live registration.
    pub fn cancellations(&self) -> u32 {
        self.cancellations
    }
}

impl Scheduler for ManualScheduler {
    fn register(&mut self, period_ms: u32) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.registrations += 1;
        self.active = Some((handle, period_ms));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.active.map(|(h, _)| h) == Some(handle) {
            self.active = None;
            self.cancellations += 1;
        }
    }
}
