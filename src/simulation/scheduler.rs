//! Logical-clock event scheduler.
//!
//! Every timer in the bank (motion ticks, stop resumes, idle returns,
//! scripted call submissions) is an event on one logical timeline. The
//! event loop pops events in (deadline, arming order) and the clock jumps
//! to each deadline, so tests drive full scenarios synchronously.

use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

use super::types::CarId;

/// Identity of one armed timer. Arming a replacement for the same purpose
/// hands out a fresh token, so a late-firing stale event can be recognized
/// and dropped on delivery.
pub type TimerToken = u64;

/// A discrete event on the simulation timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// Per-floor motion timer fired for a car.
    MotionTick(CarId),
    /// The pause after an intermediate stop elapsed; motion resumes.
    ResumeMotion(CarId),
    /// Quiet-period timer expired; the car may relocate to its home floor.
    IdleReturn(CarId),
    /// A scripted hall call reaches the dispatcher.
    SubmitCall { floor: u8, going_up: bool },
}

/// Pending events keyed by (deadline, token). Tokens increase
/// monotonically, so events sharing a deadline fire in arming order.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: f64,
    next_token: TimerToken,
    pending: BTreeMap<(OrderedFloat<f64>, TimerToken), SimEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Arm `event` to fire `delay` time units from now.
    pub fn schedule(&mut self, delay: f64, event: SimEvent) -> TimerToken {
        let token = self.next_token;
        self.next_token += 1;
        self.pending
            .insert((OrderedFloat(self.now + delay), token), event);
        token
    }

    /// Disarm a previously scheduled event. Unknown tokens are ignored, so
    /// canceling an already-fired timer is harmless.
    pub fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|&(_, t), _| t != token);
    }

    /// Pop the earliest event due at or before `deadline`, advancing the
    /// clock to its fire time.
    pub fn pop_due(&mut self, deadline: f64) -> Option<(TimerToken, SimEvent)> {
        let key = *self.pending.keys().next()?;
        if key.0.into_inner() > deadline {
            return None;
        }
        let event = self.pending.remove(&key)?;
        self.now = key.0.into_inner();
        Some((key.1, event))
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, time: f64) {
        if time > self.now {
            self.now = time;
        }
    }

    /// Deadline of the next pending event, if any.
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending.keys().next().map(|key| key.0.into_inner())
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
