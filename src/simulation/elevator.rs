//! Per-car elevator controller state machine.
//!
//! Each car owns its full scheduling state: current floor, travel
//! direction, the up/down call queues, and the set of intermediate stops
//! merged into the trip in progress. Methods return outcome values telling
//! the surrounding bank which timers to arm; the controller itself never
//! touches the scheduler, which keeps every transition synchronous and
//! directly testable.

use std::collections::BTreeSet;

use super::call_queue::CallQueues;
use super::types::{CarId, Direction};

/// Motion phase of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// No active target; both queues empty.
    Idle,
    /// Driving one floor per motion tick toward the target.
    Moving,
    /// Briefly held at a merged stop; collapses back into `Moving` after
    /// the stop pause.
    PausedAtStop,
}

/// What `accept_call` did with a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Folded into the trip in progress as an intermediate stop.
    MergedEnRoute,
    /// Queued for a later trip.
    Queued,
    /// The car was idle and dispatched immediately.
    Dispatched(DispatchOutcome),
}

/// What `dispatch_next` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A new target was popped; the motion timer should start.
    Depart { target: u8 },
    /// Both queues empty; the idle-return timer should arm.
    Idle,
}

/// What a motion tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stepped one floor toward the target.
    Moved { floor: u8 },
    /// Held at a merged intermediate stop; resume after the stop pause.
    PausedAtStop { floor: u8 },
    /// Reached the target; `next` says what happens afterwards.
    Arrived { floor: u8, next: DispatchOutcome },
}

/// One independently scheduled elevator car.
#[derive(Debug, Clone)]
pub struct SimElevator {
    pub id: CarId,
    home_floor: u8,
    current_floor: u8,
    direction: Direction,
    state: MotionState,
    /// Defined if and only if the car is moving.
    target_floor: Option<u8>,
    queues: CallQueues,
    /// Floors strictly between the current floor and the target in the
    /// travel direction, visited without a separate queue entry.
    intermediate_stops: BTreeSet<u8>,
    next_seq: u64,
}

impl SimElevator {
    /// Create a car resting at its home floor.
    pub fn new(id: CarId) -> Self {
        Self {
            id,
            home_floor: id.home_floor(),
            current_floor: id.home_floor(),
            direction: Direction::Idle,
            state: MotionState::Idle,
            target_floor: None,
            queues: CallQueues::new(),
            intermediate_stops: BTreeSet::new(),
            next_seq: 0,
        }
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn home_floor(&self) -> u8 {
        self.home_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn target_floor(&self) -> Option<u8> {
        self.target_floor
    }

    /// True while the car has an active target, including the stop pause.
    pub fn is_moving(&self) -> bool {
        matches!(self.state, MotionState::Moving | MotionState::PausedAtStop)
    }

    /// True when the car has nothing at all to do.
    pub fn is_quiescent(&self) -> bool {
        !self.is_moving() && self.direction == Direction::Idle && self.queues.is_empty()
    }

    /// Number of calls waiting in the queues (merged stops not included).
    pub fn pending_calls(&self) -> usize {
        self.queues.len()
    }

    /// Whether `floor` is a merged stop on the trip in progress.
    pub fn has_intermediate_stop(&self, floor: u8) -> bool {
        self.intermediate_stops.contains(&floor)
    }

    /// Accept a hall call assigned to this car.
    ///
    /// While moving, a call matching the travel direction whose floor lies
    /// strictly between the current floor and the target merges into the
    /// trip in progress; anything else queues for a later trip. An idle car
    /// queues the call, takes its direction, and dispatches immediately.
    pub fn accept_call(&mut self, floor: u8, going_up: bool) -> CallOutcome {
        let seq = self.next_seq;
        self.next_seq += 1;

        if self.is_moving() {
            if self.merges_en_route(floor, going_up) {
                self.intermediate_stops.insert(floor);
                return CallOutcome::MergedEnRoute;
            }
            self.queues.push(floor, seq, going_up);
            return CallOutcome::Queued;
        }

        self.queues.push(floor, seq, going_up);
        self.direction = Direction::of_call(going_up);
        CallOutcome::Dispatched(self.dispatch_next())
    }

    fn merges_en_route(&self, floor: u8, going_up: bool) -> bool {
        let Some(target) = self.target_floor else {
            return false;
        };
        match self.direction {
            Direction::Up => going_up && floor > self.current_floor && floor < target,
            Direction::Down => !going_up && floor < self.current_floor && floor > target,
            Direction::Idle => false,
        }
    }

    /// Pull the next target using the SCAN policy: keep serving the
    /// current direction's queue, flip only when it runs dry. With both
    /// queues empty the car goes idle and the caller arms the idle-return
    /// timer.
    pub fn dispatch_next(&mut self) -> DispatchOutcome {
        if self.queues.is_empty() {
            self.go_idle();
            return DispatchOutcome::Idle;
        }

        let call = if self.direction == Direction::Up {
            self.queues.pop_up().or_else(|| {
                self.direction = Direction::Down;
                self.queues.pop_down()
            })
        } else {
            self.queues.pop_down().or_else(|| {
                self.direction = Direction::Up;
                self.queues.pop_up()
            })
        };

        match call {
            Some(call) => {
                self.target_floor = Some(call.floor);
                self.state = MotionState::Moving;
                DispatchOutcome::Depart { target: call.floor }
            }
            None => {
                // Unreachable given the emptiness check above; the
                // transition stays total either way.
                self.go_idle();
                DispatchOutcome::Idle
            }
        }
    }

    fn go_idle(&mut self) {
        self.state = MotionState::Idle;
        self.direction = Direction::Idle;
        self.target_floor = None;
    }

    /// Advance one motion-timer period.
    pub fn on_motion_tick(&mut self) -> TickOutcome {
        // A merged stop at the current floor holds the car for the stop
        // pause; no floor progress on this tick.
        if self.intermediate_stops.remove(&self.current_floor) {
            self.state = MotionState::PausedAtStop;
            return TickOutcome::PausedAtStop {
                floor: self.current_floor,
            };
        }

        let target = match self.target_floor {
            Some(target) => target,
            // No active target: treat the tick as an immediate arrival so
            // the state machine stays total.
            None => self.current_floor,
        };

        if self.current_floor == target {
            self.target_floor = None;
            self.state = MotionState::Idle;
            let next = self.dispatch_next();
            return TickOutcome::Arrived {
                floor: self.current_floor,
                next,
            };
        }

        self.current_floor = if target > self.current_floor {
            self.current_floor + 1
        } else {
            self.current_floor - 1
        };
        TickOutcome::Moved {
            floor: self.current_floor,
        }
    }

    /// End of the intermediate-stop pause; the car rolls again.
    pub fn resume_motion(&mut self) {
        if self.state == MotionState::PausedAtStop {
            self.state = MotionState::Moving;
        }
    }
}
