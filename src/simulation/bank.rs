//! The elevator bank: two cars, the dispatcher, and the event loop.
//!
//! `SimBank` is the headless entry point for running the simulation. It
//! owns both car controllers, the logical-clock scheduler, and the
//! outbound notification buffer the display layer drains. All state
//! transitions happen on event delivery; each event runs to completion
//! before the next is processed.

use anyhow::Result;
use log::{debug, info, warn};

use super::dispatch::{select_car, validate_floor};
use super::elevator::{CallOutcome, DispatchOutcome, SimElevator, TickOutcome};
use super::scheduler::{Scheduler, SimEvent, TimerToken};
use super::stats::BankStats;
use super::types::{CarId, IDLE_RETURN_DELAY, MOTION_TICK_PERIOD, STOP_PAUSE};

/// Outbound notification, fired on every floor change and stop event.
///
/// Always carries both cars' latest floors since the display renders both
/// at once, even when only one car moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionUpdate {
    /// The car whose movement triggered the notification.
    pub car: CarId,
    pub floor_a: u8,
    pub floor_b: u8,
}

/// Armed timer tokens for one car, one slot per purpose. Arming a
/// replacement overwrites the slot, so a stale event's token no longer
/// matches and the event is dropped on delivery.
#[derive(Debug, Clone, Copy, Default)]
struct ArmedTimers {
    motion: Option<TimerToken>,
    resume: Option<TimerToken>,
    idle_return: Option<TimerToken>,
}

/// The main simulation world.
pub struct SimBank {
    cars: [SimElevator; 2],
    timers: [ArmedTimers; 2],
    scheduler: Scheduler,
    updates: Vec<PositionUpdate>,

    /// Counters for the session summary.
    pub stats: BankStats,
}

impl Default for SimBank {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBank {
    /// Create a bank with both cars resting at their home floors.
    pub fn new() -> Self {
        Self {
            cars: [SimElevator::new(CarId::A), SimElevator::new(CarId::B)],
            timers: [ArmedTimers::default(), ArmedTimers::default()],
            scheduler: Scheduler::new(),
            updates: Vec::new(),
            stats: BankStats::default(),
        }
    }

    pub fn car(&self, id: CarId) -> &SimElevator {
        &self.cars[id.index()]
    }

    /// Current logical time.
    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    pub fn pending_events(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Notifications recorded since the last drain.
    pub fn drain_updates(&mut self) -> Vec<PositionUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Submit an external hall call.
    ///
    /// The floor is validated here, before any controller is touched;
    /// selection and forwarding cannot fail, and the call reaches exactly
    /// one controller exactly once.
    pub fn submit_call(&mut self, floor: u8, going_up: bool) -> Result<()> {
        validate_floor(floor)?;
        self.stats.calls_submitted += 1;
        let car = select_car(floor, &self.cars[0], &self.cars[1]);
        debug!(
            "call (floor {floor}, {}) -> car {car}",
            if going_up { "up" } else { "down" }
        );
        self.forward_call(car, floor, going_up);
        Ok(())
    }

    /// Arm a scripted call to reach the dispatcher `delay` time units from
    /// now, through the same event loop as everything else.
    pub fn schedule_call_at(&mut self, delay: f64, floor: u8, going_up: bool) {
        self.scheduler
            .schedule(delay, SimEvent::SubmitCall { floor, going_up });
    }

    /// Run the event loop until the logical clock reaches `deadline`.
    pub fn run_until(&mut self, deadline: f64) {
        while let Some((token, event)) = self.scheduler.pop_due(deadline) {
            self.handle_event(token, event);
        }
        self.scheduler.advance_to(deadline);
    }

    /// Process a single pending event. Returns false when nothing is armed.
    pub fn step(&mut self) -> bool {
        match self.scheduler.next_deadline() {
            Some(deadline) => {
                if let Some((token, event)) = self.scheduler.pop_due(deadline) {
                    self.handle_event(token, event);
                }
                true
            }
            None => false,
        }
    }

    fn handle_event(&mut self, token: TimerToken, event: SimEvent) {
        match event {
            SimEvent::SubmitCall { floor, going_up } => {
                if let Err(err) = self.submit_call(floor, going_up) {
                    warn!("dropping scripted call: {err}");
                }
            }
            SimEvent::MotionTick(car) => self.on_motion_tick(car, token),
            SimEvent::ResumeMotion(car) => self.on_resume(car, token),
            SimEvent::IdleReturn(car) => self.on_idle_return(car, token),
        }
    }

    fn forward_call(&mut self, car: CarId, floor: u8, going_up: bool) {
        let outcome = self.cars[car.index()].accept_call(floor, going_up);
        match outcome {
            CallOutcome::MergedEnRoute => {
                self.stats.calls_merged += 1;
                debug!("car {car}: floor {floor} merged into trip in progress");
            }
            CallOutcome::Queued => {
                debug!("car {car}: floor {floor} queued");
            }
            CallOutcome::Dispatched(next) => self.apply_dispatch(car, next),
        }
    }

    /// Apply a dispatch decision: cancel any pending idle return, then
    /// either start the motion timer or arm a fresh idle return.
    fn apply_dispatch(&mut self, car: CarId, outcome: DispatchOutcome) {
        self.cancel_idle_return(car);
        match outcome {
            DispatchOutcome::Depart { target } => {
                debug!("car {car}: departing for floor {target}");
                self.arm_motion_tick(car);
            }
            DispatchOutcome::Idle => {
                debug!("car {car}: idle, returning home in {IDLE_RETURN_DELAY} time units");
                let token = self
                    .scheduler
                    .schedule(IDLE_RETURN_DELAY, SimEvent::IdleReturn(car));
                self.timers[car.index()].idle_return = Some(token);
            }
        }
    }

    fn arm_motion_tick(&mut self, car: CarId) {
        let token = self
            .scheduler
            .schedule(MOTION_TICK_PERIOD, SimEvent::MotionTick(car));
        self.timers[car.index()].motion = Some(token);
    }

    fn cancel_idle_return(&mut self, car: CarId) {
        if let Some(token) = self.timers[car.index()].idle_return.take() {
            self.scheduler.cancel(token);
        }
    }

    fn on_motion_tick(&mut self, car: CarId, token: TimerToken) {
        if self.timers[car.index()].motion != Some(token) {
            return; // stale timer
        }
        self.timers[car.index()].motion = None;

        match self.cars[car.index()].on_motion_tick() {
            TickOutcome::Moved { floor } => {
                self.emit_update(car);
                debug!("car {car}: at floor {floor}");
                self.arm_motion_tick(car);
            }
            TickOutcome::PausedAtStop { floor } => {
                self.stats.intermediate_stops_served += 1;
                self.emit_update(car);
                info!("car {car}: intermediate stop at floor {floor}");
                let token = self.scheduler.schedule(STOP_PAUSE, SimEvent::ResumeMotion(car));
                self.timers[car.index()].resume = Some(token);
            }
            TickOutcome::Arrived { floor, next } => {
                self.stats.trips_completed += 1;
                self.emit_update(car);
                info!("car {car}: arrived at floor {floor}");
                self.apply_dispatch(car, next);
            }
        }
    }

    fn on_resume(&mut self, car: CarId, token: TimerToken) {
        if self.timers[car.index()].resume != Some(token) {
            return;
        }
        self.timers[car.index()].resume = None;
        self.cars[car.index()].resume_motion();
        self.arm_motion_tick(car);
    }

    fn on_idle_return(&mut self, car: CarId, token: TimerToken) {
        if self.timers[car.index()].idle_return != Some(token) {
            return;
        }
        self.timers[car.index()].idle_return = None;

        let state = &self.cars[car.index()];
        if !state.is_quiescent() {
            return;
        }

        let home = state.home_floor();
        let going_up = home > state.current_floor();
        self.stats.idle_returns += 1;
        info!("car {car}: idle return toward floor {home}");
        // Injected through the ordinary dispatch path, same as a hall call.
        if let Err(err) = self.submit_call(home, going_up) {
            warn!("idle return rejected: {err}");
        }
    }

    fn emit_update(&mut self, car: CarId) {
        self.updates.push(PositionUpdate {
            car,
            floor_a: self.cars[0].current_floor(),
            floor_b: self.cars[1].current_floor(),
        });
    }

    /// Print a summary of the bank state.
    pub fn print_summary(&self) {
        println!("=== Elevator Bank Summary ===");
        println!("Time: {:.2}", self.now());
        for car in &self.cars {
            println!(
                "  Car {}: floor {}, {:?} ({:?}), target {:?}, {} queued",
                car.id,
                car.current_floor(),
                car.direction(),
                car.state(),
                car.target_floor(),
                car.pending_calls()
            );
        }
        println!("  {}", self.stats.summary());
    }
}
