//! Standalone elevator bank simulation module
//!
//! This module contains the dispatch and motion-control core for the
//! two-car bank. It runs on a logical clock with no display dependencies,
//! so full scenarios can be tested via console without any wall-clock
//! waiting.

mod bank;
mod call_queue;
mod dispatch;
mod elevator;
mod scheduler;
mod stats;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use bank::{PositionUpdate, SimBank};
#[allow(unused_imports)]
pub use call_queue::{Call, CallQueues};
#[allow(unused_imports)]
pub use dispatch::{select_car, validate_floor};
#[allow(unused_imports)]
pub use elevator::{CallOutcome, DispatchOutcome, MotionState, SimElevator, TickOutcome};
#[allow(unused_imports)]
pub use scheduler::{Scheduler, SimEvent, TimerToken};
#[allow(unused_imports)]
pub use stats::BankStats;
#[allow(unused_imports)]
pub use types::{
    CarId, Direction, HOME_FLOOR_A, HOME_FLOOR_B, IDLE_RETURN_DELAY, MOTION_TICK_PERIOD,
    NUM_FLOORS, STOP_PAUSE, TOP_FLOOR, ZONE_SPLIT_FLOOR,
};
