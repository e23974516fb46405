//! Core types and timing constants for the elevator bank.
//!
//! These are standalone types that don't depend on any display layer.

use std::fmt;

/// Number of floors served, numbered 0 (underground) through 9 (top).
pub const NUM_FLOORS: u8 = 10;

/// Highest served floor.
pub const TOP_FLOOR: u8 = NUM_FLOORS - 1;

/// Floors at or below this prefer car A; floors above prefer car B.
pub const ZONE_SPLIT_FLOOR: u8 = 4;

/// Resting floor for car A.
pub const HOME_FLOOR_A: u8 = 1;

/// Resting floor for car B.
pub const HOME_FLOOR_B: u8 = 6;

/// Period of the per-floor motion timer, in time units.
pub const MOTION_TICK_PERIOD: f64 = 0.8;

/// Hold time at a merged intermediate stop before motion resumes.
pub const STOP_PAUSE: f64 = 0.5;

/// Quiet period before an idle car relocates to its home floor.
pub const IDLE_RETURN_DELAY: f64 = 3.0;

/// Identifies one of the two cars in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarId {
    A,
    B,
}

impl CarId {
    /// Position of this car's state in per-car arrays.
    pub fn index(self) -> usize {
        match self {
            CarId::A => 0,
            CarId::B => 1,
        }
    }

    /// The floor this car rests at when unused.
    pub fn home_floor(self) -> u8 {
        match self {
            CarId::A => HOME_FLOOR_A,
            CarId::B => HOME_FLOOR_B,
        }
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarId::A => write!(f, "A"),
            CarId::B => write!(f, "B"),
        }
    }
}

/// Travel direction of a car. `Idle` holds only while both call queues are
/// empty and no trip is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    /// Direction a hall call asks to travel.
    pub fn of_call(going_up: bool) -> Self {
        if going_up {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}
