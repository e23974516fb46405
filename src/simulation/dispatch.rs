//! Two-car dispatch: floor validation and car selection.
//!
//! Selection starts from a fixed zone split (low floors prefer car A,
//! high floors car B) and only deviates when the preferred car is mid
//! trip: an idle partner takes the call outright, and with both cars busy
//! the nearer one wins. An exact distance tie resolves to car A.

use anyhow::{bail, Result};

use super::elevator::SimElevator;
use super::types::{CarId, NUM_FLOORS, ZONE_SPLIT_FLOOR};

/// Reject floors outside the served range before any controller is
/// touched. Nothing below the dispatcher validates.
pub fn validate_floor(floor: u8) -> Result<()> {
    if floor >= NUM_FLOORS {
        bail!("invalid floor {floor}: must be 0..={}", NUM_FLOORS - 1);
    }
    Ok(())
}

/// Pick the car that services a call at `floor`.
pub fn select_car(floor: u8, car_a: &SimElevator, car_b: &SimElevator) -> CarId {
    let idle_a = !car_a.is_moving();
    let idle_b = !car_b.is_moving();

    let preferred = if floor <= ZONE_SPLIT_FLOOR {
        CarId::A
    } else {
        CarId::B
    };
    let preferred_idle = match preferred {
        CarId::A => idle_a,
        CarId::B => idle_b,
    };
    if preferred_idle {
        return preferred;
    }

    // Preferred car is mid-trip: hand the call to an idle partner, else to
    // whichever car is closer.
    if idle_a && !idle_b {
        CarId::A
    } else if !idle_a && idle_b {
        CarId::B
    } else {
        let dist_a = car_a.current_floor().abs_diff(floor);
        let dist_b = car_b.current_floor().abs_diff(floor);
        if dist_a <= dist_b {
            CarId::A
        } else {
            CarId::B
        }
    }
}
