//! End-to-end scenarios through the bank event loop
//!
//! These drive the full dispatch core on the logical clock; no wall-clock
//! waiting is involved anywhere.

use elevator_sim::simulation::{
    CarId, Direction, Scheduler, SimBank, SimEvent, HOME_FLOOR_A, HOME_FLOOR_B,
    IDLE_RETURN_DELAY, MOTION_TICK_PERIOD,
};

#[test]
fn call_moves_car_one_floor_per_tick() {
    let mut bank = SimBank::new();
    bank.submit_call(3, true).unwrap(); // car A, departing from floor 1

    assert!(bank.car(CarId::A).is_moving());
    assert_eq!(bank.car(CarId::A).target_floor(), Some(3));

    bank.run_until(MOTION_TICK_PERIOD + 0.01);
    assert_eq!(bank.car(CarId::A).current_floor(), 2);

    bank.run_until(3.0);
    assert_eq!(bank.car(CarId::A).current_floor(), 3);
    assert!(!bank.car(CarId::A).is_moving());
    assert_eq!(bank.car(CarId::A).direction(), Direction::Idle);
    assert_eq!(bank.stats.trips_completed, 1);
}

#[test]
fn out_of_range_floor_is_rejected_at_the_boundary() {
    let mut bank = SimBank::new();
    assert!(bank.submit_call(10, true).is_err());
    assert!(!bank.car(CarId::A).is_moving());
    assert!(!bank.car(CarId::B).is_moving());
    assert_eq!(bank.stats.calls_submitted, 0);
}

#[test]
fn busy_zone_car_flips_call_to_idle_partner() {
    let mut bank = SimBank::new();
    bank.submit_call(4, true).unwrap(); // car A: 1 -> 4
    bank.submit_call(3, true).unwrap(); // zone says A, but A is mid-trip

    assert_eq!(bank.car(CarId::B).target_floor(), Some(3));
    assert!(bank.car(CarId::B).is_moving());

    // Both cars tick at the same deadline; every notification carries both
    // cars' latest floors.
    bank.run_until(MOTION_TICK_PERIOD + 0.01);
    let updates = bank.drain_updates();
    assert_eq!(updates.len(), 2);
    assert_eq!((updates[1].floor_a, updates[1].floor_b), (2, 5));
}

#[test]
fn merge_vs_queue_depends_on_direction() {
    let mut bank = SimBank::new();
    bank.submit_call(4, true).unwrap(); // car A: 1 -> 4
    bank.submit_call(9, false).unwrap(); // car B: 6 -> 9, so both are busy

    // Same direction, strictly between 1 and 4: merges into car A's trip.
    bank.submit_call(3, true).unwrap();
    assert_eq!(bank.stats.calls_merged, 1);
    assert!(bank.car(CarId::A).has_intermediate_stop(3));
    assert_eq!(bank.car(CarId::A).pending_calls(), 0);

    // Opposite direction: queues on car A for a later trip.
    bank.submit_call(3, false).unwrap();
    assert_eq!(bank.stats.calls_merged, 1);
    assert_eq!(bank.car(CarId::A).pending_calls(), 1);

    bank.run_until(8.0);
    // Car A paused once at 3 on the way up, then came back down to 3.
    assert_eq!(bank.stats.intermediate_stops_served, 1);
    assert!(!bank.car(CarId::A).has_intermediate_stop(3));
    assert_eq!(bank.car(CarId::A).current_floor(), 3);
}

#[test]
fn idle_return_sends_car_home() {
    let mut bank = SimBank::new();
    bank.submit_call(3, true).unwrap(); // car A
    bank.run_until(2.5); // trip completes at t = 2.4

    assert!(!bank.car(CarId::A).is_moving());
    assert_eq!(bank.car(CarId::A).current_floor(), 3);

    // The quiet period passes: car A relocates to its home floor.
    bank.run_until(2.5 + IDLE_RETURN_DELAY);
    assert!(bank.car(CarId::A).is_moving());
    assert_eq!(bank.car(CarId::A).target_floor(), Some(HOME_FLOOR_A));

    bank.run_until(10.0);
    assert_eq!(bank.car(CarId::A).current_floor(), HOME_FLOOR_A);
    assert_eq!(bank.stats.idle_returns, 1);

    // Car B never became idle (it never ran), so it never relocated.
    assert_eq!(bank.car(CarId::B).current_floor(), HOME_FLOOR_B);
}

#[test]
fn call_during_quiet_period_cancels_idle_return() {
    let mut bank = SimBank::new();
    bank.submit_call(3, true).unwrap();
    bank.run_until(2.5); // idle at floor 3, return armed for t = 5.4

    bank.submit_call(4, true).unwrap(); // cancels the pending return
    bank.run_until(6.0);

    // Car A served floor 4 and idles there; the canceled return never fired.
    assert_eq!(bank.car(CarId::A).current_floor(), 4);
    assert_eq!(bank.stats.idle_returns, 0);
}

#[test]
fn idempotent_call_for_current_floor_completes_without_moving() {
    let mut bank = SimBank::new();
    bank.submit_call(HOME_FLOOR_A, true).unwrap(); // car A is already there
    assert!(bank.car(CarId::A).is_moving());

    bank.run_until(1.0);

    // Exactly one arrival notification, no net floor change.
    let updates = bank.drain_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].floor_a, HOME_FLOOR_A);
    assert_eq!(bank.car(CarId::A).current_floor(), HOME_FLOOR_A);
    assert_eq!(bank.stats.trips_completed, 1);
    assert!(!bank.car(CarId::A).is_moving());
}

#[test]
fn scheduler_fires_in_deadline_then_arming_order() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(1.0, SimEvent::MotionTick(CarId::A));
    scheduler.schedule(1.0, SimEvent::MotionTick(CarId::B));
    scheduler.schedule(0.5, SimEvent::IdleReturn(CarId::A));

    let popped: Vec<SimEvent> = std::iter::from_fn(|| scheduler.pop_due(2.0).map(|(_, e)| e))
        .collect();
    assert_eq!(
        popped,
        vec![
            SimEvent::IdleReturn(CarId::A),
            SimEvent::MotionTick(CarId::A),
            SimEvent::MotionTick(CarId::B),
        ]
    );
    assert_eq!(scheduler.now(), 1.0);
}

#[test]
fn canceled_event_never_fires() {
    let mut scheduler = Scheduler::new();
    let token = scheduler.schedule(1.0, SimEvent::IdleReturn(CarId::A));
    scheduler.cancel(token);
    assert!(scheduler.pop_due(5.0).is_none());
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn events_beyond_the_deadline_stay_pending() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(2.0, SimEvent::MotionTick(CarId::A));
    assert!(scheduler.pop_due(1.0).is_none());
    assert_eq!(scheduler.pending_count(), 1);
    assert!(scheduler.pop_due(2.0).is_some());
}
