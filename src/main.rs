use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use elevator_sim::simulation::{SimBank, NUM_FLOORS, TOP_FLOOR};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Two-car elevator bank simulation")]
struct Cli {
    /// Simulated time units to run
    #[arg(long, default_value = "40.0")]
    duration: f64,

    /// Number of random hall calls to generate
    #[arg(long, default_value = "12")]
    calls: u32,

    /// RNG seed for a reproducible call pattern
    #[arg(long)]
    seed: Option<u64>,

    /// Run the fixed scripted scenario instead of random calls
    #[arg(long)]
    scripted: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut bank = SimBank::new();

    if cli.scripted {
        schedule_scripted_calls(&mut bank);
    } else {
        schedule_random_calls(&mut bank, cli.calls, cli.duration, cli.seed);
    }

    println!(
        "Running elevator bank simulation for {:.1} time units...",
        cli.duration
    );
    println!();

    // Report once per simulated time unit, like a wall display would.
    let mut elapsed = 0.0_f64;
    while elapsed < cli.duration {
        let chunk = (cli.duration - elapsed).min(1.0);
        elapsed += chunk;
        bank.run_until(elapsed);

        for update in bank.drain_updates() {
            info!(
                "car {} moved (A at floor {}, B at floor {})",
                update.car, update.floor_a, update.floor_b
            );
        }
    }

    println!("=== Final State ===");
    bank.print_summary();
}

/// A fixed scenario exercising the zone split, en-route merging, and the
/// idle-return relocation at the tail.
fn schedule_scripted_calls(bank: &mut SimBank) {
    bank.schedule_call_at(0.0, 4, true); // car A departs 1 -> 4
    bank.schedule_call_at(0.2, 9, false); // car B departs 6 -> 9
    bank.schedule_call_at(1.0, 3, true); // merges into car A's trip
    bank.schedule_call_at(1.5, 0, true); // both busy: nearest car queues it
    bank.schedule_call_at(12.0, 5, false); // served after the cars settle
}

/// Seeded random calls spread over the first part of the run, following
/// the reproducible-scenario pattern used for headless testing.
fn schedule_random_calls(bank: &mut SimBank, calls: u32, duration: f64, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for _ in 0..calls {
        let floor = rng.random_range(0..NUM_FLOORS);
        // End floors only have one service direction.
        let going_up = if floor == 0 {
            true
        } else if floor == TOP_FLOOR {
            false
        } else {
            rng.random_bool(0.5)
        };
        // Leave the tail of the run quiet so idle returns are visible.
        let window = (duration * 0.66).max(0.1);
        let at = rng.random_range(0.0..window);
        bank.schedule_call_at(at, floor, going_up);
    }
}
