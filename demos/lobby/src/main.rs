//! lobby: runnable demo for the lift dispatch simulator.
//!
//! Reads a TOML building description, drives the dispatcher for a fixed
//! number of ticks from either a recorded CSV script or the seeded random
//! generator, and prints one JSON array of car views per tick on stdout.
//!
//! ```text
//! RUST_LOG=debug cargo run -p lobby -- demos/lobby/lobby.toml
//! ```

mod config;
mod view;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};

use lift_car::CarSnapshot;
use lift_core::{CarId, Floor, Passenger, PassengerRequest, RequestError, Tick};
use lift_dispatch::{DispatchObserver, DispatcherBuilder};
use lift_policy::{IdlePolicy, NearestTerminal, StayPut};
use lift_workload::{RandomWorkload, WorkloadScript, load_script_csv};

use config::LobbyConfig;

const DEFAULT_CONFIG: &str = "lobby.toml";

// ── Policy selection ──────────────────────────────────────────────────────────

fn policy_by_name(name: &str) -> Result<Box<dyn IdlePolicy>> {
    match name {
        "nearest-terminal" => Ok(Box::new(NearestTerminal)),
        "stay-put"         => Ok(Box::new(StayPut)),
        other => bail!("unknown idle policy {other:?}, expected \"nearest-terminal\" or \"stay-put\""),
    }
}

// ── Workload source ───────────────────────────────────────────────────────────

enum Workload {
    Script(WorkloadScript),
    Random(RandomWorkload),
}

impl Workload {
    fn batch(&mut self, tick: Tick) -> Vec<PassengerRequest> {
        match self {
            Workload::Script(script) => script.requests_at(tick).to_vec(),
            Workload::Random(random) => random.next_batch(),
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct CountingObserver {
    queued:    usize,
    rejected:  usize,
    boarded:   usize,
    delivered: usize,
}

impl DispatchObserver for CountingObserver {
    fn on_request_queued(&mut self, _tick: Tick, _passenger: &Passenger) {
        self.queued += 1;
    }

    fn on_request_rejected(&mut self, _tick: Tick, _req: &PassengerRequest, _why: &RequestError) {
        self.rejected += 1;
    }

    fn on_boarded(&mut self, _tick: Tick, _car: CarId, _floor: Floor, passengers: &[Passenger]) {
        self.boarded += passengers.len();
    }

    fn on_disembarked(&mut self, _tick: Tick, _car: CarId, _floor: Floor, passengers: &[Passenger]) {
        self.delivered += passengers.len();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);
    let config = LobbyConfig::load(&config_path)?;

    // 1. Engine.
    let policy = policy_by_name(&config.run.policy)?;
    let mut dispatcher = DispatcherBuilder::new(config.building.to_building(), policy).build()?;

    // 2. Workload.
    let mut workload = match config.workload_path(&config_path) {
        Some(path) => {
            let script = load_script_csv(&path)?;
            log::info!("replaying {} request(s) from {}", script.len(), path.display());
            Workload::Script(script)
        }
        None => {
            let random = RandomWorkload::new(config.run.seed, dispatcher.building().top_floor)?
                .arrival_probability(config.run.arrival_probability)
                .max_per_tick(config.run.max_requests_per_tick);
            log::info!("random workload, seed {}", config.run.seed);
            Workload::Random(random)
        }
    };

    // 3. Run.
    let mut obs = CountingObserver::default();
    let t0 = Instant::now();
    for _ in 0..config.run.ticks {
        let requests = workload.batch(dispatcher.tick());
        let cars = dispatcher.apply_workload_observed(&requests, &mut obs);
        println!("{}", serde_json::to_string(&view::views(&cars))?);
    }
    let elapsed = t0.elapsed();

    // 4. Summary.
    let riding: usize = dispatcher.snapshots().iter().map(CarSnapshot::onboard_count).sum();
    log::info!(
        "{} ticks in {:.3} ms: {} queued, {} rejected, {} boarded, {} delivered, {} riding, {} waiting",
        config.run.ticks,
        elapsed.as_secs_f64() * 1e3,
        obs.queued,
        obs.rejected,
        obs.boarded,
        obs.delivered,
        riding,
        dispatcher.waiting().len(),
    );
    log::debug!("final cars: {}", serde_json::to_string(&dispatcher.snapshots())?);

    Ok(())
}
