//! Fluent builder for constructing a [`Dispatcher`].

use lift_car::Car;
use lift_core::{BuildingConfig, CarSeed, Floor, Tick};
use lift_policy::IdlePolicy;

use crate::{DispatchResult, Dispatcher, WaitingQueues};

/// Fluent builder for [`Dispatcher<P>`].
///
/// # Required inputs
///
/// - [`BuildingConfig`]: top floor, capacity, car seeds
/// - `P: IdlePolicy`: the idle-routing policy (e.g.
///   [`lift_policy::NearestTerminal`])
///
/// # Optional overrides
///
/// | Method            | Default                        |
/// |-------------------|--------------------------------|
/// | `.cars(v)`        | `config.cars`                  |
/// | `.capacity(n)`    | `config.capacity`              |
/// | `.top_floor(n)`   | `config.top_floor`             |
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = DispatcherBuilder::new(BuildingConfig::with_car_count(3), NearestTerminal)
///     .capacity(12)
///     .build()?;
/// let cars = dispatcher.apply_workload(&[PassengerRequest::new(1, 5)]);
/// ```
pub struct DispatcherBuilder<P: IdlePolicy> {
    config:    BuildingConfig,
    cars:      Option<Vec<CarSeed>>,
    capacity:  Option<usize>,
    top_floor: Option<Floor>,
    policy:    P,
}

impl<P: IdlePolicy> DispatcherBuilder<P> {
    pub fn new(config: BuildingConfig, policy: P) -> Self {
        Self {
            config,
            cars:      None,
            capacity:  None,
            top_floor: None,
            policy,
        }
    }

    /// Replace the configured car seeds.
    pub fn cars(mut self, seeds: Vec<CarSeed>) -> Self {
        self.cars = Some(seeds);
        self
    }

    /// Override the per-car capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Override the top floor.
    pub fn top_floor(mut self, top_floor: Floor) -> Self {
        self.top_floor = Some(top_floor);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Dispatcher`]
    /// with empty queues at tick zero.
    pub fn build(self) -> DispatchResult<Dispatcher<P>> {
        let mut config = self.config;
        if let Some(cars) = self.cars {
            config.cars = cars;
        }
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(top_floor) = self.top_floor {
            config.top_floor = top_floor;
        }
        config.validate()?;

        // Ids are unique after validation, so this order is total.
        config.cars.sort_by_key(|seed| seed.id);
        let cars: Vec<Car> = config
            .cars
            .iter()
            .map(|seed| Car::new(seed.id, config.capacity, seed.current_floor, seed.target_floor))
            .collect();

        log::info!(
            "dispatcher ready: {} car(s), floors 1..={}, capacity {}, policy {}",
            cars.len(),
            config.top_floor,
            config.capacity,
            self.policy.name(),
        );

        Ok(Dispatcher {
            config,
            cars,
            queues:         WaitingQueues::new(),
            policy:         self.policy,
            clock:          Tick::ZERO,
            next_passenger: 0,
        })
    }
}
