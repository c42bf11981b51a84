//! Building configuration.
//!
//! Typically loaded from a TOML file by the application crate and handed to
//! the dispatcher builder.  The engine never reads configuration at runtime.

use std::collections::HashSet;

use crate::{CarId, CoreError, CoreResult, Floor, GROUND_FLOOR};

/// Passengers a single car may carry at once.
pub const DEFAULT_CAPACITY: usize = 20;

/// Top floor of the default building.
pub const DEFAULT_TOP_FLOOR: Floor = 11;

/// Spacing between the seeded target floors of consecutive cars.
const SEED_TARGET_SPACING: Floor = 5;

/// Initial position of one car.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSeed {
    pub id:            CarId,
    pub current_floor: Floor,
    pub target_floor:  Floor,
}

impl CarSeed {
    pub fn new(id: u32, current_floor: Floor, target_floor: Floor) -> Self {
        Self { id: CarId(id), current_floor, target_floor }
    }
}

/// Static description of the building served by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Highest reachable floor.  Floors run `1..=top_floor`.
    pub top_floor: Floor,

    /// Per-car passenger capacity.
    pub capacity: usize,

    /// One seed per car.  Order does not matter; cars are stepped by id.
    pub cars: Vec<CarSeed>,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self::with_car_count(1)
    }
}

impl BuildingConfig {
    /// Default building with `count` cars.
    ///
    /// Car `i` (0-based) gets id `i + 1`, starts at the ground floor and is
    /// sent towards floor `1 + 5 * i` (clamped to the top floor) so the bank
    /// spreads out on its first ticks.
    pub fn with_car_count(count: usize) -> Self {
        let cars = (0..count as u32)
            .map(|i| {
                let target = (GROUND_FLOOR + i * SEED_TARGET_SPACING).min(DEFAULT_TOP_FLOOR);
                CarSeed::new(i + 1, GROUND_FLOOR, target)
            })
            .collect();
        Self {
            top_floor: DEFAULT_TOP_FLOOR,
            capacity:  DEFAULT_CAPACITY,
            cars,
        }
    }

    /// `true` if `floor` lies within `1..=top_floor`.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        (GROUND_FLOOR..=self.top_floor).contains(&floor)
    }

    /// Check every invariant the dispatcher relies on.
    pub fn validate(&self) -> CoreResult<()> {
        if self.top_floor <= GROUND_FLOOR {
            return Err(CoreError::Config(format!(
                "top_floor must be above the ground floor, got {}",
                self.top_floor
            )));
        }
        if self.capacity == 0 {
            return Err(CoreError::Config("capacity must be at least 1".into()));
        }
        if self.cars.is_empty() {
            return Err(CoreError::NoCars);
        }

        let mut seen = HashSet::with_capacity(self.cars.len());
        for seed in &self.cars {
            if !seen.insert(seed.id) {
                return Err(CoreError::DuplicateCar(seed.id));
            }
            for floor in [seed.current_floor, seed.target_floor] {
                if !self.contains(floor) {
                    return Err(CoreError::SeedOutOfRange {
                        car: seed.id,
                        floor,
                        top_floor: self.top_floor,
                    });
                }
            }
        }
        Ok(())
    }
}
