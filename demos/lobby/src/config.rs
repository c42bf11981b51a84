// ── Demo configuration ────────────────────────────────────────────────────────
//
// Read from a TOML file (default `lobby.toml`).  Every key has a default, so an
// empty file runs a three-car building on a random workload.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use lift_core::{BuildingConfig, CarSeed, DEFAULT_CAPACITY, DEFAULT_TOP_FLOOR, Floor};

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct LobbyConfig {
    pub building: BuildingSection,
    pub run:      RunSection,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct BuildingSection {
    pub top_floor: Floor,
    pub capacity:  usize,
    pub car_count: usize,
    /// Explicit seeds; when non-empty, `car_count` is ignored.
    pub cars:      Vec<CarSeed>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RunSection {
    pub ticks:                 u64,
    pub seed:                  u64,
    pub policy:                String,
    pub arrival_probability:   f64,
    pub max_requests_per_tick: usize,
    /// CSV script replayed instead of the random generator.
    pub workload:              Option<PathBuf>,
}

impl Default for BuildingSection {
    fn default() -> Self {
        Self {
            top_floor: DEFAULT_TOP_FLOOR,
            capacity:  DEFAULT_CAPACITY,
            car_count: 3,
            cars:      vec![],
        }
    }
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            ticks:                 60,
            seed:                  42,
            policy:                "nearest-terminal".into(),
            arrival_probability:   0.4,
            max_requests_per_tick: 3,
            workload:              None,
        }
    }
}

impl LobbyConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The workload script path, resolved against the config file's directory.
    pub fn workload_path(&self, config_path: &Path) -> Option<PathBuf> {
        let script = self.run.workload.as_ref()?;
        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        Some(base.join(script))
    }
}

impl BuildingSection {
    /// Unvalidated building description; the dispatcher builder validates it.
    pub fn to_building(&self) -> BuildingConfig {
        let mut building = BuildingConfig::with_car_count(self.car_count);
        building.top_floor = self.top_floor;
        building.capacity = self.capacity;
        if self.cars.is_empty() {
            // Default seeds assume the default height.
            for seed in &mut building.cars {
                seed.target_floor = seed.target_floor.min(self.top_floor);
            }
        } else {
            building.cars = self.cars.clone();
        }
        building
    }
}
