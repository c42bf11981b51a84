//! Tests for the lobby demo's config parsing and car views.

use std::path::Path;

use lift_car::CarSnapshot;
use lift_core::{CarId, CarSeed, CarStatus, PassengerId};

use crate::config::LobbyConfig;
use crate::policy_by_name;
use crate::view::{CarView, views};

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = LobbyConfig::parse("").unwrap();
        assert_eq!(config.building.top_floor, 11);
        assert_eq!(config.building.capacity, 20);
        assert_eq!(config.run.policy, "nearest-terminal");
        assert!(config.run.workload.is_none());

        let building = config.building.to_building();
        assert_eq!(building.cars.len(), 3);
        assert!(building.validate().is_ok());
    }

    #[test]
    fn short_building_clamps_default_seeds() {
        let config = LobbyConfig::parse("[building]\ntop_floor = 4\ncar_count = 3\n").unwrap();
        let building = config.building.to_building();
        assert!(building.cars.iter().all(|seed| seed.target_floor <= 4));
        assert!(building.validate().is_ok());
    }

    #[test]
    fn explicit_seeds_replace_car_count() {
        let text = "\
[building]
car_count = 5

[[building.cars]]
id = 7
current_floor = 3
target_floor = 9
";
        let building = LobbyConfig::parse(text).unwrap().building.to_building();
        assert_eq!(building.cars, vec![CarSeed::new(7, 3, 9)]);
    }

    #[test]
    fn workload_path_is_relative_to_config() {
        let config = LobbyConfig::parse("[run]\nworkload = \"workload.csv\"\n").unwrap();
        let path = config.workload_path(Path::new("demos/lobby/lobby.toml"));
        assert_eq!(path.as_deref(), Some(Path::new("demos/lobby/workload.csv")));
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        assert!(LobbyConfig::parse("[run]\nticks = \"many\"\n").is_err());
    }

    #[test]
    fn policy_names() {
        assert_eq!(policy_by_name("stay-put").unwrap().name(), "stay-put");
        assert!(policy_by_name("elevator-music").is_err());
    }
}

#[cfg(test)]
mod view_tests {
    use super::*;

    #[test]
    fn snapshot_maps_to_labelled_view() {
        let car = CarSnapshot {
            id:            CarId(2),
            current_floor: 4,
            target_floor:  9,
            status:        CarStatus::Up,
            passengers:    vec![PassengerId(0), PassengerId(13)],
            door_dwell:    false,
        };
        let rendered = views(std::slice::from_ref(&car));
        assert_eq!(rendered, vec![CarView {
            id:    2,
            floor: 4,
            users: vec!["p0".into(), "p13".into()],
        }]);
        assert_eq!(
            serde_json::to_string(&rendered).unwrap(),
            r#"[{"id":2,"floor":4,"users":["p0","p13"]}]"#
        );
    }
}
