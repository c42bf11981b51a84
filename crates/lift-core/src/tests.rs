//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, PassengerId};

    #[test]
    fn ordering() {
        assert!(CarId(1) < CarId(2));
        assert!(PassengerId(100) > PassengerId(99));
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
        assert_eq!(PassengerId(3).to_string(), "PassengerId(3)");
    }

    #[test]
    fn from_raw() {
        assert_eq!(CarId::from(4), CarId(4));
        assert_eq!(PassengerId(9).get(), 9);
    }
}

#[cfg(test)]
mod floor {
    use crate::{CarStatus, Direction};

    #[test]
    fn status_is_derived_from_floors() {
        assert_eq!(CarStatus::derive(3, 7), CarStatus::Up);
        assert_eq!(CarStatus::derive(7, 3), CarStatus::Down);
        assert_eq!(CarStatus::derive(5, 5), CarStatus::Idle);
    }

    #[test]
    fn status_direction() {
        assert_eq!(CarStatus::Up.direction(), Some(Direction::Up));
        assert_eq!(CarStatus::Down.direction(), Some(Direction::Down));
        assert_eq!(CarStatus::Idle.direction(), None);
        assert!(CarStatus::Idle.is_idle());
    }

    #[test]
    fn direction_between() {
        assert_eq!(Direction::between(1, 5), Direction::Up);
        assert_eq!(Direction::between(5, 1), Direction::Down);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(4).to_string(), "T4");
    }
}

#[cfg(test)]
mod request {
    use crate::{Direction, Passenger, PassengerId, PassengerRequest, RequestError};

    #[test]
    fn direction_follows_floors() {
        assert_eq!(PassengerRequest::new(1, 5).direction(), Direction::Up);
        assert_eq!(PassengerRequest::new(9, 2).direction(), Direction::Down);
    }

    #[test]
    fn valid_request_returns_direction() {
        assert_eq!(PassengerRequest::new(2, 11).validate(11), Ok(Direction::Up));
        assert_eq!(PassengerRequest::new(11, 1).validate(11), Ok(Direction::Down));
    }

    #[test]
    fn same_floor_rejected() {
        assert_eq!(
            PassengerRequest::new(4, 4).validate(11),
            Err(RequestError::SameFloor(4))
        );
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(
            PassengerRequest::new(0, 4).validate(11),
            Err(RequestError::FloorOutOfRange { floor: 0, top_floor: 11 })
        );
        assert_eq!(
            PassengerRequest::new(3, 12).validate(11),
            Err(RequestError::FloorOutOfRange { floor: 12, top_floor: 11 })
        );
    }

    #[test]
    fn range_checked_before_same_floor() {
        assert!(matches!(
            PassengerRequest::new(20, 20).validate(11),
            Err(RequestError::FloorOutOfRange { floor: 20, .. })
        ));
    }

    #[test]
    fn passenger_accessors() {
        let p = Passenger::new(PassengerId(1), PassengerRequest::new(3, 8));
        assert_eq!(p.start_floor(), 3);
        assert_eq!(p.drop_floor(), 8);
        assert_eq!(p.direction(), Direction::Up);
    }
}

#[cfg(test)]
mod config {
    use crate::{BuildingConfig, CarId, CarSeed, CoreError, DEFAULT_CAPACITY, DEFAULT_TOP_FLOOR};

    #[test]
    fn default_has_one_car_on_ground_floor() {
        let cfg = BuildingConfig::default();
        assert_eq!(cfg.top_floor, DEFAULT_TOP_FLOOR);
        assert_eq!(cfg.capacity, DEFAULT_CAPACITY);
        assert_eq!(cfg.cars, vec![CarSeed::new(1, 1, 1)]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn with_car_count_spreads_targets() {
        let cfg = BuildingConfig::with_car_count(4);
        let targets: Vec<u32> = cfg.cars.iter().map(|c| c.target_floor).collect();
        // 1, 6, 11, then clamped at the top floor.
        assert_eq!(targets, vec![1, 6, 11, 11]);
        let ids: Vec<CarId> = cfg.cars.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CarId(1), CarId(2), CarId(3), CarId(4)]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_bank_rejected() {
        let cfg = BuildingConfig::with_car_count(0);
        assert_eq!(cfg.validate(), Err(CoreError::NoCars));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut cfg = BuildingConfig::with_car_count(1);
        cfg.cars.push(CarSeed::new(1, 2, 2));
        assert_eq!(cfg.validate(), Err(CoreError::DuplicateCar(CarId(1))));
    }

    #[test]
    fn seed_out_of_range_rejected() {
        let mut cfg = BuildingConfig::with_car_count(1);
        cfg.cars[0].target_floor = 12;
        assert_eq!(
            cfg.validate(),
            Err(CoreError::SeedOutOfRange { car: CarId(1), floor: 12, top_floor: 11 })
        );
    }

    #[test]
    fn degenerate_building_rejected() {
        let mut cfg = BuildingConfig::default();
        cfg.top_floor = 1;
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let mut cfg = BuildingConfig::default();
        cfg.capacity = 0;
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }
}
