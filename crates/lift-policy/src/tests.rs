//! Unit tests for lift-policy.

use lift_car::CarSnapshot;
use lift_core::{CarId, CarStatus, Floor, Tick};

use crate::{IdlePolicy, NearestTerminal, PolicyContext, StayPut};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn idle_at(floor: Floor) -> CarSnapshot {
    CarSnapshot {
        id:            CarId(1),
        current_floor: floor,
        target_floor:  floor,
        status:        CarStatus::Idle,
        passengers:    vec![],
        door_dwell:    false,
    }
}

fn ctx(up: usize, down: usize) -> PolicyContext {
    PolicyContext::new(Tick(0), 11, up, down)
}

// ── PolicyContext ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn total_waiting_sums_directions() {
        assert_eq!(ctx(3, 4).total_waiting(), 7);
        assert_eq!(ctx(0, 0).total_waiting(), 0);
    }
}

// ── NearestTerminal ───────────────────────────────────────────────────────────

#[cfg(test)]
mod terminal_tests {
    use super::*;

    #[test]
    fn no_demand_stays_put() {
        assert_eq!(NearestTerminal.idle_target(&idle_at(7), &ctx(0, 0)), 7);
    }

    #[test]
    fn lower_half_goes_to_top() {
        // top / 2 = 5: floors 1..=5 count as the lower half.
        for floor in 1..=5 {
            assert_eq!(NearestTerminal.idle_target(&idle_at(floor), &ctx(1, 0)), 11);
        }
    }

    #[test]
    fn upper_half_goes_to_ground() {
        for floor in 6..=11 {
            assert_eq!(NearestTerminal.idle_target(&idle_at(floor), &ctx(0, 2)), 1);
        }
    }

    #[test]
    fn name() {
        assert_eq!(NearestTerminal.name(), "nearest-terminal");
    }
}

// ── StayPut ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stay_tests {
    use super::*;

    #[test]
    fn always_current_floor() {
        assert_eq!(StayPut.idle_target(&idle_at(3), &ctx(10, 10)), 3);
        assert_eq!(StayPut.idle_target(&idle_at(11), &ctx(0, 0)), 11);
    }
}

// ── Custom and boxed policies ─────────────────────────────────────────────────

#[cfg(test)]
mod custom_policy_tests {
    use super::*;

    /// Always heads for floor 4.
    struct FourthFloor;

    impl IdlePolicy for FourthFloor {
        fn idle_target(&self, _car: &CarSnapshot, _ctx: &PolicyContext) -> Floor {
            4
        }
    }

    #[test]
    fn custom_policy_is_called() {
        assert_eq!(FourthFloor.idle_target(&idle_at(9), &ctx(1, 0)), 4);
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(FourthFloor.name().ends_with("FourthFloor"));
    }

    #[test]
    fn boxed_policies_are_interchangeable() {
        let policies: Vec<Box<dyn IdlePolicy>> =
            vec![Box::new(NearestTerminal), Box::new(StayPut), Box::new(FourthFloor)];
        let targets: Vec<Floor> = policies
            .iter()
            .map(|p| p.idle_target(&idle_at(2), &ctx(1, 0)))
            .collect();
        assert_eq!(targets, vec![11, 2, 4]);
        assert_eq!(policies[1].name(), "stay-put");
    }
}
