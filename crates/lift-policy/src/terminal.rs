//! The default idle-routing heuristic.

use lift_car::CarSnapshot;
use lift_core::{Floor, GROUND_FLOOR};

use crate::{IdlePolicy, PolicyContext};

/// Send idle cars towards a terminal floor whenever anyone is waiting.
///
/// - Nobody waiting: stay put.
/// - Car in the upper half (`current > top / 2`): go to the ground floor.
/// - Otherwise: go to the top floor.
///
/// Combined with the dispatcher's "serve the queue in your direction of
/// travel" rule this gives a coarse sweep of the whole shaft.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestTerminal;

impl IdlePolicy for NearestTerminal {
    fn idle_target(&self, car: &CarSnapshot, ctx: &PolicyContext) -> Floor {
        if ctx.total_waiting() == 0 {
            return car.current_floor;
        }
        if car.current_floor > ctx.top_floor / 2 {
            GROUND_FLOOR
        } else {
            ctx.top_floor
        }
    }

    fn name(&self) -> &'static str {
        "nearest-terminal"
    }
}
