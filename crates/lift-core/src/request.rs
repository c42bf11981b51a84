//! Passenger requests and accepted passengers.

use thiserror::Error;

use crate::{Direction, Floor, GROUND_FLOOR, PassengerId};

/// A request to travel from `start_floor` to `end_floor`.
///
/// Immutable once created.  The direction is implied by the two floors; see
/// [`PassengerRequest::direction`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PassengerRequest {
    pub start_floor: Floor,
    pub end_floor:   Floor,
}

impl PassengerRequest {
    #[inline]
    pub fn new(start_floor: Floor, end_floor: Floor) -> Self {
        Self { start_floor, end_floor }
    }

    /// `Up` if `end_floor > start_floor`, otherwise `Down`.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::between(self.start_floor, self.end_floor)
    }

    /// Check the request against a building whose floors are
    /// `GROUND_FLOOR..=top_floor`, returning its direction when valid.
    ///
    /// A request that starts and ends on the same floor has no direction and
    /// is rejected rather than classified as `Down`.
    pub fn validate(&self, top_floor: Floor) -> Result<Direction, RequestError> {
        for floor in [self.start_floor, self.end_floor] {
            if !(GROUND_FLOOR..=top_floor).contains(&floor) {
                return Err(RequestError::FloorOutOfRange { floor, top_floor });
            }
        }
        if self.start_floor == self.end_floor {
            return Err(RequestError::SameFloor(self.start_floor));
        }
        Ok(self.direction())
    }
}

/// Why a request was refused at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("request starts and ends on floor {0}")]
    SameFloor(Floor),

    #[error("floor {floor} is outside 1..={top_floor}")]
    FloorOutOfRange { floor: Floor, top_floor: Floor },
}

/// An accepted request, tagged with the id the dispatcher gave it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:      PassengerId,
    pub request: PassengerRequest,
}

impl Passenger {
    #[inline]
    pub fn new(id: PassengerId, request: PassengerRequest) -> Self {
        Self { id, request }
    }

    #[inline]
    pub fn start_floor(&self) -> Floor {
        self.request.start_floor
    }

    /// Floor at which this passenger leaves the car.
    #[inline]
    pub fn drop_floor(&self) -> Floor {
        self.request.end_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.request.direction()
    }
}
