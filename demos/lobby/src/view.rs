//! JSON shape handed to clients: one record per car.

use serde::Serialize;

use lift_car::CarSnapshot;
use lift_core::Floor;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CarView {
    pub id:    u32,
    pub floor: Floor,
    /// Onboard passengers as `p<id>` labels.
    pub users: Vec<String>,
}

impl From<&CarSnapshot> for CarView {
    fn from(car: &CarSnapshot) -> Self {
        Self {
            id:    car.id.get(),
            floor: car.current_floor,
            users: car.passengers.iter().map(|p| format!("p{}", p.get())).collect(),
        }
    }
}

pub fn views(cars: &[CarSnapshot]) -> Vec<CarView> {
    cars.iter().map(CarView::from).collect()
}
