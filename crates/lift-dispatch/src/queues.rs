//! `WaitingQueues`: passengers waiting at their start floor, per direction.
//!
//! Two sparse `BTreeMap<Floor, VecDeque<Passenger>>`s, one for each travel
//! direction.  Floors with nobody waiting have no entry, so `is_empty` and
//! the per-direction totals stay O(1).  Within a floor, passengers keep
//! their arrival order and board strictly front-first.

use std::collections::{BTreeMap, VecDeque};

use lift_core::{Direction, Floor, Passenger};

type Side = BTreeMap<Floor, VecDeque<Passenger>>;

#[derive(Clone, Debug, Default)]
pub struct WaitingQueues {
    up:   Side,
    down: Side,
    /// Cached totals for O(1) `waiting_*()`.
    up_total:   usize,
    down_total: usize,
}

impl WaitingQueues {
    pub fn new() -> Self {
        Self::default()
    }

    fn side(&self, direction: Direction) -> &Side {
        match direction {
            Direction::Up   => &self.up,
            Direction::Down => &self.down,
        }
    }

    fn side_mut(&mut self, direction: Direction) -> (&mut Side, &mut usize) {
        match direction {
            Direction::Up   => (&mut self.up, &mut self.up_total),
            Direction::Down => (&mut self.down, &mut self.down_total),
        }
    }

    /// Queue `passenger` behind everyone already waiting at its start floor
    /// in its direction.
    pub fn push(&mut self, passenger: Passenger) {
        let (side, total) = self.side_mut(passenger.direction());
        side.entry(passenger.start_floor()).or_default().push_back(passenger);
        *total += 1;
    }

    /// Number waiting at `floor` to travel in `direction`.
    pub fn len_at(&self, direction: Direction, floor: Floor) -> usize {
        self.side(direction).get(&floor).map_or(0, VecDeque::len)
    }

    /// Which queue an idle car standing at `floor` should serve, if any.
    /// The up-queue wins when both are waiting.
    pub fn direction_waiting_at(&self, floor: Floor) -> Option<Direction> {
        [Direction::Up, Direction::Down]
            .into_iter()
            .find(|&direction| self.len_at(direction, floor) > 0)
    }

    /// Copies of the first `n` passengers at `floor` (fewer if fewer wait).
    pub fn peek_front(&self, direction: Direction, floor: Floor, n: usize) -> Vec<Passenger> {
        self.side(direction)
            .get(&floor)
            .map(|queue| queue.iter().take(n).copied().collect())
            .unwrap_or_default()
    }

    /// Remove and return the first `n` passengers at `floor`.
    pub fn remove_front(&mut self, direction: Direction, floor: Floor, n: usize) -> Vec<Passenger> {
        let (side, total) = self.side_mut(direction);
        let Some(queue) = side.get_mut(&floor) else {
            return vec![];
        };
        let count = n.min(queue.len());
        let taken: Vec<Passenger> = queue.drain(..count).collect();
        if queue.is_empty() {
            side.remove(&floor);
        }
        *total -= taken.len();
        taken
    }

    /// Passengers waiting at `floor` in `direction`, front first.
    pub fn queued_at(&self, direction: Direction, floor: Floor) -> impl Iterator<Item = &Passenger> {
        self.side(direction).get(&floor).into_iter().flatten()
    }

    /// `(floor, waiting)` for every floor with someone waiting in `direction`,
    /// lowest floor first.
    pub fn floors(&self, direction: Direction) -> impl Iterator<Item = (Floor, usize)> + '_ {
        self.side(direction).iter().map(|(&floor, queue)| (floor, queue.len()))
    }

    pub fn waiting(&self, direction: Direction) -> usize {
        match direction {
            Direction::Up   => self.up_total,
            Direction::Down => self.down_total,
        }
    }

    #[inline]
    pub fn waiting_up(&self) -> usize {
        self.up_total
    }

    #[inline]
    pub fn waiting_down(&self) -> usize {
        self.down_total
    }

    /// Total passengers waiting in both directions.
    pub fn len(&self) -> usize {
        self.up_total + self.down_total
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.up.clear();
        self.down.clear();
        self.up_total = 0;
        self.down_total = 0;
    }
}
