//! Admission planning for a queue of waiting passengers.

/// Outcome of matching a waiting queue against a car's free places.
///
/// Produced by [`Admission::plan`] before anything is boarded, so the caller
/// decides how many passengers to take without relying on a failed board.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Admission {
    /// Every waiting passenger fits.
    Full(usize),

    /// Only the first `admitted` fit; `left_waiting` stay queued.
    Partial {
        admitted:     usize,
        left_waiting: usize,
    },

    /// The car is full; nobody boards.
    Rejected {
        left_waiting: usize,
    },
}

impl Admission {
    /// Plan how many of `waiting` passengers a car with `available` free
    /// places can take.
    pub fn plan(available: usize, waiting: usize) -> Admission {
        if waiting <= available {
            Admission::Full(waiting)
        } else if available == 0 {
            Admission::Rejected { left_waiting: waiting }
        } else {
            Admission::Partial {
                admitted:     available,
                left_waiting: waiting - available,
            }
        }
    }

    /// Number of passengers to board.
    #[inline]
    pub fn admitted(self) -> usize {
        match self {
            Admission::Full(n)                  => n,
            Admission::Partial { admitted, .. } => admitted,
            Admission::Rejected { .. }          => 0,
        }
    }

    /// Number of passengers that remain queued.
    #[inline]
    pub fn left_waiting(self) -> usize {
        match self {
            Admission::Full(_)                      => 0,
            Admission::Partial { left_waiting, .. } => left_waiting,
            Admission::Rejected { left_waiting }    => left_waiting,
        }
    }
}
