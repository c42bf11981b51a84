//! `lift-policy`: where should an idle car go next?
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`context`]  | `PolicyContext`: read-only building and demand summary        |
//! | [`model`]    | `IdlePolicy` trait                                            |
//! | [`terminal`] | `NearestTerminal`: default "sweep to a terminal" heuristic    |
//! | [`stay`]     | `StayPut`: never re-targets; cars only serve their own floor  |
//!
//! # Design notes
//!
//! The dispatcher consults the policy only for a car that is idle, has no
//! one waiting at its own floor, and either carries passengers or has some
//! demand somewhere in the building.  The policy sees a [`CarSnapshot`] value
//! and a [`PolicyContext`]; it cannot touch the car or the queues.  Whatever
//! floor it returns is clamped into the building by the dispatcher.
//!
//! [`CarSnapshot`]: lift_car::CarSnapshot

pub mod context;
pub mod model;
pub mod stay;
pub mod terminal;

#[cfg(test)]
mod tests;

pub use context::PolicyContext;
pub use model::IdlePolicy;
pub use stay::StayPut;
pub use terminal::NearestTerminal;
