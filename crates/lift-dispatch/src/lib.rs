//! `lift-dispatch`: the dispatch engine for the lift simulator.
//!
//! # One tick
//!
//! ```text
//! apply_workload(requests):
//!   ① Ingest:  each valid request becomes a Passenger queued by direction
//!               at its start floor (FIFO); invalid ones are dropped.
//!   ② Step:    for each car in ascending CarId order:
//!                 door dwell set     → clear it, advance one floor
//!                 otherwise          → alight, idle routing, board, then
//!                                      door dwell if doors were used,
//!                                      else advance one floor
//!   ③ Return:  one CarSnapshot per car, in id order
//! ```
//!
//! There is no background clock: a tick happens only when an adapter calls
//! `apply_workload`.  `reset` empties the queues and parks every car.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`dispatcher`] | `Dispatcher<P>`: cars, queues, policy, the per-car step    |
//! | [`builder`]    | `DispatcherBuilder<P>`: validated construction             |
//! | [`queues`]     | `WaitingQueues`: per-direction, per-floor FIFO queues      |
//! | [`observer`]   | `DispatchObserver` trait, `NoopObserver`                   |
//! | [`shared`]     | `SharedDispatcher<P>`: mutex-serialized engine             |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                       |
//!
//! # Quick-start
//!
//! ```rust
//! use lift_core::{BuildingConfig, CarStatus, PassengerRequest};
//! use lift_dispatch::DispatcherBuilder;
//! use lift_policy::NearestTerminal;
//!
//! let mut dispatcher = DispatcherBuilder::new(BuildingConfig::default(), NearestTerminal)
//!     .build()
//!     .unwrap();
//! let cars = dispatcher.apply_workload(&[PassengerRequest::new(1, 5)]);
//! assert_eq!(cars[0].target_floor, 5);
//! assert_eq!(cars[0].status, CarStatus::Up);
//! assert!(cars[0].door_dwell);
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod queues;
pub mod shared;


pub use builder::DispatcherBuilder;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use queues::WaitingQueues;
pub use shared::SharedDispatcher;
