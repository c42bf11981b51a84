//! The `IdlePolicy` trait: the extension point for smarter dispatch.

use lift_car::CarSnapshot;
use lift_core::Floor;

use crate::PolicyContext;

/// Pluggable idle-routing strategy.
///
/// Implement this to decide which floor an idle car heads for.  Returning
/// `car.current_floor` leaves the car idle.
///
/// # Thread safety
///
/// The dispatcher may live behind a mutex shared by many adapter threads, so
/// implementations must be `Send + Sync`.  Per-car state belongs in the
/// snapshot, not in the policy.
///
/// # Example
///
/// ```rust
/// use lift_car::CarSnapshot;
/// use lift_core::Floor;
/// use lift_policy::{IdlePolicy, PolicyContext};
///
/// /// Always return to the lobby.
/// struct Lobby;
///
/// impl IdlePolicy for Lobby {
///     fn idle_target(&self, _car: &CarSnapshot, _ctx: &PolicyContext) -> Floor {
///         1
///     }
/// }
/// ```
pub trait IdlePolicy: Send + Sync + 'static {
    /// Target floor for the idle car described by `car`.
    fn idle_target(&self, car: &CarSnapshot, ctx: &PolicyContext) -> Floor;

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<P: IdlePolicy + ?Sized> IdlePolicy for Box<P> {
    fn idle_target(&self, car: &CarSnapshot, ctx: &PolicyContext) -> Floor {
        (**self).idle_target(car, ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
