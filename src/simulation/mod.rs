//! The dip/blow experiment lifecycle.
//!
//! [`Simulation`] owns a single [`ExperimentState`] record and is the only
//! code that adds drawables to or removes them from the scene. Animations are
//! polled from [`Simulation::tick`] against an injected [`Clock`].

mod animation;
mod clock;
mod machine;
mod phase;

pub use animation::{Animation, AnimationKind};
pub use clock::{Clock, ManualClock, SystemClock};
pub use machine::{ExperimentState, Simulation};
pub use phase::{ExperimentPhase, FilmKind};
