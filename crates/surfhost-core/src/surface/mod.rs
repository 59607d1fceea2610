//! Surface lifecycle.
//!
//! Tracks engine bring-up and the identity/size of the rendering target the
//! engine is bound to. Platform surface callbacks are reduced to
//! [`SurfaceEvent`]s, folded through [`SurfaceState::step`], and the resulting
//! [`SurfaceAction`] is issued to the engine by [`SurfaceLifecycleController`].

mod controller;
mod state;

pub use controller::SurfaceLifecycleController;
pub use state::{SurfaceAction, SurfaceEvent, SurfaceState, TargetId};
