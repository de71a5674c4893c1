//! Real-time interaction layer for the livmap engine.
//!
//! Responsibilities:
//! - Drive the estimator from pointer and viewport events, throttled to one
//!   recomputation per rendered frame.
//! - Define the drawing-surface and frame-clock seams the host map widget
//!   implements.
//! - Map importance toggles onto aggregation weights.
//! - Track in-flight remote lookups with owned, generation-checked tokens.
//!
//! Boundaries:
//! - No interpolation or colour mathematics (those live in `livmap-core`).
//! - No network access; remote lookups happen in the host, which consults
//!   [`RequestSlot`] before applying a response.
//!
//! Invariants:
//! - A stale scheduled recompute never applies its result after a newer one
//!   has been scheduled.
//! - No global mutable state; every collaborator is passed in explicitly.

#![forbid(unsafe_code)]

mod controller;
mod frame;
mod importance;
mod slot;
mod surface;

pub use controller::MapController;
pub use frame::{FrameClock, FrameHandle, ManualFrameClock};
pub use importance::ImportanceSelection;
pub use slot::{RequestSlot, RequestToken};
pub use surface::{MapSurface, ScreenPoint};
