//! Pointer handling: picking, dragging and straw clicks.

mod controller;

pub use controller::{Cursor, Grab, InteractionController, PointerEvent, PointerOutcome};
