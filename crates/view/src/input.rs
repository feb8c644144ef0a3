// Chunk: docs/chunks/input_events - Re-export from shared crate

//! Input event types for keyboard and pointer handling.
//!
//! The types are defined in the `cell-edit-input` crate and re-exported
//! here for convenience, so a host adapter can depend on this crate alone.

pub use cell_edit_input::*;
