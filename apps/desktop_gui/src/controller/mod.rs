//! Controller layer: UI events, dialog state machine, reducer, and command orchestration.

pub mod events;
pub mod form;
pub mod orchestration;
pub mod reducer;
