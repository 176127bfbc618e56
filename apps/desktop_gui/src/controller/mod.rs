//! Controller layer: queues UI interactions and applies them to the list model.

pub mod events;
pub mod orchestration;
