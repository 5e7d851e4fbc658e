//! The dashboard side: calls the aggregation endpoints in order and keeps
//! the render state a frontend would show.

pub mod api;
pub mod dashboard;
pub mod orchestrator;
