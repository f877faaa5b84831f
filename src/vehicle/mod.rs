//! Vehicle state module.
//!
//! Provides the dashboard input state and the throttle-driven simulation step.

mod simulation;

pub use simulation::VehicleState;
