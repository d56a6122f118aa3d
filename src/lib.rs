//! Contagion spreading through mobile agents in a bounded arena.
//!
//! [`SimulationWorld`] owns the population and the tunables; an external driver
//! calls [`SimulationWorld::tick`] once per frame and reads agents and
//! [`HealthCounts`] back for display.

pub mod agent;
pub mod boundary;
pub mod collision;
pub mod config;
pub mod constants;
pub mod infection;
pub mod simulation;
pub mod utils;

pub use agent::{Agent, HealthState};
pub use boundary::Arena;
pub use config::{ParamError, SimulationParams};
pub use simulation::{HealthCounts, SimRng, SimulationWorld};
