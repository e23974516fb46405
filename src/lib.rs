//! Elevator Bank Simulation Library
//!
//! A two-car elevator dispatch simulation that runs headless on a logical
//! clock. The display layer consumes position notifications and never
//! participates in scheduling.

pub mod simulation;
