//! PlotPlan Core - Domain models, configuration, and the drawing state machine
//!
//! This crate contains the core domain types shared by every plotplan crate.

pub mod config;
pub mod drawing;
pub mod error;
pub mod models;

pub use error::{PlotplanError, Result};
