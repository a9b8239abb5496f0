//! Game entities module.
//!
//! This module organizes unit creation logic.

pub mod unit;

pub use unit::*;
