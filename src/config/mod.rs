//! Configuration module for cuecard
//!
//! This module handles user preferences, including serialization to and from
//! JSON and persistent storage in the platform config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
