//! # XCONCEPT Terminal Front End
//!
//! Library half of the `xconcept` binary. Split out so integration tests can
//! drive the wizard and commands without spawning a process.

pub mod cli;
pub mod config;
pub mod opener;
pub mod wizard;
