//! MinerGuide CLI library.
//!
//! Command handlers, catalog discovery and terminal styling for the
//! `minerguide` binary.

pub mod commands;
pub mod terminal;
