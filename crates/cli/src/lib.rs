//! Command-line adapter: process input, console output and wiring.

pub mod app;
pub mod args;
pub mod console;
