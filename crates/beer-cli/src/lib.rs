//! Library components of the craft beer explorer CLI.

pub mod config;
pub mod logging;
pub mod render;
pub mod session;
