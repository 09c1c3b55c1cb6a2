//! CLI library components for the faculty profile renderer.

pub mod logging;
pub mod pipeline;
