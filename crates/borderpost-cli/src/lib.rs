//! CLI library components for the border checkpoint pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
