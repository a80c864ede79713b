//! Trace-driven CPU cache simulator: direct-mapped vs fully-associative, unified vs split.

pub mod address;
pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod metrics;
pub mod simulator;
pub mod trace;
