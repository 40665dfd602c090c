//! Shared types for the automatic low detail controller.
//!
//! This crate holds the data-only types shared between the core decision
//! engine and whatever host glue embeds it: the closed set of high-load
//! regions and the per-region user configuration.

pub mod config;
pub mod region;

pub use config::RegionConfig;
pub use region::Region;
