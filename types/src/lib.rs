//! Shared types for the chart editor
//!
//! All types are exported to TypeScript via tsify.

pub mod chart;
pub mod data;
pub mod messages;
pub mod overlay;

pub use chart::*;
pub use data::*;
pub use messages::*;
pub use overlay::*;
