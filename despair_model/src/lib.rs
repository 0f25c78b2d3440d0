//! # Despair Model
//!
//! The "Atlas" crate - the data model of Despair Space: the taxonomy of stages
//! and axis subtypes, the three-axis despair vector and its zones, and the
//! character trajectory graph (points, connections, root).
//!
//! This crate is the single source of truth for trajectory data and does not
//! generate any prose. Text generation and traversal live in `trajectory_core`.

pub mod config;
pub mod entities;
pub mod error;
pub mod presets;
pub mod taxonomy;
pub mod workspace;
pub mod zones;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use taxonomy::*;
pub use workspace::*;
pub use zones::*;
