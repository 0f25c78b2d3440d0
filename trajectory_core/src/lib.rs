//! # Trajectory Core (The Narrator)
//!
//! Reads character trajectories from `despair_model` and derives everything
//! that is not stored: the history tree and paths through it, procedural
//! labels and descriptions, and the documents exported for writing.
//!
//! ## Core Components
//!
//! - **trajectory**: Tree building, path reconstruction and flattened views
//! - **narration**: Rule-based labels, procedural descriptions and the `Lexicon`
//! - **composer**: History document, LLM prompt and path detail view
//!
//! ## Design Philosophy
//!
//! - **Derived, never stored**: Every view is recomputed from the graph on request
//! - **Total**: Missing data degrades to empty output instead of errors
//! - **Language-neutral core**: All display text goes through a `Lexicon`

pub mod composer;
pub mod narration;
pub mod trajectory;

pub use composer::*;
pub use narration::*;
pub use trajectory::*;
