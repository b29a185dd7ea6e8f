//! Flattening, deduplication, and composition of resolved trees.

mod compose;
mod dedupe;
mod engine;
mod flatten;

pub use compose::compose;
pub use dedupe::dedupe;
pub use engine::InlineEngine;
pub use flatten::{Dependency, flatten};
