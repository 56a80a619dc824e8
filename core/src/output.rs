//! Tree-style rendering of the topology maps.
//!
//! The renderers are pure formatting functions: they take already-built
//! structures, a sink and a [`Style`], and emit glyph-prefixed lines.
//! Sorting happens on copies; inputs are never mutated.

pub mod container_tree;
pub mod network_tree;
pub mod style;

pub use container_tree::print_container_tree;
pub use network_tree::print_network_tree;
pub use style::{Plain, Style};

/// Branch glyph for a non-last sibling.
pub const TREE_BRANCH: &str = "├──";

/// Branch glyph for the last sibling.
pub const TREE_END: &str = "└──";

/// Continuation indent under a non-last sibling.
pub const TREE_VERTICAL: &str = "│   ";

/// Continuation indent under the last sibling.
pub const TREE_SPACE: &str = "    ";
