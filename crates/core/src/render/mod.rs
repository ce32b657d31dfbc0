//! Text renderers over a [`Graph`](crate::graph::Graph)
//!
//! All renderers are total: any graph produced by
//! [`topological`](crate::graph::topological) renders without error.

pub mod changelog;
pub mod relation;
pub mod tree;

pub use changelog::changelog_links;
pub use relation::relation_diagram;
pub use tree::{short_view, Tree};
