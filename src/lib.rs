pub mod graph;
pub mod tracing_support;
pub mod tree;

pub use graph::{Dfs, GraphError, UndirectedGraph, Vertex};
pub use tree::{BinaryTree, Node};
