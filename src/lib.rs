pub mod error;
pub mod generate;
pub mod graph;
pub mod heap;
pub mod parse;
pub mod render;
pub mod tree;
pub mod union_find;

pub use error::{GraphError, HeapError, Result};
pub use graph::{Edge, Graph, Incidence, Vertex, Weight};
pub use tree::{
    Coverage, EdgeForest, KruskalOutcome, RootedTree, ShortestPathTree, SpanningTree, Traversal,
    Visit,
};
