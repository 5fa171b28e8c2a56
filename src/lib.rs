//! Graphs on a fixed vertex set $\{0, \dots, n-1\}$ with two interchangeable backends:
//! an adjacency matrix ([DenseGraph](densegraph::DenseGraph)) and adjacency sets
//! ([SparseGraph](sparsegraph::SparseGraph)). Both implement the [Graph](graph::Graph)
//! trait and every algorithm in [algorithms] is written against that trait alone.
//!
//! ```rust
//! use adjgraph::graph::*;
//! use adjgraph::algorithms::GraphAlgorithms;
//! use adjgraph::sparsegraph::SparseGraph;
//!
//! fn main() {
//!     // 0 -- 1
//!     // |    |
//!     // 2 -- 3 -- 4
//!     let mut graph = SparseGraph::new(5, false);
//!     graph.add_edges(vec![(0,1),(0,2),(1,3),(2,3),(3,4)]).unwrap();
//!
//!     assert_eq!(graph.breadth_first_search(&0).unwrap(), vec![0,1,2,3,4]);
//!     assert_eq!(graph.shortest_path_unweighted(&0, &4).unwrap().len(), 4);
//!
//!     graph.add_weighted_edge(&0, &1, 5).unwrap();
//!     assert_eq!(graph.shortest_path_weighted(&0, &3).unwrap(), vec![0,2,3]);
//!     assert_eq!(graph.minimum_cost(&0, &4).unwrap(), 3);
//! }
//! ```
//!
//! Fallible operations return [error::Result]; an out-of-range vertex is reported as
//! [GraphError::OutOfBounds](error::GraphError::OutOfBounds) rather than a panic.

#![allow(non_snake_case)]

pub mod error;
pub mod graph;
pub mod iterators;
pub mod datastructures;
pub mod densegraph;
pub mod sparsegraph;
pub mod anygraph;
pub mod algorithms;
pub mod convert;
