//!
//! Chooses the storage backend at runtime. A [GraphConfig] describes the graph to create
//! and [AnyGraph] forwards every call to whichever backend was picked, so all algorithms
//! work on it unchanged.
//!
//! ```rust
//! use adjgraph::graph::*;
//! use adjgraph::anygraph::{GraphConfig, Representation};
//! use adjgraph::algorithms::GraphAlgorithms;
//!
//! fn main() {
//!     let rep:Representation = "set".parse().unwrap();
//!     let mut graph = GraphConfig::new(4).directed(true).representation(rep).build();
//!     graph.add_edges(vec![(0,1),(1,2),(2,3)]).unwrap();
//!
//!     assert_eq!(graph.representation(), Representation::Sparse);
//!     assert_eq!(graph.topological_sort().unwrap(), vec![0,1,2,3]);
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::densegraph::DenseGraph;
use crate::error::{GraphError, Result};
use crate::graph::*;
use crate::sparsegraph::SparseGraph;

/// The two interchangeable storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// Adjacency matrix, see [DenseGraph].
    #[default]
    Dense,
    /// Adjacency sets, see [SparseGraph].
    Sparse
}

impl FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" | "matrix" | "adjacentmatrix" => Ok(Representation::Dense),
            "sparse" | "set" | "list" | "adjacentset" => Ok(Representation::Sparse),
            _ => Err(GraphError::UnknownRepresentation(s.to_string()))
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Dense => write!(f, "dense"),
            Representation::Sparse => write!(f, "sparse"),
        }
    }
}

/// Describes a graph to be built. Graphs are undirected and dense unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    pub num_vertices: usize,
    pub directed: bool,
    pub representation: Representation
}

impl GraphConfig {
    pub fn new(num_vertices:usize) -> Self {
        GraphConfig { num_vertices, directed: false, representation: Representation::default() }
    }

    pub fn directed(mut self, directed:bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn representation(mut self, representation:Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Creates an empty graph as described.
    pub fn build(&self) -> AnyGraph {
        tracing::debug!(num_vertices = self.num_vertices, directed = self.directed,
                        representation = %self.representation, "building graph");
        match self.representation {
            Representation::Dense => AnyGraph::Dense(DenseGraph::new(self.num_vertices, self.directed)),
            Representation::Sparse => AnyGraph::Sparse(SparseGraph::new(self.num_vertices, self.directed)),
        }
    }
}

/// A graph whose backend is chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGraph {
    Dense(DenseGraph),
    Sparse(SparseGraph)
}

impl AnyGraph {
    pub fn representation(&self) -> Representation {
        match self {
            AnyGraph::Dense(_) => Representation::Dense,
            AnyGraph::Sparse(_) => Representation::Sparse,
        }
    }
}

impl From<DenseGraph> for AnyGraph {
    fn from(graph: DenseGraph) -> Self {
        AnyGraph::Dense(graph)
    }
}

impl From<SparseGraph> for AnyGraph {
    fn from(graph: SparseGraph) -> Self {
        AnyGraph::Sparse(graph)
    }
}

impl Graph for AnyGraph {
    fn num_vertices(&self) -> usize {
        match self {
            AnyGraph::Dense(G) => G.num_vertices(),
            AnyGraph::Sparse(G) => G.num_vertices(),
        }
    }

    fn num_edges(&self) -> usize {
        match self {
            AnyGraph::Dense(G) => G.num_edges(),
            AnyGraph::Sparse(G) => G.num_edges(),
        }
    }

    fn is_directed(&self) -> bool {
        match self {
            AnyGraph::Dense(G) => G.is_directed(),
            AnyGraph::Sparse(G) => G.is_directed(),
        }
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Result<Box<dyn Iterator<Item=Vertex> + 'a>> {
        match self {
            AnyGraph::Dense(G) => G.neighbours(u),
            AnyGraph::Sparse(G) => G.neighbours(u),
        }
    }

    fn weight(&self, u:&Vertex, v:&Vertex) -> Result<Option<Weight>> {
        match self {
            AnyGraph::Dense(G) => G.weight(u, v),
            AnyGraph::Sparse(G) => G.weight(u, v),
        }
    }

    fn in_degree(&self, u:&Vertex) -> Result<usize> {
        match self {
            AnyGraph::Dense(G) => G.in_degree(u),
            AnyGraph::Sparse(G) => G.in_degree(u),
        }
    }

    fn out_degree(&self, u:&Vertex) -> Result<usize> {
        match self {
            AnyGraph::Dense(G) => G.out_degree(u),
            AnyGraph::Sparse(G) => G.out_degree(u),
        }
    }
}

impl MutableGraph for AnyGraph {
    /// Creates a [DenseGraph], the default representation.
    fn new(num_vertices:usize, directed:bool) -> AnyGraph {
        AnyGraph::Dense(DenseGraph::new(num_vertices, directed))
    }

    fn add_weighted_edge(&mut self, u:&Vertex, v:&Vertex, weight:Weight) -> Result<()> {
        match self {
            AnyGraph::Dense(G) => G.add_weighted_edge(u, v, weight),
            AnyGraph::Sparse(G) => G.add_weighted_edge(u, v, weight),
        }
    }
}

impl fmt::Display for AnyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyGraph::Dense(G) => fmt::Display::fmt(G, f),
            AnyGraph::Sparse(G) => fmt::Display::fmt(G, f),
        }
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
