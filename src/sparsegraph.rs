//!
//! Adjacency-set storage. Each vertex keeps its out-neighbours together with the
//! weight of each arc, so memory is linear in the number of edges. Adding an edge and
//! looking up a weight take amortized $O(1)$ time; enumerating neighbours takes
//! $O(\text{deg})$.
//!
//! Neighbours are reported in the order in which their arcs were first inserted.
//! Computing the in-degree of a vertex has to consult the adjacency of every other vertex.
//!
//! ```rust
//! use adjgraph::graph::*;
//! use adjgraph::error::GraphError;
//! use adjgraph::sparsegraph::SparseGraph;
//!
//! fn main() {
//!     let mut graph = SparseGraph::new(4, true);
//!     graph.add_edges(vec![(0,3),(0,1),(1,2)]).unwrap();
//!
//!     assert_eq!(graph.adjacent_vertices(&0).unwrap(), vec![3, 1]);
//!     assert_eq!(graph.add_edge(&2, &2), Err(GraphError::SelfLoop(2)));
//! }
//! ```

use std::fmt;

use fxhash::FxHashMap;

use crate::error::{GraphError, Result};
use crate::graph::*;
use crate::iterators::write_arcs;

/// A vertex's out-neighbours alongside the weights of the corresponding arcs.
#[derive(Debug, Clone, Default)]
struct SparseNode {
    neighbours: Vec<Vertex>,
    weights: FxHashMap<Vertex, Weight>
}

impl SparseNode {
    /// Returns `true` if `v` was not a neighbour before.
    fn add_edge(&mut self, v:&Vertex, weight:Weight) -> bool {
        if self.weights.insert(*v, weight).is_none() {
            self.neighbours.push(*v);
            true
        } else {
            false
        }
    }

    fn weight(&self, v:&Vertex) -> Option<Weight> {
        self.weights.get(v).copied()
    }
}

/// Adjacency-set implementation of [MutableGraph]. Rejects self-loops.
#[derive(Debug, Clone)]
pub struct SparseGraph {
    nodes: Vec<SparseNode>,
    m: usize,
    directed: bool
}

impl PartialEq for SparseGraph {
    // Insertion order of neighbours does not matter for equality.
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_edges() != other.num_edges() || self.directed != other.directed {
            return false
        }
        self.nodes.iter().zip(other.nodes.iter()).all(|(a, b)| a.weights == b.weights)
    }
}
impl Eq for SparseGraph {}

impl SparseGraph {
    fn node(&self, u:&Vertex) -> Result<&SparseNode> {
        self.check_vertex(u)?;
        Ok(&self.nodes[*u as usize])
    }
}

impl Graph for SparseGraph {
    fn num_vertices(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Result<Box<dyn Iterator<Item=Vertex> + 'a>> {
        let node = self.node(u)?;
        Ok(Box::new(node.neighbours.iter().copied()))
    }

    fn weight(&self, u:&Vertex, v:&Vertex) -> Result<Option<Weight>> {
        self.check_vertex(v)?;
        Ok(self.node(u)?.weight(v))
    }

    fn out_degree(&self, u:&Vertex) -> Result<usize> {
        Ok(self.node(u)?.neighbours.len())
    }
}

impl MutableGraph for SparseGraph {
    fn new(num_vertices:usize, directed:bool) -> SparseGraph {
        SparseGraph {
            nodes: vec![SparseNode::default(); num_vertices],
            m: 0,
            directed
        }
    }

    fn add_weighted_edge(&mut self, u:&Vertex, v:&Vertex, weight:Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            tracing::debug!(vertex = *u, "rejected self-loop");
            return Err(GraphError::SelfLoop(*u));
        }

        let fresh = self.nodes[*u as usize].add_edge(v, weight);
        if !self.directed {
            self.nodes[*v as usize].add_edge(u, weight);
        }
        if fresh {
            self.m += 1;
        }

        Ok(())
    }
}

impl fmt::Display for SparseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_arcs(self, f)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####


#[cfg(test)]
mod test {
    use super::*;
    use crate::iterators::*;

    #[test]
    fn basic_operations() {
        let mut G = SparseGraph::new(4, true);
        assert_eq!(G.num_vertices(), 4);
        assert_eq!(G.num_edges(), 0);

        G.add_weighted_edge(&0, &2, 3).unwrap();
        G.add_edge(&0, &1).unwrap();
        G.add_edge(&3, &2).unwrap();

        assert_eq!(G.num_edges(), 3);
        assert_eq!(G.adjacent_vertices(&0).unwrap(), vec![2, 1]);
        assert!(G.adjacent_vertices(&2).unwrap().is_empty());
        assert_eq!(G.edge_weight(&0, &2).unwrap(), 3);
        assert_eq!(G.edge_weight(&2, &0).unwrap(), 0);
        assert_eq!(G.out_degree(&0).unwrap(), 2);
        assert_eq!(G.in_degree(&2).unwrap(), 2);
        assert_eq!(G.in_degree(&3).unwrap(), 0);
    }

    #[test]
    fn undirected_symmetry() {
        let mut G = SparseGraph::new(3, false);
        G.add_weighted_edge(&2, &1, 6).unwrap();

        assert_eq!(G.edge_weight(&1, &2).unwrap(), 6);
        assert_eq!(G.edge_weight(&2, &1).unwrap(), 6);
        assert_eq!(G.num_edges(), 1);
        assert_eq!(G.in_degree(&1).unwrap(), 1);
        assert_eq!(G.out_degree(&2).unwrap(), 1);
    }

    #[test]
    fn last_write_wins() {
        let mut G = SparseGraph::new(3, true);
        G.add_weighted_edge(&0, &1, 5).unwrap();
        G.add_edge(&0, &2).unwrap();
        G.add_weighted_edge(&0, &1, 8).unwrap();

        assert_eq!(G.num_edges(), 2);
        assert_eq!(G.edge_weight(&0, &1).unwrap(), 8);
        // Overwriting keeps the original position
        assert_eq!(G.adjacent_vertices(&0).unwrap(), vec![1, 2]);
    }

    #[test]
    fn rejects_self_loops() {
        let mut G = SparseGraph::new(3, false);
        assert_eq!(G.add_edge(&1, &1), Err(GraphError::SelfLoop(1)));
        assert_eq!(G.add_weighted_edges(vec![(0,1,1), (2,2,1), (1,2,1)]), Err(GraphError::SelfLoop(2)));

        // Edges before the failing one are kept
        assert_eq!(G.num_edges(), 1);
        assert!(G.has_edge(&1, &0).unwrap());
        assert!(!G.has_edge(&1, &2).unwrap());
    }

    #[test]
    fn out_of_bounds() {
        let mut G = SparseGraph::new(3, true);
        let err = GraphError::OutOfBounds { vertex: 3, num_vertices: 3 };

        assert_eq!(G.add_edge(&0, &3), Err(err.clone()));
        assert_eq!(G.add_edge(&3, &3), Err(err.clone()));
        assert_eq!(G.adjacent_vertices(&3), Err(err.clone()));
        assert_eq!(G.edge_weight(&3, &0), Err(err.clone()));
        assert_eq!(G.edge_weight(&0, &3), Err(err.clone()));
        assert_eq!(G.in_degree(&3), Err(err.clone()));
        assert_eq!(G.out_degree(&3), Err(err.clone()));
        assert!(G.neighbours(&Vertex::MAX).is_err());
    }

    #[test]
    fn equality() {
        let mut G = SparseGraph::new(3, true);
        G.add_edges(vec![(0,1),(0,2)]).unwrap();

        let mut H = SparseGraph::new(3, true);
        H.add_edges(vec![(0,2),(0,1)]).unwrap();
        assert_eq!(G, H);

        H.add_weighted_edge(&0, &2, 4).unwrap();
        assert_ne!(G, H);
    }

    #[test]
    fn degrees_match_neighbourhoods() {
        let mut G = SparseGraph::new(5, true);
        G.add_edges(vec![(0,1),(0,2),(1,2),(3,2),(2,4),(4,0)]).unwrap();

        for v in G.vertices() {
            assert_eq!(G.out_degree(&v).unwrap(), G.adjacent_vertices(&v).unwrap().len());
        }
        let total_in:usize = G.vertices().map(|v| G.in_degree(&v).unwrap()).sum();
        assert_eq!(total_in, G.arcs().count());
    }
}
