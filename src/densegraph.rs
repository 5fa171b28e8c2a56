//!
//! Adjacency-matrix storage. Every vertex pair has a cell, so edge lookups take $O(1)$ time
//! while enumerating neighbours or computing degrees takes $O(n)$. The matrix needs $O(n^2)$
//! memory, which makes this backend a good fit for small or dense graphs.
//!
//! ```rust
//! use adjgraph::graph::*;
//! use adjgraph::densegraph::DenseGraph;
//!
//! fn main() {
//!     let mut graph = DenseGraph::new(3, false);
//!     graph.add_weighted_edge(&0, &1, 4).unwrap();
//!     graph.add_edge(&1, &2).unwrap();
//!
//!     assert_eq!(graph.adjacent_vertices(&1).unwrap(), vec![0, 2]);
//!     assert_eq!(graph.edge_weight(&1, &0).unwrap(), 4);
//!     assert_eq!(graph.edge_weight(&0, &2).unwrap(), 0);
//! }
//! ```
//!
//! Self-loops are stored like any other edge on the diagonal of the matrix.

use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::*;
use crate::iterators::write_arcs;

/// Adjacency-matrix implementation of [MutableGraph].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph {
    // Row-major, cell (u,v) at u*n + v. Absent arcs are `None`.
    matrix: Vec<Option<Weight>>,
    n: usize,
    m: usize,
    directed: bool
}

impl DenseGraph {
    /// Builds a graph from a square weight matrix in which `0` marks a missing edge.
    ///
    /// For undirected graphs every non-zero cell is inserted in both directions,
    /// so if the matrix is not symmetric the cell visited last wins.
    pub fn from_matrix(rows:&[Vec<Weight>], directed:bool) -> Result<DenseGraph> {
        let n = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GraphError::MalformedMatrix { row, len: cells.len(), expected: n });
        }

        let mut res = DenseGraph::new(n, directed);
        for (u, row) in rows.iter().enumerate() {
            for (v, &w) in row.iter().enumerate() {
                if w > 0 {
                    res.add_weighted_edge(&(u as Vertex), &(v as Vertex), w)?;
                }
            }
        }

        Ok(res)
    }

    fn row(&self, u:&Vertex) -> &[Option<Weight>] {
        let start = (*u as usize) * self.n;
        &self.matrix[start..start + self.n]
    }

    fn cell(&self, u:&Vertex, v:&Vertex) -> usize {
        (*u as usize) * self.n + (*v as usize)
    }

    fn set_cell(&mut self, u:&Vertex, v:&Vertex, weight:Weight) -> bool {
        let ix = self.cell(u, v);
        self.matrix[ix].replace(weight).is_none()
    }
}

impl Graph for DenseGraph {
    fn num_vertices(&self) -> usize {
        self.n
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Result<Box<dyn Iterator<Item=Vertex> + 'a>> {
        self.check_vertex(u)?;
        let it = self.row(u).iter()
            .enumerate()
            .filter_map(|(v, w)| w.map(|_| v as Vertex));
        Ok(Box::new(it))
    }

    fn weight(&self, u:&Vertex, v:&Vertex) -> Result<Option<Weight>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.matrix[self.cell(u, v)])
    }

    /// Scans the column of `u`.
    fn in_degree(&self, u:&Vertex) -> Result<usize> {
        self.check_vertex(u)?;
        Ok(self.vertices().filter(|v| self.matrix[self.cell(v, u)].is_some()).count())
    }

    fn out_degree(&self, u:&Vertex) -> Result<usize> {
        self.check_vertex(u)?;
        Ok(self.row(u).iter().filter(|w| w.is_some()).count())
    }
}

impl MutableGraph for DenseGraph {
    fn new(num_vertices:usize, directed:bool) -> DenseGraph {
        DenseGraph {
            matrix: vec![None; num_vertices * num_vertices],
            n: num_vertices,
            m: 0,
            directed
        }
    }

    fn add_weighted_edge(&mut self, u:&Vertex, v:&Vertex, weight:Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let fresh = self.set_cell(u, v, weight);
        if !self.directed {
            self.set_cell(v, u, weight);
        }
        if fresh {
            self.m += 1;
        }

        Ok(())
    }
}

impl fmt::Display for DenseGraph {
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
        let mut G = DenseGraph::new(4, true);
        assert_eq!(G.num_vertices(), 4);
        assert_eq!(G.num_edges(), 0);

        G.add_weighted_edge(&0, &1, 3).unwrap();
        G.add_edge(&0, &2).unwrap();
        G.add_edge(&3, &2).unwrap();

        assert_eq!(G.num_edges(), 3);
        assert_eq!(G.adjacent_vertices(&0).unwrap(), vec![1, 2]);
        assert!(G.adjacent_vertices(&1).unwrap().is_empty());
        assert_eq!(G.edge_weight(&0, &1).unwrap(), 3);
        assert_eq!(G.edge_weight(&1, &0).unwrap(), 0);
        assert_eq!(G.out_degree(&0).unwrap(), 2);
        assert_eq!(G.in_degree(&2).unwrap(), 2);
        assert_eq!(G.in_degree(&0).unwrap(), 0);
    }

    #[test]
    fn undirected_symmetry() {
        let mut G = DenseGraph::new(3, false);
        G.add_weighted_edge(&0, &2, 7).unwrap();

        assert_eq!(G.edge_weight(&0, &2).unwrap(), 7);
        assert_eq!(G.edge_weight(&2, &0).unwrap(), 7);
        assert_eq!(G.num_edges(), 1);
        assert_eq!(G.in_degree(&0).unwrap(), 1);
        assert_eq!(G.out_degree(&0).unwrap(), 1);
    }

    #[test]
    fn last_write_wins() {
        let mut G = DenseGraph::new(2, false);
        G.add_weighted_edge(&0, &1, 5).unwrap();
        G.add_weighted_edge(&1, &0, 2).unwrap();

        assert_eq!(G.num_edges(), 1);
        assert_eq!(G.edge_weight(&0, &1).unwrap(), 2);
        assert_eq!(G.edge_weight(&1, &0).unwrap(), 2);
    }

    #[test]
    fn self_loops_are_edges() {
        let mut G = DenseGraph::new(2, true);
        G.add_weighted_edge(&1, &1, 4).unwrap();

        assert!(G.has_edge(&1, &1).unwrap());
        assert_eq!(G.adjacent_vertices(&1).unwrap(), vec![1]);
        assert_eq!(G.in_degree(&1).unwrap(), 1);
        assert_eq!(G.out_degree(&1).unwrap(), 1);
    }

    #[test]
    fn zero_weight_edges() {
        let mut G = DenseGraph::new(2, true);
        G.add_weighted_edge(&0, &1, 0).unwrap();

        assert!(G.has_edge(&0, &1).unwrap());
        assert!(!G.has_edge(&1, &0).unwrap());
        assert_eq!(G.edge_weight(&0, &1).unwrap(), 0);
        assert_eq!(G.adjacent_vertices(&0).unwrap(), vec![1]);
    }

    #[test]
    fn out_of_bounds() {
        let mut G = DenseGraph::new(3, false);
        let err = GraphError::OutOfBounds { vertex: 3, num_vertices: 3 };

        assert_eq!(G.add_edge(&0, &3), Err(err.clone()));
        assert_eq!(G.add_edge(&3, &0), Err(err.clone()));
        assert_eq!(G.adjacent_vertices(&3), Err(err.clone()));
        assert_eq!(G.edge_weight(&0, &3), Err(err.clone()));
        assert_eq!(G.has_edge(&3, &0), Err(err.clone()));
        assert_eq!(G.in_degree(&3), Err(err.clone()));
        assert_eq!(G.out_degree(&3), Err(err.clone()));
        assert!(G.neighbours(&Vertex::MAX).is_err());
        assert_eq!(G.num_edges(), 0);
    }

    #[test]
    fn from_matrix() {
        let rows = vec![
            vec![0, 2, 0],
            vec![2, 0, 5],
            vec![0, 5, 0],
        ];
        let G = DenseGraph::from_matrix(&rows, false).unwrap();

        assert_eq!(G.num_edges(), 2);
        assert_eq!(G.edge_weight(&1, &2).unwrap(), 5);
        assert_eq!(G.adjacent_vertices(&1).unwrap(), vec![0, 2]);
        assert_eq!(G.edges().collect::<Vec<_>>(), vec![(0, 1, 2), (1, 2, 5)]);

        let ragged = vec![vec![0, 1], vec![1]];
        assert_eq!(DenseGraph::from_matrix(&ragged, true),
                   Err(GraphError::MalformedMatrix { row: 1, len: 1, expected: 2 }));
    }

    #[test]
    fn display() {
        let mut G = DenseGraph::new(3, false);
        G.add_weighted_edge(&0, &2, 9).unwrap();

        assert_eq!(G.to_string(), "0 ---> 2 weight 9\n2 ---> 0 weight 9\n");
    }
}
