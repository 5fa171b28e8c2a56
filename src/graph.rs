use std::ops::Range;

use fxhash::FxHashSet;

use crate::error::{GraphError, Result};

pub type Vertex = u32;
pub type Weight = u32;
pub type Cost = u64;
pub type Arc = (Vertex, Vertex);
pub type WeightedEdge = (Vertex, Vertex, Weight);
pub type VertexSet = FxHashSet<Vertex>;

/// Read access to a graph on the fixed vertex set $\{0, \dots, n-1\}$.
///
/// This is the only surface the algorithms in [crate::algorithms] use, so
/// every backend implementing it gets all of them for free.
pub trait Graph {
    fn num_vertices(&self) -> usize;

    /// Number of stored edges. An undirected edge counts once.
    fn num_edges(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Returns the out-neighbours of `u`.
    fn neighbours<'a>(&'a self, u:&Vertex) -> Result<Box<dyn Iterator<Item=Vertex> + 'a>>;

    /// Returns the weight stored for the arc `(u,v)` or `None` if there is no such arc.
    fn weight(&self, u:&Vertex, v:&Vertex) -> Result<Option<Weight>>;

    fn contains(&self, u:&Vertex) -> bool {
        (*u as usize) < self.num_vertices()
    }

    /// Fails with [GraphError::OutOfBounds] unless `u` is a vertex of the graph.
    fn check_vertex(&self, u:&Vertex) -> Result<()> {
        if self.contains(u) {
            Ok(())
        } else {
            Err(GraphError::OutOfBounds { vertex: *u, num_vertices: self.num_vertices() })
        }
    }

    fn vertices(&self) -> Range<Vertex> {
        0..(self.num_vertices() as Vertex)
    }

    fn adjacent_vertices(&self, u:&Vertex) -> Result<Vec<Vertex>> {
        Ok(self.neighbours(u)?.collect())
    }

    fn has_edge(&self, u:&Vertex, v:&Vertex) -> Result<bool> {
        Ok(self.weight(u, v)?.is_some())
    }

    /// Returns the weight of the arc `(u,v)`, or `0` if the arc does not exist.
    fn edge_weight(&self, u:&Vertex, v:&Vertex) -> Result<Weight> {
        Ok(self.weight(u, v)?.unwrap_or(0))
    }

    /// Returns the number of arcs which point to `u`.
    fn in_degree(&self, u:&Vertex) -> Result<usize> {
        self.check_vertex(u)?;
        let mut res = 0;
        for v in self.vertices() {
            if self.has_edge(&v, u)? {
                res += 1;
            }
        }
        Ok(res)
    }

    /// Returns the number of arcs which point away from `u`.
    fn out_degree(&self, u:&Vertex) -> Result<usize> {
        Ok(self.neighbours(u)?.count())
    }
}

pub trait MutableGraph: Graph {
    /// Creates a graph on `num_vertices` vertices without any edges.
    fn new(num_vertices:usize, directed:bool) -> Self where Self: Sized;

    /// Inserts the arc `(u,v)` with the given weight, overwriting a previous weight.
    /// Undirected graphs also store `(v,u)`.
    fn add_weighted_edge(&mut self, u:&Vertex, v:&Vertex, weight:Weight) -> Result<()>;

    fn add_edge(&mut self, u:&Vertex, v:&Vertex) -> Result<()> {
        self.add_weighted_edge(u, v, 1)
    }

    /// Adds all edges with weight one. Stops at the first edge that cannot be inserted.
    fn add_edges<I>(&mut self, edges:I) -> Result<()> where I: IntoIterator<Item=Arc>, Self: Sized {
        for (u,v) in edges {
            self.add_edge(&u, &v)?;
        }
        Ok(())
    }

    fn add_weighted_edges<I>(&mut self, edges:I) -> Result<()> where I: IntoIterator<Item=WeightedEdge>, Self: Sized {
        for (u,v,w) in edges {
            self.add_weighted_edge(&u, &v, w)?;
        }
        Ok(())
    }
}
