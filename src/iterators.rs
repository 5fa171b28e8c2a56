use std::fmt;
use std::ops::Range;

use crate::graph::*;

/*
    Arc iterator for all graphs. Walks the vertices in index order
    and returns every stored arc (u,v,w) of u before moving on.
*/
pub struct ArcIterator<'a, G> where G: Graph {
    G: &'a G,
    v_it: Range<Vertex>,
    curr_v: Vertex,
    curr_it: Option<Box<dyn Iterator<Item=Vertex> + 'a>>,
}

impl<'a, G> ArcIterator<'a, G> where G: Graph {
    pub fn new(G: &'a G) -> ArcIterator<'a, G> {
        let mut res = ArcIterator {
            G,
            v_it: G.vertices(),
            curr_v: Vertex::MAX,
            curr_it: None,
        };
        res.advance();
        res
    }

    fn advance(&mut self) {
        match self.v_it.next() {
            Some(v) => {
                self.curr_v = v;
                // v comes from the graph's own vertex range, so this cannot fail
                self.curr_it = self.G.neighbours(&v).ok();
            }
            None => self.curr_it = None,
        }
    }
}

impl<'a, G> Iterator for ArcIterator<'a, G> where G: Graph {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(it) = self.curr_it.as_mut() {
            let u = match it.next() {
                Some(u) => u,
                None => {
                    self.advance();
                    continue;
                }
            };

            let w = self.G.edge_weight(&self.curr_v, &u).ok()?;
            return Some((self.curr_v, u, w));
        }

        None
    }
}

/*
    Edge iterator. Same as ArcIterator for directed graphs; for undirected
    graphs every edge is stored twice and only returned once.
*/
pub struct EdgeIterator<'a, G> where G: Graph {
    arcs: ArcIterator<'a, G>,
    directed: bool,
}

impl<'a, G> EdgeIterator<'a, G> where G: Graph {
    pub fn new(G: &'a G) -> EdgeIterator<'a, G> {
        EdgeIterator { arcs: ArcIterator::new(G), directed: G.is_directed() }
    }
}

impl<'a, G> Iterator for EdgeIterator<'a, G> where G: Graph {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        for (u,v,w) in &mut self.arcs {
            // Tie-breaking so we only return every edge once
            if !self.directed && u > v {
                continue;
            }
            return Some((u,v,w));
        }
        None
    }
}

pub trait EdgeIterable: Graph + Sized {
    /// Iterates over all stored arcs. Undirected edges appear in both directions.
    fn arcs(&self) -> ArcIterator<'_, Self> {
        ArcIterator::new(self)
    }

    /// Iterates over all edges. Undirected edges appear once, as `(u,v,w)` with `u <= v`.
    fn edges(&self) -> EdgeIterator<'_, Self> {
        EdgeIterator::new(self)
    }
}

impl<G> EdgeIterable for G where G: Graph {}

/// Writes one line `u ---> v weight w` per stored arc.
pub(crate) fn write_arcs<G>(graph:&G, f:&mut fmt::Formatter<'_>) -> fmt::Result where G: Graph {
    for (u,v,w) in graph.arcs() {
        writeln!(f, "{u} ---> {v} weight {w}")?;
    }
    Ok(())
}
