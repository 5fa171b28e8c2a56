use itertools::Itertools;
use union_find_rs::prelude::*;

use crate::datastructures::PriorityMap;
use crate::error::Result;
use crate::graph::*;
use crate::iterators::*;

/// Minimum spanning trees for undirected graphs.
///
/// Both methods read arcs through the [Graph] contract only. On directed graphs they
/// treat every arc as an undirected edge, which is rarely what one wants.
pub trait SpanningTrees {
    /// Grows a minimum spanning tree of the component containing `source` (Prim).
    ///
    /// Returns the tree edges `(parent, child, weight)` in the order in which
    /// `child` joined the tree.
    fn minimum_spanning_tree_prim(&self, source:&Vertex) -> Result<Vec<WeightedEdge>>;

    /// Computes a minimum spanning forest over all components (Kruskal).
    ///
    /// Returns the forest edges in non-decreasing order of weight.
    fn minimum_spanning_tree_kruskal(&self) -> Vec<WeightedEdge>;
}

impl<G> SpanningTrees for G where G: Graph {
    #[tracing::instrument(level = "debug", skip(self))]
    fn minimum_spanning_tree_prim(&self, source:&Vertex) -> Result<Vec<WeightedEdge>> {
        self.check_vertex(source)?;
        let n = self.num_vertices();
        let mut in_tree = vec![false; n];
        let mut parent:Vec<Option<(Vertex, Weight)>> = vec![None; n];
        let mut queue:PriorityMap<Vertex, Weight> = PriorityMap::new();
        let mut res = Vec::new();

        queue.set(*source, 0);
        while !queue.is_empty() {
            let (u, _) = queue.pop_minimum()?;
            in_tree[u as usize] = true;
            if let Some((p, w)) = parent[u as usize] {
                res.push((p, u, w));
            }

            for v in self.neighbours(&u)? {
                if in_tree[v as usize] {
                    continue;
                }
                let w = self.edge_weight(&u, &v)?;
                let lighter = match parent[v as usize] {
                    Some((_, best)) => w < best,
                    None => true
                };
                if lighter {
                    parent[v as usize] = Some((u, w));
                    queue.set(v, w);
                }
            }
        }

        Ok(res)
    }

    #[allow(unused_must_use)]
    fn minimum_spanning_tree_kruskal(&self) -> Vec<WeightedEdge> {
        let mut dsets:DisjointSets<Vertex> = DisjointSets::new();

        for v in self.vertices() {
            // Every vertex is added exactly once, so this cannot fail.
            dsets.make_set(v);
        }

        let mut res = Vec::new();
        let edges = self.edges()
            .filter(|(u, v, _)| u != v)
            .sorted_by_key(|&(u, v, w)| (w, u, v));
        for (u, v, w) in edges {
            let (root_u, root_v) = match (dsets.find_set(&u), dsets.find_set(&v)) {
                (Ok(a), Ok(b)) => (a, b),
                _ => continue
            };
            if root_u != root_v {
                dsets.union(&u, &v);
                res.push((u, v, w));
            }
        }

        res
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
