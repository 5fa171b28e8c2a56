//! Traversals and path computations for every [Graph].
//!
//! All scratch state (visited flags, distance tables, queues) lives inside a single call,
//! so a graph can be queried any number of times and in any order.

use std::collections::VecDeque;

use itertools::Itertools;

use crate::datastructures::PriorityMap;
use crate::error::{GraphError, Result};
use crate::graph::*;

pub mod spanning;

pub trait GraphAlgorithms {
    /// Returns the vertices reachable from `source` in breadth-first discovery order.
    fn breadth_first_search(&self, source:&Vertex) -> Result<Vec<Vertex>>;

    /// Returns the vertices reachable from `current` in depth-first pre-order, visiting
    /// neighbours in the order in which the graph reports them.
    fn depth_first_search(&self, current:&Vertex) -> Result<Vec<Vertex>>;

    /// Orders all vertices such that every arc points forward (Kahn's algorithm).
    ///
    /// Fails with [GraphError::CycleDetected] if no such order exists. Note that
    /// every edge of an undirected graph forms a cycle of length two.
    fn topological_sort(&self) -> Result<Vec<Vertex>>;

    /// Returns the number of hops from `source` to every vertex, `None` for unreachable vertices.
    fn distances_unweighted(&self, source:&Vertex) -> Result<Vec<Option<Cost>>>;

    /// Returns the total weight of a lightest path from `source` to every vertex, `None` for
    /// unreachable vertices.
    fn distances_weighted(&self, source:&Vertex) -> Result<Vec<Option<Cost>>>;

    /// Returns a path from `source` to `destination` with the fewest arcs.
    fn shortest_path_unweighted(&self, source:&Vertex, destination:&Vertex) -> Result<Vec<Vertex>>;

    /// Returns a path from `source` to `destination` of minimum total weight (Dijkstra).
    fn shortest_path_weighted(&self, source:&Vertex, destination:&Vertex) -> Result<Vec<Vertex>>;

    /// Returns the total weight of the path computed by [GraphAlgorithms::shortest_path_weighted].
    fn minimum_cost(&self, source:&Vertex, destination:&Vertex) -> Result<Cost>;
}

/// Best known distance and predecessor of every vertex, relative to one source.
struct DistanceTable {
    source: Vertex,
    entries: Vec<(Option<Cost>, Option<Vertex>)>
}

impl DistanceTable {
    fn new(n:usize, source:&Vertex) -> Self {
        let mut entries = vec![(None, None); n];
        entries[*source as usize] = (Some(0), None);
        DistanceTable { source: *source, entries }
    }

    fn distance(&self, v:&Vertex) -> Option<Cost> {
        self.entries[*v as usize].0
    }

    fn update(&mut self, v:&Vertex, dist:Cost, pred:&Vertex) {
        self.entries[*v as usize] = (Some(dist), Some(*pred));
    }

    fn distances(self) -> Vec<Option<Cost>> {
        self.entries.into_iter().map(|(d, _)| d).collect()
    }

    /// Follows predecessors back from `destination`.
    fn path_to(&self, destination:&Vertex) -> Result<Vec<Vertex>> {
        let mut path = vec![*destination];
        let mut current = *destination;
        while current != self.source {
            match self.entries[current as usize].1 {
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => {
                    tracing::debug!(source = self.source, destination = *destination, "no path");
                    return Err(GraphError::NoPath { from: self.source, to: *destination });
                }
            }
        }

        path.reverse();
        Ok(path)
    }
}

fn unweighted_table<G>(graph:&G, source:&Vertex) -> Result<DistanceTable> where G: Graph {
    graph.check_vertex(source)?;
    let mut table = DistanceTable::new(graph.num_vertices(), source);
    let mut queue = VecDeque::new();
    queue.push_back(*source);

    while let Some(u) = queue.pop_front() {
        let dist = table.distance(&u).unwrap_or(0) + 1;
        for v in graph.neighbours(&u)? {
            if table.distance(&v).is_none() {
                table.update(&v, dist, &u);
                queue.push_back(v);
            }
        }
    }

    Ok(table)
}

fn weighted_table<G>(graph:&G, source:&Vertex) -> Result<DistanceTable> where G: Graph {
    graph.check_vertex(source)?;
    let mut table = DistanceTable::new(graph.num_vertices(), source);
    let mut queue:PriorityMap<Vertex, Cost> = PriorityMap::new();
    queue.set(*source, 0);

    while !queue.is_empty() {
        let (u, dist_u) = queue.pop_minimum()?;
        for v in graph.neighbours(&u)? {
            let dist = dist_u + graph.edge_weight(&u, &v)? as Cost;
            let improves = match table.distance(&v) {
                Some(d) => dist < d,
                None => true
            };
            if improves {
                tracing::trace!(vertex = v, via = u, dist, "relaxed");
                table.update(&v, dist, &u);
                queue.set(v, dist);
            }
        }
    }

    Ok(table)
}

impl<G> GraphAlgorithms for G where G: Graph {
    #[tracing::instrument(level = "debug", skip(self))]
    fn breadth_first_search(&self, source:&Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(source)?;
        let mut visited = vec![false; self.num_vertices()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(*source);

        while let Some(u) = queue.pop_front() {
            if visited[u as usize] {
                continue;
            }
            visited[u as usize] = true;
            order.push(u);

            for v in self.neighbours(&u)? {
                if !visited[v as usize] {
                    queue.push_back(v);
                }
            }
        }

        Ok(order)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn depth_first_search(&self, current:&Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(current)?;
        let mut visited = vec![false; self.num_vertices()];
        let mut order = Vec::new();
        let mut stack = vec![*current];

        // Neighbours go on the stack in reverse so that the first one is expanded
        // first, which reproduces the recursive pre-order.
        while let Some(u) = stack.pop() {
            if visited[u as usize] {
                continue;
            }
            visited[u as usize] = true;
            order.push(u);

            let N = self.adjacent_vertices(&u)?;
            stack.extend(N.into_iter().rev().filter(|v| !visited[*v as usize]));
        }

        Ok(order)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn topological_sort(&self) -> Result<Vec<Vertex>> {
        let mut in_degs = Vec::with_capacity(self.num_vertices());
        let mut queue = VecDeque::new();
        for v in self.vertices() {
            let d = self.in_degree(&v)?;
            if d == 0 {
                queue.push_back(v);
            }
            in_degs.push(d);
        }

        let mut order = Vec::with_capacity(self.num_vertices());
        while let Some(u) = queue.pop_front() {
            order.push(u);
            for v in self.neighbours(&u)? {
                in_degs[v as usize] -= 1;
                if in_degs[v as usize] == 0 {
                    queue.push_back(v);
                }
            }
        }

        if order.len() != self.num_vertices() {
            tracing::debug!(sorted = order.len(), num_vertices = self.num_vertices(), "cycle detected");
            return Err(GraphError::CycleDetected);
        }

        Ok(order)
    }

    fn distances_unweighted(&self, source:&Vertex) -> Result<Vec<Option<Cost>>> {
        Ok(unweighted_table(self, source)?.distances())
    }

    fn distances_weighted(&self, source:&Vertex) -> Result<Vec<Option<Cost>>> {
        Ok(weighted_table(self, source)?.distances())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn shortest_path_unweighted(&self, source:&Vertex, destination:&Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(destination)?;
        unweighted_table(self, source)?.path_to(destination)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn shortest_path_weighted(&self, source:&Vertex, destination:&Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(destination)?;
        weighted_table(self, source)?.path_to(destination)
    }

    fn minimum_cost(&self, source:&Vertex, destination:&Vertex) -> Result<Cost> {
        let path = self.shortest_path_weighted(source, destination)?;
        let mut cost:Cost = 0;
        for (u, v) in path.iter().tuple_windows() {
            cost += self.edge_weight(u, v)? as Cost;
        }
        Ok(cost)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
