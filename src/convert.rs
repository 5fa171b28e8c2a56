use crate::error::Result;
use crate::graph::*;
use crate::iterators::*;

/// Copies `graph` into a fresh graph of another backend.
///
/// Only the public [Graph] and [MutableGraph] contracts are used, so any pair of
/// backends works. Copying a dense graph that contains self-loops into a
/// [SparseGraph](crate::sparsegraph::SparseGraph) fails with
/// [GraphError::SelfLoop](crate::error::GraphError::SelfLoop).
///
/// ```rust
/// use adjgraph::graph::*;
/// use adjgraph::convert::convert;
/// use adjgraph::densegraph::DenseGraph;
/// use adjgraph::sparsegraph::SparseGraph;
///
/// let dense = DenseGraph::from_matrix(&[vec![0, 3], vec![3, 0]], false).unwrap();
/// let sparse:SparseGraph = convert(&dense).unwrap();
/// assert_eq!(sparse.edge_weight(&1, &0).unwrap(), 3);
/// ```
pub fn convert<S, T>(graph:&S) -> Result<T> where S: Graph, T: MutableGraph {
    let mut res = T::new(graph.num_vertices(), graph.is_directed());
    res.add_weighted_edges(graph.edges())?;
    tracing::debug!(num_vertices = res.num_vertices(), num_edges = res.num_edges(), "converted graph");
    Ok(res)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithms::GraphAlgorithms;
    use crate::densegraph::DenseGraph;
    use crate::error::GraphError;
    use crate::sparsegraph::SparseGraph;

    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn dense_to_sparse_and_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for directed in [true, false] {
            let mut G = DenseGraph::new(15, directed);
            for _ in 0..40 {
                let u = rng.gen_range(0..15);
                let v = rng.gen_range(0..15);
                if u != v {
                    G.add_weighted_edge(&u, &v, rng.gen_range(1..50)).unwrap();
                }
            }

            let H:SparseGraph = convert(&G).unwrap();
            assert_eq!(H.num_vertices(), G.num_vertices());
            assert_eq!(H.num_edges(), G.num_edges());
            assert_eq!(H.is_directed(), directed);
            for u in G.vertices() {
                for v in G.vertices() {
                    assert_eq!(H.weight(&u, &v).unwrap(), G.weight(&u, &v).unwrap());
                }
                assert_eq!(H.in_degree(&u).unwrap(), G.in_degree(&u).unwrap());
            }
            for s in [0, 7] {
                assert_eq!(H.distances_weighted(&s).unwrap(), G.distances_weighted(&s).unwrap());
            }

            let K:DenseGraph = convert(&H).unwrap();
            assert_eq!(K, G);
        }
    }

    #[test]
    fn self_loops_do_not_convert() {
        let mut G = DenseGraph::new(3, true);
        G.add_edges(vec![(0,1),(2,2)]).unwrap();

        assert_eq!(convert::<_, SparseGraph>(&G), Err(GraphError::SelfLoop(2)));
    }
}
