/*!
# Graph Algorithms

This module provides the algorithms of this crate on top of the representations in [`crate::repr`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```

- [`min_cut`]: randomized minimum cut estimation via edge contraction ([`KargerMinCut`]),
- [`StronglyConnectedComponents`]: Tarjan's algorithm as an iterator ([`Connectivity`]),
- [`isomorphism`]: exhaustive isomorphism test ([`IsomorphismTest`], [`Isomorphism`]).

Algorithms run on dense graphs ([`AdjGraph`]) and are exposed as traits on them. Labelled graphs
([`Graph`]) provide inherent methods that resolve the labels first and translate results back;
the free functions below are shorthands for those.
*/

mod connectivity;
pub mod isomorphism;
pub mod min_cut;

use rand::Rng;

use crate::{
    error::{GraphError, Result},
    prelude::*,
    utils::*,
};

pub use connectivity::*;
pub use isomorphism::*;
pub use min_cut::*;

/// Estimates the minimum cut of an undirected graph with `iterations` random contraction trials.
/// See [`KargerMinCut`].
pub fn estimate_min_cut<K, R>(
    graph: &Graph<K, Undirected>,
    iterations: u32,
    rng: &mut R,
) -> Result<NumEdges>
where
    K: NodeId,
    R: Rng,
{
    graph.estimate_min_cut(iterations, rng)
}

/// Decomposes a directed graph into its strongly connected components.
/// See [`StronglyConnectedComponents`].
pub fn strongly_connected_components<K: NodeId>(
    graph: &Graph<K, Directed>,
) -> Result<Vec<Vec<K>>> {
    graph.strongly_connected_components()
}

/// Returns *true* if there is an adjacency-preserving bijection between `a` and `b`.
/// See [`IsomorphismTest`].
pub fn are_isomorphic<K1, K2, D>(a: &Graph<K1, D>, b: &Graph<K2, D>) -> Result<bool>
where
    K1: NodeId,
    K2: NodeId,
    D: GraphDir,
{
    a.is_isomorphic_to(b)
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn entry_points_on_demo_graphs() {
        let undirected = UndirectedGraph::from_adjacency([
            ('A', vec!['B', 'C', 'D']),
            ('B', vec!['A', 'C', 'D']),
            ('C', vec!['A', 'B', 'D']),
            ('D', vec!['A', 'B', 'C']),
        ]);
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        assert_eq!(estimate_min_cut(&undirected, 200, rng), Ok(3));

        let directed = DirectedGraph::from_adjacency([
            ('A', vec!['B']),
            ('B', vec!['C', 'E', 'F']),
            ('C', vec!['D', 'G']),
            ('D', vec!['C', 'H']),
            ('E', vec!['A', 'F']),
            ('F', vec!['G']),
            ('G', vec!['F']),
            ('H', vec!['D', 'G']),
        ]);
        let sccs = strongly_connected_components(&directed).unwrap();
        assert_eq!(sccs.len(), 3);
        assert_eq!(sccs.iter().map(|c| c.len()).sum::<usize>(), 8);

        assert_eq!(are_isomorphic(&undirected, &undirected), Ok(true));
        assert_eq!(are_isomorphic(&directed, &directed), Ok(true));
    }

    #[test]
    fn errors_surface_through_entry_points() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        let single = UndirectedGraph::from_adjacency([(0u8, vec![])]);
        assert_eq!(
            estimate_min_cut(&single, 10, rng),
            Err(GraphError::DegenerateInput { nodes: 1 })
        );

        let dangling = DirectedGraph::from_adjacency([(0u8, vec![1])]);
        assert!(matches!(
            strongly_connected_components(&dangling),
            Err(GraphError::InvalidGraph { .. })
        ));
    }
}
