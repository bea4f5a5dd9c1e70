/*!
# Graph Isomorphism

Decides whether two graphs of the same orientation are structurally identical by searching for a
bijection between their nodes that preserves all adjacencies (including multiplicities and
self-loops).

The test first compares cheap invariants: number of nodes, number of edges and the sorted degree
sequence (out-degrees for directed graphs). Only if all of them agree, every permutation of the
second graph's nodes is tried as an image of the first graph's nodes in id order. This takes
`O(n! * m log m)` time in the worst case and is only meant for small graphs;
[`IsomorphismTest::max_nodes`] refuses larger inputs instead of running forever.

# Example
```
use lgraphs::{prelude::*, algo::*};

let a = UndirectedGraph::from_adjacency([(1, vec![2, 3]), (2, vec![1, 3]), (3, vec![1, 2])]);
let b = UndirectedGraph::from_adjacency([
    ('x', vec!['y', 'z']),
    ('y', vec!['x', 'z']),
    ('z', vec!['x', 'y']),
]);

assert!(a.is_isomorphic_to(&b).unwrap());
assert!(
    IsomorphismTest::new()
        .max_nodes(Some(2))
        .test_labelled(&a, &b)
        .is_err()
);
```
*/

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Isomorphism checks between dense graphs of the same orientation
pub trait Isomorphism: AdjacencyList + GraphEdgeOrder + GraphType {
    /// Returns *true* if there exists an adjacency-preserving bijection from `self` onto `other`
    fn is_isomorphic_to<G>(&self, other: &G) -> bool
    where
        G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Self::Dir>,
    {
        self.find_isomorphism(other).is_some()
    }

    /// Returns the first adjacency-preserving bijection found, where entry `u` is the image of
    /// node `u` in `other`
    fn find_isomorphism<G>(&self, other: &G) -> Option<Vec<Node>>
    where
        G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Self::Dir>;
}

impl<A> Isomorphism for A
where
    A: AdjacencyList + GraphEdgeOrder + GraphType,
{
    fn find_isomorphism<G>(&self, other: &G) -> Option<Vec<Node>>
    where
        G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Self::Dir>,
    {
        if structural_mismatch(self, other).is_some() {
            return None;
        }
        exhaustive_search(self, other)
    }
}

/// Configurable brute-force isomorphism test
#[derive(Debug, Clone, Copy, Default)]
pub struct IsomorphismTest {
    max_nodes: Option<usize>,
}

impl IsomorphismTest {
    /// Creates a test without a size limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the exhaustive search to graphs with at most `limit` nodes (`None`: unbounded).
    /// Pairs rejected by the invariant checks are answered regardless of the limit.
    pub fn set_max_nodes(&mut self, limit: Option<usize>) {
        self.max_nodes = limit;
    }

    /// Limits the exhaustive search to graphs with at most `limit` nodes (`None`: unbounded)
    pub fn max_nodes(mut self, limit: Option<usize>) -> Self {
        self.set_max_nodes(limit);
        self
    }

    /// Returns *true* if `a` and `b` are isomorphic.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyNodes`] if the exhaustive search would exceed the limit.
    pub fn test<A, B>(&self, a: &A, b: &B) -> Result<bool>
    where
        A: AdjacencyList + GraphEdgeOrder + GraphType,
        B: AdjacencyList + GraphEdgeOrder + GraphType<Dir = A::Dir>,
    {
        Ok(self.find_mapping(a, b)?.is_some())
    }

    /// Like [`IsomorphismTest::test`], but returns the bijection: entry `u` is the image of `u`
    pub fn find_mapping<A, B>(&self, a: &A, b: &B) -> Result<Option<Vec<Node>>>
    where
        A: AdjacencyList + GraphEdgeOrder + GraphType,
        B: AdjacencyList + GraphEdgeOrder + GraphType<Dir = A::Dir>,
    {
        if let Some(reason) = structural_mismatch(a, b) {
            debug!(reason, "isomorphism rejected by invariants");
            return Ok(None);
        }

        self.check_limit(a.len())?;
        let mapping = exhaustive_search(a, b);
        debug!(
            nodes = a.number_of_nodes(),
            isomorphic = mapping.is_some(),
            "exhaustive isomorphism search finished"
        );
        Ok(mapping)
    }

    /// Returns *true* if the labelled graphs `a` and `b` are isomorphic.
    ///
    /// # Errors
    /// - [`GraphError::InvalidGraph`] if a graph that passed the invariant checks has a neighbor
    ///   that is not a key,
    /// - [`GraphError::TooManyNodes`] if the exhaustive search would exceed the limit.
    pub fn test_labelled<K1, K2, D>(&self, a: &Graph<K1, D>, b: &Graph<K2, D>) -> Result<bool>
    where
        K1: NodeId,
        K2: NodeId,
        D: GraphDir,
    {
        Ok(self.find_labelled_mapping(a, b)?.is_some())
    }

    /// Like [`IsomorphismTest::test_labelled`], but returns the bijection as pairs
    /// `(key of a, key of b)` in the key order of `a`
    pub fn find_labelled_mapping<K1, K2, D>(
        &self,
        a: &Graph<K1, D>,
        b: &Graph<K2, D>,
    ) -> Result<Option<Vec<(K1, K2)>>>
    where
        K1: NodeId,
        K2: NodeId,
        D: GraphDir,
    {
        // labelled graphs answer the invariants without resolving their labels
        if let Some(reason) = mismatch_of(
            [a.number_of_nodes(), b.number_of_nodes()],
            [a.number_of_edges(), b.number_of_edges()],
            || [a.degree_sequence(), b.degree_sequence()],
        ) {
            debug!(reason, "isomorphism rejected by invariants");
            return Ok(None);
        }

        let dense_a = a.to_adj_graph()?;
        let dense_b = b.to_adj_graph()?;

        Ok(self.find_mapping(&dense_a, &dense_b)?.map(|mapping| {
            mapping
                .into_iter()
                .enumerate()
                .map(|(u, v)| (a.label_of(u as Node).clone(), b.label_of(v).clone()))
                .collect_vec()
        }))
    }

    fn check_limit(&self, nodes: usize) -> Result<()> {
        match self.max_nodes {
            Some(limit) if nodes > limit => Err(GraphError::TooManyNodes { nodes, limit }),
            _ => Ok(()),
        }
    }
}

/// Returns a description of the first invariant in which `a` and `b` differ
fn structural_mismatch<A, B>(a: &A, b: &B) -> Option<&'static str>
where
    A: AdjacencyList + GraphEdgeOrder,
    B: AdjacencyList + GraphEdgeOrder,
{
    mismatch_of(
        [a.number_of_nodes(), b.number_of_nodes()],
        [a.number_of_edges(), b.number_of_edges()],
        || [a.degree_sequence(), b.degree_sequence()],
    )
}

fn mismatch_of<F>(
    [nodes_a, nodes_b]: [NumNodes; 2],
    [edges_a, edges_b]: [NumEdges; 2],
    degree_sequences: F,
) -> Option<&'static str>
where
    F: FnOnce() -> [Vec<NumNodes>; 2],
{
    if nodes_a != nodes_b {
        return Some("number of nodes differs");
    }
    if edges_a != edges_b {
        return Some("number of edges differs");
    }

    let [degrees_a, degrees_b] = degree_sequences();
    (degrees_a != degrees_b).then_some("degree sequences differ")
}

/// Tries every permutation of the nodes of `b` as image of the nodes of `a` (in id order).
/// Both graphs must have the same number of nodes.
fn exhaustive_search<A, B>(a: &A, b: &B) -> Option<Vec<Node>>
where
    A: AdjacencyList,
    B: AdjacencyList,
{
    debug_assert_eq!(a.number_of_nodes(), b.number_of_nodes());

    let targets = b
        .vertices()
        .map(|v| b.neighbors_of(v).sorted_unstable().collect_vec())
        .collect_vec();

    let mut image = Vec::new();
    b.vertices()
        .permutations(b.len())
        .enumerate()
        .find_map(|(i, mapping)| {
            trace!(candidate = i, "checking bijection");
            preserves_adjacency(a, &targets, &mapping, &mut image).then_some(mapping)
        })
}

/// Checks that for every node `u` of `a`, the sorted image of its neighbors equals `targets` of
/// the image of `u`. `image` is scratch space.
fn preserves_adjacency<A: AdjacencyList>(
    a: &A,
    targets: &[Vec<Node>],
    mapping: &[Node],
    image: &mut Vec<Node>,
) -> bool {
    a.vertices().all(|u| {
        image.clear();
        image.extend(a.neighbors_of(u).map(|v| mapping[v as usize]));
        image.sort_unstable();
        *image == targets[mapping[u as usize] as usize]
    })
}

impl<K1: NodeId, D: GraphDir> Graph<K1, D> {
    /// Returns *true* if there is an adjacency-preserving bijection from this graph onto `other`.
    /// Runs [`IsomorphismTest`] without a size limit.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidGraph`] if a graph that passed the invariant checks has a
    /// neighbor that is not a key.
    pub fn is_isomorphic_to<K2: NodeId>(&self, other: &Graph<K2, D>) -> Result<bool> {
        IsomorphismTest::new().test_labelled(self, other)
    }

    /// Returns the first adjacency-preserving bijection found as `(key of self, key of other)`
    /// pairs in the key order of `self`
    pub fn find_isomorphism<K2: NodeId>(
        &self,
        other: &Graph<K2, D>,
    ) -> Result<Option<Vec<(K1, K2)>>> {
        IsomorphismTest::new().find_labelled_mapping(self, other)
    }
}

#[cfg(test)]
mod test {
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    fn triangle_numbers() -> UndirectedGraph<u32> {
        UndirectedGraph::from_adjacency([(1, vec![2, 3]), (2, vec![1, 3]), (3, vec![1, 2])])
    }

    fn triangle_letters() -> UndirectedGraph<char> {
        UndirectedGraph::from_adjacency([
            ('x', vec!['y', 'z']),
            ('y', vec!['x', 'z']),
            ('z', vec!['x', 'y']),
        ])
    }

    /// Relabels node `u` as `perm[u]`
    fn relabel<D: GraphDir>(graph: &AdjGraph<D>, perm: &[Node]) -> AdjGraph<D> {
        let mut nbs = vec![Vec::new(); graph.len()];
        for u in graph.vertices() {
            nbs[perm[u as usize] as usize] = graph
                .neighbors_of(u)
                .map(|v| perm[v as usize])
                .collect_vec();
        }
        AdjGraph::from_neighbor_lists(nbs)
    }

    fn is_valid_mapping<D: GraphDir>(a: &AdjGraph<D>, b: &AdjGraph<D>, mapping: &[Node]) -> bool {
        mapping.iter().all_unique()
            && a.vertices().all(|u| {
                let image = a
                    .neighbors_of(u)
                    .map(|v| mapping[v as usize])
                    .sorted()
                    .collect_vec();
                image == b.neighbors_of(mapping[u as usize]).sorted().collect_vec()
            })
    }

    #[test]
    fn relabelled_triangles() {
        assert!(triangle_numbers().is_isomorphic_to(&triangle_letters()).unwrap());
        assert!(triangle_letters().is_isomorphic_to(&triangle_numbers()).unwrap());

        let mapping = triangle_numbers()
            .find_isomorphism(&triangle_letters())
            .unwrap()
            .unwrap();
        assert_eq!(mapping.iter().map(|(k, _)| *k).collect_vec(), vec![1, 2, 3]);
        assert!(mapping.iter().map(|(_, l)| *l).all_unique());
    }

    #[test]
    fn star_and_path_differ_in_degrees() {
        let mut star = AdjArrayUndir::new(4);
        star.connect_star(0, 1..4);
        let mut path = AdjArrayUndir::new(4);
        path.connect_path(0..4);

        assert_eq!(star.number_of_edges(), path.number_of_edges());
        assert_eq!(structural_mismatch(&star, &path), Some("degree sequences differ"));
        assert!(!star.is_isomorphic_to(&path));

        // rejected by the invariants before the limit is considered
        assert_eq!(
            IsomorphismTest::new().max_nodes(Some(1)).test(&star, &path),
            Ok(false)
        );
    }

    #[test]
    fn same_degrees_but_not_isomorphic() {
        // a 6-cycle and two triangles are both 2-regular with six edges
        let mut cycle = AdjArrayUndir::new(6);
        cycle.connect_cycle(0..6);
        let mut triangles = AdjArrayUndir::new(6);
        triangles.connect_cycle(0..3);
        triangles.connect_cycle(3..6);

        assert_eq!(structural_mismatch(&cycle, &triangles), None);
        assert!(!cycle.is_isomorphic_to(&triangles));
        assert!(!triangles.is_isomorphic_to(&cycle));
    }

    #[test]
    fn directed_orientation_matters() {
        // two 2-cycles vs one 4-cycle: all out-degrees are 1
        let pairs = AdjArray::from_edges(4, [(0, 1), (1, 0), (2, 3), (3, 2)]);
        let mut cycle = AdjArray::new(4);
        cycle.connect_cycle(0..4);
        assert!(!pairs.is_isomorphic_to(&cycle));

        let forward = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
        let backward = AdjArray::from_edges(3, [(2, 1), (1, 0)]);
        assert_eq!(forward.find_isomorphism(&backward), Some(vec![2, 1, 0]));

        let out_star = AdjArray::from_edges(3, [(0, 1), (0, 2)]);
        let in_star = AdjArray::from_edges(3, [(1, 0), (2, 0)]);
        assert!(!out_star.is_isomorphic_to(&in_star));
    }

    #[test]
    fn multiplicities_and_loops() {
        let a = AdjArrayUndir::from_edges(3, [(0, 1), (0, 1), (1, 2), (2, 2)]);
        let b = AdjArrayUndir::from_edges(3, [(1, 2), (2, 1), (0, 2), (0, 0)]);
        let c = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (1, 2), (2, 2)]);

        assert!(a.is_isomorphic_to(&b));
        assert!(!a.is_isomorphic_to(&c));
    }

    #[test]
    fn reflexive_and_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..20 {
            let a = AdjArrayUndir::gnp_no_loops(rng, 6, 0.5);
            let b = AdjArrayUndir::gnp_no_loops(rng, 6, 0.5);

            assert!(a.is_isomorphic_to(&a));
            assert_eq!(a.is_isomorphic_to(&b), b.is_isomorphic_to(&a));

            let a = AdjArray::gnp(rng, 5, 0.4);
            let b = AdjArray::gnp(rng, 5, 0.4);
            assert!(a.is_isomorphic_to(&a));
            assert_eq!(a.is_isomorphic_to(&b), b.is_isomorphic_to(&a));
        }
    }

    #[test]
    fn random_relabelling_is_isomorphic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for _ in 0..10 {
            let graph = AdjArrayUndir::gnp(rng, 7, 0.4);
            let mut perm = graph.vertices().collect_vec();
            perm.shuffle(rng);
            let relabelled = relabel(&graph, &perm);

            let mapping = graph.find_isomorphism(&relabelled).unwrap();
            assert!(is_valid_mapping(&graph, &relabelled, &mapping));

            let graph = AdjArray::gnp(rng, 6, 0.3);
            let mut perm = graph.vertices().collect_vec();
            perm.shuffle(rng);
            let relabelled = relabel(&graph, &perm);

            let mapping = graph.find_isomorphism(&relabelled).unwrap();
            assert!(is_valid_mapping(&graph, &relabelled, &mapping));
        }
    }

    #[test]
    fn labelled_relabelling() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph = Graph::from_adj_graph(&AdjArray::gnp(rng, 6, 0.4));
        let renamed = graph.map_labels(|&u| format!("node{u}"));

        assert!(graph.is_isomorphic_to(&renamed).unwrap());
        assert!(renamed.is_isomorphic_to(&graph).unwrap());
    }

    #[test]
    fn empty_graphs() {
        assert!(AdjArray::new(0).is_isomorphic_to(&AdjArray::new(0)));
        assert!(
            DirectedGraph::<u8>::new()
                .is_isomorphic_to(&DirectedGraph::<&str>::new())
                .unwrap()
        );
    }

    #[test]
    fn size_limit() {
        let mut a = AdjArrayUndir::new(4);
        a.connect_clique(0..4);
        let b = a.clone();

        assert_eq!(
            IsomorphismTest::new().max_nodes(Some(3)).test(&a, &b),
            Err(GraphError::TooManyNodes { nodes: 4, limit: 3 })
        );
        assert_eq!(IsomorphismTest::new().max_nodes(Some(4)).test(&a, &b), Ok(true));

        let mut test = IsomorphismTest::new().max_nodes(Some(3));
        test.set_max_nodes(None);
        assert_eq!(test.find_mapping(&a, &b), Ok(Some(vec![0, 1, 2, 3])));

        let test = IsomorphismTest::new().max_nodes(Some(3)).max_nodes(None);
        assert_eq!(test.test(&a, &b), Ok(true));
    }

    #[test]
    fn dangling_reference() {
        // both graphs pass the invariants, only the first one is malformed
        let a = DirectedGraph::from_adjacency([(1, vec![2]), (2, vec![3])]);
        let b = DirectedGraph::from_adjacency([('x', vec!['y']), ('y', vec!['x'])]);

        assert_eq!(
            a.is_isomorphic_to(&b),
            Err(GraphError::InvalidGraph {
                node: "2".into(),
                neighbor: "3".into()
            })
        );

        // invariant mismatches are answered without resolving labels
        let c = DirectedGraph::from_adjacency([('x', vec!['y']), ('y', vec![])]);
        assert_eq!(a.is_isomorphic_to(&c), Ok(false));
    }
}
