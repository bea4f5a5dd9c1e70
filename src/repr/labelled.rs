/*!
# Labelled Adjacency Lists

[`Graph`] is a mapping from arbitrary node identifiers ([`NodeId`]) to an ordered sequence of
neighbor identifiers. It is the input type of the algorithm entry points of this crate.

Every key is assigned a dense id ([`Node`]) in insertion order; algorithms resolve the graph into
an [`AdjGraph`] over these ids and translate their results back into labels.

No validation happens on construction: a neighbor sequence may reference a key that does not
exist (a *dangling* reference) and undirected adjacency may be asymmetric if built via
[`Graph::from_adjacency`]. Dangling references are reported as
[`GraphError::InvalidGraph`] once an algorithm resolves the graph; call [`Graph::validate`] to
check eagerly.

# Example
```
use lgraphs::prelude::*;

let mut graph = UndirectedGraph::new();
graph.add_edges([("a", "b"), ("b", "c"), ("a", "b")]);

assert_eq!(graph.number_of_nodes(), 3);
assert_eq!(graph.number_of_edges(), 3);
assert_eq!(graph.neighbors_of(&"a"), Some(&["b", "b"][..]));
assert_eq!(graph.degree_sequence(), vec![1, 2, 3]);
```
*/

use std::marker::PhantomData;

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;
use crate::error::{GraphError, Result};

/// A labelled (multi-)graph stored as adjacency lists.
///
/// # Type parameters
/// - `K`: node identifier
/// - `D`: [`Directed`] or [`Undirected`]
#[derive(Clone)]
pub struct Graph<K: NodeId, D: GraphDir> {
    labels: Vec<K>,
    index: FxHashMap<K, Node>,
    nbs: Vec<Vec<K>>,
    _dir: PhantomData<D>,
}

/// Labelled graph where each edge is stored at both endpoints
pub type UndirectedGraph<K> = Graph<K, Undirected>;

/// Labelled graph where each edge is only stored at its source
pub type DirectedGraph<K> = Graph<K, Directed>;

impl<K: NodeId, D: GraphDir> Default for Graph<K, D> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
            nbs: Vec::new(),
            _dir: PhantomData,
        }
    }
}

impl<K: NodeId, D: GraphDir> Graph<K, D> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with space reserved for `n` nodes
    pub fn with_capacity(n: usize) -> Self {
        Self {
            labels: Vec::with_capacity(n),
            index: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            nbs: Vec::with_capacity(n),
            _dir: PhantomData,
        }
    }

    /// Creates a graph from `(key, neighbors)` pairs without any validation.
    ///
    /// Keys are assigned ids in iteration order. A repeated key replaces the neighbor sequence
    /// given earlier. Neighbors are taken verbatim: undirected adjacency is *not* mirrored and
    /// neighbors need not be keys.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let graph = DirectedGraph::from_adjacency([('A', vec!['B']), ('B', vec!['A', 'C'])]);
    /// assert_eq!(graph.number_of_nodes(), 2);
    /// assert_eq!(graph.number_of_edges(), 3);
    /// assert!(graph.validate().is_err()); // 'C' is not a key
    /// ```
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        N: IntoIterator<Item = K>,
    {
        let adjacency = adjacency.into_iter();
        let mut graph = Self::with_capacity(adjacency.size_hint().0);
        for (key, neighbors) in adjacency {
            let u = graph.add_node(key);
            graph.nbs[u as usize] = neighbors.into_iter().collect();
        }
        graph
    }

    /// Inserts `key` if it is not present yet and returns its id
    pub fn add_node(&mut self, key: K) -> Node {
        if let Some(&u) = self.index.get(&key) {
            return u;
        }

        let u = self.labels.len() as Node;
        self.index.insert(key.clone(), u);
        self.labels.push(key);
        self.nbs.push(Vec::new());
        u
    }

    /// Adds the edge `(u, v)`, inserting missing endpoints.
    /// Existing edges are not checked: adding an edge twice creates a parallel edge.
    ///
    /// For undirected graphs, `v` is appended to the neighbors of `u` and `u` to the neighbors
    /// of `v`; a self-loop thus appears twice in the neighbors of its node.
    pub fn add_edge(&mut self, u: K, v: K) {
        let iu = self.add_node(u.clone());
        let iv = self.add_node(v.clone());

        self.nbs[iu as usize].push(v);
        if !D::DIRECTED {
            self.nbs[iv as usize].push(u);
        }
    }

    /// Adds all edges in the collection
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (K, K)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    /// Returns a copy of this graph where every label `k` is replaced by `f(k)`.
    /// `f` should be injective on the labels of the graph; colliding labels are merged as in
    /// [`Graph::from_adjacency`].
    pub fn map_labels<L, F>(&self, mut f: F) -> Graph<L, D>
    where
        L: NodeId,
        F: FnMut(&K) -> L,
    {
        let mapped = self.labels.iter().map(&mut f).collect_vec();
        let adjacency = self
            .nbs
            .iter()
            .map(|nbs| {
                nbs.iter()
                    .map(|v| match self.id_of(v) {
                        Some(iv) => mapped[iv as usize].clone(),
                        None => f(v),
                    })
                    .collect_vec()
            })
            .collect_vec();

        Graph::from_adjacency(mapped.iter().cloned().zip(adjacency))
    }

    /// Returns all keys in insertion order (i.e. ordered by id)
    pub fn labels(&self) -> &[K] {
        &self.labels
    }

    /// Returns the key with id `u`
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &K {
        &self.labels[u as usize]
    }

    /// Returns the id of `key` if it is a key of the graph
    pub fn id_of(&self, key: &K) -> Option<Node> {
        self.index.get(key).copied()
    }

    /// Returns *true* if `key` is a key of the graph
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the neighbor sequence of `key` (with multiplicity) if `key` exists
    pub fn neighbors_of(&self, key: &K) -> Option<&[K]> {
        self.id_of(key).map(|u| self.nbs[u as usize].as_slice())
    }

    /// Returns the (out-)degree of `key` if `key` exists
    pub fn degree_of(&self, key: &K) -> Option<NumNodes> {
        self.neighbors_of(key).map(|nbs| nbs.len() as NumNodes)
    }

    /// Returns an iterator over the degrees of all nodes in insertion order
    pub fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.nbs.iter().map(|nbs| nbs.len() as NumNodes)
    }

    /// Returns the degrees of all nodes sorted increasingly
    pub fn degree_sequence(&self) -> Vec<NumNodes> {
        self.degrees().sorted_unstable().collect_vec()
    }

    /// Returns an iterator over all `(key, neighbors)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[K])> + '_ {
        self.labels
            .iter()
            .zip(self.nbs.iter().map(|nbs| nbs.as_slice()))
    }

    /// Checks that no neighbor sequence references a missing key and, for undirected graphs,
    /// that every edge is listed at both endpoints with the same multiplicity.
    pub fn validate(&self) -> Result<()> {
        let graph = self.to_adj_graph()?;
        if D::DIRECTED {
            return Ok(());
        }

        for u in graph.vertices() {
            let counts = graph.neighbors_of(u).counts();
            for (v, forward) in counts {
                if v == u {
                    continue;
                }

                let backward = graph.neighbors_of(v).filter(|&w| w == u).count();
                if forward != backward {
                    return Err(GraphError::AsymmetricEdge {
                        u: format!("{:?}", self.label_of(u)),
                        v: format!("{:?}", self.label_of(v)),
                        forward,
                        backward,
                    });
                }
            }
        }

        Ok(())
    }

    /// Resolves all labels into ids.
    /// Node `i` of the returned graph corresponds to `self.label_of(i)`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidGraph`] for the first neighbor that is not a key.
    pub fn to_adj_graph(&self) -> Result<AdjGraph<D>> {
        let nbs = self
            .iter()
            .map(|(u, nbs)| {
                nbs.iter()
                    .map(|v| {
                        self.id_of(v)
                            .ok_or_else(|| GraphError::invalid_graph(u, v))
                    })
                    .collect::<Result<Vec<Node>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AdjGraph::from_neighbor_lists(nbs))
    }
}

impl<D: GraphDir> Graph<Node, D> {
    /// Creates a labelled graph whose labels are the ids of `graph`
    pub fn from_adj_graph(graph: &AdjGraph<D>) -> Self {
        Self::from_adjacency(
            graph
                .vertices()
                .map(|u| (u, graph.as_neighbors_slice(u).to_vec())),
        )
    }
}

impl<K: NodeId, D: GraphDir> GraphType for Graph<K, D> {
    type Dir = D;
}

impl<K: NodeId, D: GraphDir> GraphNodeOrder for Graph<K, D> {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl<K: NodeId, D: GraphDir> GraphEdgeOrder for Graph<K, D> {
    /// Directed: sum of out-degrees. Undirected: sum of degrees halved.
    fn number_of_edges(&self) -> NumEdges {
        let total = self.degrees().map(|d| d as NumEdges).sum::<NumEdges>();
        if D::DIRECTED { total } else { total / 2 }
    }
}

impl<K: NodeId, D: GraphDir> FromIterator<(K, Vec<K>)> for Graph<K, D> {
    fn from_iter<T: IntoIterator<Item = (K, Vec<K>)>>(iter: T) -> Self {
        Self::from_adjacency(iter)
    }
}

impl<K: NodeId, D: GraphDir> std::fmt::Debug for Graph<K, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn triangle() -> UndirectedGraph<u32> {
        UndirectedGraph::from_adjacency([(1, vec![2, 3]), (2, vec![1, 3]), (3, vec![1, 2])])
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut graph = DirectedGraph::new();
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.add_node("y"), 1);
        assert_eq!(graph.add_node("x"), 0);

        graph.add_edge("z", "x");
        assert_eq!(graph.labels(), &["x", "y", "z"]);
        assert_eq!(graph.id_of(&"z"), Some(2));
        assert_eq!(graph.label_of(1), &"y");
        assert!(!graph.contains(&"w"));
    }

    #[test]
    fn edge_counts() {
        let graph = triangle();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.degree_sequence(), vec![2, 2, 2]);

        let mut graph = DirectedGraph::new();
        graph.add_edges([(0, 1), (1, 0), (1, 2), (1, 2)]);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.degree_of(&1), Some(3));
        assert_eq!(graph.degree_of(&2), Some(0));
        assert_eq!(graph.degree_of(&7), None);
    }

    #[test]
    fn undirected_self_loop_counts_twice() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge('a', 'a');
        graph.add_edge('a', 'b');

        assert_eq!(graph.neighbors_of(&'a'), Some(&['a', 'a', 'b'][..]));
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn repeated_key_replaces_neighbors() {
        let graph = DirectedGraph::from_adjacency([(0, vec![1]), (1, vec![]), (0, vec![])]);
        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn clone_is_deep() {
        let graph = triangle();
        let mut copy = graph.clone();
        copy.add_edge(1, 4);

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(copy.number_of_nodes(), 4);
        assert_eq!(graph.neighbors_of(&1), Some(&[2, 3][..]));
    }

    #[test]
    fn validate_reports_dangling_reference() {
        let graph = DirectedGraph::from_adjacency([("A", vec!["B"]), ("B", vec!["Q"])]);
        assert_eq!(
            graph.validate(),
            Err(GraphError::InvalidGraph {
                node: "\"B\"".into(),
                neighbor: "\"Q\"".into()
            })
        );
        assert!(graph.to_adj_graph().is_err());
    }

    #[test]
    fn validate_reports_asymmetry() {
        let graph = UndirectedGraph::from_adjacency([(0, vec![1, 1]), (1, vec![0])]);
        assert_eq!(
            graph.validate(),
            Err(GraphError::AsymmetricEdge {
                u: "0".into(),
                v: "1".into(),
                forward: 2,
                backward: 1
            })
        );

        // the same lists are fine for a directed graph
        let graph = DirectedGraph::from_adjacency([(0, vec![1, 1]), (1, vec![0])]);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn to_adj_graph_preserves_structure() {
        let graph = UndirectedGraph::from_adjacency([
            ('A', vec!['B', 'C', 'D']),
            ('B', vec!['A', 'C', 'D']),
            ('C', vec!['A', 'B', 'D']),
            ('D', vec!['A', 'B', 'C']),
        ]);

        let adj = graph.to_adj_graph().unwrap();
        assert_eq!(adj.number_of_nodes(), 4);
        assert_eq!(adj.number_of_edges(), 6);
        assert_eq!(adj.as_neighbors_slice(2), &[0, 1, 3]);

        let back = Graph::from_adj_graph(&adj);
        assert_eq!(back.labels(), &[0, 1, 2, 3]);
        assert_eq!(back.neighbors_of(&3), Some(&[0, 1, 2][..]));
    }

    #[test]
    fn map_labels_relabels_neighbors() {
        let graph = triangle().map_labels(|&u| format!("v{u}"));
        assert_eq!(graph.labels(), &["v1", "v2", "v3"]);
        assert_eq!(
            graph.neighbors_of(&"v2".to_string()),
            Some(&["v1".to_string(), "v3".to_string()][..])
        );
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn collect_from_pairs() {
        let graph: DirectedGraph<&str> = [("a", vec!["b"]), ("b", vec![])].into_iter().collect();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(format!("{graph:?}"), "{\"a\": [\"b\"], \"b\": []}");
    }
}
