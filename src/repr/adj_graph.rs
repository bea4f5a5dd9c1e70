/*!
# Dense Adjacency Arrays

[`AdjGraph`] stores one `Vec<Node>` per node. It is the representation all algorithms of this
crate run on: labelled graphs are resolved into it before a computation starts.

- Parallel edges are kept as repeated entries; their multiplicity is significant.
- Undirected edges are stored at both endpoints. A self-loop `(u, u)` therefore appears twice in
  the neighborhood of `u` and contributes `2` to its degree.
*/

use std::marker::PhantomData;

use super::*;

/// A (multi-)graph over nodes `0..n` represented by adjacency arrays.
///
/// # Type parameters
/// - `D`: [`Directed`] or [`Undirected`]
#[derive(Clone, PartialEq, Eq)]
pub struct AdjGraph<D: GraphDir> {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

/// Directed graph using adjacency arrays
pub type AdjArray = AdjGraph<Directed>;

/// Undirected graph using adjacency arrays
pub type AdjArrayUndir = AdjGraph<Undirected>;

impl<D: GraphDir> AdjGraph<D> {
    /// Builds a graph directly from neighbor lists.
    /// `num_edges` must match the lists (`sum of degrees` for directed graphs, half of it for
    /// undirected ones); this is only checked in debug builds.
    pub(crate) fn from_neighbor_lists(nbs: Vec<Vec<Node>>) -> Self {
        let total: usize = nbs.iter().map(|n| n.len()).sum();
        debug_assert!(nbs.iter().flatten().all(|&v| (v as usize) < nbs.len()));

        let num_edges = if D::DIRECTED { total } else { total / 2 };
        let num_edges = num_edges as NumEdges;
        Self {
            nbs,
            num_edges,
            _dir: PhantomData,
        }
    }
}

impl<D: GraphDir> std::fmt::Debug for AdjGraph<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjGraph")
            .field("directed", &D::DIRECTED)
            .field("nbs", &self.nbs)
            .finish()
    }
}

impl<D: GraphDir> GraphType for AdjGraph<D> {
    type Dir = D;
}

impl<D: GraphDir> GraphNodeOrder for AdjGraph<D> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<D: GraphDir> GraphEdgeOrder for AdjGraph<D> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<D: GraphDir> AdjacencyList for AdjGraph<D> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<D: GraphDir> NeighborsSlice for AdjGraph<D> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl<D: GraphDir> GraphNew for AdjGraph<D> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
            _dir: PhantomData,
        }
    }
}

impl<D: GraphDir> GraphEdgeEditing for AdjGraph<D> {
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!((v as usize) < self.nbs.len(), "Node {v} is out of range");
        self.nbs[u as usize].push(v);
        if !D::DIRECTED {
            self.nbs[v as usize].push(u);
        }
        self.num_edges += 1;
    }
}
