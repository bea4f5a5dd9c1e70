use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Strongly connected components of directed graphs
pub trait Connectivity: AdjacencyList + NeighborsSlice + GraphType<Dir = Directed> {
    /// Returns an iterator over the strongly connected components of the graph.
    /// Nodes not on any cycle are returned as singleton components.
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self>;

    /// Like [`Connectivity::strongly_connected_components`], but includes components of size 1
    /// if and only if the node has a self-loop
    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self>;

    /// Returns the index of the component of each node, with components numbered in the order
    /// they are emitted by [`Connectivity::strongly_connected_components`]
    fn partition_into_strongly_connected_components(&self) -> Vec<Option<Node>> {
        self.strongly_connected_components().into_partition()
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + NeighborsSlice + GraphType<Dir = Directed>,
{
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }

    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self).include_singletons(false)
    }
}

/// Implementation of Tarjan's Algorithm for Strongly Connected Components.
///
/// It is designed as an iterator that emits the nodes of one strongly connected component at a
/// time. Nodes of a component are emitted in the order they are popped from the traversal stack,
/// so the last node of each component is the node at which the component was discovered. The
/// components themselves come out in reverse topological order of the condensation.
///
/// Traversals start at unvisited nodes in increasing id order.
pub struct StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    graph: &'a G,
    idx: Node,

    states: Vec<NodeState>,
    potentially_unvisited: usize,

    include_singletons: bool,

    path_stack: Vec<Node>,

    call_stack: Vec<StackFrame>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            idx: 0,
            states: vec![Default::default(); graph.len()],
            potentially_unvisited: 0,

            include_singletons: true,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Each node that is not part of a cycle is returned as its own component.
    /// By setting `include = false`, those nodes are not returned.
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Consumes the iterator and returns the index of the component of each node.
    /// Nodes of skipped singletons are `None`.
    pub fn into_partition(self) -> Vec<Option<Node>> {
        let mut partition = vec![None; self.graph.len()];
        for (class, component) in self.enumerate() {
            for u in component {
                partition[u as usize] = Some(class as Node);
            }
        }
        partition
    }

    /// We need to visit each node at least once. The first traversal starts at node 0 and covers
    /// everything reachable from it; afterwards we continue at the smallest untouched node.
    fn next_unvisited_node(&mut self) -> Option<Node> {
        while self.potentially_unvisited < self.graph.len() {
            if !self.states[self.potentially_unvisited].visited {
                let v = self.potentially_unvisited as Node;
                self.push_node(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Put a pristine stack frame on the call stack; the equivalent of a recursive call
    fn push_node(&mut self, node: Node, parent: Option<Node>) {
        self.call_stack.push(StackFrame {
            node,
            parent: parent.unwrap_or(node),
            initial_stack_len: 0,
            next_neighbor: 0,
            first_call: true,
            has_loop: false,
        });
    }

    fn search(&mut self) -> Option<Vec<Node>> {
        /*
        Tarjan's algorithm is usually stated recursively. Recursion neither lets us pause after
        each component nor survives deep graphs, so `self.call_stack` simulates the calls. A frame
        records the node, its DFS parent and the position of the next neighbor to inspect. On the
        first visit a node receives its discovery index, which is also its initial low_link. All
        nodes of a component end with the low_link of its root, the unique member whose index
        equals its low_link.

        All state lives in `self`, so we may return a component and resume later by reentering.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len() as NumNodes;

                self.states[v as usize].visit(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            let graph = self.graph;
            let neighbors = graph.as_neighbors_slice(v);
            while let Some(&w) = neighbors.get(frame.next_neighbor as usize) {
                frame.next_neighbor += 1;

                let w_state = self.states[w as usize];
                frame.has_loop |= w == v;

                if !w_state.visited {
                    self.push_node(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[v as usize].try_lower_link(w_state.index);
                }
            }

            let Some(frame) = self.call_stack.pop() else {
                break;
            };
            let state = self.states[v as usize];

            self.states[frame.parent as usize].try_lower_link(state.low_link);

            if !state.is_root() {
                continue;
            }

            let start = frame.initial_stack_len as usize;
            if !self.include_singletons && self.path_stack.len() == start + 1 && !frame.has_loop {
                // trivial component: still needs to leave the stack
                self.states[v as usize].on_stack = false;
                self.path_stack.pop();
                continue;
            }

            let component = self.path_stack.drain(start..).rev().collect_vec();
            for &w in &component {
                self.states[w as usize].on_stack = false;
            }

            debug_assert_eq!(component.last(), Some(&v));
            trace!(root = v, size = component.len(), "component completed");

            return Some(component);
        }

        None
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    type Item = Vec<Node>;

    /// Returns either a vector of node ids that form an SCC or None if no further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: AdjacencyList + NeighborsSlice {}

#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: Node,
    parent: Node,
    initial_stack_len: NumNodes,
    next_neighbor: NumNodes,
    first_call: bool,
    has_loop: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    visited: bool,
    on_stack: bool,
    index: Node,
    low_link: Node,
}

impl NodeState {
    fn visit(&mut self, u: Node) {
        debug_assert!(!self.visited);
        self.index = u;
        self.low_link = u;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: Node) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

impl<K: NodeId> Graph<K, Directed> {
    /// Decomposes the graph into its strongly connected components, given by label.
    ///
    /// Components and the nodes within them are ordered as described for
    /// [`StronglyConnectedComponents`]; with labels inserted in traversal order, callers should
    /// only rely on the components being maximal and partitioning the keys.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidGraph`] if a neighbor is not a key of the graph.
    ///
    /// # Example
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let graph = DirectedGraph::from_adjacency([
    ///     ('A', vec!['B']),
    ///     ('B', vec!['C']),
    ///     ('C', vec!['A']),
    /// ]);
    /// let sccs = graph.strongly_connected_components().unwrap();
    /// assert_eq!(sccs, vec![vec!['C', 'B', 'A']]);
    /// ```
    pub fn strongly_connected_components(&self) -> Result<Vec<Vec<K>>> {
        let graph = self.to_adj_graph()?;
        let components = graph
            .strongly_connected_components()
            .map(|component| {
                component
                    .into_iter()
                    .map(|u| self.label_of(u).clone())
                    .collect_vec()
            })
            .collect_vec();

        debug!(
            nodes = graph.number_of_nodes(),
            components = components.len(),
            "strongly connected components computed"
        );
        Ok(components)
    }
}
