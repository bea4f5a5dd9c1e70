/*!
# Node Representation

Internally, nodes are dense ids `Node = u32` in the range `0..n`.
This allows us to (1) save space by not using `usize` or `u64` and (2) index per-node state
directly by id in all algorithms.

Labelled graphs ([`Graph`](crate::repr::Graph)) map arbitrary user identifiers onto these ids;
any type implementing [`NodeId`] can be used as such an identifier.
*/

use std::{fmt::Debug, hash::Hash};

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Identifier of a node in a labelled graph.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so `&str`, `String`,
/// integers, tuples, ... can all be used as labels. `Debug` is required to render labels
/// into error messages.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}
