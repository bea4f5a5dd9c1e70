/*!
# Graph Representations

- [`Graph`] (aliases [`UndirectedGraph`], [`DirectedGraph`]): labelled adjacency lists keyed by
  any [`NodeId`]. This is what callers build.
- [`AdjGraph`] (aliases [`AdjArray`], [`AdjArrayUndir`]): dense adjacency arrays over nodes
  `0..n`. This is what algorithms run on.

Both are multi-graphs: parallel edges are stored as repeated neighbor entries.
*/

use crate::{edge::*, node::*, ops::*};

mod adj_graph;
mod labelled;

pub use adj_graph::*;
pub use labelled::*;
