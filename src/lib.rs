/*!
`lgraphs` is a small graph library providing three classical algorithms on adjacency-list graphs:
- a randomized **minimum cut** estimator (Karger's edge contraction),
- a **strongly connected components** decomposer (Tarjan's single-pass DFS),
- a brute-force **isomorphism** test for small graphs.

# Representation

Callers describe graphs as [`Graph<K, D>`](crate::repr::Graph): a mapping from node identifiers
of any hashable type `K` to an ordered sequence of neighbor identifiers. Parallel edges are
repeated entries and count with their multiplicity.

Internally, algorithms work on [`AdjGraph<D>`](crate::repr::AdjGraph) with **nodes** represented
as `u32` in the range `0..n`; node `i` is the `i`-th inserted label. For **edges**, we use a
simple tuple-struct `Edge(Node, Node)`.

### Directed vs Undirected

The marker `D` is either [`Directed`](crate::ops::Directed) or
[`Undirected`](crate::ops::Undirected):

- In an **undirected** graph, every edge is listed at both endpoints (a self-loop twice at its node).
- In a **directed** graph, the edge is only listed at its source.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using either
the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
The most commonly used functionalities are also implemented via traits on dense graphs and as
inherent methods on labelled graphs, making them usable without configuring the algorithm
beforehand.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all graph representations,
- [`algo`] includes the algorithms, both as configurable structs and as traits implemented on graphs,
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/cliques,
- [`utils`] includes helper structures such as the union-find arena [`DisjointSets`](crate::utils::DisjointSets).

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let mut graph = UndirectedGraph::new();
graph.add_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);

let rng = &mut Pcg64Mcg::seed_from_u64(1);
assert_eq!(lgraphs::estimate_min_cut(&graph, 50, rng), Ok(1));
```

# Logging

Algorithms emit `tracing` events (`debug` per call, `trace` per trial or component). The library
never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

pub use algo::{are_isomorphic, estimate_min_cut, strongly_connected_components};

/// `lgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
