/*!
# Utilities

Helper structures shared by the algorithms. Currently this is the union-find arena
[`DisjointSets`] that backs edge contraction.
*/

pub mod union_find;

pub use union_find::DisjointSets;
