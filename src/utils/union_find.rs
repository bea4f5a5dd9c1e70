/*!
# Disjoint Sets

Union-find over nodes `0..n` with union by size and path compression.
Used as the node-identity resolution layer of edge contraction: instead of rewriting every
reference to a merged node, references are resolved through [`DisjointSets::find`].
*/

use crate::node::*;

/// A partition of `0..n` into disjoint sets, each identified by its root node
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    num_sets: NumNodes,
}

impl DisjointSets {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            num_sets: n,
        }
    }

    /// Returns the root of the set containing `u`.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // compress path
        let mut cur = u;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v` and returns the root of the merged set.
    /// Returns `None` if both already share a set.
    pub fn union(&mut self, u: Node, v: Node) -> Option<Node> {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return None;
        }

        let (big, small) = if self.size[ru as usize] >= self.size[rv as usize] {
            (ru, rv)
        } else {
            (rv, ru)
        };

        self.parent[small as usize] = big;
        self.size[big as usize] += self.size[small as usize];
        self.num_sets -= 1;
        Some(big)
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Number of elements in the set containing `u`
    pub fn size_of_set(&mut self, u: Node) -> NumNodes {
        let root = self.find(u);
        self.size[root as usize]
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Returns all members of the set containing `u` in increasing order
    pub fn members_of(&mut self, u: Node) -> Vec<Node> {
        let root = self.find(u);
        (0..self.parent.len() as Node)
            .filter(|&v| self.find(v) == root)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn union_and_find() {
        let mut sets = DisjointSets::new(6);
        assert_eq!(sets.number_of_sets(), 6);

        assert!(sets.union(0, 1).is_some());
        assert!(sets.union(2, 3).is_some());
        assert!(sets.union(1, 0).is_none());
        assert_eq!(sets.number_of_sets(), 4);

        assert!(sets.same_set(0, 1));
        assert!(!sets.same_set(1, 2));

        let root = sets.union(3, 0).unwrap();
        assert_eq!(sets.find(1), root);
        assert_eq!(sets.size_of_set(2), 4);
        assert_eq!(sets.members_of(3), vec![0, 1, 2, 3]);
        assert_eq!(sets.members_of(5), vec![5]);
    }

    #[test]
    fn larger_set_keeps_root() {
        let mut sets = DisjointSets::new(4);
        let root = sets.union(1, 2).unwrap();
        assert_eq!(sets.union(3, 1), Some(root));
        assert_eq!(sets.union(0, 3), Some(root));
    }

    #[test]
    fn long_chain_compresses() {
        let n = 10_000;
        let mut sets = DisjointSets::new(n);
        for u in 1..n {
            sets.union(u - 1, u);
        }
        let root = sets.find(0);
        assert!((0..n).all(|u| sets.find(u) == root));
        assert_eq!(sets.number_of_sets(), 1);
    }
}
