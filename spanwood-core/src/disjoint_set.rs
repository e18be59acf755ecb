//! Union-find (disjoint set union) over a fixed universe of node ids.
//!
//! Kruskal's algorithm uses this structure to detect cycles: two endpoints
//! whose representatives match are already connected. `find` compresses the
//! search path iteratively so adversarial chains cannot grow the stack, and
//! `union` attaches the lower-rank tree beneath the higher-rank one.

use crate::error::DisjointSetError;

/// Partition of `[0, len)` into disjoint sets that only ever merge.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets, each node its own representative.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the size of the universe.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the universe is empty.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently tracked.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node visited on the way is re-pointed directly at the
    /// representative. Set membership never changes.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NodeOutOfRange`] when `node >= len`.
    ///
    /// # Examples
    /// ```
    /// use spanwood_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(3);
    /// assert_eq!(set.find(2)?, 2);
    /// set.union(1, 2)?;
    /// assert_eq!(set.find(2)?, set.find(1)?);
    /// # Ok::<(), spanwood_core::DisjointSetError>(())
    /// ```
    pub fn find(&mut self, node: usize) -> Result<usize, DisjointSetError> {
        self.check(node)?;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != current {
            let parent = self.parent[current];
            self.parent[current] = root;
            current = parent;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `Ok(false)` when both nodes already share a representative.
    /// On equal ranks the representative of `left` becomes the new root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NodeOutOfRange`] when either node is
    /// outside the universe.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (root, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.parent[child] = root;
        if left_rank == right_rank {
            self.rank[root] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NodeOutOfRange`] when either node is
    /// outside the universe.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, node: usize) -> Result<(), DisjointSetError> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::NodeOutOfRange {
                node,
                len: self.parent.len(),
            })
        }
    }

    #[cfg(test)]
    fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }

    #[cfg(test)]
    fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }
}

#[cfg(kani)]
mod kani_proofs {
    //! Bounded proofs for the union-find representative invariants.

    use super::DisjointSet;

    /// After an arbitrary sequence of unions on four nodes, `find` always
    /// returns a self-parented node and joined pairs agree on it.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_union_joins_representatives() {
        let mut set = DisjointSet::new(4);
        for _ in 0..3 {
            let left: usize = kani::any();
            let right: usize = kani::any();
            kani::assume(left < 4 && right < 4);
            set.union(left, right).expect("node is in range");
            let root = set.find(left).expect("node is in range");
            kani::assert(set.parent[root] == root, "representative is self-parented");
            kani::assert(
                set.find(right).expect("node is in range") == root,
                "union must join both nodes",
            );
        }
    }
}
