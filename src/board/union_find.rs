//! Weighted disjoint-set forest over linear cell indices
//!
//! Every cell of the board starts as its own singleton set. Placing a stone
//! merges its set with the sets of same-colored neighbours, so the weight of
//! a root is the size of one island.
//!
//! # Example
//!
//! ```
//! use islands::board::UnionFind;
//!
//! let mut uf = UnionFind::new(9);
//! uf.union(0, 1);
//! uf.union(4, 1);
//!
//! assert!(uf.connected(0, 4));
//! assert_eq!(uf.weight(4), 3);
//! assert_eq!(uf.weight(8), 1);
//! ```

/// Disjoint sets with path halving.
///
/// Only entries of `weight` at root indices are meaningful; the rest go
/// stale as soon as their set is absorbed.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<u32>,
    weight: Vec<u32>,
}

impl UnionFind {
    /// Create `len` singleton sets.
    ///
    /// # Panics
    ///
    /// Panics if `len` does not fit in a `u32`.
    pub fn new(len: usize) -> Self {
        assert!(len <= u32::MAX as usize, "too many cells for the tracker");
        Self {
            parent: (0..len as u32).collect(),
            weight: vec![1; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `i`.
    ///
    /// Each visited node is re-pointed at its grandparent on the way up.
    #[inline]
    pub fn find(&mut self, i: usize) -> usize {
        let mut i = i;
        while self.parent[i] as usize != i {
            let grandparent = self.parent[self.parent[i] as usize];
            self.parent[i] = grandparent;
            i = grandparent as usize;
        }
        i
    }

    /// Merge the sets of `i` and `j`; `j`'s root absorbs `i`'s root.
    ///
    /// Returns false when both were already in the same set.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i == root_j {
            return false;
        }
        self.parent[root_i] = root_j as u32;
        self.weight[root_j] += self.weight[root_i];
        true
    }

    #[inline]
    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// Number of indices in the set containing `i`
    #[inline]
    pub fn weight(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.weight[root] as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(16);
        assert_eq!(uf.len(), 16);
        for i in 0..16 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.weight(i), 1);
        }
    }

    #[test]
    fn test_union_direction() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        // Second argument's root absorbs the first
        assert_eq!(uf.find(0), 1);
        assert_eq!(uf.weight(0), 2);

        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), 3);
        assert_eq!(uf.weight(1), 3);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(1, 2);
        assert!(!uf.union(0, 2));
        assert_eq!(uf.weight(2), 3);
        assert_eq!(uf.weight(3), 1);
    }

    #[test]
    fn test_find_idempotent() {
        let mut uf = UnionFind::new(10);
        for i in 0..9 {
            uf.union(i, i + 1);
        }
        let root = uf.find(0);
        for _ in 0..5 {
            assert_eq!(uf.find(0), root);
        }
        for i in 0..10 {
            assert_eq!(uf.find(i), root);
        }
    }

    #[test]
    fn test_path_halving_shortens_chain() {
        // Build a chain 0 -> 1 -> 2 -> ... -> 7 by always absorbing into a fresh root
        let mut uf = UnionFind::new(8);
        for i in 0..7 {
            uf.union(i, i + 1);
        }
        assert_eq!(depth(&uf, 0), 7);
        assert_eq!(uf.find(0), 7);
        // 0 -> 2 -> 4 -> 6 -> 7
        assert_eq!(depth(&uf, 0), 4);
        assert_eq!(uf.weight(0), 8);
    }

    #[test]
    fn test_weights_match_set_sizes() {
        let mut uf = UnionFind::new(12);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(3, 4);
        uf.union(1, 4);
        uf.union(10, 11);

        for i in 0..12 {
            let root = uf.find(i);
            let members = (0..12).filter(|&j| uf.find(j) == root).count();
            assert_eq!(uf.weight(i), members);
        }
    }

    fn depth(uf: &UnionFind, mut i: usize) -> usize {
        let mut d = 0;
        while uf.parent[i] as usize != i {
            i = uf.parent[i] as usize;
            d += 1;
        }
        d
    }
}
