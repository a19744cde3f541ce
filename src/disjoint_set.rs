//! Union-find over dense vertex ids
//!
//! Path compression in [`DisjointSet::find`] and union by rank in
//! [`DisjointSet::union_sets`] keep lookups amortized near O(1). Instances are
//! cheap and meant to be built fresh for every detection run.

/// Parent-pointer forest partitioning `0..len` into disjoint sets
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create a forest where every element is its own root with rank 0
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Return the representative of `node`'s set.
    ///
    /// Every node visited on the way up is re-pointed directly at the root.
    /// Iterative so deep chains cannot exhaust the call stack.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets rooted at `first_root` and `second_root`.
    ///
    /// Both arguments must be representatives returned by [`find`]. The
    /// shorter tree goes under the taller one; on a tie `first_root` wins and
    /// its rank grows by one.
    ///
    /// [`find`]: DisjointSet::find
    pub fn union_sets(&mut self, first_root: usize, second_root: usize) {
        if first_root == second_root {
            return;
        }

        match self.rank[first_root].cmp(&self.rank[second_root]) {
            std::cmp::Ordering::Less => self.parent[first_root] = second_root,
            std::cmp::Ordering::Greater => self.parent[second_root] = first_root,
            std::cmp::Ordering::Equal => {
                self.parent[second_root] = first_root;
                self.rank[first_root] += 1;
            }
        }
    }

    /// Whether `a` and `b` currently share a representative
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_all_singletons() {
        let mut set = DisjointSet::new(4);
        assert_eq!(set.len(), 4);
        for node in 0..4 {
            assert_eq!(set.find(node), node);
        }
    }

    #[test]
    fn test_empty_set() {
        let set = DisjointSet::new(0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_union_connects_roots() {
        let mut set = DisjointSet::new(5);
        let (a, b) = (set.find(1), set.find(3));
        set.union_sets(a, b);

        assert_eq!(set.find(1), set.find(3));
        assert!(set.connected(3, 1));
        assert!(!set.connected(0, 1));
    }

    #[test]
    fn test_equal_rank_tie_prefers_first_root() {
        let mut set = DisjointSet::new(2);
        set.union_sets(1, 0);

        assert_eq!(set.find(0), 1);
        assert_eq!(set.rank[1], 1);
        assert_eq!(set.rank[0], 0);
    }

    #[test]
    fn test_lower_rank_goes_under_higher_rank() {
        let mut set = DisjointSet::new(3);
        set.union_sets(0, 1); // 0 becomes root with rank 1
        set.union_sets(2, 0); // rank(2) = 0 < rank(0) = 1

        assert_eq!(set.find(2), 0);
        assert_eq!(set.rank[0], 1);
    }

    #[test]
    fn test_union_of_same_root_is_noop() {
        let mut set = DisjointSet::new(2);
        set.union_sets(0, 0);

        assert_eq!(set.rank[0], 0);
        assert_eq!(set.find(1), 1);
    }

    #[test]
    fn test_find_compresses_paths() {
        let mut set = DisjointSet::new(4);
        // Build a chain 3 -> 2 -> 1 -> 0 by hand
        set.parent = vec![0, 0, 1, 2];

        assert_eq!(set.find(3), 0);
        assert_eq!(set.parent, vec![0, 0, 0, 0]);
    }
}
