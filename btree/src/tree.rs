//! Tree-level operations for BTree.
//!
//! The tree holds the minimum degree and the optional root, and implements
//! the whole-tree algorithms by delegating to the root node. The two cases
//! only this level can see live here: growing the root when it overflows
//! and collapsing it when it empties.

use crate::error::{BTreeError, ModifyResult};
use crate::types::{BTree, Node};

impl<K> BTree<K> {
    /// The minimum branching degree this tree was created with.
    pub fn min_degree(&self) -> usize {
        self.t
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, Self::len_recursive)
    }

    /// Recursively count keys in a subtree.
    fn len_recursive(node: &Node<K>) -> usize {
        node.keys.len()
            + node
                .children
                .iter()
                .map(|child| Self::len_recursive(child))
                .sum::<usize>()
    }

    /// Number of node levels; 0 for the empty tree.
    ///
    /// All leaves sit at the same depth, so the leftmost spine measures the
    /// whole tree.
    pub fn height(&self) -> usize {
        let mut levels = 0;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            levels += 1;
            cur = if node.leaf {
                None
            } else {
                Some(&node.children[0])
            };
        }
        levels
    }

    /// Remove every key from the tree.
    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl<K: Ord + Clone> BTree<K> {
    // ============================================================================
    // GET OPERATIONS
    // ============================================================================

    /// Returns true if `key` occurs in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert(12);
    /// assert!(tree.contains(&12));
    /// assert!(!tree.contains(&99));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.root
            .as_deref()
            .map_or(false, |root| root.search(key).is_some())
    }

    /// Smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while !node.leaf {
            node = &node.children[0];
        }
        node.keys.first()
    }

    /// Largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while !node.leaf {
            node = &node.children[node.keys.len()];
        }
        node.keys.last()
    }

    /// All keys in ascending order, duplicates included.
    ///
    /// Eagerly collects the whole tree; see [`BTree::iter`] for the lazy
    /// equivalent.
    pub fn traverse(&self) -> Vec<K> {
        let mut out = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.traverse_into(&mut out);
        }
        out
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Insert `key` into the tree.
    ///
    /// Duplicates are kept: inserting a key that is already present adds a
    /// second copy rather than replacing anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert(7);
    /// tree.insert(7);
    /// assert_eq!(tree.traverse(), vec![7, 7]);
    /// ```
    pub fn insert(&mut self, key: K) {
        match self.root.take() {
            None => {
                let mut root = Node::new(self.t, true);
                root.keys.push(key);
                self.root = Some(Box::new(root));
            }
            Some(root) if root.is_full() => {
                // preemptive root growth: the only point where height increases
                let mut new_root = Node::new(self.t, false);
                new_root.children.push(root);
                new_root.split_child(0);
                let idx = if new_root.keys[0] < key { 1 } else { 0 };
                new_root.children[idx].insert_non_full(key);
                self.root = Some(Box::new(new_root));
            }
            Some(mut root) => {
                root.insert_non_full(key);
                self.root = Some(root);
            }
        }
    }

    // ============================================================================
    // DELETE OPERATIONS
    // ============================================================================

    /// Remove one occurrence of `key`, reporting whether anything was
    /// removed. Removing an absent key is a silent no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert(5);
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        match self.root.take() {
            None => false,
            Some(mut root) => {
                let removed = root.remove(key);
                if root.keys.is_empty() {
                    // root emptied: drop the top level, or the whole tree
                    self.root = if root.leaf {
                        None
                    } else {
                        Some(root.children.remove(0))
                    };
                } else {
                    self.root = Some(root);
                }
                removed
            }
        }
    }

    // ============================================================================
    // VALIDATING WRAPPERS
    // ============================================================================

    /// Insert with invariant checking before and after the mutation.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<()> {
        self.check_invariants_detailed()
            .map_err(|e| BTreeError::data_integrity("insert", &e))?;
        self.insert(key);
        self.check_invariants_detailed()
            .map_err(|e| BTreeError::data_integrity("insert", &e))?;
        Ok(())
    }

    /// Remove with invariant checking, reporting an absent key as
    /// [`BTreeError::KeyNotFound`].
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<()> {
        self.check_invariants_detailed()
            .map_err(|e| BTreeError::data_integrity("remove", &e))?;
        if !self.remove(key) {
            return Err(BTreeError::KeyNotFound);
        }
        self.check_invariants_detailed()
            .map_err(|e| BTreeError::data_integrity("remove", &e))?;
        Ok(())
    }
}

impl<K: Ord + Clone> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord + Clone> FromIterator<K> for BTree<K> {
    /// Collect into a tree with the default minimum degree.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}
