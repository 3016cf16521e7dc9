//! Construction and initialization logic for BTree and nodes.
//!
//! This module contains construction, minimum-degree validation, and
//! default implementations.

use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, Node, MIN_DEGREE};

/// Default minimum degree for B-trees created without an explicit degree.
pub const DEFAULT_MIN_DEGREE: usize = 8;

impl<K> BTree<K> {
    /// Create an empty B-tree with minimum degree `t`.
    ///
    /// Each node will hold at most `2t - 1` keys, and every node except the
    /// root will hold at least `t - 1`.
    ///
    /// # Arguments
    ///
    /// * `t` - Minimum branching degree (at least 2)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the degree is valid, `Err(BTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i32>::new(3).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// assert!(BTree::<i32>::new(1).is_err());
    /// ```
    pub fn new(t: usize) -> InitResult<Self> {
        if t < MIN_DEGREE {
            return Err(BTreeError::invalid_degree(t, MIN_DEGREE));
        }
        Ok(Self { t, root: None })
    }

    /// Create an empty B-tree with the default minimum degree.
    ///
    /// This is equivalent to calling `new(DEFAULT_MIN_DEGREE)`.
    pub fn with_default_degree() -> InitResult<Self> {
        Self::new(DEFAULT_MIN_DEGREE)
    }
}

impl<K> Node<K> {
    /// Creates an empty node of the given degree and leaf-ness with its
    /// key and child slots pre-allocated to their fixed capacities.
    pub(crate) fn new(t: usize, leaf: bool) -> Self {
        Self {
            t,
            leaf,
            keys: Vec::with_capacity(2 * t - 1),
            children: if leaf {
                Vec::new()
            } else {
                Vec::with_capacity(2 * t)
            },
        }
    }
}

impl<K> Default for BTree<K> {
    /// Create an empty B-tree with the default minimum degree.
    fn default() -> Self {
        Self {
            t: DEFAULT_MIN_DEGREE,
            root: None,
        }
    }
}
