use std::{
    borrow::Borrow,
    cmp::{self, Ordering},
    ops::Bound,
};

use rand::Rng;

use crate::error::Error;
use crate::iter::{Keys, Range, Reverse};
use crate::llrb::Llrb;
use crate::node::{size, Node};

/// Read operations on Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root_deref();
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some(&nref.value),
            };
        }
        None
    }

    /// Check whether key is present in this instance.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Return the smallest key.
    pub fn min(&self) -> Result<&K, Error> {
        let mut node = self.root_deref().ok_or_else(|| self.empty("min()"))?;
        while let Some(left) = node.left_deref() {
            node = left
        }
        Ok(&node.key)
    }

    /// Return the largest key.
    pub fn max(&self) -> Result<&K, Error> {
        let mut node = self.root_deref().ok_or_else(|| self.empty("max()"))?;
        while let Some(right) = node.right_deref() {
            node = right
        }
        Ok(&node.key)
    }

    /// Return the largest key less than or equal to `key`.
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut node, mut floor) = (self.root_deref(), None);
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Equal => return Some(&nref.key),
                Ordering::Greater => nref.left_deref(),
                Ordering::Less => {
                    floor = Some(&nref.key);
                    nref.right_deref()
                }
            };
        }
        floor
    }

    /// Return the smallest key greater than or equal to `key`.
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut node, mut ceiling) = (self.root_deref(), None);
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Equal => return Some(&nref.key),
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => {
                    ceiling = Some(&nref.key);
                    nref.left_deref()
                }
            };
        }
        ceiling
    }

    /// Return the key of given `rank`, that is, the key with exactly
    /// `rank` keys smaller than itself. `rank` must be in `[0, len())`.
    pub fn select(&self, rank: usize) -> Result<&K, Error> {
        let n = self.len();
        let (mut node, mut rank) = (self.root_deref(), rank);
        if rank >= n {
            let msg = format!("{}: select({}) out of range [0, {})", self.name, rank, n);
            return Err(Error::InvalidArgument(msg));
        }
        while let Some(nref) = node {
            let lsize = size(nref.left_deref());
            node = match rank.cmp(&lsize) {
                Ordering::Less => nref.left_deref(),
                Ordering::Equal => return Ok(&nref.key),
                Ordering::Greater => {
                    rank -= lsize + 1;
                    nref.right_deref()
                }
            };
        }
        // only with broken sub-tree sizes, validate_sizes() will tell.
        let msg = format!("{}: select({}) fell off the tree", self.name, rank);
        Err(Error::InvalidArgument(msg))
    }

    /// Return the number of keys strictly less than `key`.
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut node, mut rank) = (self.root_deref(), 0);
        while let Some(nref) = node {
            node = match key.cmp(nref.key.borrow()) {
                Ordering::Less => nref.left_deref(),
                Ordering::Equal => return rank + size(nref.left_deref()),
                Ordering::Greater => {
                    rank += 1 + size(nref.left_deref());
                    nref.right_deref()
                }
            };
        }
        rank
    }

    /// Return the number of keys between `low` and `high`, both
    /// inclusive.
    pub fn size_between<Q>(&self, low: &Q, high: &Q) -> Result<usize, Error>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if low.cmp(high) == Ordering::Greater {
            let msg = format!("{}: size_between() low > high", self.name);
            return Err(Error::InvalidArgument(msg));
        }
        let n = self.rank(high) - self.rank(low);
        Ok(if self.contains(high) { n + 1 } else { n })
    }

    /// Return the height of the tree, as number of nodes on the longest
    /// path from root to a leaf. Empty tree has height 0.
    pub fn height(&self) -> usize {
        fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
            match node {
                None => 0,
                Some(node) => {
                    let (l, r) = (node.left_deref(), node.right_deref());
                    1 + cmp::max(height(l), height(r))
                }
            }
        }
        height(self.root_deref())
    }

    /// Return a random entry from this index, every entry being
    /// equally likely.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(&K, &V)> {
        if self.is_empty() {
            return None;
        }
        let key = self.select(rng.gen_range(0, self.len())).ok()?;
        self.get(key).map(|value| (key, value))
    }

    /// Return an iterator over all entries in this instance, in
    /// ascending order of keys.
    pub fn iter(&self) -> Range<K, V> {
        self.range::<K, _>(..)
    }

    /// Return an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<K, V> {
        Keys::new(self.iter())
    }

    /// Return an iterator over keys between `low` and `high`, both
    /// inclusive, in ascending order.
    pub fn keys_between<Q>(&self, low: &Q, high: &Q) -> Result<Keys<K, V>, Error>
    where
        K: Borrow<Q>,
        Q: Ord + ToOwned<Owned = K> + ?Sized,
    {
        if low.cmp(high) == Ordering::Greater {
            let msg = format!("{}: keys_between() low > high", self.name);
            return Err(Error::InvalidArgument(msg));
        }
        let range = (Bound::Included(low), Bound::Included(high));
        Ok(Keys::new(self.range::<Q, _>(range)))
    }

    /// Range over all entries from low to high.
    pub fn range<Q, R>(&self, range: R) -> Range<K, V>
    where
        K: Borrow<Q>,
        R: std::ops::RangeBounds<Q>,
        Q: Ord + ToOwned<Owned = K> + ?Sized,
    {
        let low: Bound<K> = match range.start_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };
        let high: Bound<K> = match range.end_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };
        Range::new(self.root_deref(), low, high, self.batch_size)
    }

    /// Range over all entries from high to low.
    pub fn reverse<Q, R>(&self, range: R) -> Reverse<K, V>
    where
        K: Borrow<Q>,
        R: std::ops::RangeBounds<Q>,
        Q: Ord + ToOwned<Owned = K> + ?Sized,
    {
        self.range::<Q, R>(range).rev()
    }

    fn empty(&self, op: &str) -> Error {
        Error::EmptyCollection(format!("{}: {} on empty tree", self.name, op))
    }
}
