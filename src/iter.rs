use std::{ops::Bound, vec};

use crate::node::Node;

/// Iterate over entries in ascending order of keys, returned by
/// [`Llrb::iter`] and [`Llrb::range`].
///
/// Entries are cloned in batches of [`Llrb::batch_size`], every batch
/// is collected by a fresh descent from the root, skipping keys already
/// returned.
///
/// [`Llrb::iter`]: crate::Llrb::iter
/// [`Llrb::range`]: crate::Llrb::range
/// [`Llrb::batch_size`]: crate::Llrb::batch_size
pub struct Range<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    root: Option<&'a Node<K, V>>,
    batch: vec::IntoIter<(K, V)>,
    low: Option<Bound<K>>, // None once the iteration is exhausted.
    high: Bound<K>,
    limit: usize,
}

impl<'a, K, V> Range<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    pub(crate) fn new(
        root: Option<&'a Node<K, V>>,
        low: Bound<K>,
        high: Bound<K>,
        limit: usize,
    ) -> Range<'a, K, V> {
        Range {
            root,
            batch: vec![].into_iter(),
            low: Some(low),
            high,
            limit,
        }
    }

    /// Turn this into a descending iterator over entries of this range
    /// that are not yet returned. An exhausted Range stays exhausted.
    pub fn rev(mut self) -> Reverse<'a, K, V> {
        // buffered entries are not yet returned, resume from the first.
        let low = match self.batch.next() {
            Some((key, _)) => Some(Bound::Included(key)),
            None => self.low.take(),
        };
        let (high, low) = match low {
            Some(low) => (Some(self.high), low),
            None => (None, Bound::Unbounded),
        };
        Reverse {
            root: self.root,
            batch: vec![].into_iter(),
            high,
            low,
            limit: self.limit,
        }
    }

    fn collect_batch(&self, node: Option<&Node<K, V>>, acc: &mut Vec<(K, V)>) -> bool {
        let node = match node {
            None => return true,
            Some(node) => node,
        };

        let (left, right) = (node.left_deref(), node.right_deref());
        match &self.low {
            Some(Bound::Included(low)) if node.key.lt(low) => {
                return self.collect_batch(right, acc);
            }
            Some(Bound::Excluded(low)) if node.key.le(low) => {
                return self.collect_batch(right, acc);
            }
            _ => (),
        }
        // no need to walk past the upper bound.
        let beyond = match &self.high {
            Bound::Included(high) => node.key.gt(high),
            Bound::Excluded(high) => node.key.ge(high),
            Bound::Unbounded => false,
        };

        if !self.collect_batch(left, acc) || beyond {
            return false;
        }

        acc.push((node.key.clone(), node.value.clone()));
        if acc.len() >= self.limit {
            return false;
        }

        self.collect_batch(right, acc)
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.batch.next() {
            None if self.low.is_some() => {
                let mut acc: Vec<(K, V)> = Vec::with_capacity(self.limit);
                self.collect_batch(self.root, &mut acc);
                self.low = acc.last().map(|x| Bound::Excluded(x.0.clone()));
                self.batch = acc.into_iter();
                self.batch.next()
            }
            None => None,
            item @ Some(_) => item,
        }
    }
}

/// Iterate over entries in descending order of keys, returned by
/// [`Range::rev`] and [`Llrb::reverse`].
///
/// [`Llrb::reverse`]: crate::Llrb::reverse
pub struct Reverse<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    root: Option<&'a Node<K, V>>,
    batch: vec::IntoIter<(K, V)>,
    high: Option<Bound<K>>, // None once the iteration is exhausted.
    low: Bound<K>,
    limit: usize,
}

impl<'a, K, V> Reverse<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn collect_batch(&self, node: Option<&Node<K, V>>, acc: &mut Vec<(K, V)>) -> bool {
        let node = match node {
            None => return true,
            Some(node) => node,
        };

        let (left, right) = (node.left_deref(), node.right_deref());
        match &self.high {
            Some(Bound::Included(high)) if node.key.gt(high) => {
                return self.collect_batch(left, acc);
            }
            Some(Bound::Excluded(high)) if node.key.ge(high) => {
                return self.collect_batch(left, acc);
            }
            _ => (),
        }
        let beyond = match &self.low {
            Bound::Included(low) => node.key.lt(low),
            Bound::Excluded(low) => node.key.le(low),
            Bound::Unbounded => false,
        };

        if !self.collect_batch(right, acc) || beyond {
            return false;
        }

        acc.push((node.key.clone(), node.value.clone()));
        if acc.len() >= self.limit {
            return false;
        }

        self.collect_batch(left, acc)
    }
}

impl<'a, K, V> Iterator for Reverse<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.batch.next() {
            None if self.high.is_some() => {
                let mut acc: Vec<(K, V)> = Vec::with_capacity(self.limit);
                self.collect_batch(self.root, &mut acc);
                self.high = acc.last().map(|x| Bound::Excluded(x.0.clone()));
                self.batch = acc.into_iter();
                self.batch.next()
            }
            None => None,
            item @ Some(_) => item,
        }
    }
}

/// Iterate over keys in ascending order, returned by [`Llrb::keys`]
/// and [`Llrb::keys_between`]. Once exhausted it stays exhausted.
///
/// [`Llrb::keys`]: crate::Llrb::keys
/// [`Llrb::keys_between`]: crate::Llrb::keys_between
pub struct Keys<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    range: Range<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    pub(crate) fn new(range: Range<'a, K, V>) -> Keys<'a, K, V> {
        Keys { range }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|(key, _)| key)
    }
}
