use std::mem;

use log::error;

use crate::depth::Depth;
use crate::error::Violation;
use crate::llrb::Llrb;
use crate::node::{is_red, Node};

/// Structural validation of Llrb instance. Each rule can be checked on
/// its own, [`Llrb::validate`] checks all of them.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Validate LLRB tree with following rules:
    ///
    /// * Keys are in sort order, [`Llrb::validate_bst`].
    /// * Cached sub-tree sizes are correct, [`Llrb::validate_sizes`].
    /// * rank() and select() agree, [`Llrb::validate_ranks`].
    /// * Red links lean left and never come in pairs, [`Llrb::validate_23`].
    /// * Number of blacks from root to any null link is the same,
    ///   [`Llrb::validate_blacks`].
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Violation<K>> {
        let blacks = match self.validate_all() {
            Ok(blacks) => blacks,
            Err(err) => {
                error!("{}: validate failed, tree is broken", self.name);
                return Err(err);
            }
        };

        let mut stats = Stats::new(self.len(), mem::size_of::<Node<K, V>>());
        let mut depths = Depth::new();
        if self.root.is_some() {
            sample_depths(self.root_deref(), 0, &mut depths);
        }
        stats.set_blacks(blacks);
        stats.set_depths(depths);
        Ok(stats)
    }

    fn validate_all(&self) -> Result<usize, Violation<K>> {
        self.validate_bst()?;
        self.validate_sizes()?;
        self.validate_23()?;
        let blacks = self.validate_blacks()?;
        self.validate_ranks()?;
        Ok(blacks)
    }

    /// Every key shall be strictly within the bounds set by its ancestors.
    pub fn validate_bst(&self) -> Result<(), Violation<K>> {
        validate_bst(self.root_deref(), None, None)
    }

    /// For every node, size == 1 + size(left) + size(right).
    pub fn validate_sizes(&self) -> Result<(), Violation<K>> {
        validate_sizes(self.root_deref()).map(|_| ())
    }

    /// rank(select(i)) == i for every rank, and select(rank(key)) == key
    /// for every key.
    pub fn validate_ranks(&self) -> Result<(), Violation<K>> {
        for i in 0..self.len() {
            let key = match self.select(i) {
                Ok(key) => key,
                Err(err) => return Err(Violation::RankMismatch(err.to_string())),
            };
            let rank = self.rank(key);
            if rank != i {
                let msg = format!("rank(select({})) is {}", i, rank);
                return Err(Violation::RankMismatch(msg));
            }
        }
        for key in self.keys() {
            let rank = self.rank(&key);
            match self.select(rank) {
                Ok(skey) if skey.eq(&key) => (),
                _ => {
                    let msg = format!("select(rank(key)) differs for rank {}", rank);
                    return Err(Violation::RankMismatch(msg));
                }
            }
        }
        Ok(())
    }

    /// No red right links, and no red link following another red link.
    pub fn validate_23(&self) -> Result<(), Violation<K>> {
        validate_23(self.root_deref(), true)
    }

    /// Every path from root to a null link shall cross the same number
    /// of black links. Return that number.
    pub fn validate_blacks(&self) -> Result<usize, Violation<K>> {
        let (mut blacks, mut node) = (0, self.root_deref());
        while let Some(nref) = node {
            if nref.is_black() {
                blacks += 1;
            }
            node = nref.left_deref();
        }
        validate_blacks(self.root_deref(), blacks, 0)?;
        Ok(blacks)
    }
}

fn validate_bst<K, V>(
    node: Option<&Node<K, V>>,
    low: Option<&K>,
    high: Option<&K>,
) -> Result<(), Violation<K>>
where
    K: Clone + Ord,
{
    let node = match node {
        None => return Ok(()),
        Some(node) => node,
    };
    match low {
        Some(low) if node.key.le(low) => {
            return Err(Violation::SortError(node.key.clone(), low.clone()));
        }
        _ => (),
    }
    match high {
        Some(high) if node.key.ge(high) => {
            return Err(Violation::SortError(node.key.clone(), high.clone()));
        }
        _ => (),
    }
    validate_bst(node.left_deref(), low, Some(&node.key))?;
    validate_bst(node.right_deref(), Some(&node.key), high)
}

fn validate_sizes<K, V>(node: Option<&Node<K, V>>) -> Result<usize, Violation<K>>
where
    K: Clone,
{
    let node = match node {
        None => return Ok(0),
        Some(node) => node,
    };
    let left = validate_sizes(node.left_deref())?;
    let right = validate_sizes(node.right_deref())?;
    let expect = 1 + left + right;
    if node.size != expect {
        let (key, found) = (node.key.clone(), node.size);
        return Err(Violation::SizeMismatch { key, expect, found });
    }
    Ok(expect)
}

fn validate_23<K, V>(node: Option<&Node<K, V>>, is_root: bool) -> Result<(), Violation<K>>
where
    K: Clone,
{
    let node = match node {
        None => return Ok(()),
        Some(node) => node,
    };
    if is_red(node.right_deref()) {
        return Err(Violation::RightRed(node.key.clone()));
    }
    if !is_root && !node.is_black() {
        if let Some(left) = node.left_deref().filter(|left| !left.is_black()) {
            return Err(Violation::ConsecutiveReds(left.key.clone()));
        }
    }
    validate_23(node.left_deref(), false)?;
    validate_23(node.right_deref(), false)
}

fn validate_blacks<K, V>(
    node: Option<&Node<K, V>>,
    expect: usize,
    mut blacks: usize,
) -> Result<(), Violation<K>> {
    let node = match node {
        None if blacks == expect => return Ok(()),
        None => {
            let msg = format!("expected {} found {}", expect, blacks);
            return Err(Violation::UnbalancedBlacks(msg));
        }
        Some(node) => node,
    };
    if node.is_black() {
        blacks += 1;
    }
    validate_blacks(node.left_deref(), expect, blacks)?;
    validate_blacks(node.right_deref(), expect, blacks)
}

// sample the depth of every null link.
fn sample_depths<K, V>(node: Option<&Node<K, V>>, depth: usize, depths: &mut Depth) {
    match node {
        None => depths.sample(depth),
        Some(node) => {
            sample_depths(node.left_deref(), depth + 1, depths);
            sample_depths(node.right_deref(), depth + 1, depths);
        }
    }
}

/// Statistics on [`Llrb`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Llrb::stats`] method.
/// * To get full statistics via [`Llrb::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    pub(crate) fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Llrb`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Llrb<k,V>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key and value types.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black links from root to any null link.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics, only when the tree has entries.
    pub fn depths(&self) -> Option<&Depth> {
        self.depths.as_ref().filter(|depths| depths.samples() > 0)
    }
}
