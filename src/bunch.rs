use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub enum NodeBunch {
    List(Vec<i64>),
    Set(BTreeSet<i64>),
    Map(BTreeMap<i64, serde_json::Value>),
}

impl NodeBunch {
    pub fn iter(&self) -> BunchIter<'_> {
        match self {
            NodeBunch::List(ids) => BunchIter::List(ids.iter()),
            NodeBunch::Set(ids) => BunchIter::Set(ids.iter()),
            NodeBunch::Map(entries) => BunchIter::Map(entries.keys()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NodeBunch::List(ids) => ids.len(),
            NodeBunch::Set(ids) => ids.len(),
            NodeBunch::Map(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub enum BunchIter<'a> {
    List(std::slice::Iter<'a, i64>),
    Set(std::collections::btree_set::Iter<'a, i64>),
    Map(std::collections::btree_map::Keys<'a, i64, serde_json::Value>),
}

impl Iterator for BunchIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        match self {
            BunchIter::List(inner) => inner.next().copied(),
            BunchIter::Set(inner) => inner.next().copied(),
            BunchIter::Map(inner) => inner.next().copied(),
        }
    }
}

impl From<Vec<i64>> for NodeBunch {
    fn from(ids: Vec<i64>) -> Self {
        NodeBunch::List(ids)
    }
}

impl From<&[i64]> for NodeBunch {
    fn from(ids: &[i64]) -> Self {
        NodeBunch::List(ids.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for NodeBunch {
    fn from(ids: [i64; N]) -> Self {
        NodeBunch::List(ids.to_vec())
    }
}

impl From<BTreeSet<i64>> for NodeBunch {
    fn from(ids: BTreeSet<i64>) -> Self {
        NodeBunch::Set(ids)
    }
}

impl From<BTreeMap<i64, serde_json::Value>> for NodeBunch {
    fn from(entries: BTreeMap<i64, serde_json::Value>) -> Self {
        NodeBunch::Map(entries)
    }
}
