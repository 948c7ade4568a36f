use std::collections::{BTreeMap, BTreeSet, btree_map::Entry};

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::types::EdgeRecord;

/// Per-neighbor bookkeeping: one edge id in simple mode, a set in multi mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketEntry {
    One(i64),
    Many(BTreeSet<i64>),
}

impl BucketEntry {
    fn new(edge_id: i64, multi: bool) -> Self {
        if multi {
            let mut ids = BTreeSet::new();
            ids.insert(edge_id);
            BucketEntry::Many(ids)
        } else {
            BucketEntry::One(edge_id)
        }
    }

    fn add(&mut self, edge_id: i64) {
        match self {
            // simple mode guarantees pair uniqueness upstream
            BucketEntry::One(stored) => *stored = edge_id,
            BucketEntry::Many(ids) => {
                ids.insert(edge_id);
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            BucketEntry::One(_) => 1,
            BucketEntry::Many(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type Bucket = BTreeMap<i64, BucketEntry>;

#[derive(Debug, Default)]
pub struct AdjacencyRecord {
    pub out: Bucket,
    pub inc: Bucket,
    pub undirected_out: Bucket,
    pub undirected_in: Bucket,
}

/// Lazily built adjacency index. Mutation hooks are no-ops until the first
/// build so a later full scan cannot double-insert edges.
#[derive(Default)]
pub struct StructureIndex {
    inner: RwLock<IndexState>,
}

#[derive(Default)]
struct IndexState {
    built: bool,
    records: AHashMap<i64, AdjacencyRecord>,
}

impl StructureIndex {
    pub fn is_built(&self) -> bool {
        self.inner.read().built
    }

    pub fn build<I>(&self, multi: bool, edges: I)
    where
        I: IntoIterator<Item = (i64, EdgeRecord)>,
    {
        let mut state = self.inner.write();
        if state.built {
            return;
        }
        for (edge_id, record) in edges {
            state.insert(multi, edge_id, &record);
        }
        state.built = true;
    }

    pub fn insert(&self, multi: bool, edge_id: i64, record: &EdgeRecord) {
        let mut state = self.inner.write();
        if !state.built {
            return;
        }
        state.insert(multi, edge_id, record);
    }

    pub fn remove(&self, edge_id: i64, record: &EdgeRecord) {
        let mut state = self.inner.write();
        if !state.built {
            return;
        }
        state.remove(edge_id, record);
    }

    pub fn clear(&self) {
        let mut state = self.inner.write();
        state.records.clear();
        state.built = false;
    }

    pub fn with_record<R>(&self, node: i64, read: impl FnOnce(Option<&AdjacencyRecord>) -> R) -> R {
        let state = self.inner.read();
        read(state.records.get(&node))
    }
}

impl IndexState {
    fn insert(&mut self, multi: bool, edge_id: i64, record: &EdgeRecord) {
        let EdgeRecord {
            source,
            target,
            undirected,
        } = *record;
        let source_record = self.records.entry(source).or_default();
        let bucket = if undirected {
            &mut source_record.undirected_out
        } else {
            &mut source_record.out
        };
        add_to_bucket(bucket, target, edge_id, multi);
        // self-loops live on the source side only
        if source == target {
            return;
        }
        let target_record = self.records.entry(target).or_default();
        let bucket = if undirected {
            &mut target_record.undirected_in
        } else {
            &mut target_record.inc
        };
        add_to_bucket(bucket, source, edge_id, multi);
    }

    fn remove(&mut self, edge_id: i64, record: &EdgeRecord) {
        let EdgeRecord {
            source,
            target,
            undirected,
        } = *record;
        if let Some(source_record) = self.records.get_mut(&source) {
            let bucket = if undirected {
                &mut source_record.undirected_out
            } else {
                &mut source_record.out
            };
            remove_from_bucket(bucket, target, edge_id);
        }
        if source == target {
            return;
        }
        if let Some(target_record) = self.records.get_mut(&target) {
            let bucket = if undirected {
                &mut target_record.undirected_in
            } else {
                &mut target_record.inc
            };
            remove_from_bucket(bucket, source, edge_id);
        }
    }
}

fn add_to_bucket(bucket: &mut Bucket, neighbor: i64, edge_id: i64, multi: bool) {
    match bucket.entry(neighbor) {
        Entry::Vacant(slot) => {
            slot.insert(BucketEntry::new(edge_id, multi));
        }
        Entry::Occupied(mut slot) => slot.get_mut().add(edge_id),
    }
}

fn remove_from_bucket(bucket: &mut Bucket, neighbor: i64, edge_id: i64) {
    if let Entry::Occupied(mut slot) = bucket.entry(neighbor) {
        let now_empty = match slot.get_mut() {
            BucketEntry::One(stored) => *stored == edge_id,
            BucketEntry::Many(ids) => {
                ids.remove(&edge_id);
                ids.is_empty()
            }
        };
        // eager pruning keeps simple and multi removal symmetric
        if now_empty {
            slot.remove();
        }
    }
}
