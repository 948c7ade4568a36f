use std::collections::{BTreeMap, BTreeSet};

use crate::{
    errors::StructGraphError,
    structure::StructureIndex,
    types::{EdgeRecord, GraphOptions, IndexKind},
};

pub struct Graph {
    options: GraphOptions,
    nodes: BTreeSet<i64>,
    edges: BTreeMap<i64, EdgeRecord>,
    next_edge_id: i64,
    structure: StructureIndex,
}

impl Graph {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: BTreeSet::new(),
            edges: BTreeMap::new(),
            next_edge_id: 1,
            structure: StructureIndex::default(),
        }
    }

    pub fn multi() -> Self {
        Self::new(GraphOptions { multi: true })
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_multi(&self) -> bool {
        self.options.multi
    }

    pub fn add_node(&mut self, id: i64) -> Result<(), StructGraphError> {
        if !self.nodes.insert(id) {
            return Err(StructGraphError::invalid_input(format!(
                "node {id} already exists"
            )));
        }
        Ok(())
    }

    pub fn has_node(&self, id: i64) -> bool {
        self.nodes.contains(&id)
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> Vec<i64> {
        self.nodes.iter().copied().collect()
    }

    pub fn edge_ids(&self) -> Vec<i64> {
        self.edges.keys().copied().collect()
    }

    pub fn edge(&self, id: i64) -> Result<EdgeRecord, StructGraphError> {
        self.edges
            .get(&id)
            .copied()
            .ok_or_else(|| StructGraphError::not_found("edge", id))
    }

    /// Inserts a directed edge and returns its id (monotonically increasing
    /// per graph instance).
    pub fn add_edge(&mut self, source: i64, target: i64) -> Result<i64, StructGraphError> {
        self.attach(source, target, false)
    }

    pub fn add_undirected_edge(
        &mut self,
        source: i64,
        target: i64,
    ) -> Result<i64, StructGraphError> {
        self.attach(source, target, true)
    }

    pub fn drop_edge(&mut self, id: i64) -> Result<(), StructGraphError> {
        let record = self
            .edges
            .remove(&id)
            .ok_or_else(|| StructGraphError::not_found("drop_edge", id))?;
        self.on_edge_removed(id, &record);
        Ok(())
    }

    pub fn drop_node(&mut self, id: i64) -> Result<(), StructGraphError> {
        if !self.nodes.remove(&id) {
            return Err(StructGraphError::not_found("drop_node", id));
        }
        self.edges
            .retain(|_, record| record.source != id && record.target != id);
        // full invalidation; the index rebuilds on the next query
        self.structure.clear();
        Ok(())
    }

    pub fn clear_edges(&mut self) {
        self.edges.clear();
        self.structure.clear();
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.clear_edges();
    }

    pub fn has_directed_edge(&self, source: i64, target: i64) -> bool {
        self.ensure_structure();
        self.structure.with_record(source, |record| {
            record.is_some_and(|record| record.out.contains_key(&target))
        })
    }

    pub fn has_undirected_edge(&self, source: i64, target: i64) -> bool {
        self.ensure_structure();
        self.structure.with_record(source, |record| {
            record.is_some_and(|record| {
                record.undirected_out.contains_key(&target)
                    || record.undirected_in.contains_key(&target)
            })
        })
    }

    pub fn has_edge(&self, source: i64, target: i64) -> bool {
        self.has_directed_edge(source, target) || self.has_undirected_edge(source, target)
    }

    pub fn compute_index(&self, kind: IndexKind) {
        match kind {
            IndexKind::Structure => self.ensure_structure(),
        }
    }

    pub fn clear_index(&self, kind: IndexKind) {
        match kind {
            IndexKind::Structure => self.structure.clear(),
        }
    }

    fn attach(
        &mut self,
        source: i64,
        target: i64,
        undirected: bool,
    ) -> Result<i64, StructGraphError> {
        let operation = if undirected {
            "add_undirected_edge"
        } else {
            "add_edge"
        };
        if !self.has_node(source) {
            return Err(StructGraphError::not_found(operation, source));
        }
        if !self.has_node(target) {
            return Err(StructGraphError::not_found(operation, target));
        }
        if !self.options.multi {
            let duplicate = if undirected {
                self.has_undirected_edge(source, target)
            } else {
                self.has_directed_edge(source, target)
            };
            if duplicate {
                return Err(StructGraphError::invalid_input(format!(
                    "an edge between {source} and {target} already exists"
                )));
            }
        }
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        let record = EdgeRecord {
            source,
            target,
            undirected,
        };
        self.edges.insert(id, record);
        self.on_edge_added(id, &record);
        Ok(id)
    }

    fn on_edge_added(&self, id: i64, record: &EdgeRecord) {
        self.structure.insert(self.options.multi, id, record);
    }

    fn on_edge_removed(&self, id: i64, record: &EdgeRecord) {
        self.structure.remove(id, record);
    }
}

impl Graph {
    pub(crate) fn ensure_structure(&self) {
        self.structure.build(
            self.options.multi,
            self.edges.iter().map(|(id, record)| (*id, *record)),
        );
    }

    pub(crate) fn structure(&self) -> &StructureIndex {
        &self.structure
    }

    pub(crate) fn edge_records(&self) -> impl Iterator<Item = (i64, &EdgeRecord)> + '_ {
        self.edges.iter().map(|(id, record)| (*id, record))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}
