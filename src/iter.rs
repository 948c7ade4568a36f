use ahash::AHashSet;

use crate::{
    bunch::NodeBunch,
    classify::EdgeFilter,
    errors::StructGraphError,
    graph::Graph,
    structure::{AdjacencyRecord, Bucket, BucketEntry},
    types::Direction,
};

#[derive(Debug, Clone)]
pub enum EdgeArg {
    Node(i64),
    Bunch(NodeBunch),
}

impl EdgeArg {
    pub fn node(id: i64) -> Self {
        EdgeArg::Node(id)
    }

    pub fn bunch<B: Into<NodeBunch>>(bunch: B) -> Self {
        EdgeArg::Bunch(bunch.into())
    }
}

impl From<i64> for EdgeArg {
    fn from(id: i64) -> Self {
        EdgeArg::Node(id)
    }
}

impl From<NodeBunch> for EdgeArg {
    fn from(bunch: NodeBunch) -> Self {
        EdgeArg::Bunch(bunch)
    }
}

macro_rules! edge_family {
    ($collect:ident, $count:ident, $filter:expr, $direction:expr) => {
        pub fn $collect(&self, args: &[EdgeArg]) -> Result<Vec<i64>, StructGraphError> {
            self.collect_family(stringify!($collect), $filter, $direction, args)
        }

        pub fn $count(&self, args: &[EdgeArg]) -> Result<usize, StructGraphError> {
            self.count_family(stringify!($count), $filter, $direction, args)
        }
    };
}

impl Graph {
    edge_family!(edges, count_edges, EdgeFilter::Mixed, None);
    edge_family!(
        in_edges,
        count_in_edges,
        EdgeFilter::Directed,
        Some(Direction::In)
    );
    edge_family!(
        out_edges,
        count_out_edges,
        EdgeFilter::Directed,
        Some(Direction::Out)
    );
    edge_family!(
        inbound_edges,
        count_inbound_edges,
        EdgeFilter::Mixed,
        Some(Direction::In)
    );
    edge_family!(
        outbound_edges,
        count_outbound_edges,
        EdgeFilter::Mixed,
        Some(Direction::Out)
    );
    edge_family!(directed_edges, count_directed_edges, EdgeFilter::Directed, None);
    edge_family!(
        undirected_edges,
        count_undirected_edges,
        EdgeFilter::Undirected,
        None
    );
    edge_family!(self_loops, count_self_loops, EdgeFilter::SelfLoops, None);

    fn collect_family(
        &self,
        operation: &'static str,
        filter: EdgeFilter,
        direction: Option<Direction>,
        args: &[EdgeArg],
    ) -> Result<Vec<i64>, StructGraphError> {
        let mut found = Vec::new();
        self.visit_family(operation, filter, direction, args, &mut |id| {
            found.push(id)
        })?;
        Ok(found)
    }

    fn count_family(
        &self,
        operation: &'static str,
        filter: EdgeFilter,
        direction: Option<Direction>,
        args: &[EdgeArg],
    ) -> Result<usize, StructGraphError> {
        // global mixed count needs no scan
        if args.is_empty() && filter == EdgeFilter::Mixed && direction.is_none() {
            return Ok(self.size());
        }
        let mut count = 0usize;
        self.visit_family(operation, filter, direction, args, &mut |_| count += 1)?;
        Ok(count)
    }

    fn visit_family(
        &self,
        operation: &'static str,
        filter: EdgeFilter,
        direction: Option<Direction>,
        args: &[EdgeArg],
        visit: &mut dyn FnMut(i64),
    ) -> Result<(), StructGraphError> {
        match args {
            [] => {
                self.visit_all(filter, visit);
                Ok(())
            }
            [EdgeArg::Node(node)] => self.visit_node(operation, filter, direction, *node, visit),
            [EdgeArg::Bunch(bunch)] => {
                self.visit_bunch(operation, filter, direction, bunch, visit)
            }
            [EdgeArg::Node(source), EdgeArg::Node(target)] => {
                self.visit_path(operation, filter, direction, *source, *target, visit)
            }
            other => Err(StructGraphError::invalid_arguments(operation, other.len())),
        }
    }

    fn visit_all(&self, filter: EdgeFilter, visit: &mut dyn FnMut(i64)) {
        for (id, record) in self.edge_records() {
            if filter.matches(record) {
                visit(id);
            }
        }
    }

    fn visit_node(
        &self,
        operation: &'static str,
        filter: EdgeFilter,
        direction: Option<Direction>,
        node: i64,
        visit: &mut dyn FnMut(i64),
    ) -> Result<(), StructGraphError> {
        if !self.has_node(node) {
            return Err(StructGraphError::not_found(operation, node));
        }
        self.ensure_structure();
        self.structure().with_record(node, |record| {
            if let Some(record) = record {
                visit_record(filter, direction, node, record, visit);
            }
        });
        Ok(())
    }

    fn visit_bunch(
        &self,
        operation: &'static str,
        filter: EdgeFilter,
        direction: Option<Direction>,
        bunch: &NodeBunch,
        visit: &mut dyn FnMut(i64),
    ) -> Result<(), StructGraphError> {
        self.ensure_structure();
        // the same edge is reachable from both endpoints, dedup across members
        let mut seen = AHashSet::new();
        for node in bunch.iter() {
            if !self.has_node(node) {
                return Err(StructGraphError::not_found(operation, node));
            }
            self.structure().with_record(node, |record| {
                if let Some(record) = record {
                    let mut dedup = |id: i64| {
                        if seen.insert(id) {
                            visit(id);
                        }
                    };
                    visit_record(filter, direction, node, record, &mut dedup);
                }
            });
        }
        Ok(())
    }

    fn visit_path(
        &self,
        operation: &'static str,
        filter: EdgeFilter,
        direction: Option<Direction>,
        source: i64,
        target: i64,
        visit: &mut dyn FnMut(i64),
    ) -> Result<(), StructGraphError> {
        if !self.has_node(source) {
            return Err(StructGraphError::not_found(operation, source));
        }
        if !self.has_node(target) {
            return Err(StructGraphError::not_found(operation, target));
        }
        if !self.has_family_edge(filter, source, target) {
            return Ok(());
        }
        self.structure().with_record(source, |record| {
            if let Some(record) = record {
                visit_path_record(filter, direction, source, target, record, visit);
            }
        });
        Ok(())
    }

    fn has_family_edge(&self, filter: EdgeFilter, source: i64, target: i64) -> bool {
        match filter {
            EdgeFilter::Mixed => {
                self.has_directed_edge(source, target)
                    || self.has_directed_edge(target, source)
                    || self.has_undirected_edge(source, target)
            }
            EdgeFilter::Directed => {
                self.has_directed_edge(source, target) || self.has_directed_edge(target, source)
            }
            EdgeFilter::Undirected => self.has_undirected_edge(source, target),
            EdgeFilter::SelfLoops => {
                source == target
                    && (self.has_directed_edge(source, source)
                        || self.has_undirected_edge(source, source))
            }
        }
    }
}

fn visit_record(
    filter: EdgeFilter,
    direction: Option<Direction>,
    node: i64,
    record: &AdjacencyRecord,
    visit: &mut dyn FnMut(i64),
) {
    if filter == EdgeFilter::SelfLoops {
        // loops are recorded on the out side only
        if let Some(entry) = record.out.get(&node) {
            visit_entry(entry, visit);
        }
        if let Some(entry) = record.undirected_out.get(&node) {
            visit_entry(entry, visit);
        }
        return;
    }
    if filter.wants_directed() {
        if direction != Some(Direction::Out) {
            visit_bucket(&record.inc, visit);
        }
        if direction != Some(Direction::In) {
            visit_bucket(&record.out, visit);
        }
    }
    if filter.wants_undirected() {
        if direction != Some(Direction::Out) {
            visit_bucket(&record.undirected_in, visit);
        }
        if direction != Some(Direction::In) {
            visit_bucket(&record.undirected_out, visit);
        }
    }
}

fn visit_path_record(
    filter: EdgeFilter,
    direction: Option<Direction>,
    source: i64,
    target: i64,
    record: &AdjacencyRecord,
    visit: &mut dyn FnMut(i64),
) {
    if filter == EdgeFilter::SelfLoops {
        if source != target {
            return;
        }
        if let Some(entry) = record.out.get(&source) {
            visit_entry(entry, visit);
        }
        if let Some(entry) = record.undirected_out.get(&source) {
            visit_entry(entry, visit);
        }
        return;
    }
    if filter.wants_directed() {
        if direction != Some(Direction::Out) {
            if let Some(entry) = record.inc.get(&target) {
                visit_entry(entry, visit);
            }
        }
        if direction != Some(Direction::In) {
            if let Some(entry) = record.out.get(&target) {
                visit_entry(entry, visit);
            }
        }
    }
    if filter.wants_undirected() {
        if direction != Some(Direction::Out) {
            if let Some(entry) = record.undirected_in.get(&target) {
                visit_entry(entry, visit);
            }
        }
        if direction != Some(Direction::In) {
            if let Some(entry) = record.undirected_out.get(&target) {
                visit_entry(entry, visit);
            }
        }
    }
}

fn visit_bucket(bucket: &Bucket, visit: &mut dyn FnMut(i64)) {
    for entry in bucket.values() {
        visit_entry(entry, visit);
    }
}

fn visit_entry(entry: &BucketEntry, visit: &mut dyn FnMut(i64)) {
    match entry {
        BucketEntry::One(id) => visit(*id),
        BucketEntry::Many(ids) => {
            for id in ids {
                visit(*id);
            }
        }
    }
}
