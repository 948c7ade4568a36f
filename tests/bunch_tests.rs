use std::collections::{BTreeMap, BTreeSet};

use serde_json::json;
use structgraph::{EdgeArg, Graph, GraphOptions, NodeBunch, StructGraphError};

fn prepared_graph() -> Graph {
    let mut graph = Graph::new(GraphOptions::default());
    for id in [1, 2, 3, 4] {
        graph.add_node(id).expect("node");
    }
    graph.add_edge(1, 2).expect("edge");
    graph.add_edge(3, 2).expect("edge");
    graph.add_undirected_edge(3, 4).expect("edge");
    graph
}

#[test]
fn test_list_shape() {
    let graph = prepared_graph();
    let found = graph
        .edges(&[EdgeArg::bunch(NodeBunch::from(vec![1, 3]))])
        .expect("bunch");
    assert_eq!(found, vec![1, 2, 3]);
}

#[test]
fn test_set_shape_matches_list_shape() {
    let graph = prepared_graph();
    let as_list = graph
        .edges(&[EdgeArg::bunch(NodeBunch::from(vec![1, 3]))])
        .expect("list");
    let set: BTreeSet<i64> = [1, 3].into_iter().collect();
    let as_set = graph
        .edges(&[EdgeArg::bunch(NodeBunch::from(set))])
        .expect("set");
    assert_eq!(as_list, as_set);
}

#[test]
fn test_map_shape_uses_keys() {
    let graph = prepared_graph();
    let mut entries = BTreeMap::new();
    entries.insert(1, json!({ "label": "first" }));
    entries.insert(3, json!({ "label": "third" }));
    let found = graph
        .edges(&[EdgeArg::bunch(NodeBunch::from(entries))])
        .expect("map");
    assert_eq!(found, vec![1, 2, 3]);
}

#[test]
fn test_bunch_deduplicates_shared_edge() {
    let graph = prepared_graph();
    // edge 1 connects both bunch members, it must appear once
    let found = graph
        .edges(&[EdgeArg::bunch(NodeBunch::from(vec![1, 2]))])
        .expect("bunch");
    assert_eq!(found, vec![1, 2]);
    assert_eq!(
        graph
            .count_edges(&[EdgeArg::bunch(NodeBunch::from(vec![1, 2]))])
            .expect("count"),
        2
    );
}

#[test]
fn test_empty_bunch_yields_nothing() {
    let graph = prepared_graph();
    let bunch = NodeBunch::from(Vec::<i64>::new());
    assert!(bunch.is_empty());
    assert!(graph.edges(&[EdgeArg::bunch(bunch)]).expect("empty").is_empty());
}

#[test]
fn test_bunch_fails_naming_the_missing_node() {
    let graph = prepared_graph();
    let err = graph
        .edges(&[EdgeArg::bunch(NodeBunch::from(vec![1, 99, 3]))])
        .expect_err("missing");
    assert!(matches!(err, StructGraphError::NotFound { id: 99, .. }));
}

#[test]
fn test_bunch_respects_family_filters() {
    let graph = prepared_graph();
    let bunch = || NodeBunch::from(vec![2, 3]);
    assert_eq!(
        graph
            .directed_edges(&[EdgeArg::bunch(bunch())])
            .expect("directed"),
        vec![1, 2]
    );
    assert_eq!(
        graph
            .undirected_edges(&[EdgeArg::bunch(bunch())])
            .expect("undirected"),
        vec![3]
    );
    assert_eq!(
        graph.in_edges(&[EdgeArg::bunch(bunch())]).expect("in"),
        vec![1, 2]
    );
}
