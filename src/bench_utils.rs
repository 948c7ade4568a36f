use ahash::AHashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Graph, GraphOptions, errors::StructGraphError};

#[derive(Clone, Debug)]
pub struct EdgeSpec {
    pub source: i64,
    pub target: i64,
    pub undirected: bool,
}

#[derive(Clone, Debug)]
pub struct GraphDataset {
    pub node_count: usize,
    pub edges: Vec<EdgeSpec>,
}

impl GraphDataset {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn degrees(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.node_count];
        for edge in &self.edges {
            counts[edge.source as usize] += 1;
            counts[edge.target as usize] += 1;
        }
        counts
    }

    pub fn hub_node(&self) -> i64 {
        let mut best = (0usize, 0usize);
        for (idx, degree) in self.degrees().into_iter().enumerate() {
            if degree > best.0 {
                best = (degree, idx);
            }
        }
        best.1 as i64
    }
}

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    RandomErdosRenyi { edges: usize },
}

pub fn generate_graph(shape: GraphShape, node_count: usize, seed: u64) -> GraphDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    let edges = match shape {
        GraphShape::Line => generate_line_edges(node_count),
        GraphShape::Star => generate_star_edges(node_count),
        GraphShape::RandomErdosRenyi { edges } => generate_random_edges(node_count, edges, seed),
    };
    GraphDataset { node_count, edges }
}

pub fn materialize(
    dataset: &GraphDataset,
    options: GraphOptions,
) -> Result<Graph, StructGraphError> {
    let mut graph = Graph::new(options);
    for id in 0..dataset.node_count {
        graph.add_node(id as i64)?;
    }
    for edge in &dataset.edges {
        if edge.undirected {
            graph.add_undirected_edge(edge.source, edge.target)?;
        } else {
            graph.add_edge(edge.source, edge.target)?;
        }
    }
    Ok(graph)
}

fn generate_line_edges(count: usize) -> Vec<EdgeSpec> {
    (0..count - 1)
        .map(|idx| EdgeSpec {
            source: idx as i64,
            target: (idx + 1) as i64,
            undirected: false,
        })
        .collect()
}

fn generate_star_edges(count: usize) -> Vec<EdgeSpec> {
    (1..count)
        .map(|leaf| EdgeSpec {
            source: 0,
            target: leaf as i64,
            undirected: leaf % 2 == 0,
        })
        .collect()
}

fn generate_random_edges(node_count: usize, edge_count: usize, seed: u64) -> Vec<EdgeSpec> {
    let max_pairs = node_count * (node_count - 1) / 2;
    assert!(edge_count <= max_pairs, "edge_count exceeds possible pairs");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut taken = AHashSet::new();
    let mut edges = Vec::with_capacity(edge_count);
    while edges.len() < edge_count {
        let source = rng.gen_range(0..node_count as i64);
        let target = rng.gen_range(0..node_count as i64);
        if source == target {
            continue;
        }
        if !taken.insert((source.min(target), source.max(target))) {
            continue;
        }
        edges.push(EdgeSpec {
            source,
            target,
            undirected: edges.len() % 3 == 0,
        });
    }
    edges
}
