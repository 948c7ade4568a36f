use serde::{Deserialize, Serialize};

use crate::types::EdgeRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EdgeFilter {
    Mixed,
    Directed,
    Undirected,
    SelfLoops,
}

impl EdgeRecord {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    pub fn is_directed(&self) -> bool {
        !self.undirected
    }
}

impl EdgeFilter {
    pub fn matches(&self, edge: &EdgeRecord) -> bool {
        match self {
            EdgeFilter::Mixed => true,
            EdgeFilter::Directed => edge.is_directed(),
            EdgeFilter::Undirected => edge.is_undirected(),
            EdgeFilter::SelfLoops => edge.is_self_loop(),
        }
    }

    pub fn wants_directed(&self) -> bool {
        matches!(self, EdgeFilter::Mixed | EdgeFilter::Directed)
    }

    pub fn wants_undirected(&self) -> bool {
        matches!(self, EdgeFilter::Mixed | EdgeFilter::Undirected)
    }
}
