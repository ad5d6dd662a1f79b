//! ResolvedGraph - the immutable result of resolving one configuration.
//!
//! Nodes are module coordinates, an edge `a -> b` means "a depends on b".
//! The graph keeps the first-level (declared) modules as roots so that the
//! full transitive closure can be walked from them.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use crate::core::ModuleCoordinate;

/// The resolved dependency graph of one configuration.
#[derive(Debug, Clone, Default)]
pub struct ResolvedGraph {
    graph: DiGraph<ModuleCoordinate, ()>,

    /// Map from coordinate to node index
    nodes: HashMap<ModuleCoordinate, NodeIndex>,

    /// Declared modules that resolved, in declaration order
    roots: Vec<NodeIndex>,
}

impl ResolvedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module, returning its node. Adding a known module is a no-op.
    pub fn add_module(&mut self, coord: ModuleCoordinate) -> NodeIndex {
        if let Some(&node) = self.nodes.get(&coord) {
            return node;
        }

        let node = self.graph.add_node(coord.clone());
        self.nodes.insert(coord, node);
        node
    }

    /// Add a module and mark it as first-level.
    pub fn add_root(&mut self, coord: ModuleCoordinate) -> NodeIndex {
        let node = self.add_module(coord);
        if !self.roots.contains(&node) {
            self.roots.push(node);
        }
        node
    }

    /// Add a dependency edge between two known modules.
    pub fn add_edge(&mut self, from: &ModuleCoordinate, to: &ModuleCoordinate) {
        if let (Some(&from_node), Some(&to_node)) = (self.nodes.get(from), self.nodes.get(to)) {
            if !self.graph.contains_edge(from_node, to_node) {
                self.graph.add_edge(from_node, to_node, ());
            }
        }
    }

    /// Number of modules in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Every module reachable from the first-level modules, at any depth.
    ///
    /// Each module appears once; the order is traversal order and carries
    /// no meaning.
    pub fn all_module_dependencies(&self) -> Vec<&ModuleCoordinate> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();

        for &root in &self.roots {
            let mut dfs = Dfs::new(&self.graph, root);
            while let Some(node) = dfs.next(&self.graph) {
                if seen.insert(node) {
                    result.push(&self.graph[node]);
                }
            }
        }

        result
    }
}
