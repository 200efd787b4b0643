//! Graph view of a finished install plan, for tree display and "why" queries.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use sdkpm_core::package::PackageId;
use sdkpm_core::version::Version;

use crate::plan::InstallPlan;

/// A planned package in the graph.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PlanNode {
    pub id: PackageId,
    pub version: Version,
}

impl fmt::Display for PlanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.version)
    }
}

/// Planned packages connected by the dependency edges between them.
///
/// Edges to packages outside the plan (satisfied by local installs) are left out.
pub struct PlanGraph {
    graph: DiGraph<PlanNode, ()>,
    index: HashMap<PackageId, NodeIndex>,
    roots: Vec<NodeIndex>,
}

impl PlanGraph {
    pub fn from_plan(plan: &InstallPlan) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();

        for p in &plan.packages {
            let idx = graph.add_node(PlanNode {
                id: p.id.clone(),
                version: p.version,
            });
            index.insert(p.id.clone(), idx);
        }

        for p in &plan.packages {
            let from = index[&p.id];
            for dep in &p.dependencies {
                if let Some(&to) = index.get(&dep.target) {
                    if !graph.edges(from).any(|e| e.target() == to) {
                        graph.add_edge(from, to, ());
                    }
                }
            }
        }

        let roots = plan
            .requested
            .iter()
            .filter_map(|id| index.get(id).copied())
            .collect();

        Self {
            graph,
            index,
            roots,
        }
    }

    /// Look up a node by package id.
    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &PlanNode {
        &self.graph[idx]
    }

    /// Direct dependencies of a node that are part of the plan.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.target())
            .collect()
    }

    /// Planned packages that depend on this node.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.source())
            .collect()
    }

    /// Render the dependency tree below every requested package.
    ///
    /// A package that already appears on the current branch is printed but
    /// not expanded again.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        for &root in &self.roots {
            output.push_str(&format!("{}\n", self.graph[root]));
            let mut visited = HashSet::new();
            visited.insert(root);

            let deps = self.dependencies_of(root);
            let count = deps.len();
            for (i, child) in deps.into_iter().enumerate() {
                let is_last = i == count - 1;
                self.print_subtree(&mut output, child, "", is_last, 1, max_depth, &mut visited);
            }
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, child) in deps.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                child,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// A dependency chain from some requested package down to `id`.
    pub fn find_path(&self, id: &str) -> Option<Vec<&PlanNode>> {
        let target = self.find(id)?;
        for &root in &self.roots {
            let mut path = Vec::new();
            let mut visited = HashSet::new();
            if self.dfs_path(root, target, &mut path, &mut visited) {
                return Some(path.iter().map(|&idx| &self.graph[idx]).collect());
            }
        }
        None
    }

    fn dfs_path(
        &self,
        current: NodeIndex,
        target: NodeIndex,
        path: &mut Vec<NodeIndex>,
        visited: &mut HashSet<NodeIndex>,
    ) -> bool {
        path.push(current);
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            path.pop();
            return false;
        }
        for edge in self.graph.edges(current) {
            if self.dfs_path(edge.target(), target, path, visited) {
                return true;
            }
        }
        path.pop();
        false
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
