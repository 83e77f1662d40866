//! Dependency graph over the fixed table catalog.
//!
//! Built from the static FK metadata in [`crate::schema::TABLES`]. The
//! topological order recomputes the parent-first insertion order (the catalog
//! is hand-ordered; the graph is the proof), and the mermaid/DOT renderers
//! replace the original project's third-party ER-diagram exporter.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::{EstateSeedError, Result};
use crate::schema::TABLES;

/// Output format for graph visualization.
#[derive(Debug, Clone, Copy)]
pub enum GraphFormat {
    Mermaid,
    Dot,
}

/// FK dependency graph: an edge parent → child for every foreign key,
/// weighted with the referencing column name.
pub struct DependencyGraph {
    pub graph: DiGraph<&'static str, &'static str>,
    indices: HashMap<&'static str, NodeIndex>,
}

impl DependencyGraph {
    /// Build the graph from the compiled-in catalog.
    pub fn from_catalog() -> Self {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();

        for table in &TABLES {
            let idx = graph.add_node(table.name);
            indices.insert(table.name, idx);
        }
        for table in &TABLES {
            for fk in table.foreign_keys {
                let parent = indices[fk.references];
                let child = indices[table.name];
                graph.add_edge(parent, child, fk.column);
            }
        }

        DependencyGraph { graph, indices }
    }

    pub fn table_name(&self, node: NodeIndex) -> &'static str {
        self.graph[node]
    }

    pub fn node(&self, table: &str) -> Option<NodeIndex> {
        self.indices.get(table).copied()
    }

    /// Parent-first insertion order derived topologically.
    ///
    /// The catalog has no cycles (every FK points at an independent parent),
    /// so a cycle here means the catalog itself is broken.
    pub fn insertion_order(&self) -> Result<Vec<&'static str>> {
        let sorted = toposort(&self.graph, None).map_err(|cycle| {
            EstateSeedError::Other(format!(
                "FK cycle detected at table {}",
                self.graph[cycle.node_id()]
            ))
        })?;
        Ok(sorted.into_iter().map(|n| self.graph[n]).collect())
    }

    /// Render the graph for humans.
    pub fn visualize(&self, format: GraphFormat) -> String {
        match format {
            GraphFormat::Mermaid => self.to_mermaid(),
            GraphFormat::Dot => self.to_dot(),
        }
    }

    fn to_mermaid(&self) -> String {
        let mut output = String::from("graph TD\n");

        for node in self.graph.node_indices() {
            let name = self.table_name(node);
            output.push_str(&format!("    {}[{}]\n", name, name));
        }

        output.push('\n');

        // Render child -->|fk column| parent, the direction a reader follows
        for edge in self.graph.edge_references() {
            let parent = self.table_name(edge.source());
            let child = self.table_name(edge.target());
            output.push_str(&format!("    {} -->|{}| {}\n", child, edge.weight(), parent));
        }

        output
    }

    fn to_dot(&self) -> String {
        let mut output = String::from("digraph portfolio_schema {\n");
        output.push_str("    rankdir=TB;\n");
        output.push_str("    node [shape=box, style=rounded];\n\n");

        for edge in self.graph.edge_references() {
            let parent = self.table_name(edge.source());
            let child = self.table_name(edge.target());
            output.push_str(&format!(
                "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
                child,
                parent,
                edge.weight()
            ));
        }

        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_covers_all_tables_and_fks() {
        let graph = DependencyGraph::from_catalog();
        assert_eq!(graph.graph.node_count(), TABLES.len());
        let fk_count: usize = TABLES.iter().map(|t| t.foreign_keys.len()).sum();
        assert_eq!(graph.graph.edge_count(), fk_count);
    }

    #[test]
    fn topological_order_agrees_with_catalog() {
        let graph = DependencyGraph::from_catalog();
        let order = graph.insertion_order().unwrap();
        assert_eq!(order.len(), TABLES.len());

        // A table must appear after every table it references
        let position: std::collections::HashMap<&str, usize> =
            order.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        for table in &TABLES {
            for fk in table.foreign_keys {
                assert!(
                    position[fk.references] < position[table.name],
                    "{} sorted before its parent {}",
                    table.name,
                    fk.references
                );
            }
        }
    }

    #[test]
    fn mermaid_output_names_every_table() {
        let graph = DependencyGraph::from_catalog();
        let out = graph.visualize(GraphFormat::Mermaid);
        assert!(out.starts_with("graph TD"));
        for table in &TABLES {
            assert!(out.contains(table.name), "missing {}", table.name);
        }
        assert!(out.contains("Property -->|fund_id| Fund"));
    }

    #[test]
    fn dot_output_labels_fk_columns() {
        let graph = DependencyGraph::from_catalog();
        let out = graph.visualize(GraphFormat::Dot);
        assert!(out.starts_with("digraph"));
        assert!(out.contains("\"Payment\" -> \"Lease\" [label=\"lease_id\"]"));
    }
}
