//! The preprocessed Boolean graph external interface.
//!
//! This is the upstream collaborator's contract, not something the core owns: a
//! read-only DAG of AND/OR/NULL/CONST gates with constants already eliminated
//! except possibly at the root. The core only ever reads through the
//! `BooleanGraph` trait. `MemGraph` below is a small in-memory implementation
//! used by this crate's own tests and demo binary to stand in for a real
//! upstream preprocessor (e.g. one built by parsing a fault-tree XML file); it is
//! built on `petgraph::graph::DiGraph`, the natural fit for a DAG with owned
//! per-node data.

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::literal::LiteralIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateType {
    And,
    Or,
    Null,
    Const,
}

/// Only meaningful when `gate_type() == GateType::Const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantState {
    Normal,
    Unity,
    Null,
}

/// A read-only preprocessed Boolean graph, as produced by an upstream fault-tree
/// preprocessor. Constant arguments being already eliminated (except possibly at
/// the root) is a precondition the preprocessor guarantees and is not re-checked
/// here.
pub trait BooleanGraph {
    /// A cheap, copyable handle identifying a gate node in the graph.
    type GateRef: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    fn root(&self) -> Self::GateRef;
    fn index(&self, gate: Self::GateRef) -> LiteralIndex;
    fn gate_type(&self, gate: Self::GateRef) -> GateType;
    fn constant_state(&self, gate: Self::GateRef) -> ConstantState;
    fn is_module(&self, gate: Self::GateRef) -> bool;

    fn is_constant(&self, gate: Self::GateRef) -> bool {
        self.gate_type(gate) == GateType::Const
    }

    /// Signed argument key -> child gate. A positive key denotes positive
    /// polarity, a negative key the complement.
    fn gate_args(&self, gate: Self::GateRef) -> Vec<(i64, Self::GateRef)>;

    /// Signed argument key -> variable index.
    fn variable_args(&self, gate: Self::GateRef) -> Vec<(i64, LiteralIndex)>;
}

#[derive(Debug, Clone)]
struct GateData {
    gate_type: GateType,
    constant_state: ConstantState,
    is_module: bool,
    variable_args: Vec<(i64, LiteralIndex)>,
}

/// An in-memory `BooleanGraph`. Built incrementally with [`MemGraphBuilder`].
#[derive(Debug, Clone)]
pub struct MemGraph {
    graph: DiGraph<GateData, i64>,
    root: NodeIndex,
}

impl BooleanGraph for MemGraph {
    type GateRef = NodeIndex;

    fn root(&self) -> Self::GateRef {
        self.root
    }

    fn index(&self, gate: Self::GateRef) -> LiteralIndex {
        gate.index() as LiteralIndex + 1
    }

    fn gate_type(&self, gate: Self::GateRef) -> GateType {
        self.graph[gate].gate_type
    }

    fn constant_state(&self, gate: Self::GateRef) -> ConstantState {
        self.graph[gate].constant_state
    }

    fn is_module(&self, gate: Self::GateRef) -> bool {
        self.graph[gate].is_module
    }

    fn gate_args(&self, gate: Self::GateRef) -> Vec<(i64, Self::GateRef)> {
        self.graph
            .edges_directed(gate, Direction::Outgoing)
            .map(|edge| (*edge.weight(), edge.target()))
            .collect()
    }

    fn variable_args(&self, gate: Self::GateRef) -> Vec<(i64, LiteralIndex)> {
        self.graph[gate].variable_args.clone()
    }
}

/// Builds a [`MemGraph`] node by node, separating "build up" from the read-only
/// type it produces.
#[derive(Debug, Default)]
pub struct MemGraphBuilder {
    graph: DiGraph<GateData, i64>,
}

impl MemGraphBuilder {
    pub fn new() -> Self {
        Self { graph: DiGraph::new() }
    }

    pub fn add_gate(&mut self, gate_type: GateType, is_module: bool) -> NodeIndex {
        self.graph.add_node(GateData {
            gate_type,
            constant_state: ConstantState::Normal,
            is_module,
            variable_args: Vec::new(),
        })
    }

    pub fn add_constant(&mut self, state: ConstantState) -> NodeIndex {
        self.graph.add_node(GateData {
            gate_type: GateType::Const,
            constant_state: state,
            is_module: false,
            variable_args: Vec::new(),
        })
    }

    pub fn add_gate_arg(&mut self, parent: NodeIndex, key: i64, child: NodeIndex) {
        self.graph.add_edge(parent, child, key);
    }

    /// Flips a previously-added gate's module flag. Lets callers decide a node is
    /// a module after it (and its own children) were already built.
    pub fn set_module(&mut self, gate: NodeIndex, is_module: bool) {
        self.graph[gate].is_module = is_module;
    }

    pub fn add_variable_arg(
        &mut self,
        parent: NodeIndex,
        key: i64,
        variable: LiteralIndex,
    ) {
        self.graph[parent].variable_args.push((key, variable));
    }

    pub fn build(self, root: NodeIndex) -> MemGraph {
        MemGraph { graph: self.graph, root }
    }
}

/// Flattens a `MemGraph` built around module boundaries into an equivalent graph
/// with every module inlined at each of its reference sites (by literal/constant
/// duplication of the sub-DAG). Used only by tests exercising the "analyzing with
/// modules gives the same minimal cut sets as analyzing the inlined equivalent"
/// property; a real upstream preprocessor has no reason to do this.
pub fn inline_modules(graph: &MemGraph) -> MemGraph {
    let mut builder = MemGraphBuilder::new();
    let mut memo: HashMap<NodeIndex, NodeIndex> = HashMap::new();

    fn copy_gate(
        src: &MemGraph,
        node: NodeIndex,
        builder: &mut MemGraphBuilder,
        memo: &mut HashMap<NodeIndex, NodeIndex>,
    ) -> NodeIndex {
        if let Some(&copied) = memo.get(&node) {
            return copied;
        }
        let data = &src.graph[node];
        let copied = if data.gate_type == GateType::Const {
            builder.add_constant(data.constant_state)
        } else {
            // Inlining drops module-ness: every reference gets its own copy.
            builder.add_gate(data.gate_type, false)
        };
        memo.insert(node, copied);
        for (key, var) in &data.variable_args {
            builder.add_variable_arg(copied, *key, *var);
        }
        for (key, child) in src.gate_args(node) {
            let copied_child = copy_gate(src, child, builder, memo);
            builder.add_gate_arg(copied, key, copied_child);
        }
        copied
    }

    let root = copy_gate(graph, graph.root, &mut builder, &mut memo);
    builder.build(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_small_and_or_graph() {
        let mut builder = MemGraphBuilder::new();
        let and = builder.add_gate(GateType::And, false);
        builder.add_variable_arg(and, 1, 1);
        builder.add_variable_arg(and, 2, 2);
        let graph = builder.build(and);

        assert_eq!(graph.gate_type(graph.root()), GateType::And);
        assert_eq!(graph.variable_args(graph.root()).len(), 2);
        assert!(graph.gate_args(graph.root()).is_empty());
    }
}
