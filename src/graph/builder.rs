//! Transforms a preprocessed Boolean graph into a simple-gate DAG and module
//! table.

use std::rc::Rc;

use hashbrown::HashMap;
use indexmap::IndexMap;
use tracing::trace;

use super::boolean::{BooleanGraph, ConstantState, GateType};
use super::simple_gate::{GateKind, SimpleGate};
use crate::cut_set::CutSet;
use crate::error::{Error, Result};
use crate::literal::{LiteralIndex, ModuleIndex};

/// `ModuleIndex -> SimpleGate` root. Built with `indexmap::IndexMap` so iteration
/// order is deterministic, which matters for reproducible logging even though
/// result ordering itself is not guaranteed.
pub type ModuleTable = IndexMap<ModuleIndex, Rc<SimpleGate>>;

/// What [`build`] produced: either a precomputed trivial result (one of the root
/// short-circuits below) or a real simple-gate DAG to run MOCUS over.
pub enum BuildOutcome {
    /// The root was constant or a pass-through NULL; this is the final analysis
    /// result directly, no simple-gate DAG was built.
    Trivial(Vec<CutSet>),
    Graph { root: Rc<SimpleGate>, modules: ModuleTable },
}

/// Builds the simple-gate DAG (and module table) for `graph`, or short-circuits
/// to a precomputed trivial result when the root is constant or a pass-through
/// NULL gate.
pub fn build<G: BooleanGraph>(graph: &G, limit_order: usize) -> Result<BuildOutcome> {
    let root = graph.root();

    if graph.is_constant(root) {
        return Ok(BuildOutcome::Trivial(match graph.constant_state(root) {
            ConstantState::Unity => vec![CutSet::new()],
            ConstantState::Null | ConstantState::Normal => Vec::new(),
        }));
    }

    if graph.gate_type(root) == GateType::Null {
        let gate_args = graph.gate_args(root);
        let variable_args = graph.variable_args(root);
        if !gate_args.is_empty() {
            return Err(Error::UnexpectedGateKind(graph.index(root)));
        }
        if variable_args.len() != 1 {
            return Err(Error::TooFewArguments {
                gate: graph.index(root),
                count: variable_args.len(),
            });
        }
        let (key, variable) = variable_args[0];
        let mut cut_set = CutSet::new();
        if key > 0 {
            cut_set.add_positive(variable);
        } else {
            cut_set.add_negative(variable);
        }
        return Ok(BuildOutcome::Trivial(vec![cut_set]));
    }

    let mut processed: HashMap<LiteralIndex, Rc<SimpleGate>> = HashMap::new();
    let mut modules = ModuleTable::new();
    let root_gate =
        create_simple_tree(graph, root, limit_order, &mut processed, &mut modules)?;
    trace!(modules = modules.len(), "converted Boolean graph to simple-gate DAG");
    Ok(BuildOutcome::Graph { root: root_gate, modules })
}

fn create_simple_tree<G: BooleanGraph>(
    graph: &G,
    gate: G::GateRef,
    limit_order: usize,
    processed: &mut HashMap<LiteralIndex, Rc<SimpleGate>>,
    modules: &mut ModuleTable,
) -> Result<Rc<SimpleGate>> {
    let index = graph.index(gate);
    if let Some(existing) = processed.get(&index) {
        return Ok(Rc::clone(existing));
    }

    let kind = gate_kind(graph, gate, index)?;

    let gate_args = graph.gate_args(gate);
    let variable_args = graph.variable_args(gate);
    if gate_args.len() + variable_args.len() < 2 {
        return Err(Error::TooFewArguments {
            gate: index,
            count: gate_args.len() + variable_args.len(),
        });
    }

    let mut simple = SimpleGate::new(kind, limit_order);

    for (_key, child) in &gate_args {
        let child = *child;
        let child_simple = create_simple_tree(graph, child, limit_order, processed, modules)?;
        if graph.is_module(child) {
            simple.add_module(graph.index(child));
        } else {
            let child_index = graph.index(child);
            let child_kind = gate_kind(graph, child, child_index)?;
            if child_kind == kind {
                return Err(Error::NonAlternatingLayer {
                    parent: index,
                    parent_kind: kind,
                    child: child_index,
                    child_kind,
                });
            }
            simple.add_gate(child_simple);
        }
    }

    for (key, var) in variable_args {
        if key > 0 {
            simple.add_pos_literal(var);
        } else {
            simple.add_neg_literal(var);
        }
    }

    trace!(gate = index, kind = ?kind, "built simple gate");
    let rc = Rc::new(simple);
    processed.insert(index, Rc::clone(&rc));
    if graph.is_module(gate) {
        modules.insert(index, Rc::clone(&rc));
    }
    Ok(rc)
}

fn gate_kind<G: BooleanGraph>(graph: &G, gate: G::GateRef, index: LiteralIndex) -> Result<GateKind> {
    match graph.gate_type(gate) {
        GateType::And => Ok(GateKind::And),
        GateType::Or => Ok(GateKind::Or),
        GateType::Null | GateType::Const => Err(Error::UnexpectedGateKind(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::boolean::MemGraphBuilder;

    #[test]
    fn trivial_unity_root() {
        let mut builder = MemGraphBuilder::new();
        let root = builder.add_constant(ConstantState::Unity);
        let graph = builder.build(root);

        match build(&graph, 3).unwrap() {
            BuildOutcome::Trivial(cut_sets) => {
                assert_eq!(cut_sets.len(), 1);
                assert!(cut_sets[0].empty());
            },
            BuildOutcome::Graph { .. } => panic!("expected trivial outcome"),
        }
    }

    #[test]
    fn trivial_null_root() {
        let mut builder = MemGraphBuilder::new();
        let root = builder.add_constant(ConstantState::Null);
        let graph = builder.build(root);

        match build(&graph, 3).unwrap() {
            BuildOutcome::Trivial(cut_sets) => assert!(cut_sets.is_empty()),
            BuildOutcome::Graph { .. } => panic!("expected trivial outcome"),
        }
    }

    #[test]
    fn trivial_null_gate_with_single_child() {
        let mut builder = MemGraphBuilder::new();
        let root = builder.add_gate(GateType::Null, false);
        builder.add_variable_arg(root, 1, 7);
        let graph = builder.build(root);

        match build(&graph, 3).unwrap() {
            BuildOutcome::Trivial(cut_sets) => {
                assert_eq!(cut_sets.len(), 1);
                assert_eq!(cut_sets[0].sorted_literals().0, vec![7]);
            },
            BuildOutcome::Graph { .. } => panic!("expected trivial outcome"),
        }
    }

    #[test]
    fn builds_module_table_for_module_gates() {
        let mut builder = MemGraphBuilder::new();
        let module_gate = builder.add_gate(GateType::And, true);
        builder.add_variable_arg(module_gate, 1, 10);
        builder.add_variable_arg(module_gate, 2, 11);

        let top = builder.add_gate(GateType::Or, false);
        builder.add_variable_arg(top, 1, 1);
        builder.add_gate_arg(top, 2, module_gate);

        let graph = builder.build(top);
        match build(&graph, 5).unwrap() {
            BuildOutcome::Graph { root, modules } => {
                assert_eq!(modules.len(), 1);
                assert!(root.modules().contains(&graph.index(module_gate)));
                assert!(root.gates().is_empty());
            },
            BuildOutcome::Trivial(_) => panic!("expected graph outcome"),
        }
    }

    #[test]
    fn rejects_gates_with_too_few_arguments() {
        let mut builder = MemGraphBuilder::new();
        let root = builder.add_gate(GateType::Or, false);
        builder.add_variable_arg(root, 1, 1);
        let graph = builder.build(root);

        assert!(matches!(build(&graph, 3), Err(Error::TooFewArguments { .. })));
    }

    #[test]
    fn rejects_non_alternating_layers() {
        let mut builder = MemGraphBuilder::new();
        let child = builder.add_gate(GateType::Or, false);
        builder.add_variable_arg(child, 1, 1);
        builder.add_variable_arg(child, 2, 2);

        let parent = builder.add_gate(GateType::Or, false);
        builder.add_gate_arg(parent, 1, child);
        builder.add_variable_arg(parent, 2, 3);
        let graph = builder.build(parent);

        assert!(matches!(build(&graph, 3), Err(Error::NonAlternatingLayer { .. })));
    }
}
