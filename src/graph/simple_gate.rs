//! The MOCUS-normalized gate representation and its mutually recursive AND/OR
//! cut-set generators.

use std::rc::Rc;

use crate::cut_set::container::CutSetContainer;
use crate::cut_set::CutSet;
use crate::literal::{HLiterals, HModules, LiteralIndex, ModuleIndex};

/// The two gate kinds MOCUS understands. Layering guarantees a gate's children
/// are always of the opposite kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
}

/// A DAG node in the simple-gate representation. Shared sub-gates (the same
/// source gate referenced from multiple parents) are represented by cloning the
/// `Rc`, not the gate, so a diamond-shaped DAG doesn't get duplicated into a tree.
#[derive(Debug)]
pub struct SimpleGate {
    kind: GateKind,
    pos_literals: HLiterals,
    neg_literals: HLiterals,
    modules: HModules,
    gates: Vec<Rc<SimpleGate>>,
    limit_order: usize,
}

impl SimpleGate {
    pub(crate) fn new(kind: GateKind, limit_order: usize) -> Self {
        Self {
            kind,
            pos_literals: HLiterals::default(),
            neg_literals: HLiterals::default(),
            modules: HModules::default(),
            gates: Vec::new(),
            limit_order,
        }
    }

    pub(crate) fn add_pos_literal(&mut self, literal: LiteralIndex) {
        self.pos_literals.insert(literal);
    }

    pub(crate) fn add_neg_literal(&mut self, literal: LiteralIndex) {
        self.neg_literals.insert(literal);
    }

    pub(crate) fn add_module(&mut self, module: ModuleIndex) {
        self.modules.insert(module);
    }

    pub(crate) fn add_gate(&mut self, gate: Rc<SimpleGate>) {
        self.gates.push(gate);
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn pos_literals(&self) -> &HLiterals {
        &self.pos_literals
    }

    pub fn neg_literals(&self) -> &HLiterals {
        &self.neg_literals
    }

    pub fn modules(&self) -> &HModules {
        &self.modules
    }

    pub fn limit_order(&self) -> usize {
        self.limit_order
    }

    pub fn gates(&self) -> &[Rc<SimpleGate>] {
        &self.gates
    }

    /// Dispatches on `kind`.
    pub fn generate_cut_sets(&self, input: &CutSet, out: &mut CutSetContainer) {
        debug_assert!(input.order() <= self.limit_order);
        match self.kind {
            GateKind::Or => self.or_gate_cut_sets(input, out),
            GateKind::And => self.and_gate_cut_sets(input, out),
        }
    }

    pub fn and_gate_cut_sets(&self, input: &CutSet, out: &mut CutSetContainer) {
        debug_assert!(input.order() <= self.limit_order);
        // Null-case check: contradiction between the running cut set and this
        // gate's literals.
        if input.has_any_negative(&self.pos_literals) {
            return;
        }
        if input.has_any_positive(&self.neg_literals) {
            return;
        }
        // Order-limit check before the (comparatively) expensive OR cascade.
        if input.check_joint_order(&self.pos_literals, self.limit_order) {
            return;
        }

        let mut extended = input.clone();
        extended.add_positive_set(&self.pos_literals);
        extended.add_negative_set(&self.neg_literals);
        extended.add_module_set(&self.modules);

        // OR-child cascade: each child consumes the previous round's working
        // set and produces the next.
        let mut working = CutSetContainer::new();
        working.insert(extended.clone());
        for gate in &self.gates {
            let mut next = CutSetContainer::new();
            for arg in working.iter() {
                gate.or_gate_cut_sets(arg, &mut next);
            }
            working = next;
        }

        if working.is_empty() {
            return;
        }
        if working.contains(&extended) {
            // Every other set in `working` is a superset of `extended`.
            out.insert(extended);
        } else {
            out.extend(working);
        }
    }

    pub fn or_gate_cut_sets(&self, input: &CutSet, out: &mut CutSetContainer) {
        debug_assert!(input.order() <= self.limit_order);
        // Local-minimum check: the input already witnesses this OR gate.
        if input.has_any_positive(&self.pos_literals)
            || input.has_any_negative(&self.neg_literals)
            || input.has_any_module(&self.modules)
        {
            out.insert(input.clone());
            return;
        }

        // AND-child cascade.
        let mut local = CutSetContainer::new();
        for gate in &self.gates {
            gate.and_gate_cut_sets(input, &mut local);
            if local.contains(input) {
                out.insert(input.clone());
                return;
            }
        }

        // Literal expansion, gated on the order limit (negatives don't raise
        // order, so they expand unconditionally below).
        if input.order() < self.limit_order {
            for &literal in &self.pos_literals {
                if input.has_negative(literal) {
                    continue;
                }
                let mut new_set = input.clone();
                new_set.add_positive(literal);
                out.insert(new_set);
            }
        }
        for &literal in &self.neg_literals {
            if input.has_positive(literal) {
                continue;
            }
            let mut new_set = input.clone();
            new_set.add_negative(literal);
            out.insert(new_set);
        }
        for &module in &self.modules {
            let mut new_set = input.clone();
            new_set.add_module(module);
            out.insert(new_set);
        }

        out.extend(local);
    }
}
