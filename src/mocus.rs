//! The MOCUS driver: single-gate analysis, the minimizer glue, and the module
//! composer's worklist.

use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::cut_set::container::CutSetContainer;
use crate::cut_set::CutSet;
use crate::error::Result;
use crate::graph::boolean::BooleanGraph;
use crate::graph::builder::{self, BuildOutcome, ModuleTable};
use crate::graph::simple_gate::SimpleGate;
use crate::literal::{LiteralIndex, ModuleIndex};
use crate::minimize::minimize_cut_sets;
use crate::settings::Settings;

/// Runs the generator and minimizer over a single simple gate's sub-DAG,
/// producing its minimal cut sets. Used both for the top gate and, once per
/// distinct module, inside [`Mocus::analyze`].
pub fn analyze_simple_gate(gate: &SimpleGate, mcs: &mut Vec<CutSet>) {
    let mut cut_sets = CutSetContainer::new();
    gate.generate_cut_sets(&CutSet::new(), &mut cut_sets);
    trace!(generated = cut_sets.len(), "cut sets generated from simple gate");

    let mut sanitized = CutSetContainer::new();
    for mut candidate in cut_sets.into_iter() {
        candidate.sanitize();
        sanitized.insert(candidate);
    }

    let mut singles = Vec::new();
    let mut rest = Vec::new();
    for candidate in sanitized.into_iter() {
        if candidate.empty() {
            // Unity: no minimization needed, nothing else can be minimal anyway.
            mcs.clear();
            mcs.push(CutSet::new());
            return;
        }
        if candidate.size() == 1 {
            singles.push(candidate);
        } else {
            rest.push(candidate);
        }
    }
    mcs.extend(singles.iter().cloned());
    minimize_cut_sets(rest, &singles, 2, mcs);
    debug!(local_mcs = mcs.len(), "minimized a single gate's cut sets");
}

/// Orchestrates graph building, generation, minimization and module composition
/// for one top event.
pub struct Mocus {
    settings: Settings,
    trivial: Option<Vec<CutSet>>,
    root: Option<Rc<SimpleGate>>,
    modules: ModuleTable,
    result: Vec<CutSet>,
    analyzed: bool,
}

impl Mocus {
    /// Builds the simple-gate DAG. Fails only on fatal shape violations in the
    /// upstream graph (see [`crate::error::Error`]).
    pub fn new<G: BooleanGraph>(graph: &G, settings: Settings) -> Result<Self> {
        let outcome = builder::build(graph, settings.limit_order())?;
        let (trivial, root, modules) = match outcome {
            BuildOutcome::Trivial(cut_sets) => (Some(cut_sets), None, ModuleTable::new()),
            BuildOutcome::Graph { root, modules } => (None, Some(root), modules),
        };
        Ok(Self { settings, trivial, root, modules, result: Vec::new(), analyzed: false })
    }

    /// Idempotent after the first call.
    pub fn analyze(&mut self) {
        if self.analyzed {
            return;
        }
        self.analyzed = true;

        if let Some(trivial) = &self.trivial {
            debug!("graph is constant, no analysis needed");
            self.result = trivial.clone();
            return;
        }

        let root = self.root.as_ref().expect("non-trivial outcome always sets root");
        let mut top_mcs = Vec::new();
        analyze_simple_gate(root, &mut top_mcs);
        trace!("top gate cut sets generated, joining modules");

        let expanded = self.join_modules(top_mcs);
        self.result = finalize(expanded);
        debug!(mcs = self.result.len(), "the number of MCS found");
    }

    /// Worklist-style module expansion: avoids recursion depth proportional to
    /// module nesting by keeping an explicit stack and a memo of already-analyzed
    /// modules.
    fn join_modules(&self, top_mcs: Vec<CutSet>) -> Vec<CutSet> {
        let mut module_mcs: IndexMap<ModuleIndex, Vec<CutSet>> = IndexMap::new();
        let mut worklist = top_mcs;
        let mut expanded = Vec::new();

        while let Some(mut member) = worklist.pop() {
            if member.modules().is_empty() {
                expanded.push(member);
                continue;
            }
            let module_index = member.pop_module();
            if !module_mcs.contains_key(&module_index) {
                trace!(module = module_index, "finding MCS from module");
                let gate = self
                    .modules
                    .get(&module_index)
                    .expect("builder registers every module it records a reference to");
                let mut sub_mcs = Vec::new();
                analyze_simple_gate(gate, &mut sub_mcs);
                module_mcs.insert(module_index, sub_mcs);
            }
            for sub in module_mcs.get(&module_index).unwrap() {
                if member.order() + sub.order() > self.settings.limit_order() {
                    continue;
                }
                let mut joined = sub.clone();
                joined.join(&member);
                worklist.push(joined);
            }
        }
        expanded
    }

    /// The final minimal cut sets, each as a `(positive, negative)` pair of
    /// dense literal indices.
    pub fn cut_sets(&self) -> Vec<(Vec<LiteralIndex>, Vec<LiteralIndex>)> {
        self.result.iter().map(CutSet::sorted_literals).collect()
    }

    /// The final minimal cut sets as full [`CutSet`] values, for callers that
    /// want the underlying sets rather than a flattened pair.
    pub fn cut_set_structs(&self) -> &[CutSet] {
        &self.result
    }
}

/// Deduplicates and re-minimizes the fully module-expanded candidate list.
///
/// Each module's own MCS are minimal *within that module's variables*, but
/// joining them with a residual top-level cut set can produce a top-level
/// superset of another joined result, so a final dedup-and-reminimize pass over
/// the fully expanded set is needed even though each contributing module was
/// already minimized on its own.
fn finalize(cut_sets: Vec<CutSet>) -> Vec<CutSet> {
    if cut_sets.iter().any(CutSet::empty) {
        return vec![CutSet::new()];
    }

    let mut container = CutSetContainer::new();
    for cut_set in cut_sets {
        container.insert(cut_set);
    }

    let mut singles = Vec::new();
    let mut rest = Vec::new();
    for cut_set in container.into_iter() {
        if cut_set.size() == 1 {
            singles.push(cut_set);
        } else {
            rest.push(cut_set);
        }
    }
    let mut mcs = singles.clone();
    minimize_cut_sets(rest, &singles, 2, &mut mcs);
    mcs
}
