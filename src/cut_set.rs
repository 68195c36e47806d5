//! Cut sets: the positive/negative literal and module-reference collections MOCUS
//! builds up while walking a gate's sub-DAG.
//!
//! A cut set tracks positive literals, negative literals and module references as
//! three `hashbrown::HashSet`s rather than a bitset. A cached hash is maintained
//! incrementally (XOR-combine of per-element hashes, tagged by which of the three
//! sets the element belongs to) so container dedup stays O(1) amortized per
//! mutation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use itertools::Itertools;

use crate::literal::{HLiterals, HModules, LiteralIndex, ModuleIndex};

pub mod container;

fn tagged_hash(tag: u8, value: u32) -> u64 {
    let mut hasher = DefaultHasher::new();
    tag.hash(&mut hasher);
    value.hash(&mut hasher);
    hasher.finish()
}

const POS_TAG: u8 = 0;
const NEG_TAG: u8 = 1;
const MODULE_TAG: u8 = 2;

/// A candidate (pre-minimization) or minimal (post-minimization) cut set.
///
/// `order` is always `pos.len()`; it intentionally does not count module
/// references, which instead weigh into `size()`.
#[derive(Debug, Clone)]
pub struct CutSet {
    pos: HLiterals,
    neg: HLiterals,
    modules: HModules,
    order: usize,
    hash: u64,
}

impl Default for CutSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CutSet {
    pub fn new() -> Self {
        Self {
            pos: HLiterals::default(),
            neg: HLiterals::default(),
            modules: HModules::default(),
            order: 0,
            hash: 0,
        }
    }

    // -- membership queries --

    pub fn has_positive(&self, literal: LiteralIndex) -> bool {
        self.pos.contains(&literal)
    }

    pub fn has_negative(&self, literal: LiteralIndex) -> bool {
        self.neg.contains(&literal)
    }

    pub fn has_module(&self, module: ModuleIndex) -> bool {
        self.modules.contains(&module)
    }

    pub fn has_any_positive(&self, literals: &HLiterals) -> bool {
        // iterate the smaller set for the intersection check
        if literals.len() < self.pos.len() {
            literals.iter().any(|l| self.pos.contains(l))
        } else {
            self.pos.iter().any(|l| literals.contains(l))
        }
    }

    pub fn has_any_negative(&self, literals: &HLiterals) -> bool {
        if literals.len() < self.neg.len() {
            literals.iter().any(|l| self.neg.contains(l))
        } else {
            self.neg.iter().any(|l| literals.contains(l))
        }
    }

    pub fn has_any_module(&self, modules: &HModules) -> bool {
        if modules.len() < self.modules.len() {
            modules.iter().any(|m| self.modules.contains(m))
        } else {
            self.modules.iter().any(|m| modules.contains(m))
        }
    }

    /// True iff `|pos ∪ literals| > limit`. Used to prune an AND-gate's
    /// contribution before cloning the cut set.
    pub fn check_joint_order(&self, literals: &HLiterals, limit: usize) -> bool {
        let extra = literals.iter().filter(|l| !self.pos.contains(l)).count();
        self.pos.len() + extra > limit
    }

    // -- mutation --

    pub fn add_positive(&mut self, literal: LiteralIndex) {
        if self.pos.insert(literal) {
            self.order += 1;
            self.hash ^= tagged_hash(POS_TAG, literal);
        }
    }

    pub fn add_negative(&mut self, literal: LiteralIndex) {
        if self.neg.insert(literal) {
            self.hash ^= tagged_hash(NEG_TAG, literal);
        }
    }

    pub fn add_module(&mut self, module: ModuleIndex) {
        if self.modules.insert(module) {
            self.hash ^= tagged_hash(MODULE_TAG, module);
        }
    }

    pub fn add_positive_set(&mut self, literals: &HLiterals) {
        for &literal in literals {
            self.add_positive(literal);
        }
    }

    pub fn add_negative_set(&mut self, literals: &HLiterals) {
        for &literal in literals {
            self.add_negative(literal);
        }
    }

    pub fn add_module_set(&mut self, modules: &HModules) {
        for &module in modules {
            self.add_module(module);
        }
    }

    /// Remove from `pos` every literal also present in `neg` (contradiction
    /// cleanup).
    pub fn sanitize(&mut self) {
        let contradictions: Vec<LiteralIndex> =
            self.pos.iter().filter(|l| self.neg.contains(l)).copied().collect();
        for literal in contradictions {
            self.pos.remove(&literal);
            self.order -= 1;
            self.hash ^= tagged_hash(POS_TAG, literal);
        }
    }

    /// `|pos| + |modules|`: module references count as members for minimality
    /// sizing.
    pub fn size(&self) -> usize {
        self.pos.len() + self.modules.len()
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// True iff this is the unity cut set (no positive literals, no negative
    /// literals, no modules).
    pub fn empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty() && self.modules.is_empty()
    }

    /// Remove and return an arbitrary module reference. Caller must first check
    /// `!self.modules.is_empty()`.
    pub fn pop_module(&mut self) -> ModuleIndex {
        let module = *self.modules.iter().next().expect("pop_module on a module-less cut set");
        self.modules.remove(&module);
        self.hash ^= tagged_hash(MODULE_TAG, module);
        module
    }

    /// True iff `other.pos ⊆ self.pos` and `other.modules ⊆ self.modules`.
    /// Negative literals do not participate in the minimality order.
    pub fn includes(&self, other: &CutSet) -> bool {
        other.pos.iter().all(|l| self.pos.contains(l))
            && other.modules.iter().all(|m| self.modules.contains(m))
    }

    /// Returns the `(positive, negative)` literal sets for final reporting.
    pub fn literals(&self) -> (HLiterals, HLiterals) {
        (self.pos.clone(), self.neg.clone())
    }

    /// Sorted `(positive, negative)` literals, handy for deterministic assertions
    /// in tests and for presenting results to a human.
    pub fn sorted_literals(&self) -> (Vec<LiteralIndex>, Vec<LiteralIndex>) {
        (self.pos.iter().copied().sorted_unstable().collect(), self.neg.iter().copied().sorted_unstable().collect())
    }

    pub fn modules(&self) -> &HModules {
        &self.modules
    }

    pub fn pos(&self) -> &HLiterals {
        &self.pos
    }

    pub fn neg(&self) -> &HLiterals {
        &self.neg
    }

    /// Join `other`'s literals and modules into `self` (union of pos, neg and
    /// modules; the resulting order is the sum, since the two cut sets are
    /// assumed variable-disjoint — true for a module join). Used by the module
    /// composer.
    pub fn join(&mut self, other: &CutSet) {
        self.add_positive_set(&other.pos);
        self.add_negative_set(&other.neg);
        self.add_module_set(&other.modules);
    }
}

impl PartialEq for CutSet {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.neg == other.neg && self.modules == other.modules
    }
}

impl Eq for CutSet {}

impl Hash for CutSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}
