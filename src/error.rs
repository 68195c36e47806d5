//! Precondition-violation errors raised while building the simple-gate DAG.
//!
//! These are all fatal, non-recoverable shape violations in an upstream
//! Boolean graph, identifying the offending gate by index. Cut-set generation,
//! minimization and module composition are infallible once a `SimpleGate` DAG
//! exists; only getting there can fail.

use crate::graph::simple_gate::GateKind;
use crate::literal::LiteralIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("gate {0} is neither AND nor OR; MOCUS requires a pre-normalized graph")]
    UnexpectedGateKind(LiteralIndex),

    #[error(
        "gate {gate} has {count} argument(s); MOCUS requires every gate to have at \
         least 2"
    )]
    TooFewArguments { gate: LiteralIndex, count: usize },

    #[error(
        "gate {child} (type {child_kind:?}) appears as an argument of gate {parent} \
         (type {parent_kind:?}); layering requires strict AND/OR alternation"
    )]
    NonAlternatingLayer {
        parent: LiteralIndex,
        parent_kind: GateKind,
        child: LiteralIndex,
        child_kind: GateKind,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
