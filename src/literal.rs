//! Index types shared by the cut-set and simple-gate representations, so a bare
//! `usize`/`u32` doesn't get passed around unadorned.

use hashbrown::HashSet;

/// Identifies a basic-event variable. Dense, starts at 1; zero is never a valid
/// literal index.
pub type LiteralIndex = u32;

/// Identifies a module (an independently analyzable sub-graph). Disjoint from the
/// `LiteralIndex` numbering.
pub type ModuleIndex = u32;

// H for hash-backed set.
pub type HLiterals = HashSet<LiteralIndex>;
pub type HModules = HashSet<ModuleIndex>;
