//! The Boolean-graph representation MOCUS consumes: the external, read-only
//! preprocessed graph interface, the MOCUS-normalized simple-gate DAG it gets
//! compiled down to, and the builder that does the compiling.

pub mod boolean;
pub mod builder;
pub mod simple_gate;
