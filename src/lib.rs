//! Collective-reduction probe that checks an HPC job's launch topology.
//!
//! Each rank contributes a deterministic payload to a single sum reduction;
//! rank 0 compares the aggregate against a closed-form target that only a
//! four-process group can reproduce and reports the verdict through stdout
//! and its exit status.

pub mod probe;
pub mod reporter;
pub mod types;
