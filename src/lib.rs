//! SDMNet: a residual MLP that maps encoded locations to class-prior logits.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod ml;
