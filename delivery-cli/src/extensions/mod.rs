//! Contains command line extensions built on top of the optimizer.

pub mod route;
pub mod solve;
