//! A collection of models to represent a delivery problem and the optimization result.

mod domain;
pub use self::domain::*;

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
