//! Geographic helpers.

mod distance;
pub use self::distance::*;
