//! Contains result storage abstractions used by callers which need to keep optimization results around.

mod repository;
pub use self::repository::*;
