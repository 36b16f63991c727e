//! Contains functionality to compare optimized routes with baseline dispatch methods.

mod efficiency;
pub use self::efficiency::*;
