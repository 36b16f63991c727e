//! This module contains a weighted travel graph and shortest path search algorithms on top of it.

mod builder;
pub use self::builder::*;

mod search;
pub use self::search::*;

mod astar;
pub use self::astar::*;

mod dijkstra;
pub use self::dijkstra::*;

mod tracer;
pub use self::tracer::*;
