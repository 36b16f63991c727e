//! This module contains geographic clustering of orders.

mod kmeans;
pub use self::kmeans::*;
