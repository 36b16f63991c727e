//! A command line interface library of the delivery route optimizer.
//!
//! It reads problems in json format, runs the optimizer and writes results in json format as well.
//!
//! # Examples
//!
//! ```
//! use delivery_cli::format::problem::DeliveryProblemReader;
//! use std::io::BufReader;
//!
//! let problem = r#"{
//!     "locations": [
//!         { "id": 0, "lat": 0.0, "lng": 0.0, "kind": "depot" },
//!         { "id": 1, "lat": 0.01, "lng": 0.01 }
//!     ],
//!     "orders": [{ "id": 10, "locationId": 1, "value": 12.5 }],
//!     "couriers": [{ "id": 1, "name": "alice", "vehicle": "bike" }]
//! }"#;
//!
//! let problem = BufReader::new(problem.as_bytes()).read_delivery().expect("valid problem");
//! assert_eq!(problem.orders.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod extensions;
pub mod format;

use crate::format::FormatError;

/// Gets errors serialized in json format.
pub fn get_errors_serialized(errors: &[FormatError]) -> String {
    FormatError::format_many_to_json(errors)
}
