//! The solver module contains the route optimization pipeline: clustering, per-cluster sequencing,
//! courier assignment and metrics aggregation.
//!
//! A typical use looks like:
//!
//! ```
//! # use delivery_core::prelude::*;
//! let locations = Locations::new(vec![
//!     Location::new(1, 0., 0., LocationKind::Depot),
//!     Location::new(2, 0., 0.01, LocationKind::Delivery),
//!     Location::new(3, 0.01, 0.01, LocationKind::Delivery),
//! ]);
//! let orders = vec![Order::new(10, 2, 25.), Order::new(11, 3, 40.)];
//! let couriers = vec![Courier::new(1, "Ana", "bike")];
//! let problem = DeliveryProblem::new(locations, orders, couriers);
//!
//! let config = OptimizerConfigBuilder::default().with_cluster_count(Some(1)).build()?;
//! let result = RouteOptimizer::new(config, Environment::new_silent()).optimize(&problem)?;
//!
//! assert_eq!(result.metrics.total_deliveries, 2);
//! # Ok::<(), GenericError>(())
//! ```

mod assignment;
pub use self::assignment::*;

mod config;
pub use self::config::*;

mod metrics;
pub use self::metrics::*;

mod network;
pub use self::network::*;

mod optimizer;
pub use self::optimizer::*;

mod sequencing;
pub use self::sequencing::*;
