pub mod aggregator;
pub mod handoff;
pub mod normalize;
pub mod resolver;
pub mod router;

pub use crate::domain::model::{Courier, Order, TrackingEvent, TrackingResult};
pub use crate::domain::ports::{CarrierClient, CarrierOutcome, DegradedReason, OrderSource};
pub use crate::utils::error::Result;
