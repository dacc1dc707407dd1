pub mod types;

pub use types::{CaseBounds, OrderScenario, ShippingOption, Tier};
