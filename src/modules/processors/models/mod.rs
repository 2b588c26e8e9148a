pub mod rate_spec;

pub use rate_spec::{Processor, RateSpec};
