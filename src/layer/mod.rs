//! Tower Layer implementations for the exchange protocol

pub mod validation;

pub use validation::{ValidationLayer, ValidationService};
