//! Tower service layer for the exchange protocol

pub mod core;
pub mod request;
pub mod response;

pub use core::TaskExchangeService;
pub use request::{ExchangeRequest, RequestContext};
pub use response::ExchangeResponse;
