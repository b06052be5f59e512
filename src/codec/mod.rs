//! Serialization codecs for the exchange protocol

pub mod json;

pub use json::JsonCodec;

use bytes::Bytes;

use crate::{
    protocol::{error::ExchangeError, operation::ExchangeOperation},
    service::response::ExchangeResponse,
};

/// Codec trait for encoding and decoding exchange protocol messages
///
/// The protocol currently ships a single HTTP+JSON binding; the trait keeps
/// the service layer independent of the serialization format.
pub trait Codec: Send + Sync {
    /// Serialize an exchange operation to bytes for transport
    fn encode_request(&self, operation: &ExchangeOperation) -> Result<Bytes, ExchangeError>;

    /// Deserialize transport response bytes to an exchange response
    ///
    /// The original operation is passed for context, since the expected
    /// response shape depends on it.
    fn decode_response(
        &self,
        body: &[u8],
        operation: &ExchangeOperation,
    ) -> Result<ExchangeResponse, ExchangeError>;

    /// Get the content type for this codec
    fn content_type(&self) -> &str;
}
