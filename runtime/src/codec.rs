//! JSON codec handle injected into generated code.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::CodecError;

/// Encodes and decodes transaction payloads as JSON.
///
/// Generated client code holds one codec handle per aggregator instance and
/// threads a clone into every deferred submit result. The type is stateless;
/// it exists so the codec is an explicit, swappable capability in generated
/// signatures rather than a hardwired function call.
///
/// ## Examples
///
/// ```
/// use chainapi_runtime::JsonCodec;
///
/// let codec = JsonCodec::default();
/// let bytes = codec.encode(&vec![1u32, 2, 3]).unwrap();
/// let back: Vec<u32> = codec.decode(&bytes).unwrap();
/// assert_eq!(back, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Creates a codec handle.
    pub fn new() -> Self {
        Self
    }

    /// Encodes a value to JSON bytes.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(CodecError::Encode)
    }

    /// Encodes a value to a JSON string.
    pub fn encode_to_string<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        serde_json::to_string(value).map_err(CodecError::Encode)
    }

    /// Decodes a value from raw JSON bytes.
    pub fn decode<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(raw).map_err(CodecError::Decode)
    }
}
