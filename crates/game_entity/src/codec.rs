//! MessagePack codec helpers for raw component data.
//!
//! Raw component buffers are the MessagePack encoding of a component's
//! [`Def`](crate::Component::Def) schema type. Encoding always writes named
//! fields so that readers tolerate reordered or missing optional fields.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ComponentError;

/// Encode a value to MessagePack bytes with named fields.
///
/// # Errors
///
/// Returns [`ComponentError::Encode`] if serialisation fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, ComponentError> {
    rmp_serde::to_vec_named(value).map_err(ComponentError::Encode)
}

/// Decode a value from MessagePack bytes.
///
/// # Errors
///
/// Returns [`ComponentError::Decode`] if the bytes do not match `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ComponentError> {
    rmp_serde::from_slice(bytes).map_err(ComponentError::Decode)
}
