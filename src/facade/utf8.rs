//! UTF-8 entry points: the encoding almost every caller wants.

use crate::error::JsonError;
use crate::formatter::Formattable;
use crate::options::CodecOptions;
use crate::symbol::Utf8;

use super::{deserialize_from_units, serialize_to_units};

/// Serialize `value` to a UTF-8 byte vector using the default
/// [`CodecOptions`].
pub fn to_vec<T: Formattable<Utf8> + 'static>(value: &T) -> Result<Vec<u8>, JsonError> {
    to_vec_with_options(value, CodecOptions::default())
}

pub fn to_vec_with_options<T: Formattable<Utf8> + 'static>(value: &T, options: CodecOptions) -> Result<Vec<u8>, JsonError> {
    serialize_to_units::<Utf8, T>(value, options)
}

/// Serialize `value` to a `String`. The formatter engine only ever
/// pushes ASCII bytes or the UTF-8 encoding of a `char`, so the result
/// is always valid UTF-8.
pub fn to_string<T: Formattable<Utf8> + 'static>(value: &T) -> Result<String, JsonError> {
    let bytes = to_vec(value)?;
    Ok(String::from_utf8(bytes).expect("formatter engine only emits well-formed UTF-8"))
}

/// Deserialize a `T` from a complete UTF-8 byte slice.
pub fn from_slice<T: Formattable<Utf8> + 'static>(bytes: &[u8]) -> Result<T, JsonError> {
    deserialize_from_units::<Utf8, T>(bytes)
}

/// Deserialize a `T` from a complete `str`.
pub fn from_str<T: Formattable<Utf8> + 'static>(s: &str) -> Result<T, JsonError> {
    from_slice(s.as_bytes())
}
