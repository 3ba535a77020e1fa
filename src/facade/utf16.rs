//! UTF-16 entry points, for callers whose transport already speaks
//! UTF-16 code units (`spec` §1: "some callers exchange already-decoded
//! UTF-16 code unit arrays").

use crate::error::JsonError;
use crate::formatter::Formattable;
use crate::options::CodecOptions;
use crate::symbol::Utf16;

use super::{deserialize_from_units, serialize_to_units};

/// Serialize `value` to a vector of UTF-16 code units.
pub fn to_units<T: Formattable<Utf16> + 'static>(value: &T) -> Result<Vec<u16>, JsonError> {
    to_units_with_options(value, CodecOptions::default())
}

pub fn to_units_with_options<T: Formattable<Utf16> + 'static>(value: &T, options: CodecOptions) -> Result<Vec<u16>, JsonError> {
    serialize_to_units::<Utf16, T>(value, options)
}

/// Serialize `value` and collect the result into a `String`. The
/// formatter engine never emits an unpaired surrogate, so the
/// conversion back from UTF-16 cannot fail.
pub fn to_string<T: Formattable<Utf16> + 'static>(value: &T) -> Result<String, JsonError> {
    let units = to_units(value)?;
    Ok(String::from_utf16(&units).expect("formatter engine only emits well-formed UTF-16"))
}

/// Deserialize a `T` from a complete view of UTF-16 code units.
pub fn from_units<T: Formattable<Utf16> + 'static>(units: &[u16]) -> Result<T, JsonError> {
    deserialize_from_units::<Utf16, T>(units)
}

/// Deserialize a `T` from a `str`, re-encoding it to UTF-16 first.
pub fn from_str<T: Formattable<Utf16> + 'static>(s: &str) -> Result<T, JsonError> {
    let units: Vec<u16> = s.encode_utf16().collect();
    from_units(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_units() {
        let value = vec![1i32, 2, 3];
        let units = to_units(&value).unwrap();
        let decoded: Vec<i32> = from_units(&units).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn round_trips_string_with_surrogate_pair() {
        let value = String::from("a\u{1F600}b");
        let encoded = to_string(&value).unwrap();
        let decoded: String = from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }
}
