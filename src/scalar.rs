//! Primitive scalar formatters (PF in `spec` §2): integers, floats,
//! booleans, and strings. Declared an external collaborator by the
//! specification, but given here since the crate must stand on its own;
//! grounded on the corpus's own number/escape handling (see `DESIGN.md`).

use crate::buffer::{Reader, Writer};
use crate::error::JsonError;
use crate::symbol::Symbol;

macro_rules! int_scalar {
    ($ty:ty, $write:ident, $read:ident) => {
        pub fn $write<S: Symbol>(w: &mut Writer<S>, v: $ty) {
            w.push_ascii_str(&v.to_string());
        }

        pub fn $read<S: Symbol>(r: &mut Reader<S>) -> Result<$ty, JsonError> {
            let start = r.pos();
            let text = r.read_number_text()?;
            text.parse::<$ty>()
                .map_err(|_| JsonError::out_of_range(start, format!("'{}' does not fit in {}", text, stringify!($ty))))
        }
    };
}

int_scalar!(i8, write_i8, read_i8);
int_scalar!(i16, write_i16, read_i16);
int_scalar!(i32, write_i32, read_i32);
int_scalar!(i64, write_i64, read_i64);
int_scalar!(i128, write_i128, read_i128);
int_scalar!(u8, write_u8, read_u8);
int_scalar!(u16, write_u16, read_u16);
int_scalar!(u32, write_u32, read_u32);
int_scalar!(u64, write_u64, read_u64);
int_scalar!(u128, write_u128, read_u128);

macro_rules! float_scalar {
    ($ty:ty, $write:ident, $read:ident) => {
        /// Non-finite values serialize to JSON `null` (spec §4.9); a
        /// `null` literal where a non-optional float is expected
        /// round-trips back to the token-level ambiguity the nullable
        /// formatter resolves, so bare floats never read `null` directly
        /// — callers wrap in `Option<$ty>` to accept it.
        pub fn $write<S: Symbol>(w: &mut Writer<S>, v: $ty) {
            if v.is_finite() {
                w.push_ascii_str(&v.to_string());
            } else {
                w.write_null();
            }
        }

        pub fn $read<S: Symbol>(r: &mut Reader<S>) -> Result<$ty, JsonError> {
            let start = r.pos();
            let text = r.read_number_text()?;
            text.parse::<$ty>()
                .map_err(|_| JsonError::out_of_range(start, format!("'{}' is not a valid {}", text, stringify!($ty))))
        }
    };
}

float_scalar!(f32, write_f32, read_f32);
float_scalar!(f64, write_f64, read_f64);

pub fn write_bool<S: Symbol>(w: &mut Writer<S>, v: bool) {
    w.write_bool(v);
}

pub fn read_bool<S: Symbol>(r: &mut Reader<S>) -> Result<bool, JsonError> {
    r.read_bool()
}

pub fn write_str<S: Symbol>(w: &mut Writer<S>, v: &str) {
    w.write_string(v);
}

pub fn read_string<S: Symbol>(r: &mut Reader<S>) -> Result<String, JsonError> {
    r.read_string()
}
