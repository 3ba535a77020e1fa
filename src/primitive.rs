//! Formatter/Formattable impls for the built-in scalar types (PF,
//! `spec` §2, external collaborator, given a concrete body here so the
//! crate compiles standalone).

use crate::buffer::{Reader, Writer};
use crate::error::JsonError;
use crate::formatter::{Formattable, Formatter};
use crate::recursion::NestingGuard;
use crate::scalar;
use crate::symbol::Symbol;

macro_rules! primitive {
    ($marker:ident, $ty:ty, $write:path, $read:path) => {
        #[doc(hidden)]
        pub struct $marker;

        impl<S: Symbol> Formatter<S> for $marker {
            type Value = $ty;

            fn serialize(w: &mut Writer<S>, value: &$ty, _guard: NestingGuard) -> Result<(), JsonError> {
                $write(w, *value);
                Ok(())
            }

            fn deserialize(r: &mut Reader<S>) -> Result<$ty, JsonError> {
                $read(r)
            }
        }

        impl<S: Symbol> Formattable<S> for $ty {
            type F = $marker;
        }
    };
}

primitive!(BoolFmt, bool, scalar::write_bool, scalar::read_bool);
primitive!(I8Fmt, i8, scalar::write_i8, scalar::read_i8);
primitive!(I16Fmt, i16, scalar::write_i16, scalar::read_i16);
primitive!(I32Fmt, i32, scalar::write_i32, scalar::read_i32);
primitive!(I64Fmt, i64, scalar::write_i64, scalar::read_i64);
primitive!(I128Fmt, i128, scalar::write_i128, scalar::read_i128);
primitive!(U8Fmt, u8, scalar::write_u8, scalar::read_u8);
primitive!(U16Fmt, u16, scalar::write_u16, scalar::read_u16);
primitive!(U32Fmt, u32, scalar::write_u32, scalar::read_u32);
primitive!(U64Fmt, u64, scalar::write_u64, scalar::read_u64);
primitive!(U128Fmt, u128, scalar::write_u128, scalar::read_u128);

// f32/f64 aren't generated by the `primitive!` macro above because they
// need to override `emits_null_for`: the non-finite encoding (spec
// §4.9) means a bare float's wire form can itself be the `null` token,
// which `NullableFmt` needs to detect and reject (see nullable.rs).

#[doc(hidden)]
pub struct F32Fmt;

impl<S: Symbol> Formatter<S> for F32Fmt {
    type Value = f32;

    fn serialize(w: &mut Writer<S>, value: &f32, _guard: NestingGuard) -> Result<(), JsonError> {
        scalar::write_f32(w, *value);
        Ok(())
    }

    fn deserialize(r: &mut Reader<S>) -> Result<f32, JsonError> {
        scalar::read_f32(r)
    }

    fn emits_null_for(value: &f32) -> bool {
        !value.is_finite()
    }
}

impl<S: Symbol> Formattable<S> for f32 {
    type F = F32Fmt;
}

#[doc(hidden)]
pub struct F64Fmt;

impl<S: Symbol> Formatter<S> for F64Fmt {
    type Value = f64;

    fn serialize(w: &mut Writer<S>, value: &f64, _guard: NestingGuard) -> Result<(), JsonError> {
        scalar::write_f64(w, *value);
        Ok(())
    }

    fn deserialize(r: &mut Reader<S>) -> Result<f64, JsonError> {
        scalar::read_f64(r)
    }

    fn emits_null_for(value: &f64) -> bool {
        !value.is_finite()
    }
}

impl<S: Symbol> Formattable<S> for f64 {
    type F = F64Fmt;
}

#[doc(hidden)]
pub struct StringFmt;

impl<S: Symbol> Formatter<S> for StringFmt {
    type Value = String;

    fn serialize(w: &mut Writer<S>, value: &String, _guard: NestingGuard) -> Result<(), JsonError> {
        scalar::write_str(w, value);
        Ok(())
    }

    fn deserialize(r: &mut Reader<S>) -> Result<String, JsonError> {
        scalar::read_string(r)
    }
}

impl<S: Symbol> Formattable<S> for String {
    type F = StringFmt;
}
