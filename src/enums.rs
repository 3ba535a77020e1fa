//! The enumeration formatter (CF, `spec` §4.4): a closed set of named
//! integer values, serialized as their textual name.

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::buffer::{Reader, Writer};
use crate::error::{JsonError, JsonErrorKind};
use crate::formatter::Formatter;
use crate::recursion::NestingGuard;
use crate::registry;
use crate::symbol::Symbol;

/// Implemented once per enum type, normally by `#[derive(Formattable)]`
/// (see the `symbolic_json_derive` crate). `MEMBERS` lists every
/// declared variant in an arbitrary but fixed order; `to_name` is
/// expected to compile down to a dense jump table over the
/// discriminant, matching spec §4.4's dispatch requirement.
pub trait JsonEnum: Copy + Eq + Send + Sync + 'static {
    const MEMBERS: &'static [(Self, &'static str)];

    /// Map a value to its declared name. The default implementation is
    /// a linear scan over `MEMBERS`; a derived impl overrides this with
    /// a `match` so rustc can compile it to a jump table.
    fn to_name(&self) -> Option<&'static str> {
        Self::MEMBERS.iter().find(|(v, _)| v == self).map(|(_, n)| *n)
    }
}

struct EnumKey<T>(PhantomData<T>);

fn name_table<T: JsonEnum>() -> &'static HashMap<&'static str, T> {
    registry::cell::<EnumKey<T>, HashMap<&'static str, T>>(|| {
        T::MEMBERS.iter().map(|&(v, n)| (n, v)).collect()
    })
}

#[doc(hidden)]
pub struct EnumFmt<T>(PhantomData<T>);

impl<S: Symbol, T: JsonEnum> Formatter<S> for EnumFmt<T> {
    type Value = T;

    fn serialize(w: &mut Writer<S>, value: &T, _guard: NestingGuard) -> Result<(), JsonError> {
        let name = value.to_name().ok_or_else(|| {
            JsonError::new(JsonErrorKind::InvalidEnumValue, w.len(), "value is not a declared enum member")
        })?;
        w.write_string(name);
        Ok(())
    }

    fn deserialize(r: &mut Reader<S>) -> Result<T, JsonError> {
        let start = r.pos();
        let name = r.read_string()?;
        name_table::<T>()
            .get(name.as_str())
            .copied()
            .ok_or_else(|| JsonError::new(JsonErrorKind::InvalidEnumName, start, format!("'{}' is not a declared enum member", name)))
    }
}

/// Enum types are never recursion candidates and are `Formattable` for
/// every symbol type via `EnumFmt`. Both are one-line impls a concrete
/// enum (or its `#[derive(Formattable)]` expansion) writes directly —
/// deliberately *not* blanket impls over `JsonEnum`, since a blanket
/// `impl<T: JsonEnum> Formattable<S> for T` would conflict with the
/// direct primitive impls in `primitive.rs` under Rust's coherence
/// rules (a downstream crate could legally implement the local
/// `JsonEnum` trait for a foreign type like `bool`).
#[macro_export]
macro_rules! impl_json_enum_formattable {
    ($ty:ty) => {
        impl $crate::recursion::RecursionCandidate for $ty {
            const IS_RECURSION_CANDIDATE: bool = false;
        }
        impl<S: $crate::symbol::Symbol> $crate::formatter::Formattable<S> for $ty {
            type F = $crate::enums::EnumFmt<$ty>;
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Utf8;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    impl JsonEnum for Color {
        const MEMBERS: &'static [(Color, &'static str)] =
            &[(Color::Red, "Red"), (Color::Green, "Green"), (Color::Blue, "Blue")];
    }

    crate::impl_json_enum_formattable!(Color);

    #[test]
    fn serializes_as_name() {
        let mut w = Writer::<Utf8>::with_capacity(16);
        EnumFmt::<Color>::serialize(&mut w, &Color::Green, NestingGuard::root()).unwrap();
        assert_eq!(w.into_inner(), br#""Green""#);
    }

    #[test]
    fn deserializes_known_name() {
        let bytes: Vec<u8> = br#""Blue""#.to_vec();
        let mut r = Reader::<Utf8>::new(&bytes);
        assert_eq!(EnumFmt::<Color>::deserialize(&mut r).unwrap(), Color::Blue);
    }

    #[test]
    fn unknown_name_is_invalid_enum_name() {
        let bytes: Vec<u8> = br#""Violet""#.to_vec();
        let mut r = Reader::<Utf8>::new(&bytes);
        let err = EnumFmt::<Color>::deserialize(&mut r).unwrap_err();
        assert_eq!(err.kind, JsonErrorKind::InvalidEnumName);
    }
}
