//! The session façade (`spec` §4.6): the small set of entry points a
//! caller actually reaches for — `to_string`/`from_str` and friends —
//! built on top of the resolver and the sticky hint rather than
//! exposing `Writer`/`Reader` directly.
//!
//! [`utf8`] and [`utf16`] are thin, symbol-fixed wrappers over the two
//! generic functions in this module. Nothing here is specific to either
//! encoding; `S` is resolved once at the call site via `Formattable<S>`.

pub mod utf16;
pub mod utf8;

#[cfg(feature = "async")]
pub mod cancel;
#[cfg(feature = "async")]
pub mod r#async;

use std::marker::PhantomData;

use crate::error::JsonError;
use crate::formatter::Formattable;
use crate::hint;
use crate::options::CodecOptions;
use crate::recursion::NestingGuard;
use crate::symbol::Symbol;

/// Hint-table key for the triple a given façade call serializes or
/// deserializes. Policy is fixed to the default for now: no façade entry
/// point threads a non-default `FieldPolicy` yet (see `spec` §6's Open
/// Question on resolver policy identity).
struct HintKey<T, S>(PhantomData<(T, S)>);

/// Serialize `value` to a freshly allocated buffer of `S::Unit`s,
/// pre-sized from the sticky hint for `(T, S)` and updating it
/// afterward to the buffer's final length.
pub fn serialize_to_units<S: Symbol, T: Formattable<S> + 'static>(
    value: &T,
    options: CodecOptions,
) -> Result<Vec<S::Unit>, JsonError> {
    let capacity = hint::get::<HintKey<T, S>>().max(options.sticky_hint_floor());
    let mut writer = crate::buffer::Writer::<S>::with_capacity(capacity);
    let guard = NestingGuard::new(options.max_nesting());
    T::F::serialize(&mut writer, value, guard)?;
    hint::set::<HintKey<T, S>>(writer.len());
    Ok(writer.into_inner())
}

/// Deserialize a `T` from a complete, already-in-memory view. Updates
/// the sticky hint to the view's length before parsing, since a caller
/// handing us this many units is itself a useful size signal for the
/// next session even if parsing fails partway through.
pub fn deserialize_from_units<S: Symbol, T: Formattable<S> + 'static>(units: &[S::Unit]) -> Result<T, JsonError> {
    hint::set::<HintKey<T, S>>(units.len());
    let mut reader = crate::buffer::Reader::<S>::new(units);
    T::F::deserialize(&mut reader)
}
