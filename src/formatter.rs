//! The Formatter Contract (FC, `spec` §4.1) and the compile-time
//! resolver (R, `spec` §2/§6) that connects a value type to its
//! formatter.

use crate::buffer::{Reader, Writer};
use crate::error::JsonError;
use crate::recursion::NestingGuard;
use crate::symbol::Symbol;

/// A stateless encoder/decoder pair for `Self::Value`, specialized for
/// one symbol type `S`. Formatters hold no state and are reentrant
/// across distinct reader/writer instances (spec §4.1).
pub trait Formatter<S: Symbol> {
    type Value;

    /// Emit `value`'s JSON representation into `w`. `guard` carries the
    /// nesting budget; composites that recurse into a child of a
    /// recursion-candidate type must call `guard.enter::<Child>(offset)`
    /// before doing so.
    fn serialize(w: &mut Writer<S>, value: &Self::Value, guard: NestingGuard) -> Result<(), JsonError>;

    /// Consume a JSON value starting at `r`'s cursor and return it.
    fn deserialize(r: &mut Reader<S>) -> Result<Self::Value, JsonError>;

    /// Whether `serialize`ing `value` would itself emit the bare `null`
    /// token. `false` for almost every formatter; the non-finite float
    /// encoding (`spec` §4.9) is the one exception. `NullableFmt`
    /// consults this to refuse wrapping a value that would otherwise be
    /// indistinguishable from `None` on the way back in.
    fn emits_null_for(_value: &Self::Value) -> bool {
        false
    }
}

/// The resolver contract from `spec` §2/§6: given a value type and a
/// symbol type, produce the canonical formatter. Reflection-based
/// registry *construction* is out of scope (spec §1); in Rust the
/// registry collapses to trait resolution, which rustc performs at
/// compile time and monomorphizes for free — no runtime lookup, no
/// singleton cache to manage (spec §9's design note on per-triple
/// specialized formatters).
pub trait Formattable<S: Symbol>: Sized {
    type F: Formatter<S, Value = Self>;
}

/// Sugar for `<T as Formattable<S>>::F::serialize`, mirroring
/// `get_formatter_for<T>()` from spec §2.
pub fn serialize<S: Symbol, T: Formattable<S>>(
    w: &mut Writer<S>,
    value: &T,
    guard: NestingGuard,
) -> Result<(), JsonError> {
    T::F::serialize(w, value, guard)
}

/// Sugar for `<T as Formattable<S>>::F::deserialize`.
pub fn deserialize<S: Symbol, T: Formattable<S>>(r: &mut Reader<S>) -> Result<T, JsonError> {
    T::F::deserialize(r)
}
