//! The nullable formatter (CF, `spec` §4.3): `Option<T>` over a
//! non-nullable-by-default `T`.

use std::marker::PhantomData;

use crate::buffer::{Reader, Writer};
use crate::error::{JsonError, JsonErrorKind};
use crate::formatter::{Formattable, Formatter};
use crate::recursion::NestingGuard;
use crate::symbol::Symbol;

#[doc(hidden)]
pub struct NullableFmt<T>(PhantomData<T>);

impl<S: Symbol, T> Formatter<S> for NullableFmt<T>
where
    T: Formattable<S>,
{
    type Value = Option<T>;

    fn serialize(w: &mut Writer<S>, value: &Option<T>, guard: NestingGuard) -> Result<(), JsonError> {
        match value {
            // A nullable wrapper is not itself a recursion candidate —
            // the inner type carries that property, so `guard` passes
            // through unchanged (spec §4.3).
            None => {
                w.write_null();
                Ok(())
            }
            Some(inner) => {
                // A value whose own wire form is the bare `null` token
                // (the non-finite float encoding) can't be wrapped here:
                // `deserialize` would read it back as `None`, silently
                // turning `Some(NaN)` into `None`.
                if T::F::emits_null_for(inner) {
                    return Err(JsonError::new(
                        JsonErrorKind::OutOfRange,
                        w.len(),
                        "non-finite value cannot be serialized as Option: indistinguishable from null",
                    ));
                }
                T::F::serialize(w, inner, guard)
            }
        }
    }

    fn deserialize(r: &mut Reader<S>) -> Result<Option<T>, JsonError> {
        if r.read_is_null()? {
            Ok(None)
        } else {
            Ok(Some(T::F::deserialize(r)?))
        }
    }
}

impl<S: Symbol, T: Formattable<S>> Formattable<S> for Option<T> {
    type F = NullableFmt<T>;
}
