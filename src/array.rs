//! The array formatter (CF, `spec` §4.2): a homogeneous, ordered
//! sequence of `T`.
//!
//! The source protocol rents a fixed-capacity array from a pool and
//! doubles it manually on overflow because its pool only hands out
//! fixed-size arrays. `Vec<T>`'s own amortized-doubling growth already
//! gives the same asymptotic behavior, so the scratch buffer here is a
//! pooled `Vec<T>` grown with ordinary `push` — the pool still avoids
//! re-allocating the backing storage across sessions (spec's "buffer
//! economy" concern), it just lets `Vec` do the doubling instead of
//! reimplementing it by hand (see `DESIGN.md`).

use std::marker::PhantomData;

use crate::buffer::{Reader, Writer};
use crate::error::JsonError;
use crate::formatter::{Formattable, Formatter};
use crate::pool;
use crate::recursion::{NestingGuard, RecursionCandidate};
use crate::symbol::Symbol;

#[doc(hidden)]
pub struct ArrayFmt<T>(PhantomData<T>);

impl<S: Symbol, T> Formatter<S> for ArrayFmt<T>
where
    T: Formattable<S> + RecursionCandidate + Send + Sync + 'static,
{
    type Value = Vec<T>;

    fn serialize(w: &mut Writer<S>, value: &Vec<T>, guard: NestingGuard) -> Result<(), JsonError> {
        let child_guard = guard.enter::<T>(w.len())?;
        w.write_begin_array();
        let mut first = true;
        for element in value {
            if !first {
                w.write_value_separator();
            }
            first = false;
            T::F::serialize(w, element, child_guard)?;
        }
        w.write_end_array();
        Ok(())
    }

    fn deserialize(r: &mut Reader<S>) -> Result<Vec<T>, JsonError> {
        r.read_begin_array()?;
        let p = pool::pool::<T>();
        let mut scratch = p.rent(4);
        let mut count = 0usize;
        loop {
            let continue_ = r.read_end_array_or_value_separator(&mut count)?;
            if !continue_ {
                break;
            }
            let element = T::F::deserialize(r)?;
            scratch.push(element);
        }
        if count == 0 {
            return Ok(Vec::new());
        }
        let mut result = Vec::with_capacity(count);
        result.extend(scratch.drain(..));
        Ok(result)
    }
}

impl<S: Symbol, T> Formattable<S> for Vec<T>
where
    T: Formattable<S> + RecursionCandidate + Send + Sync + 'static,
{
    type F = ArrayFmt<T>;
}
