//! Recursion-candidate classification and the nesting-depth accounting
//! composites consult before recursing into a child formatter.

use crate::error::JsonError;

/// Whether values of `Self` may transitively contain further `Self`
/// values, directly or indirectly. `false` for every non-recursive type
/// (all primitives, and any composite whose element type is itself not
/// a recursion candidate); `true` for the rare self-referential
/// aggregate.
///
/// This is spec §9's "compile-time constant" resolved directly as an
/// associated `const`: rustc evaluates it at compile time, so composites
/// pay nothing to consult it.
pub trait RecursionCandidate {
    const IS_RECURSION_CANDIDATE: bool;
}

macro_rules! not_a_candidate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RecursionCandidate for $ty {
                const IS_RECURSION_CANDIDATE: bool = false;
            }
        )*
    };
}

not_a_candidate!(bool, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, String);

impl<T: RecursionCandidate> RecursionCandidate for Option<T> {
    const IS_RECURSION_CANDIDATE: bool = T::IS_RECURSION_CANDIDATE;
}

impl<T: RecursionCandidate> RecursionCandidate for Vec<T> {
    const IS_RECURSION_CANDIDATE: bool = T::IS_RECURSION_CANDIDATE;
}

/// The maximum composite-recursion depth tolerated during serialization,
/// absent an explicit override (spec §4.5, §9).
pub const DEFAULT_MAX_NESTING: u32 = 256;

/// Tracks recursion depth through a single serialize call, failing once
/// the configured bound is crossed. Cheap to pass by value: composites
/// call `enter` and hand the returned guard down to the child formatter.
#[derive(Clone, Copy, Debug)]
pub struct NestingGuard {
    depth: u32,
    max: u32,
}

impl NestingGuard {
    /// A fresh guard at the top of a serialize session.
    pub fn new(max: u32) -> Self {
        tracing::trace!(max, "constructing nesting guard");
        NestingGuard { depth: 0, max }
    }

    pub fn root() -> Self {
        Self::new(DEFAULT_MAX_NESTING)
    }

    /// Consulted by a composite before recursing into a child of type
    /// `T`. Bumps the depth counter only when `T` is a recursion
    /// candidate; otherwise returns a guard identical to `self`.
    pub fn enter<T: RecursionCandidate>(self, offset: usize) -> Result<Self, JsonError> {
        if !T::IS_RECURSION_CANDIDATE {
            return Ok(self);
        }
        let depth = self.depth + 1;
        if depth > self.max {
            tracing::warn!(depth, max = self.max, offset, "nesting limit exceeded");
            return Err(JsonError::new(
                crate::error::JsonErrorKind::NestingExceeded,
                offset,
                "recursion depth exceeded the configured maximum nesting",
            ));
        }
        Ok(NestingGuard { depth, max: self.max })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cyclic;
    impl RecursionCandidate for Cyclic {
        const IS_RECURSION_CANDIDATE: bool = true;
    }

    #[test]
    fn non_candidate_never_trips() {
        let g = NestingGuard::new(1);
        for _ in 0..1000 {
            assert!(g.enter::<bool>(0).is_ok());
        }
    }

    #[test]
    fn candidate_trips_at_bound() {
        let mut g = NestingGuard::new(3);
        for _ in 0..3 {
            g = g.enter::<Cyclic>(0).unwrap();
        }
        assert!(g.enter::<Cyclic>(0).is_err());
    }
}
