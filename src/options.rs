//! Runtime-constructible configuration for a codec session (`spec` §9:
//! "the configured maximum nesting limit... should be configurable per
//! resolver").
//!
//! `Formattable`/`Formatter` dispatch is resolved entirely at compile
//! time (`spec` §6), but the nesting bound is naturally a runtime value
//! a caller may want to tune per call site (e.g. a stricter bound for
//! untrusted input) without introducing a new monomorphization. It lives
//! here rather than as a type parameter for exactly that reason.
use crate::hint::DEFAULT_HINT;
use crate::recursion::DEFAULT_MAX_NESTING;

/// The field-naming/null-exclusion case a session is nominally running
/// under, as a plain runtime value rather than the compile-time
/// `FieldPolicy` marker (`policy.rs`) generated code actually dispatches
/// on. Exists so a caller (or a log line) can inspect or report which
/// policy is in effect without threading a type parameter through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyIdentity {
    pub exclude_nulls: bool,
    pub case: FieldCase,
}

/// Field-name casing a policy identity claims to use. Only `Original`
/// exists today — `policy::DefaultPolicy` keeps the Rust field spelling
/// verbatim — but the type gives a non-default policy somewhere to
/// register a different case convention later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldCase {
    Original,
}

impl PolicyIdentity {
    pub const DEFAULT: PolicyIdentity = PolicyIdentity {
        exclude_nulls: true,
        case: FieldCase::Original,
    };
}

impl Default for PolicyIdentity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Session-wide knobs for the façade entry points.
#[derive(Clone, Copy, Debug)]
pub struct CodecOptions {
    max_nesting: u32,
    sticky_hint_floor: usize,
    policy: PolicyIdentity,
}

impl CodecOptions {
    pub fn new() -> Self {
        CodecOptions {
            max_nesting: DEFAULT_MAX_NESTING,
            sticky_hint_floor: DEFAULT_HINT,
            policy: PolicyIdentity::DEFAULT,
        }
    }

    pub fn with_max_nesting(mut self, max_nesting: u32) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    pub fn max_nesting(&self) -> u32 {
        self.max_nesting
    }

    /// Minimum buffer capacity the façade pre-allocates even when the
    /// sticky hint for this session's `(T, S)` is smaller (e.g. on the
    /// very first call for a triple, before any hint has been recorded).
    pub fn with_sticky_hint_floor(mut self, floor: usize) -> Self {
        self.sticky_hint_floor = floor;
        self
    }

    pub fn sticky_hint_floor(&self) -> usize {
        self.sticky_hint_floor
    }

    pub fn with_policy(mut self, policy: PolicyIdentity) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> PolicyIdentity {
        self.policy
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_resolver_default_policy() {
        let opts = CodecOptions::default();
        assert_eq!(opts.max_nesting(), DEFAULT_MAX_NESTING);
        assert_eq!(opts.sticky_hint_floor(), DEFAULT_HINT);
        assert_eq!(opts.policy(), PolicyIdentity::DEFAULT);
    }

    #[test]
    fn builder_methods_override_one_field_at_a_time() {
        let opts = CodecOptions::default().with_max_nesting(4).with_sticky_hint_floor(64);
        assert_eq!(opts.max_nesting(), 4);
        assert_eq!(opts.sticky_hint_floor(), 64);
    }
}
