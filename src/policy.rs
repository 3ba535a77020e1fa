//! The policy identity a user-aggregate formatter consults when
//! deciding field names and whether to omit absent optional fields
//! (`spec` §6: "the resolver also exposes `default_resolver_for_encoding(S)`
//! with policy exclude-nulls, original-case").
//!
//! The core engine never applies a policy itself — it is a type-level
//! parameter threaded through to aggregate `Formatter` impls generated
//! by `#[derive(Formattable)]`, exactly as spec §6 describes.

/// A compile-time policy marker. Implementors decide field naming and
/// null handling for a generated aggregate formatter.
pub trait FieldPolicy: 'static {
    /// Whether a field holding `None` is omitted from the object
    /// entirely, rather than written as `"field": null`.
    const EXCLUDE_NULLS: bool;

    /// Map a Rust field identifier to its wire name.
    fn field_name(rust_name: &'static str) -> &'static str;
}

/// The resolver's default policy: exclude nulls, keep the field's
/// original (Rust) spelling.
pub struct DefaultPolicy;

impl FieldPolicy for DefaultPolicy {
    const EXCLUDE_NULLS: bool = true;

    fn field_name(rust_name: &'static str) -> &'static str {
        rust_name
    }
}
