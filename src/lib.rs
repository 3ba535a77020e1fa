//! A JSON codec whose core formatter engine is generic over the wire's
//! symbol type, so the same code serializes to UTF-8 bytes or UTF-16
//! code units without choosing one at compile time for the whole crate.
//!
//! Dispatch from a value's type to its formatter is resolved by rustc at
//! compile time via the [`Formattable`] trait, not by a runtime registry
//! keyed on reflection — there's no dynamic lookup on the hot path, and
//! the compiler monomorphizes each `(Value, Symbol)` pair into its own
//! specialized code.
//!
//! Most callers only need the [`facade`] entry points:
//!
//! ```
//! use symbolic_json::facade::utf8;
//!
//! let encoded = utf8::to_string(&vec![1u32, 2, 3]).unwrap();
//! assert_eq!(encoded, "[1,2,3]");
//!
//! let decoded: Vec<u32> = utf8::from_str(&encoded).unwrap();
//! assert_eq!(decoded, vec![1, 2, 3]);
//! ```
//!
//! [`Formattable`]: formatter::Formattable

pub mod array;
pub mod buffer;
pub mod enums;
pub mod error;
pub mod facade;
pub mod formatter;
pub mod hint;
pub mod nullable;
pub mod options;
pub mod policy;
pub mod pool;
pub mod primitive;
pub mod recursion;
pub mod registry;
pub mod scalar;
pub mod symbol;

pub use error::{JsonError, JsonErrorKind, Result};
pub use formatter::{Formattable, Formatter};
pub use options::{CodecOptions, FieldCase, PolicyIdentity};
pub use symbol::{Symbol, Utf16, Utf8};

/// `#[derive(Formattable)]`, generating an object or enum impl of the
/// [`Formattable`] trait above. See `symbolic_json_derive`'s crate docs
/// for exactly what gets generated.
#[cfg(feature = "derive")]
pub use symbolic_json_derive::Formattable;
