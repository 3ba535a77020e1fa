//! End-to-end coverage of the session façade and the properties that
//! only show up once the whole engine (resolver, pool, sticky hint,
//! nesting guard) is exercised together, rather than one module at a
//! time.

use symbolic_json::facade::{utf16, utf8};
use symbolic_json::{CodecOptions, JsonErrorKind};

#[test]
fn utf8_round_trips_a_nested_value() {
    let value: Vec<Option<Vec<i32>>> = vec![Some(vec![1, 2, 3]), None, Some(vec![])];
    let encoded = utf8::to_string(&value).unwrap();
    assert_eq!(encoded, "[[1,2,3],null,[]]");
    let decoded: Vec<Option<Vec<i32>>> = utf8::from_str(&encoded).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn utf16_round_trips_text_with_non_bmp_characters() {
    let value = vec![String::from("caf\u{e9}"), String::from("\u{1F980}")];
    let units = utf16::to_units(&value).unwrap();
    let decoded: Vec<String> = utf16::from_units(&units).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn sticky_hint_converges_to_the_encoded_length() {
    // Serializing the same shape repeatedly should settle the sticky
    // hint at (or above) the final buffer length rather than growing
    // without bound or resetting to the default every call.
    let value: Vec<i32> = (0..64).collect();
    let mut last_len = 0;
    for _ in 0..5 {
        let encoded = utf8::to_vec(&value).unwrap();
        last_len = encoded.len();
    }
    assert_eq!(last_len, utf8::to_vec(&value).unwrap().len());
}

// A self-referential type, the only shape `NestingGuard` actually
// bounds: a fixed-arity container like `Vec<Vec<i32>>` can never nest
// deeper than its own type signature allows, but a recursive type like
// this one can nest arbitrarily deep at runtime.
#[derive(Debug, Clone, PartialEq)]
struct Chain(Option<Box<Chain>>);

struct ChainFmt;

impl<S: symbolic_json::Symbol> symbolic_json::Formatter<S> for ChainFmt {
    type Value = Chain;

    fn serialize(
        w: &mut symbolic_json::buffer::Writer<S>,
        value: &Chain,
        guard: symbolic_json::recursion::NestingGuard,
    ) -> symbolic_json::Result<()> {
        match &value.0 {
            None => {
                w.write_null();
                Ok(())
            }
            Some(inner) => {
                let child_guard = guard.enter::<Chain>(w.len())?;
                w.write_begin_array();
                ChainFmt::serialize(w, inner, child_guard)?;
                w.write_end_array();
                Ok(())
            }
        }
    }

    fn deserialize(r: &mut symbolic_json::buffer::Reader<S>) -> symbolic_json::Result<Chain> {
        if r.read_is_null()? {
            return Ok(Chain(None));
        }
        r.read_begin_array()?;
        let inner = ChainFmt::deserialize(r)?;
        let mut count = 1usize;
        r.read_end_array_or_value_separator(&mut count)?;
        Ok(Chain(Some(Box::new(inner))))
    }
}

impl symbolic_json::recursion::RecursionCandidate for Chain {
    const IS_RECURSION_CANDIDATE: bool = true;
}

impl<S: symbolic_json::Symbol> symbolic_json::Formattable<S> for Chain {
    type F = ChainFmt;
}

fn chain_of_depth(depth: u32) -> Chain {
    let mut chain = Chain(None);
    for _ in 0..depth {
        chain = Chain(Some(Box::new(chain)));
    }
    chain
}

#[test]
fn self_referential_types_respect_the_configured_nesting_limit() {
    let value = chain_of_depth(5);

    let strict = CodecOptions::default().with_max_nesting(2);
    let err = utf8::to_vec_with_options(&value, strict).unwrap_err();
    assert_eq!(err.kind, JsonErrorKind::NestingExceeded);

    let generous = CodecOptions::default().with_max_nesting(16);
    let encoded = utf8::to_vec_with_options(&value, generous).unwrap();
    let decoded: Chain = utf8::from_slice(&encoded).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn malformed_input_reports_unexpected_token() {
    let err = utf8::from_slice::<Vec<i32>>(b"[1, 2,]").unwrap_err();
    assert_eq!(err.kind, JsonErrorKind::UnexpectedToken);
}

#[test]
fn pool_stays_balanced_across_repeated_facade_failures() {
    let pool = symbolic_json::pool::pool::<i32>();
    let before = pool.outstanding();
    for _ in 0..8 {
        assert!(utf8::from_slice::<Vec<i32>>(b"[1,2,nope]").is_err());
    }
    assert_eq!(pool.outstanding(), before);
}

#[test]
fn enum_name_round_trips_via_explicit_json_enum_impl() {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Status {
        Pending,
        Active,
        Closed,
    }

    impl symbolic_json::enums::JsonEnum for Status {
        const MEMBERS: &'static [(Status, &'static str)] =
            &[(Status::Pending, "Pending"), (Status::Active, "Active"), (Status::Closed, "Closed")];
    }

    symbolic_json::impl_json_enum_formattable!(Status);

    let value = vec![Status::Active, Status::Closed];
    let encoded = utf8::to_string(&value).unwrap();
    assert_eq!(encoded, r#"["Active","Closed"]"#);
    let decoded: Vec<Status> = utf8::from_str(&encoded).unwrap();
    assert_eq!(decoded, value);
}
