//! Coverage for the `async` feature's façade: chunked reads through a
//! non-seekable source, the zero-copy slice fast path, and cooperative
//! cancellation.

use symbolic_json::facade::cancel::CancelToken;
use symbolic_json::facade::r#async;

#[tokio::test]
async fn round_trips_through_a_chunked_reader() {
    let value: Vec<i64> = (0..500).collect();
    let mut sink = Vec::new();
    r#async::to_writer(&value, &mut sink, &CancelToken::new()).await.unwrap();

    // tokio::io::Cursor's AsyncRead impl hands back data in whatever
    // chunks the caller's buffer asks for, so this exercises the
    // grow-on-fill loop in `from_reader` the same way a real socket would.
    let cursor = std::io::Cursor::new(sink);
    let decoded: Vec<i64> = r#async::from_reader(cursor, &CancelToken::new()).await.unwrap();
    assert_eq!(decoded, value);
}

#[tokio::test]
async fn from_slice_is_exercised_without_any_reader_plumbing() {
    let value = vec!["a".to_string(), "b".to_string()];
    let mut sink = Vec::new();
    r#async::to_writer(&value, &mut sink, &CancelToken::new()).await.unwrap();

    let decoded: Vec<String> = r#async::from_slice(&sink, &CancelToken::new()).await.unwrap();
    assert_eq!(decoded, value);
}

#[tokio::test]
async fn cancelling_before_the_read_short_circuits_from_reader() {
    let token = CancelToken::new();
    token.cancel();
    let cursor = std::io::Cursor::new(b"[1,2,3]".to_vec());
    let err = r#async::from_reader::<_, Vec<i32>>(cursor, &token).await.unwrap_err();
    assert!(matches!(err, symbolic_json::error::FacadeError::Codec(e) if e.kind == symbolic_json::JsonErrorKind::Cancelled));
}
