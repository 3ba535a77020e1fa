//! Asynchronous entry points over `tokio::io::AsyncRead`/`AsyncWrite`
//! (`spec` §4.6, `async` feature).
//!
//! The core engine (`Writer`/`Reader`, every `Formatter`) is entirely
//! synchronous and operates on a contiguous in-memory view — there is no
//! way to suspend mid-symbol. The façade honors this: it materializes
//! the whole value (on the write side) or the whole input (on the read
//! side) before handing it to the synchronous core, and only awaits at
//! the I/O boundary around that core call. This matches spec §4.6's
//! "asynchrony belongs to the boundary, not the codec" design note.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{FacadeError, JsonError, JsonErrorKind};
use crate::formatter::Formattable;
use crate::hint;
use crate::options::CodecOptions;
use crate::pool;
use crate::symbol::{Symbol, Utf8};

use super::cancel::CancelToken;
use super::serialize_to_units;

/// Bridges a symbol sink to the underlying async I/O primitive for a
/// given [`Symbol`] (`spec` §6). Concretely implemented only for
/// [`Utf8`] over `tokio::io::AsyncWrite` — the UTF-16 async surface
/// would need a `futures`-style `Sink<String>` analog operating on
/// byte-reinterpreted `u16` chunks, which is out of scope here (see
/// `DESIGN.md`'s Open Questions).
#[async_trait::async_trait]
pub trait AsyncSymbolSink<S: Symbol> {
    async fn write_symbols(&mut self, units: &[S::Unit]) -> std::io::Result<()>;
    async fn flush_symbols(&mut self) -> std::io::Result<()>;
}

#[async_trait::async_trait]
impl<W: AsyncWrite + Unpin + Send> AsyncSymbolSink<Utf8> for W {
    async fn write_symbols(&mut self, units: &[u8]) -> std::io::Result<()> {
        self.write_all(units).await
    }

    async fn flush_symbols(&mut self) -> std::io::Result<()> {
        self.flush().await
    }
}

/// Bridges a symbol source to the underlying async I/O primitive for a
/// given [`Symbol`]. See [`AsyncSymbolSink`] for why only [`Utf8`] has a
/// concrete bridge.
#[async_trait::async_trait]
pub trait AsyncSymbolSource<S: Symbol> {
    async fn read_symbols(&mut self, buf: &mut [S::Unit]) -> std::io::Result<usize>;
}

#[async_trait::async_trait]
impl<R: AsyncRead + Unpin + Send> AsyncSymbolSource<Utf8> for R {
    async fn read_symbols(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.read(buf).await
    }
}

/// Serialize `value` and write it to `sink`, checking `cancel` once
/// before encoding and once more before the write.
pub async fn to_writer<W, T>(value: &T, mut sink: W, cancel: &CancelToken) -> Result<(), FacadeError>
where
    W: AsyncSymbolSink<Utf8>,
    T: Formattable<Utf8> + 'static,
{
    if cancel.is_cancelled() {
        return Err(JsonError::new(JsonErrorKind::Cancelled, 0, "cancelled before encoding").into());
    }
    let bytes = serialize_to_units::<Utf8, T>(value, CodecOptions::default())?;
    if cancel.is_cancelled() {
        return Err(JsonError::new(JsonErrorKind::Cancelled, bytes.len(), "cancelled before sink write").into());
    }
    sink.write_symbols(&bytes).await?;
    sink.flush_symbols().await?;
    Ok(())
}

/// Deserialize a `T` from an already-complete in-memory buffer. This is
/// the zero-copy fast path spec §4.6 calls out for random-access,
/// length-known sources: there is no I/O to perform at all, so the
/// async wrapper only exists for call-site uniformity with [`from_reader`].
pub async fn from_slice<T>(bytes: &[u8], cancel: &CancelToken) -> Result<T, FacadeError>
where
    T: Formattable<Utf8> + 'static,
{
    if cancel.is_cancelled() {
        return Err(JsonError::new(JsonErrorKind::Cancelled, 0, "cancelled before parsing").into());
    }
    Ok(super::deserialize_from_units::<Utf8, T>(bytes)?)
}

/// Deserialize a `T` read incrementally from `source`. Reads into a
/// pooled buffer pre-sized by the sticky hint for `(T, Utf8)`, doubling
/// the rental whenever it fills, then drives the synchronous parser
/// once the source is exhausted. The rental returns to the pool on
/// every exit path via `PooledVec`'s drop glue.
pub async fn from_reader<R, T>(mut source: R, cancel: &CancelToken) -> Result<T, FacadeError>
where
    R: AsyncSymbolSource<Utf8>,
    T: Formattable<Utf8> + 'static,
{
    if cancel.is_cancelled() {
        return Err(JsonError::new(JsonErrorKind::Cancelled, 0, "cancelled before first read").into());
    }

    struct ReaderHintKey<T>(std::marker::PhantomData<T>);
    let hinted_capacity = hint::get::<ReaderHintKey<T>>();

    let byte_pool = pool::pool::<u8>();
    let mut buf = byte_pool.rent(hinted_capacity);

    loop {
        let start = buf.len();
        if buf.capacity() == start {
            let grow_by = buf.capacity().max(4096);
            buf.reserve(grow_by);
        }
        let spare = buf.capacity() - start;
        buf.resize(start + spare, 0);
        let read = source.read_symbols(&mut buf[start..]).await?;
        buf.truncate(start + read);
        if read == 0 {
            break;
        }
        if cancel.is_cancelled() {
            return Err(JsonError::new(JsonErrorKind::Cancelled, buf.len(), "cancelled at a read boundary").into());
        }
    }

    hint::set::<ReaderHintKey<T>>(buf.len());
    Ok(super::deserialize_from_units::<Utf8, T>(&buf)?)
}
