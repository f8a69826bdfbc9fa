//! Byte sources feeding the buffered reader.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Supplier of raw input bytes.
///
/// `read` follows `io::Read` conventions: it fills a prefix of `buf` and
/// returns its length, `Ok(0)` meaning end of input.
pub trait ByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Name used in diagnostics, usually the file name.
    fn name(&self) -> &str;
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Any `io::Read` with a display name.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    name: String,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R, name: impl Into<String>) -> Self {
        ReadSource {
            inner,
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl ReadSource<File> {
    /// Open a file, naming the source after its path.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(ReadSource::new(file, path.display().to_string()))
    }
}

impl<'a> ReadSource<&'a [u8]> {
    /// In-memory input.
    pub fn from_bytes(bytes: &'a [u8], name: impl Into<String>) -> Self {
        ReadSource::new(bytes, name)
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// User-supplied read function, for transports the reader does not know
/// about (compressed or encrypted streams, sockets).
pub struct CallbackSource<F> {
    read: F,
    name: String,
}

impl<F> CallbackSource<F>
where
    F: FnMut(&mut [u8]) -> io::Result<usize>,
{
    pub fn new(name: impl Into<String>, read: F) -> Self {
        CallbackSource {
            read,
            name: name.into(),
        }
    }
}

impl<F> ByteSource for CallbackSource<F>
where
    F: FnMut(&mut [u8]) -> io::Result<usize>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (self.read)(buf)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for CallbackSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
