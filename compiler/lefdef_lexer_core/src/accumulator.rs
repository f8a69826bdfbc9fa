//! Scratch buffer for one raw token.

/// Initial capacity of a fresh accumulator.
pub const DEFAULT_TOKEN_CAPACITY: usize = 4096;

/// The accumulator could not grow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("token buffer could not grow beyond {capacity} bytes")]
pub struct CapacityError {
    pub capacity: usize,
}

/// Growable byte buffer reused across raw-token scans.
///
/// Capacity doubles when full and is never given back, so a long token
/// early in a file does not cost reallocations later.
#[derive(Clone, Debug)]
pub struct TokenAccumulator {
    buf: Vec<u8>,
}

impl Default for TokenAccumulator {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TOKEN_CAPACITY)
    }
}

impl TokenAccumulator {
    pub fn with_capacity(capacity: usize) -> Self {
        TokenAccumulator {
            buf: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Start a new token, keeping the allocation.
    #[inline]
    pub fn begin(&mut self) {
        self.buf.clear();
    }

    /// Append one byte, doubling the capacity when full.
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), CapacityError> {
        if self.buf.len() == self.buf.capacity() {
            self.grow()?;
        }
        self.buf.push(byte);
        Ok(())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.buf.first().copied()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[cold]
    fn grow(&mut self) -> Result<(), CapacityError> {
        let capacity = self.buf.capacity();
        self.buf
            .try_reserve_exact(capacity.max(1))
            .map_err(|_| CapacityError { capacity })
    }
}
