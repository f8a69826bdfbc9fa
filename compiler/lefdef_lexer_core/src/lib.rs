//! Input plumbing for the LEF/DEF tokenizer.
//!
//! This crate has no knowledge of LEF or DEF syntax. It provides:
//! - [`ByteSource`]: where bytes come from (files, readers, user callbacks)
//! - [`BufferedReader`]: block-buffered byte reader with pushback, `\r`
//!   stripping and line counting
//! - [`TokenAccumulator`]: growable scratch buffer for one raw token
//! - [`StringArena`]: ring of reusable string slots handing out
//!   generation-checked [`ArenaRef`] handles
//!
//! The tokenizer in `lefdef_lexer` builds on these; tools that only need
//! line-aware byte input can depend on this crate alone.

mod accumulator;
mod arena;
mod byte_source;
mod reader;

pub use accumulator::{CapacityError, TokenAccumulator, DEFAULT_TOKEN_CAPACITY};
pub use arena::{ArenaError, ArenaRef, StringArena, MIN_SLOTS};
pub use byte_source::{ByteSource, CallbackSource, ReadSource};
pub use reader::{BufferedReader, ReaderError, DEFAULT_BLOCK_SIZE, PROBE_LEN};
