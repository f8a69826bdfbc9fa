//! Alias and define tables, and the stack of pending expansions.

use std::borrow::Cow;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{LexError, RedefinitionPolicy};

/// Numeric `&DEFINE` value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumericDefine {
    Integer(i64),
    Real(f64),
}

impl NumericDefine {
    #[allow(clippy::cast_precision_loss, reason = "token numbers are f64")]
    pub fn value(self) -> f64 {
        match self {
            NumericDefine::Integer(n) => n as f64,
            NumericDefine::Real(x) => x,
        }
    }
}

/// Result of registering a name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Definition {
    New,
    Replaced,
    /// The name existed and the policy kept the old value.
    Rejected,
}

/// Session-wide name tables.
///
/// Keys never include the leading `&`, so `&ALIAS &X` and `&ALIAS X` both
/// define what `&X` expands to. When names are case insensitive keys are
/// stored upper-cased.
#[derive(Clone, Debug, Default)]
pub struct MacroTables {
    case_sensitive: bool,
    aliases: FxHashMap<Box<str>, Rc<str>>,
    text_defines: FxHashMap<Box<str>, Rc<str>>,
    numeric_defines: FxHashMap<Box<str>, NumericDefine>,
    boolean_defines: FxHashMap<Box<str>, bool>,
}

impl MacroTables {
    pub fn new(case_sensitive: bool) -> Self {
        MacroTables {
            case_sensitive,
            ..MacroTables::default()
        }
    }

    fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        let bare = name.strip_prefix('&').unwrap_or(name);
        if self.case_sensitive {
            Cow::Borrowed(bare)
        } else {
            Cow::Owned(bare.to_ascii_uppercase())
        }
    }

    pub fn define_alias(
        &mut self,
        name: &str,
        body: impl Into<Rc<str>>,
        policy: RedefinitionPolicy,
    ) -> Definition {
        let key = self.key(name).into_owned().into_boxed_str();
        insert(&mut self.aliases, key, body.into(), policy)
    }

    pub fn define_text(
        &mut self,
        name: &str,
        value: impl Into<Rc<str>>,
        policy: RedefinitionPolicy,
    ) -> Definition {
        let key = self.key(name).into_owned().into_boxed_str();
        insert(&mut self.text_defines, key, value.into(), policy)
    }

    pub fn define_numeric(
        &mut self,
        name: &str,
        value: NumericDefine,
        policy: RedefinitionPolicy,
    ) -> Definition {
        let key = self.key(name).into_owned().into_boxed_str();
        insert(&mut self.numeric_defines, key, value, policy)
    }

    pub fn define_boolean(
        &mut self,
        name: &str,
        value: bool,
        policy: RedefinitionPolicy,
    ) -> Definition {
        let key = self.key(name).into_owned().into_boxed_str();
        insert(&mut self.boolean_defines, key, value, policy)
    }

    pub fn alias(&self, name: &str) -> Option<&Rc<str>> {
        self.aliases.get(self.key(name).as_ref())
    }

    pub fn text_define(&self, name: &str) -> Option<&Rc<str>> {
        self.text_defines.get(self.key(name).as_ref())
    }

    pub fn numeric_define(&self, name: &str) -> Option<NumericDefine> {
        self.numeric_defines.get(self.key(name).as_ref()).copied()
    }

    pub fn boolean_define(&self, name: &str) -> Option<bool> {
        self.boolean_defines.get(self.key(name).as_ref()).copied()
    }
}

fn insert<V>(
    table: &mut FxHashMap<Box<str>, V>,
    key: Box<str>,
    value: V,
    policy: RedefinitionPolicy,
) -> Definition {
    match table.get_mut(&key) {
        None => {
            table.insert(key, value);
            Definition::New
        }
        Some(_) if policy == RedefinitionPolicy::Reject => Definition::Rejected,
        Some(slot) => {
            *slot = value;
            Definition::Replaced
        }
    }
}

/// Remaining text of one expansion.
#[derive(Clone, Debug)]
pub struct ExpansionFrame {
    text: Rc<str>,
    pos: usize,
}

impl ExpansionFrame {
    pub fn new(text: Rc<str>) -> Self {
        ExpansionFrame { text, pos: 0 }
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }
}

/// Bounded stack of expansions; the top frame is read first.
#[derive(Clone, Debug)]
pub struct ExpansionStack {
    frames: SmallVec<[ExpansionFrame; 4]>,
    limit: usize,
}

impl ExpansionStack {
    pub fn new(limit: usize) -> Self {
        ExpansionStack {
            frames: SmallVec::new(),
            limit,
        }
    }

    /// Push an expansion. Exceeding the depth limit is fatal.
    pub fn push(&mut self, text: Rc<str>) -> Result<(), LexError> {
        if self.frames.len() >= self.limit {
            return Err(LexError::ExpansionStackOverflow { limit: self.limit });
        }
        self.frames.push(ExpansionFrame::new(text));
        Ok(())
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut ExpansionFrame> {
        self.frames.last_mut()
    }

    pub fn pop(&mut self) -> Option<ExpansionFrame> {
        self.frames.pop()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
