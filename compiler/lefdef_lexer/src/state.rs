//! Grammar-steered lexer modes.
//!
//! The grammar knows things the lexer cannot see locally: that the next
//! token is a user name even if it spells `LAYER`, that the next few numbers
//! should stay strings, or that line ends matter. It says so through
//! [`LexerState`], which the tokenizer consults on every token.

use bitflags::bitflags;

bitflags! {
    /// Keywords still recognized while dumb mode is active.
    ///
    /// Each is matched only in exact upper or exact lower case.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct KeywordToggles: u16 {
        const BY = 1 << 0;
        const DO = 1 << 1;
        const NEW = 1 << 2;
        const NONDEFAULTRULE = 1 << 3;
        const MUSTJOIN = 1 << 4;
        const STEP = 1 << 5;
        const FIXED = 1 << 6;
        const COVER = 1 << 7;
        const ROUTED = 1 << 8;
        const VIRTUAL = 1 << 9;
        const RECT = 1 << 10;
        const MASK = 1 << 11;
        /// `N`, `S`, `E`, `W`, `FN`, `FS`, `FE`, `FW`.
        const ORIENTATION = 1 << 12;
    }
}

/// Token countdown; negative means inactive.
///
/// `set(n)` makes the next `n` tokens see the mode. Each classified word
/// ticks the counter down, saturating at the inactive sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Countdown(i64);

impl Default for Countdown {
    fn default() -> Self {
        Countdown::INACTIVE
    }
}

impl Countdown {
    pub const INACTIVE: Countdown = Countdown(-1);

    pub fn set(&mut self, tokens: u32) {
        self.0 = i64::from(tokens);
    }

    /// The current token is the last one in the mode.
    pub fn finish(&mut self) {
        self.0 = 0;
    }

    pub fn cancel(&mut self) {
        *self = Countdown::INACTIVE;
    }

    #[inline]
    pub fn tick(&mut self) {
        if self.0 >= 0 {
            self.0 -= 1;
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        self.0 >= 0
    }

    /// Tokens left, counting the current one.
    pub fn remaining(self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }
}

/// Mode flags and counters for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexerState {
    newline_significant: bool,
    dumb_mode: Countdown,
    no_number: Countdown,
    real_numbers: bool,
    toggles: KeywordToggles,
    end_seen: bool,
    rule_name: Option<String>,
    pub(crate) in_define: bool,
}

impl LexerState {
    #[inline]
    pub fn newline_significant(&self) -> bool {
        self.newline_significant
    }

    pub fn set_newline_significant(&mut self, significant: bool) {
        tracing::debug!(significant, "newline significance");
        self.newline_significant = significant;
    }

    /// Suppress keyword recognition for the next `tokens` words.
    pub fn set_dumb_mode(&mut self, tokens: u32) {
        tracing::debug!(tokens, "dumb mode");
        self.dumb_mode.set(tokens);
    }

    pub fn cancel_dumb_mode(&mut self) {
        self.dumb_mode.cancel();
    }

    #[inline]
    pub fn dumb_mode(&self) -> Countdown {
        self.dumb_mode
    }

    /// Classify the next `tokens` numeric-looking words as identifiers.
    pub fn set_no_number(&mut self, tokens: u32) {
        tracing::debug!(tokens, "no-number mode");
        self.no_number.set(tokens);
    }

    pub fn cancel_no_number(&mut self) {
        self.no_number.cancel();
    }

    #[inline]
    pub fn no_number(&self) -> Countdown {
        self.no_number
    }

    /// Parse numbers as reals first and skip the integer range check.
    pub fn set_real_numbers(&mut self, real: bool) {
        self.real_numbers = real;
    }

    #[inline]
    pub fn real_numbers(&self) -> bool {
        self.real_numbers
    }

    #[inline]
    pub fn toggles(&self) -> KeywordToggles {
        self.toggles
    }

    pub fn enable_keywords(&mut self, toggles: KeywordToggles) {
        self.toggles.insert(toggles);
    }

    pub fn disable_keywords(&mut self, toggles: KeywordToggles) {
        self.toggles.remove(toggles);
    }

    pub fn set_keywords(&mut self, toggles: KeywordToggles) {
        self.toggles = toggles;
    }

    /// The grammar reduced the terminating statement; anything after it is
    /// trailing data.
    pub fn mark_end_seen(&mut self) {
        self.end_seen = true;
    }

    #[inline]
    pub fn end_seen(&self) -> bool {
        self.end_seen
    }

    /// Name the grammar expects to see again (a nondefault rule's `END name`).
    /// While set, that name is always an identifier and any other word but
    /// `END` cancels dumb mode.
    pub fn set_rule_name(&mut self, name: Option<String>) {
        self.rule_name = name;
    }

    pub fn rule_name(&self) -> Option<&str> {
        self.rule_name.as_deref()
    }

    /// Whether a `&DEFINE` statement is being read.
    pub fn in_define(&self) -> bool {
        self.in_define
    }

    /// Advance both countdowns by one word.
    pub(crate) fn tick(&mut self) {
        self.dumb_mode.tick();
        self.no_number.tick();
    }

    /// `;` or `+` seen in dumb mode: dumb mode, and optionally no-number
    /// mode, end after this token.
    pub(crate) fn finish_modes(&mut self, no_number_too: bool) {
        self.dumb_mode.finish();
        if no_number_too {
            self.no_number.finish();
        }
    }
}
