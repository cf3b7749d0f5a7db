// Copyright 2014-2017 The charrepl Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The per-character replacement table.
//!
//! Only the 128 ASCII codes are governed by the table. Anything wider is
//! left for the caller's scan to deal with.

use std::array;
use std::borrow::Cow;
use std::sync::OnceLock;

pub use self::defaults::{PLAINTEXT_BRACE_REPLACEMENT, TAG_BRACE_REPLACEMENT};

mod defaults;

/// Number of character codes the table covers.
pub const DOMAIN: usize = 0x80;

/// How a single character is written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// No handling configured; the character is written unchanged.
    Absent,
    /// The character is dropped.
    Elided,
    /// The character is replaced by this string.
    Present(Cow<'static, str>),
}

/// Where the text being scanned will end up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Context {
    /// Text content between tags.
    Plaintext,
    /// Inside a tag, e.g. an attribute value.
    Tag,
}

impl From<bool> for Context {
    fn from(is_plaintext: bool) -> Context {
        if is_plaintext { Context::Plaintext } else { Context::Tag }
    }
}

/// Replacement strings for a `{` that opens a `{{`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct BraceReplacements {
    plaintext: Cow<'static, str>,
    tag: Cow<'static, str>,
}

impl Default for BraceReplacements {
    fn default() -> BraceReplacements {
        BraceReplacements {
            plaintext: Cow::Borrowed(PLAINTEXT_BRACE_REPLACEMENT),
            tag: Cow::Borrowed(TAG_BRACE_REPLACEMENT),
        }
    }
}

/// Maps ASCII characters to what should be written in their place.
///
/// Configure a table with the `set_*` and `dont_replace` methods, then
/// share it by reference. Lookups take `&self`, so a configured table can
/// serve any number of concurrent scans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharReplacements {
    table: [Entry; DOMAIN],
    braces: BraceReplacements,
}

impl Default for CharReplacements {
    fn default() -> CharReplacements {
        CharReplacements::new()
    }
}

static SHARED_DEFAULT: OnceLock<CharReplacements> = OnceLock::new();

impl CharReplacements {
    /// The default table: control characters other than tab, LF and CR are
    /// elided, and `"&'+<=>@` and backtick become character references.
    pub fn new() -> CharReplacements {
        CharReplacements {
            table: array::from_fn(|code| defaults::default_entry(code as u8)),
            braces: BraceReplacements::default(),
        }
    }

    /// A process-wide default table, built on first use.
    ///
    /// It can't be changed; `clone()` it to get a table to configure.
    pub fn shared_default() -> &'static CharReplacements {
        SHARED_DEFAULT.get_or_init(CharReplacements::new)
    }

    /// Is `ch` inside the table's domain?
    ///
    /// Despite the name, this does *not* say whether `ch` is replaced: it is
    /// true for every ASCII character, including ones that pass through.
    /// Callers depend on that, so the name stays. Use [`entry`] to find out
    /// what the table actually does with `ch`.
    ///
    /// [`entry`]: #method.entry
    pub fn has_replacement_for_char(&self, ch: char) -> bool {
        (ch as u32 as usize) < DOMAIN
    }

    /// The configured entry for `ch`, or `None` outside the domain.
    pub fn entry(&self, ch: char) -> Option<&Entry> {
        self.table.get(ch as u32 as usize)
    }

    /// The string used for a `{` that opens a `{{` in the given context.
    pub fn brace_replacement(&self, context: Context) -> &str {
        match context {
            Context::Plaintext => &*self.braces.plaintext,
            Context::Tag => &*self.braces.tag,
        }
    }

    /// What to write in place of `ch`, found at byte offset `pos` of
    /// `text[..text_len]`.
    ///
    /// Returns `Some("")` if `ch` is elided, `Some(repl)` if it is replaced,
    /// and `None` if it should be written unchanged.
    pub fn get_replacement_for_char(&self, ch: char, text: &str, pos: usize,
                                    text_len: usize, is_plaintext: bool) -> Option<&str> {
        self.resolve(ch, text, pos, text_len, Context::from(is_plaintext))
    }

    /// Like `get_replacement_for_char`, with the context spelled out.
    pub fn resolve(&self, ch: char, text: &str, pos: usize,
                   text_len: usize, context: Context) -> Option<&str> {
        match *unwrap_or_return!(self.entry(ch), None) {
            Entry::Elided => return Some(""),
            Entry::Present(ref repl) => return Some(&**repl),
            Entry::Absent => (),
        }

        if is_double_brace(ch, text, pos, text_len) {
            Some(self.brace_replacement(context))
        } else {
            None
        }
    }

    pub fn set_plaintext_brace_replacement<S>(&mut self, repl: S) -> &mut CharReplacements
        where S: Into<Cow<'static, str>>
    {
        self.braces.plaintext = repl.into();
        debug!("plaintext brace replacement set to {:?}", self.braces.plaintext);
        self
    }

    pub fn set_tag_brace_replacement<S>(&mut self, repl: S) -> &mut CharReplacements
        where S: Into<Cow<'static, str>>
    {
        self.braces.tag = repl.into();
        debug!("tag brace replacement set to {:?}", self.braces.tag);
        self
    }

    /// Write each of `chars` unchanged, overriding the default handling.
    ///
    /// Characters outside the domain are ignored.
    pub fn dont_replace<I>(&mut self, chars: I) -> &mut CharReplacements
        where I: IntoIterator<Item=char>
    {
        for ch in chars {
            match self.table.get_mut(ch as u32 as usize) {
                Some(slot) => *slot = Entry::Absent,
                None => trace!("dont_replace: {:?} is outside the table", ch),
            }
        }
        self
    }

    pub fn with_plaintext_brace_replacement<S>(mut self, repl: S) -> CharReplacements
        where S: Into<Cow<'static, str>>
    {
        self.set_plaintext_brace_replacement(repl);
        self
    }

    pub fn with_tag_brace_replacement<S>(mut self, repl: S) -> CharReplacements
        where S: Into<Cow<'static, str>>
    {
        self.set_tag_brace_replacement(repl);
        self
    }

    pub fn without_replacing<I>(mut self, chars: I) -> CharReplacements
        where I: IntoIterator<Item=char>
    {
        self.dont_replace(chars);
        self
    }
}

/// Does the `{` at `pos` start a `{{`?
///
/// A `{` at the very end of the text counts too: whatever gets appended
/// after it could supply the second brace.
fn is_double_brace(ch: char, text: &str, pos: usize, text_len: usize) -> bool {
    if ch != '{' {
        return false;
    }
    let next = unwrap_or_return!(pos.checked_add(1), false);
    next == text_len || (next < text_len && text.as_bytes().get(next) == Some(&b'{'))
}
