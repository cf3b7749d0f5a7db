// Copyright 2014-2017 The charrepl Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Built-in replacements for the default table.

use std::borrow::Cow;

use phf::phf_map;

use super::Entry;

/// Inserted in place of `{` when it starts a `{{` in text content.
/// The empty comment splits the braces without rendering anything.
pub const PLAINTEXT_BRACE_REPLACEMENT: &str = "{<!-- -->";

/// Inserted in place of `{` when it starts a `{{` inside a tag, where a
/// comment is not allowed. The second character is U+200B ZERO WIDTH SPACE.
pub const TAG_BRACE_REPLACEMENT: &str = "{\u{200B}";

/// Characters escaped by default, with the reference written in their place.
///
/// Numeric references are used unless a named one is both shorter and in
/// the common subset of HTML and XML (so no `&apos;`).
pub static DEFAULT_ENTITIES: phf::Map<char, &'static str> = phf_map! {
    // Attribute delimiters.
    '"' => "&#34;",
    '\'' => "&#39;",
    '`' => "&#96;",
    // HTML specials.
    '&' => "&amp;",
    '<' => "&lt;",
    '>' => "&gt;",
    // UTF-7.
    '+' => "&#43;",
    // Unquoted attribute values.
    '=' => "&#61;",
    // Conditional compilation.
    '@' => "&#64;",
};

/// The default entry for an ASCII code.
///
/// Control characters other than tab, LF and CR are elided so that output
/// stays inside the intersection of HTML5 and XML 1.0 `Char`.
pub fn default_entry(code: u8) -> Entry {
    let c = code as char;
    if let Some(&repl) = DEFAULT_ENTITIES.get(&c) {
        return Entry::Present(Cow::Borrowed(repl));
    }

    match c {
        '\t' | '\n' | '\r' => Entry::Absent,
        '\0' ..= '\x1f' => Entry::Elided,
        _ => Entry::Absent,
    }
}
