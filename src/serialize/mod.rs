// Copyright 2014-2017 The charrepl Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Escaping whole strings with a `CharReplacements` table.

use std::io::{self, Write};

use crate::replacements::{CharReplacements, Context};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EscapeOpts {
    /// Is the text going between tags, or inside one? Default: Plaintext
    pub context: Context,
}

impl Default for EscapeOpts {
    fn default() -> EscapeOpts {
        EscapeOpts {
            context: Context::Plaintext,
        }
    }
}

/// Split text into the pieces that make up its escaped form: runs of
/// characters written unchanged, and single replacements.
struct Pieces<'t> {
    text: &'t str,
    repl: &'t CharReplacements,
    context: Context,
    pos: usize,
}

impl<'t> Pieces<'t> {
    fn new(text: &'t str, repl: &'t CharReplacements, context: Context) -> Pieces<'t> {
        Pieces {
            text: text,
            repl: repl,
            context: context,
            pos: 0,
        }
    }
}

impl<'t> Iterator for Pieces<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let rest = unwrap_or_return!(self.text.get(self.pos..), None);
        if rest.is_empty() {
            return None;
        }

        for (i, c) in rest.char_indices() {
            let at = self.pos + i;
            let found = self.repl.resolve(c, self.text, at, self.text.len(), self.context);
            if let Some(r) = found {
                if i > 0 {
                    self.pos = at;
                    return Some(&rest[..i]);
                }
                self.pos = at + c.len_utf8();
                return Some(r);
            }
        }

        self.pos = self.text.len();
        Some(rest)
    }
}

/// Write `text` to `writer`, replacing characters as `repl` says.
///
/// Characters outside ASCII are written unchanged.
pub fn write_escaped<Wr: Write>(writer: &mut Wr, text: &str, repl: &CharReplacements,
                                opts: EscapeOpts) -> io::Result<()> {
    for piece in Pieces::new(text, repl, opts.context) {
        writer.write_all(piece.as_bytes())?;
    }
    Ok(())
}

/// Escape `text` into a new string.
pub fn escape(text: &str, repl: &CharReplacements, opts: EscapeOpts) -> String {
    let mut out = String::with_capacity(text.len());
    for piece in Pieces::new(text, repl, opts.context) {
        out.push_str(piece);
    }
    out
}
