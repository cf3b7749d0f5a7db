// Copyright 2014-2017 The charrepl Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-character output encoding for text headed into HTML or XML.
//!
//! A [`CharReplacements`] table decides, for each ASCII character, whether
//! it is emitted as-is, dropped, or replaced by an entity. It also breaks up
//! `{{` sequences so sanitized output cannot be picked up by a client-side
//! template engine.

#[macro_use] extern crate log;
#[macro_use] extern crate mac;
extern crate phf;

pub use replacements::{CharReplacements, Context, Entry};
pub use replacements::{PLAINTEXT_BRACE_REPLACEMENT, TAG_BRACE_REPLACEMENT};
pub use serialize::{escape, write_escaped, EscapeOpts};

pub mod replacements;
pub mod serialize;
