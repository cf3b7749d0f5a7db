// Copyright 2015 The charrepl Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate charrepl;

use std::io::{self, Write};

use charrepl::{escape, write_escaped, CharReplacements, Context, EscapeOpts};

fn escape_in(input: &str, context: Context) -> String {
    escape(input, CharReplacements::shared_default(), EscapeOpts { context: context })
}

macro_rules! test {
    ($name:ident, $input:expr, $output:expr) => {
        test!($name, Context::Plaintext, $input, $output);
    };

    ($name:ident, $context:expr, $input:expr, $output:expr) => {
        #[test]
        fn $name() {
            assert_eq!($output, escape_in($input, $context));
        }
    };

    // Shorthand for $output = $input
    ($name:ident, $input:expr) => {
        test!($name, $input, $input);
    };
}

test!(empty, "");
test!(smoke_test, "Hello, World!");
test!(whitespace_kept, "a\tb\nc\r\nd");
test!(non_ascii_kept, "caf\u{e9} \u{a66e} \u{1F600}");

test!(text_escape_lt_gt, "<p>", "&lt;p&gt;");
test!(text_escape_amp, "&amp;", "&amp;amp;");
test!(text_escape_quotes, r#""'`"#, "&#34;&#39;&#96;");
test!(text_escape_utf7, "+ADw-script+AD4-", "&#43;ADw-script&#43;AD4-");
test!(text_escape_eq_at, "a=b@c", "a&#61;b&#64;c");
test!(text_mixed, "a<b & {{x}}", "a&lt;b &amp; {<!-- -->{x}}");

test!(controls_elided, "a\x00b\x07c\x1bd\x1f", "abcd");
test!(del_kept, "a\x7fb");

test!(brace_single, "a{b}c");
test!(brace_close_pair, "}}");
test!(brace_pair, "{{x}}", "{<!-- -->{x}}");
test!(brace_trailing, "x{", "x{<!-- -->");
test!(brace_triple, "{{{", "{<!-- -->{<!-- -->{<!-- -->");
test!(brace_pair_tag, Context::Tag, "{{x}}", "{\u{200B}{x}}");
test!(brace_trailing_tag, Context::Tag, "x{", "x{\u{200B}");

test!(attr_value, Context::Tag, r#"" onclick="a()"#, "&#34; onclick&#61;&#34;a()");

#[test]
fn write_escaped_matches_escape() {
    let input = "<a title=\"{{x}}\">&\x01</a>";
    let repl = CharReplacements::new();
    for &context in [Context::Plaintext, Context::Tag].iter() {
        let opts = EscapeOpts { context: context };
        let mut result = vec![];
        write_escaped(&mut result, input, &repl, opts).unwrap();
        assert_eq!(String::from_utf8(result).unwrap(), escape(input, &repl, opts));
    }
}

#[test]
fn default_opts_are_plaintext() {
    assert_eq!(EscapeOpts::default().context, Context::Plaintext);
    assert_eq!(escape("{{", &CharReplacements::new(), Default::default()),
               "{<!-- -->{<!-- -->");
}

#[test]
fn configured_table() {
    let repl = CharReplacements::new()
        .without_replacing("&=".chars())
        .with_plaintext_brace_replacement("{\u{2060}");
    assert_eq!(escape("a=b&c {{", &repl, EscapeOpts::default()),
               "a=b&c {\u{2060}{\u{2060}");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_error_propagates() {
    let err = write_escaped(&mut BrokenPipe, "<", &CharReplacements::new(), EscapeOpts::default())
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn empty_text_writes_nothing() {
    write_escaped(&mut BrokenPipe, "", &CharReplacements::new(), EscapeOpts::default()).unwrap();
}
