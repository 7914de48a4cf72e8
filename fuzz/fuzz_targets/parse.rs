#![no_main]

use libfuzzer_sys::fuzz_target;
use tnsl_syntax::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // The lexer accepts any text; invalid UTF-8 is replaced the way `tokenize` does it
    let source = String::from_utf8_lossy(data);
    let tokens = lexer::lex(&source);
    // Grammar violations are fine, panics are not
    let _ = parser::build_tree(&tokens, "fuzz.tnsl");
});
