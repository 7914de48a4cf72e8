//! Numeric and quoted literal scanning.

use super::Lexer;
use tnsl_core::lang::TokenClass;

impl<'a> Lexer<'a> {
    /// Scan a number: ASCII digits with at most one `.`.
    ///
    /// A second `.` ends the literal and is lexed as a reserved rune.
    pub(super) fn scan_number(&mut self) {
        let (start, line, column) = (self.current_pos, self.line, self.column);
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.peek() {
            if c == '.' && !seen_dot {
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.advance();
        }

        self.push(TokenClass::Literal, text, start, line, column);
    }

    /// Scan a string or character literal opened by `quote`.
    ///
    /// The literal ends at the matching unescaped quote (included in the token), or just before an
    /// unescaped newline or the end of input. A backslash escapes exactly one following rune,
    /// including a newline.
    pub(super) fn scan_quoted(&mut self, quote: char) {
        let (start, line, column) = (self.current_pos, self.line, self.column);
        let mut text = String::new();
        if let Some(open) = self.advance() {
            text.push(open);
        }

        let mut escaped = false;
        while let Some(c) = self.peek() {
            if c == '\n' && !escaped {
                break;
            }
            text.push(c);
            self.advance();

            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                break;
            }
        }

        self.push(TokenClass::Literal, text, start, line, column);
    }
}
