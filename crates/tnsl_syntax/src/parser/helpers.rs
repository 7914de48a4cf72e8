/// Token-stream helpers, delimiter matching, and error construction.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens at the cursor (`peek`, `tok`)
/// - Matching bracket pairs over a range (`find_match`, `split_items`)
/// - The nesting guard (`nested`)
/// - Error helpers that name the offending token (`fail`, `expected`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    /// Return the token at the cursor without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Return the token at index `i`.
    fn tok(&self, i: usize) -> Option<&'a Token> {
        self.tokens.get(i)
    }

    /// Return `true` if the token at `i` ends a statement: a line separator or a block marker.
    fn ends_statement(&self, i: usize) -> bool {
        self.tok(i)
            .is_some_and(|t| t.class == TokenClass::LineSeparator || t.is_block_marker())
    }

    /// Index of the first statement terminator at or after `from` (or the end of input).
    fn statement_end(&self, from: usize) -> usize {
        (from..self.tokens.len())
            .find(|&i| self.ends_statement(i))
            .unwrap_or(self.tokens.len())
    }

    /// Return `true` if the token at `i` closes a block section.
    fn is_terminator(&self, i: usize) -> bool {
        self.tok(i)
            .and_then(Token::group_id)
            .is_some_and(|id| matches!(groups::role(id), GroupRole::Close | GroupRole::Redefine))
    }

    // ========================================================================
    // Delimiter pairs
    // ========================================================================

    /// Find the closer matching the opener at `open`, searching before `hi`.
    ///
    /// ## Errors
    /// - A closer of the wrong kind inside the pair.
    /// - No closer before `hi`.
    fn find_match(&self, open: usize, hi: usize) -> Result<usize, CompileError> {
        let mut stack: Vec<char> = Vec::new();
        for i in open..hi.min(self.tokens.len()) {
            let t = &self.tokens[i];
            if t.is_opener() {
                stack.extend(t.text.chars().next().and_then(crate::token_helpers::closer_for));
            } else if t.is_closer() {
                match stack.pop() {
                    Some(want) if t.is_delim(want) => {
                        if stack.is_empty() {
                            return Ok(i);
                        }
                    }
                    _ => return Err(self.fail(i, "mismatched closing delimiter")),
                }
            }
        }
        Err(self.fail(open, "unclosed delimiter"))
    }

    /// Split `[lo, hi)` at depth-0 separators accepted by `is_sep`.
    ///
    /// Returns the item ranges. An empty range yields no items; otherwise every separator
    /// produces a (possibly empty) item on each side.
    fn split_items(
        &self,
        lo: usize,
        hi: usize,
        is_sep: impl Fn(&Token) -> bool,
    ) -> Result<Vec<(usize, usize)>, CompileError> {
        let mut items = Vec::new();
        if lo >= hi {
            return Ok(items);
        }

        let mut start = lo;
        let mut i = lo;
        while i < hi {
            let t = &self.tokens[i];
            if t.is_opener() {
                i = self.find_match(i, hi)? + 1;
                continue;
            }
            if t.is_closer() {
                return Err(self.fail(i, "unexpected closing delimiter"));
            }
            if is_sep(t) {
                items.push((start, i));
                start = i + 1;
            }
            i += 1;
        }
        items.push((start, hi));
        Ok(items)
    }

    // ========================================================================
    // Nesting guard
    // ========================================================================

    /// Run `f` one nesting level deeper, failing at token `at` if the limit is exceeded.
    fn nested<T>(
        &mut self,
        at: usize,
        f: impl FnOnce(&mut Self) -> Result<T, CompileError>,
    ) -> Result<T, CompileError> {
        self.descend(at)?;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Take one nesting level for a node anchored at `at`, failing past `max_depth`.
    ///
    /// The caller gives the level back by decrementing `depth`.
    fn descend(&mut self, at: usize) -> Result<(), CompileError> {
        if self.depth >= self.config.max_depth {
            return Err(self.limit_error(at, |t| CompileError::depth_limit(self.config.max_depth, t)));
        }
        self.depth += 1;
        Ok(())
    }

    fn limit_error(&self, at: usize, make: impl FnOnce(&Token) -> CompileError) -> CompileError {
        match self.tok(at).or_else(|| self.tokens.last()) {
            Some(t) => make(t),
            None => CompileError::unexpected_end("input", None),
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// Error naming the token at `i`, or an end-of-input error past the last token.
    fn fail(&self, i: usize, message: &str) -> CompileError {
        match self.tok(i) {
            Some(t) => CompileError::at_token(message, t),
            None => CompileError::unexpected_end("more input", self.tokens.last()),
        }
    }

    /// "expected `what`" at the token at `i`.
    fn expected(&self, i: usize, what: &str) -> CompileError {
        match self.tok(i) {
            Some(t) => CompileError::at_token(format!("expected {what}"), t),
            None => CompileError::unexpected_end(what, self.tokens.last()),
        }
    }
}
