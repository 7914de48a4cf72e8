/// Value (expression) parsing.
///
/// Values are parsed over explicit `[lo, hi)` ranges:
/// - `value_extent`: where a value starting at `lo` stops
/// - `value`: fold the loosest binary operators at depth 0 into a chain, or fall through to `unary`
/// - `unary`: prefix operators, a primary, then postfix operators left to right
///
/// ## Notes
/// - Binding order comes from `tnsl_core::lang::operators`; **lower binds tighter**.
/// - Operators of equal order fold left to right, so `a - b - c` groups as `(a - b) - c`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Extent
    // ========================================================================

    /// Find where the value starting at `start` ends, searching before `limit`.
    ///
    /// The value stops at a line separator, a block marker, a depth-0 `,`, or a closer that has
    /// no opener inside the value. The returned index is that terminator (or `limit`).
    ///
    /// ## Errors
    /// - A terminator reached while a pair is still open.
    /// - A closer of the wrong kind.
    fn value_extent(&self, start: usize, limit: usize) -> Result<usize, CompileError> {
        let limit = limit.min(self.tokens.len());
        let mut stack: Vec<usize> = Vec::new();

        for i in start..limit {
            let t = &self.tokens[i];
            if t.class == TokenClass::LineSeparator || t.is_block_marker() {
                return match stack.last() {
                    Some(&open) => Err(self.fail(open, "unclosed delimiter")),
                    None => Ok(i),
                };
            }
            if t.class == TokenClass::InlineSeparator && stack.is_empty() {
                return Ok(i);
            }
            if t.is_opener() {
                stack.push(i);
            } else if t.is_closer() {
                let Some(open) = stack.pop() else {
                    return Ok(i);
                };
                let want = self.tokens[open]
                    .text
                    .chars()
                    .next()
                    .and_then(crate::token_helpers::closer_for);
                if !want.is_some_and(|c| t.is_delim(c)) {
                    return Err(self.fail(i, "mismatched closing delimiter"));
                }
            }
        }

        match stack.last() {
            Some(&open) => Err(self.fail(open, "unclosed delimiter")),
            None => Ok(limit),
        }
    }

    // ========================================================================
    // Binary split
    // ========================================================================

    /// Parse the value spanning exactly `[lo, hi)`.
    fn value(&mut self, lo: usize, hi: usize) -> Result<Node, CompileError> {
        if lo >= hi {
            return Err(self.expected(hi, "a value"));
        }
        self.nested(lo, |p| {
            let ops = p.split_points(lo, hi)?;
            if ops.is_empty() {
                p.unary(lo, hi)
            } else {
                p.chain(lo, &ops, hi)
            }
        })
    }

    /// Binary operators of the loosest order in `[lo, hi)`, left to right.
    fn split_points(&self, lo: usize, hi: usize) -> Result<Vec<usize>, CompileError> {
        let mut best: Option<u8> = None;
        let mut ops = Vec::new();
        let mut depth = 0usize;

        for i in lo..hi {
            let t = &self.tokens[i];
            if t.is_opener() {
                depth += 1;
                continue;
            }
            if t.is_closer() {
                if depth == 0 {
                    return Err(self.fail(i, "unexpected closing delimiter"));
                }
                depth -= 1;
                continue;
            }
            if depth > 0 || i == lo || !self.tokens[i - 1].ends_operand() {
                continue;
            }
            let Some(order) = t.operator_id().and_then(operators::order) else {
                continue;
            };
            match best {
                Some(b) if order < b => {}
                Some(b) if order == b => ops.push(i),
                _ => {
                    best = Some(order);
                    ops.clear();
                    ops.push(i);
                }
            }
        }

        Ok(ops)
    }

    /// Fold the operands between `ops` into a left-leaning chain of binary nodes.
    ///
    /// Each operator costs one unit of `max_chain` rather than a nesting level.
    fn chain(&mut self, lo: usize, ops: &[usize], hi: usize) -> Result<Node, CompileError> {
        if self.chain + ops.len() > self.config.max_chain {
            let limit = self.config.max_chain;
            return Err(self.limit_error(ops[0], |t| CompileError::chain_limit(limit, t)));
        }
        self.chain += ops.len();
        let result = self.fold(lo, ops, hi);
        self.chain -= ops.len();
        result
    }

    fn fold(&mut self, lo: usize, ops: &[usize], hi: usize) -> Result<Node, CompileError> {
        let mut node = self.value(lo, ops[0])?;
        for (k, &op) in ops.iter().enumerate() {
            let end = ops.get(k + 1).copied().unwrap_or(hi);
            let rhs = if self.tokens[op].is_operator(OperatorId::Is) {
                let (ty, next) = self.type_at(op + 1, end, false)?;
                if next != end {
                    return Err(self.fail(next, "unexpected token after type"));
                }
                ty
            } else {
                self.value(op + 1, end)?
            };
            node = Node::with_children(NodeKind::Binary, self.tokens[op].clone(), vec![node, rhs]);
        }
        Ok(node)
    }

    // ========================================================================
    // Unary and primary
    // ========================================================================

    /// Prefix operators, a primary, then postfix operators.
    ///
    /// Every prefix or postfix wrap takes a nesting level, so operator runs count toward
    /// `max_depth` like brackets do.
    fn unary(&mut self, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let mut start = lo;
        while start < hi && self.tokens[start].operator_id().is_some_and(operators::is_prefix) {
            start += 1;
        }

        if start < hi && self.tokens[start].is_delim('{') {
            return self.composite(lo, start, hi);
        }

        let saved = self.depth;
        let result = (lo..start)
            .try_for_each(|i| self.descend(i))
            .and_then(|()| self.postfix(start, hi));
        self.depth = saved;
        let mut node = result?;

        for op in self.tokens[lo..start].iter().rev() {
            node = Node::with_children(NodeKind::PreOp, op.clone(), vec![node]);
        }
        Ok(node)
    }

    /// A primary at `start` followed by calls, indexes, casts, and postfix operators up to `hi`.
    ///
    /// Levels taken here are returned by the caller.
    fn postfix(&mut self, start: usize, hi: usize) -> Result<Node, CompileError> {
        let tokens = self.tokens;
        let (mut node, mut i) = self.primary(start, hi)?;

        while i < hi {
            let t = &tokens[i];
            if t.is_closer() {
                return Err(self.fail(i, "unexpected closing delimiter"));
            }
            self.descend(i)?;
            if t.is_delim('(') {
                let close = self.find_match(i, hi)?;
                let args = self.value_list(i, i + 1, close)?;
                node = Node::with_children(NodeKind::Call, Token::tag(NodeKind::Call.tag(), t), vec![node, args]);
                i = close + 1;
            } else if t.is_delim('{') {
                let close = self.find_match(i, hi)?;
                let index = self.value(i + 1, close)?;
                node = Node::with_children(NodeKind::Index, Token::tag(NodeKind::Index.tag(), t), vec![node, index]);
                i = close + 1;
            } else if t.is_delim('[') {
                let close = self.find_match(i, hi)?;
                let types = self.type_list(i, i + 1, close)?;
                node = Node::with_children(NodeKind::Cast, Token::tag(NodeKind::Cast.tag(), t), vec![node, types]);
                i = close + 1;
            } else if t.operator_id().is_some_and(operators::is_postfix) {
                node = Node::with_children(NodeKind::PostOp, t.clone(), vec![node]);
                i += 1;
            } else {
                return Err(self.fail(i, "unexpected token in value"));
            }
        }

        Ok(node)
    }

    /// Parse a primary at `i`; returns the node and the index after it.
    fn primary(&mut self, i: usize, hi: usize) -> Result<(Node, usize), CompileError> {
        let Some(t) = self.tok(i).filter(|_| i < hi) else {
            return Err(self.expected(i, "a value"));
        };

        match t.class {
            TokenClass::Literal => Ok((Node::new(NodeKind::Literal, t.clone()), i + 1)),
            TokenClass::DefWord => Ok((Node::new(NodeKind::Ident, t.clone()), i + 1)),
            TokenClass::KeyType => Ok((Node::new(NodeKind::TypeName, t.clone()), i + 1)),
            TokenClass::Delimiter if t.is_delim('(') => {
                let close = self.find_match(i, hi)?;
                Ok((self.value(i + 1, close)?, close + 1))
            }
            _ if t.is_closer() => Err(self.fail(i, "unexpected closing delimiter")),
            TokenClass::Keyword => Err(self.fail(i, "unexpected keyword in value")),
            _ => Err(self.expected(i, "a value")),
        }
    }

    /// Parse a composite literal `{a, b, ...}` spanning `[brace, hi)`.
    ///
    /// Composite literals take no prefix or postfix operators.
    fn composite(&mut self, lo: usize, brace: usize, hi: usize) -> Result<Node, CompileError> {
        if lo != brace {
            return Err(self.fail(lo, "unary operator applied to a composite literal"));
        }
        let close = self.find_match(brace, hi)?;
        if close + 1 != hi {
            return Err(self.fail(close + 1, "unexpected token after composite literal"));
        }

        let anchor = &self.tokens[brace];
        let mut comp = Node::tagged(NodeKind::Composite, anchor);
        for (a, b) in self.split_items(brace + 1, close, |t| t.class == TokenClass::InlineSeparator)? {
            comp.push(self.value(a, b)?);
        }
        Ok(comp)
    }
}
