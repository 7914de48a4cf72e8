/// Statement parsing.
///
/// A statement follows a `;` and runs to the next line separator or block marker. It is one of:
/// - a keyword statement (`return`, `struct`, `goto`, `alloc`, ...)
/// - a definition, when a type is immediately followed by a user word
/// - a bare value, wrapped in a `value` node
impl<'a> Parser<'a> {
    /// Parse the statement at the cursor and move the cursor to its terminator.
    ///
    /// Returns `None` for an empty statement (a `;` directly followed by a terminator).
    fn statement(&mut self) -> Result<Option<Node>, CompileError> {
        let start = self.pos;
        let end = self.statement_end(start);
        if start == end {
            return Ok(None);
        }

        let node = match self.tokens[start].class {
            TokenClass::Keyword if !self.starts_qualified_definition(start) => {
                self.keyword_statement(start, end)?
            }
            _ => self.simple_statement(start, end)?,
        };

        self.pos = end;
        tracing::trace!(tag = node.tag(), line = self.tokens[start].line, "parsed statement");
        Ok(Some(node))
    }

    fn starts_qualified_definition(&self, i: usize) -> bool {
        self.tokens[i]
            .keyword_id()
            .is_some_and(keywords::is_qualifier)
    }

    /// A definition or a bare value spanning `[lo, hi)`.
    fn simple_statement(&mut self, lo: usize, hi: usize) -> Result<Node, CompileError> {
        if self.is_definition_at(lo, hi) {
            return self.definition(lo, hi);
        }
        if self.starts_qualified_definition(lo) {
            // Surface the real type error rather than a confusing value error.
            let (_, next) = self.type_at(lo, hi, false)?;
            return Err(self.expected(next, "a name after the type"));
        }

        let mut stmt = Node::tagged(NodeKind::ValueStatement, &self.tokens[lo]);
        stmt.push(self.value(lo, hi)?);
        Ok(stmt)
    }

    /// `type name, name = value` spanning `[lo, hi)`.
    fn definition(&mut self, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let (ty, next) = self.type_at(lo, hi, false)?;
        let names = self.value_list(next, next, hi)?;

        for item in &names.children {
            let named = match item.kind {
                NodeKind::Ident => true,
                NodeKind::Binary => {
                    item.token.is_operator(OperatorId::Assign)
                        && item.children.first().is_some_and(|lhs| lhs.is(NodeKind::Ident))
                }
                _ => false,
            };
            if !named {
                return Err(CompileError::at_token("expected a name or `name = value` in definition", &item.token));
            }
        }

        Ok(Node::with_children(
            NodeKind::Define,
            Token::tag(NodeKind::Define.tag(), &self.tokens[lo]),
            vec![ty, names],
        ))
    }

    // ========================================================================
    // Keyword statements
    // ========================================================================

    fn keyword_statement(&mut self, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let tokens = self.tokens;
        let kw = &tokens[lo];
        let Some(id) = kw.keyword_id() else {
            return Err(self.fail(lo, "unexpected keyword in statement"));
        };

        match id {
            KeywordId::Raw | KeywordId::Struct => self.struct_statement(lo, hi),
            KeywordId::Enum => self.enum_statement(lo, hi),
            KeywordId::Goto => self.named_statement(NodeKind::Goto, lo, hi),
            KeywordId::Label => self.named_statement(NodeKind::Label, lo, hi),
            KeywordId::Break => self.loop_jump(NodeKind::Break, lo, hi),
            KeywordId::Continue => self.loop_jump(NodeKind::Continue, lo, hi),
            KeywordId::Return => {
                let mut node = Node::new(NodeKind::Return, kw.clone());
                if lo + 1 < hi {
                    node.push(self.value(lo + 1, hi)?);
                }
                Ok(node)
            }
            KeywordId::Alloc => self.memory_statement(NodeKind::Alloc, lo, hi),
            KeywordId::Salloc => self.memory_statement(NodeKind::Salloc, lo, hi),
            KeywordId::Realloc => self.memory_statement(NodeKind::Realloc, lo, hi),
            KeywordId::Delete => self.memory_statement(NodeKind::Delete, lo, hi),
            KeywordId::Asm => {
                let mut node = Node::new(NodeKind::Asm, kw.clone());
                for i in lo + 1..hi {
                    if !(tokens[i].class == TokenClass::Literal && tokens[i].text.starts_with('"')) {
                        return Err(self.expected(i, "a string literal after `asm`"));
                    }
                    node.push(Node::new(NodeKind::Literal, tokens[i].clone()));
                }
                if node.children.is_empty() {
                    return Err(self.expected(hi, "a string literal after `asm`"));
                }
                Ok(node)
            }
            _ => Err(self.fail(lo, "unexpected keyword in statement")),
        }
    }

    /// `[raw] struct Name (supers) {members}`.
    fn struct_statement(&mut self, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let tokens = self.tokens;
        let mut i = lo;
        let raw = tokens[i].is_keyword(KeywordId::Raw);
        if raw {
            i += 1;
            if !(i < hi && tokens[i].is_keyword(KeywordId::Struct)) {
                return Err(self.fail(lo, "`raw` in a statement must be followed by `struct`"));
            }
        }

        let mut node = Node::new(NodeKind::Struct, tokens[i].clone());
        if raw {
            node.push(Node::new(NodeKind::Keyword, tokens[lo].clone()));
        }
        i += 1;

        if !(i < hi && tokens[i].class == TokenClass::DefWord) {
            return Err(self.expected(i, "a struct name"));
        }
        node.push(Node::new(NodeKind::Ident, tokens[i].clone()));
        i += 1;

        if i < hi && tokens[i].is_delim('(') {
            let close = self.find_match(i, hi)?;
            node.push(self.value_list(i, i + 1, close)?);
            i = close + 1;
        }

        if !(i < hi && tokens[i].is_delim('{')) {
            return Err(self.expected(i, "a struct member list `{...}`"));
        }
        let close = self.find_match(i, hi)?;
        node.push(self.param_list(i, i + 1, close)?);

        self.expect_statement_end(close + 1, hi)?;
        Ok(node)
    }

    /// `enum Name [type] {values}`.
    fn enum_statement(&mut self, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let tokens = self.tokens;
        let mut node = Node::new(NodeKind::Enum, tokens[lo].clone());
        let mut i = lo + 1;

        if !(i < hi && tokens[i].class == TokenClass::DefWord) {
            return Err(self.expected(i, "an enum name"));
        }
        node.push(Node::new(NodeKind::Ident, tokens[i].clone()));
        i += 1;

        if i < hi && tokens[i].is_delim('[') {
            let close = self.find_match(i, hi)?;
            let (ty, next) = self.type_at(i + 1, close, false)?;
            if next != close {
                return Err(self.fail(next, "unexpected token in enum type"));
            }
            node.push(ty);
            i = close + 1;
        }

        if !(i < hi && tokens[i].is_delim('{')) {
            return Err(self.expected(i, "an enum value list `{...}`"));
        }
        let close = self.find_match(i, hi)?;
        node.push(self.value_list(i, i + 1, close)?);

        self.expect_statement_end(close + 1, hi)?;
        Ok(node)
    }

    /// `goto name` / `label name`.
    fn named_statement(&mut self, kind: NodeKind, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let tokens = self.tokens;
        let i = lo + 1;
        if !(i < hi && tokens[i].class == TokenClass::DefWord) {
            return Err(self.expected(i, "a label name"));
        }
        self.expect_statement_end(i + 1, hi)?;
        Ok(Node::with_children(
            kind,
            tokens[lo].clone(),
            vec![Node::new(NodeKind::Ident, tokens[i].clone())],
        ))
    }

    /// `break [n]` / `continue [n]`.
    fn loop_jump(&mut self, kind: NodeKind, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let tokens = self.tokens;
        let mut node = Node::new(kind, tokens[lo].clone());
        if lo + 1 < hi {
            let count = &tokens[lo + 1];
            if !(count.class == TokenClass::Literal && count.text.bytes().all(|b| b.is_ascii_digit())) {
                return Err(self.expected(lo + 1, "a loop count"));
            }
            node.push(Node::new(NodeKind::Literal, count.clone()));
            self.expect_statement_end(lo + 2, hi)?;
        }
        Ok(node)
    }

    /// `alloc a, b` and friends.
    fn memory_statement(&mut self, kind: NodeKind, lo: usize, hi: usize) -> Result<Node, CompileError> {
        if lo + 1 >= hi {
            return Err(self.expected(hi, "a value"));
        }
        let values = self.value_list(lo + 1, lo + 1, hi)?;
        Ok(Node::with_children(kind, self.tokens[lo].clone(), vec![values]))
    }

    fn expect_statement_end(&self, i: usize, hi: usize) -> Result<(), CompileError> {
        if i < hi {
            return Err(if self.tokens[i].is_closer() {
                self.fail(i, "unexpected closing delimiter")
            } else {
                self.fail(i, "expected end of statement")
            });
        }
        Ok(())
    }
}
