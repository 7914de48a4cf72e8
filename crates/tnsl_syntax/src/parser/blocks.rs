/// Block parsing.
///
/// A block chain is one or more sections joined by redefinition markers:
///
/// ```text
/// /; if (a)       <- head section (code)
///     ;f(a)
/// ;; else         <- `;;` closes a code section and opens another
///     ;g()
/// ;/              <- `;/` closes a chain whose last section is code
/// ```
///
/// The head section's node is returned; every later section is appended to it as a child.
impl<'a> Parser<'a> {
    /// Parse a chain opened by `/;` (code) or `/:` (preprocessor) at the cursor.
    fn section_chain(&mut self, first: SectionKind) -> Result<Node, CompileError> {
        let open = self.pos;
        self.pos += 1;

        self.nested(open, |p| {
            let mut head = p.section(first, open)?;
            let mut current = first;

            loop {
                let at = p.pos;
                let Some(id) = p.tok(at).and_then(Token::group_id) else {
                    return Err(p.expected(at, closer_spelling(current)));
                };
                let info = groups::info_for(id);
                if info.closes != Some(current) {
                    return Err(p.fail(at, "block terminator does not match the open section"));
                }
                p.pos += 1;

                match info.opens {
                    None => return Ok(head),
                    Some(next @ (SectionKind::Code | SectionKind::Preprocessor)) => {
                        tracing::trace!(marker = groups::as_str(id), "chained block section");
                        head.push(p.section(next, at)?);
                        current = next;
                    }
                    Some(SectionKind::Comment) => {
                        return Err(p.fail(at, "unexpected comment marker"));
                    }
                }
            }
        })
    }

    /// Parse one section whose opening marker is at `anchor`; stops at the section terminator.
    fn section(&mut self, kind: SectionKind, anchor: usize) -> Result<Node, CompileError> {
        match kind {
            SectionKind::Preprocessor => self.pre_section(anchor),
            _ => self.code_section(anchor),
        }
    }

    /// `header body...` up to a terminator.
    fn code_section(&mut self, anchor: usize) -> Result<Node, CompileError> {
        let mut block = Node::tagged(NodeKind::Block, &self.tokens[anchor]);
        block.push(self.block_header(anchor)?);

        while !self.is_terminator(self.pos) {
            if self.peek().is_none() {
                return Err(self.expected(self.pos, "`;/` to close the block"));
            }
            if let Some(item) = self.item("unexpected token in block body")? {
                block.push(item);
            }
        }

        Ok(block)
    }

    // ========================================================================
    // Header
    // ========================================================================

    /// Parse the header after a block marker into a `Bdef` node.
    ///
    /// The header ends at the first line separator or block marker. It holds at most one `(...)`
    /// and one `[...]` list.
    fn block_header(&mut self, anchor: usize) -> Result<Node, CompileError> {
        let tokens = self.tokens;
        let mut bdef = Node::tagged(NodeKind::Bdef, &tokens[anchor]);
        let mut named = false;
        let mut control = false;
        let mut seen_paren = false;
        let mut seen_bracket = false;

        loop {
            let i = self.pos;
            let Some(t) = self.tok(i) else {
                return Err(self.expected(i, "`;/` to close the block"));
            };
            if t.class == TokenClass::LineSeparator || t.is_block_marker() {
                break;
            }

            if t.is_delim('(') || t.is_delim('[') {
                let seen = if t.is_delim('(') { &mut seen_paren } else { &mut seen_bracket };
                if *seen {
                    return Err(self.fail(i, "the block header already has a list of this kind"));
                }
                *seen = true;
                let close = self.find_match(i, tokens.len())?;
                let list = if control {
                    self.statement_list(i, i + 1, close)?
                } else if t.is_delim('(') {
                    self.param_list(i, i + 1, close)?
                } else {
                    self.type_list(i, i + 1, close)?
                };
                bdef.push(list);
                self.pos = close + 1;
                continue;
            }

            match t.class {
                TokenClass::DefWord if !control => {
                    if named {
                        return Err(self.fail(i, "the block already has a name or keyword"));
                    }
                    bdef.push(Node::new(NodeKind::Ident, t.clone()));
                    named = true;
                    self.pos += 1;
                }
                TokenClass::Keyword => {
                    let id = t.keyword_id();
                    if named && !matches!(id, Some(KeywordId::Export | KeywordId::Inline | KeywordId::Raw | KeywordId::Override)) {
                        return Err(self.fail(i, "the block already has a name or keyword"));
                    }
                    match id {
                        Some(KeywordId::Export | KeywordId::Inline | KeywordId::Raw | KeywordId::Override) => {
                            bdef.push(Node::new(NodeKind::Keyword, t.clone()));
                            self.pos += 1;
                        }
                        Some(KeywordId::Else) if self.tok(i + 1).is_some_and(|n| n.is_keyword(KeywordId::If)) => {
                            let elif = t.respelled(TokenClass::Keyword, keywords::as_str(KeywordId::Elif));
                            bdef.push(Node::new(NodeKind::Keyword, elif));
                            named = true;
                            control = true;
                            self.pos += 2;
                        }
                        Some(id) if keywords::is_control_block(id) => {
                            bdef.push(Node::new(NodeKind::Keyword, t.clone()));
                            named = true;
                            control = true;
                            self.pos += 1;
                        }
                        Some(KeywordId::Operator) => {
                            let Some(op) = self.tok(i + 1).filter(|o| o.class == TokenClass::Augment) else {
                                return Err(self.expected(i + 1, "an operator after `operator`"));
                            };
                            bdef.push(Node::with_children(
                                NodeKind::Keyword,
                                t.clone(),
                                vec![Node::new(NodeKind::OperatorName, op.clone())],
                            ));
                            named = true;
                            self.pos += 2;
                        }
                        Some(KeywordId::Module | KeywordId::Method) => {
                            let Some(name) = self.tok(i + 1).filter(|n| n.class == TokenClass::DefWord) else {
                                return Err(self.expected(i + 1, &format!("a name after `{}`", t.text)));
                            };
                            bdef.push(Node::with_children(
                                NodeKind::Keyword,
                                t.clone(),
                                vec![Node::new(NodeKind::Ident, name.clone())],
                            ));
                            named = true;
                            self.pos += 2;
                        }
                        _ => return Err(self.fail(i, "unexpected keyword in block header")),
                    }
                }
                _ if control => {
                    // `/; case 1` and `/; if a == b`: a bare condition value.
                    let end = self.value_extent(i, tokens.len())?;
                    let mut stmt = Node::tagged(NodeKind::ValueStatement, t);
                    stmt.push(self.value(i, end)?);
                    bdef.push(stmt);
                    self.pos = end;
                }
                _ => return Err(self.fail(i, "unexpected token in block header")),
            }
        }

        Ok(bdef)
    }
}

/// Spelling of the marker that closes a chain whose last section is `kind`.
fn closer_spelling(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Preprocessor => "`:/` to close the block",
        _ => "`;/` to close the block",
    }
}
