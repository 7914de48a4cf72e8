/// Bracketed lists.
///
/// Every list function takes the index of its opening delimiter (used to position the list node)
/// and the `[lo, hi)` range between the delimiters.
///
/// ## Notes
/// - Parameter lists emit a `Type` node only when the type changes: `(int a, b, ~char c)` becomes
///   `[Type, Ident, Ident, Type, Ident]`.
/// - Statement lists belong to control blocks (`/; loop (int i = 0; i < n) [i++]`) and accept
///   `;` or `,` between statements.
impl<'a> Parser<'a> {
    fn is_comma(t: &Token) -> bool {
        t.class == TokenClass::InlineSeparator
    }

    /// `a, b, c` as a `ValueList`.
    fn value_list(&mut self, open: usize, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let mut list = Node::tagged(NodeKind::ValueList, &self.tokens[open]);
        for (a, b) in self.split_items(lo, hi, Self::is_comma)? {
            list.push(self.value(a, b)?);
        }
        Ok(list)
    }

    /// `T, U` as a `TypeList`.
    fn type_list(&mut self, open: usize, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let mut list = Node::tagged(NodeKind::TypeList, &self.tokens[open]);
        for (a, b) in self.split_items(lo, hi, Self::is_comma)? {
            let (ty, next) = self.type_at(a, b, false)?;
            if next != b {
                return Err(self.fail(next, "unexpected token in type list"));
            }
            list.push(ty);
        }
        Ok(list)
    }

    /// `int a, b, ~char c` as a `ParamList`.
    fn param_list(&mut self, open: usize, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let tokens = self.tokens;
        let mut list = Node::tagged(NodeKind::ParamList, &tokens[open]);
        let mut have_type = false;

        for (a, b) in self.split_items(lo, hi, Self::is_comma)? {
            if a == b {
                return Err(self.expected(b, "a parameter"));
            }

            if b - a == 1 && tokens[a].class == TokenClass::DefWord {
                if !have_type {
                    return Err(self.fail(a, "expected type before first parameter"));
                }
                list.push(Node::new(NodeKind::Ident, tokens[a].clone()));
                continue;
            }

            let (ty, next) = self.type_at(a, b, true)?;
            if next >= b {
                return Err(self.expected(next, "a parameter name"));
            }
            if next + 1 != b || tokens[next].class != TokenClass::DefWord {
                return Err(self.fail(next, "expected a parameter name"));
            }
            list.push(ty);
            list.push(Node::new(NodeKind::Ident, tokens[next].clone()));
            have_type = true;
        }

        Ok(list)
    }

    /// `int i = 0; i < n` as a `StatementList` of `Define` and `value` nodes.
    fn statement_list(&mut self, open: usize, lo: usize, hi: usize) -> Result<Node, CompileError> {
        let mut list = Node::tagged(NodeKind::StatementList, &self.tokens[open]);
        let items = self.split_items(lo, hi, |t| {
            t.class == TokenClass::InlineSeparator || t.is_line_sep(';')
        })?;
        for (a, b) in items {
            if a == b {
                continue;
            }
            list.push(self.simple_statement(a, b)?);
        }
        Ok(list)
    }
}
