/// Type parsing.
///
/// A type is: qualifiers, then `~` and `{}`/`{len}` prefixes, then a base type (a built-in type or
/// a dotted path of user words), optional generic parameters `(...)`, and for `void` an optional
/// return list `[...]`. In parameter context a trailing `` ` `` is allowed and `static` is not.
impl<'a> Parser<'a> {
    /// Parse a type starting at `lo`, not reading past `hi`.
    ///
    /// Returns the `Type` node and the index of the first token after it.
    fn type_at(&mut self, lo: usize, hi: usize, in_param: bool) -> Result<(Node, usize), CompileError> {
        let Some(first) = self.tok(lo).filter(|_| lo < hi) else {
            return Err(self.expected(lo, "a type"));
        };
        let mut ty = Node::tagged(NodeKind::Type, first);

        self.nested(lo, |p| {
            let tokens = p.tokens;
            let mut i = lo;

            // Qualifiers
            while i < hi {
                let t = &tokens[i];
                match t.keyword_id() {
                    Some(KeywordId::Static) if in_param => {
                        return Err(p.fail(i, "`static` is not allowed on a parameter"));
                    }
                    Some(id) if t.class == TokenClass::Keyword && keywords::is_qualifier(id) => {
                        ty.push(Node::new(NodeKind::Qualifier, t.clone()));
                        i += 1;
                    }
                    _ => break,
                }
            }

            // Pointer and array prefixes
            while i < hi {
                let t = &tokens[i];
                if t.is_operator(OperatorId::Tilde) {
                    ty.push(Node::new(NodeKind::Pointer, t.clone()));
                    i += 1;
                } else if t.is_delim('{') {
                    let close = p.find_match(i, hi)?;
                    let mut array = Node::tagged(NodeKind::Array, t);
                    if close > i + 1 {
                        array.push(p.value(i + 1, close)?);
                    }
                    ty.push(array);
                    i = close + 1;
                } else {
                    break;
                }
            }

            // Base type
            let Some(base) = tokens.get(i).filter(|_| i < hi) else {
                return Err(p.expected(i, "a base type"));
            };
            let mut name = match base.class {
                TokenClass::KeyType => {
                    i += 1;
                    Node::new(NodeKind::TypeName, base.clone())
                }
                TokenClass::DefWord => {
                    while i + 2 < hi
                        && tokens[i + 1].is_operator(OperatorId::Dot)
                        && tokens[i + 2].class == TokenClass::DefWord
                    {
                        ty.push(Node::new(NodeKind::PathSegment, tokens[i].clone()));
                        i += 2;
                    }
                    i += 1;
                    Node::new(NodeKind::TypeName, tokens[i - 1].clone())
                }
                TokenClass::Keyword => return Err(p.fail(i, "unexpected keyword in type")),
                TokenClass::Delimiter => return Err(p.fail(i, "unexpected delimiter in type")),
                _ => return Err(p.fail(i, "unexpected token in type")),
            };

            // Generic parameters, and the return list of a function type
            if i < hi && tokens[i].is_delim('(') {
                let close = p.find_match(i, hi)?;
                name.push(p.type_list(i, i + 1, close)?);
                i = close + 1;

                if base.is_class(TokenClass::KeyType)
                    && base.keyword_id() == Some(KeywordId::Void)
                    && i < hi
                    && tokens[i].is_delim('[')
                {
                    let close = p.find_match(i, hi)?;
                    name.push(p.type_list(i, i + 1, close)?);
                    i = close + 1;
                }
            }
            ty.push(name);

            if in_param && i < hi && tokens[i].is_operator(OperatorId::Backtick) {
                ty.push(Node::new(NodeKind::BackRef, tokens[i].clone()));
                i += 1;
            }

            Ok(i)
        })
        .map(|next| (ty, next))
    }

    /// Return `true` if a type parses at `lo` and is immediately followed by a user word.
    fn is_definition_at(&mut self, lo: usize, hi: usize) -> bool {
        match self.type_at(lo, hi, false) {
            Ok((_, next)) => next < hi && self.tokens[next].class == TokenClass::DefWord,
            Err(_) => false,
        }
    }
}
