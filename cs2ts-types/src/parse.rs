//! Type expression parser.
//!
//! Generic argument lists are located by tracking bracket depth rather than
//! by pattern matching, so nesting depth is unbounded. Array brackets are
//! only recognised once the generic segment has been consumed; brackets
//! inside `<...>` belong to the arguments.

use crate::{Result, TypeError, TypeNode};

/// Parse a source type expression such as `Tuple<List<int[]>, bool>?[,]`.
///
/// The whole string must reduce to a single type; surrounding whitespace is
/// allowed.
///
/// # Errors
///
/// Returns [`TypeError::Malformed`] for unbalanced `<`/`[` brackets, empty
/// names or arguments, and trailing characters.
pub fn parse_type(expr: &str) -> Result<TypeNode> {
    Parser { src: expr }.parse_range(0, expr.len())
}

struct Parser<'a> {
    src: &'a str,
}

impl Parser<'_> {
    /// Parse the type spanning `src[start..end]`.
    fn parse_range(&self, start: usize, end: usize) -> Result<TypeNode> {
        let mut pos = self.skip_whitespace(start, end);

        let name_start = pos;
        pos = self.take_identifier(pos, end);
        if pos == name_start {
            return Err(self.unexpected(pos, end, "expected a type name"));
        }
        let mut node = TypeNode::named(&self.src[name_start..pos]);
        pos = self.skip_whitespace(pos, end);

        if self.peek(pos, end) == Some('<') {
            let close = self.matching_angle(pos, end)?;
            node.generic_arguments = self.parse_arguments(pos + 1, close)?;
            pos = self.skip_whitespace(close + 1, end);
        }

        if self.peek(pos, end) == Some('?') {
            node.is_nullable = true;
            pos = self.skip_whitespace(pos + 1, end);
        }

        while self.peek(pos, end) == Some('[') {
            pos = self.array_suffix(pos, end)?;
            node.array_rank += 1;
            pos = self.skip_whitespace(pos, end);
        }

        if pos < end {
            return Err(self.unexpected(pos, end, "unexpected trailing input"));
        }

        Ok(node)
    }

    /// Split `src[start..end]` on top-level commas and parse each argument.
    fn parse_arguments(&self, start: usize, end: usize) -> Result<Vec<TypeNode>> {
        let mut arguments = Vec::new();
        let mut depth = 0i32;
        let mut piece_start = start;

        for (i, c) in self.src[start..end].char_indices() {
            match c {
                '<' | '[' => depth += 1,
                '>' | ']' => depth -= 1,
                ',' if depth == 0 => {
                    arguments.push(self.parse_argument(piece_start, start + i)?);
                    piece_start = start + i + 1;
                }
                _ => {}
            }
        }
        arguments.push(self.parse_argument(piece_start, end)?);

        Ok(arguments)
    }

    fn parse_argument(&self, start: usize, end: usize) -> Result<TypeNode> {
        if self.src[start..end].trim().is_empty() {
            return Err(TypeError::malformed(
                self.src,
                (start, end - start),
                "empty generic argument",
            ));
        }
        self.parse_range(start, end)
    }

    /// Find the `>` closing the `<` at `open`.
    fn matching_angle(&self, open: usize, end: usize) -> Result<usize> {
        let mut depth = 0usize;
        for (i, c) in self.src[open..end].char_indices() {
            match c {
                '<' => depth += 1,
                '>' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(open + i);
                    }
                }
                _ => {}
            }
        }
        Err(TypeError::malformed(self.src, (open, 1), "unclosed '<'"))
    }

    /// Consume one `[...]` pair holding only commas and whitespace.
    fn array_suffix(&self, open: usize, end: usize) -> Result<usize> {
        let mut pos = open + 1;
        while let Some(c) = self.peek(pos, end) {
            match c {
                ']' => return Ok(pos + 1),
                ',' => pos += 1,
                c if c.is_whitespace() => pos += c.len_utf8(),
                c => {
                    return Err(TypeError::malformed(
                        self.src,
                        (pos, c.len_utf8()),
                        format!("unexpected '{}' inside array brackets", c),
                    ));
                }
            }
        }
        Err(TypeError::malformed(self.src, (open, 1), "unclosed '['"))
    }

    fn peek(&self, pos: usize, end: usize) -> Option<char> {
        self.src[pos..end].chars().next()
    }

    fn skip_whitespace(&self, mut pos: usize, end: usize) -> usize {
        while let Some(c) = self.peek(pos, end).filter(|c| c.is_whitespace()) {
            pos += c.len_utf8();
        }
        pos
    }

    fn take_identifier(&self, mut pos: usize, end: usize) -> usize {
        while let Some(c) = self
            .peek(pos, end)
            .filter(|c| c.is_alphanumeric() || *c == '_')
        {
            pos += c.len_utf8();
        }
        pos
    }

    fn unexpected(&self, pos: usize, end: usize, expected: &str) -> TypeError {
        match self.peek(pos, end) {
            Some(c) => TypeError::malformed(
                self.src,
                (pos, c.len_utf8()),
                format!("{}, found '{}'", expected, c),
            ),
            None => TypeError::malformed(self.src, (pos, 0), expected),
        }
    }
}
