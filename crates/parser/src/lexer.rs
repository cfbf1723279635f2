//! Character-level scanning for SLANG source lines.
//!
//! Whitespace between tokens is optional everywhere, so the scanner works
//! on characters rather than whitespace-separated words: `X1<-X1+1` and
//! `IF X1 != 0 GOTO A` are both valid.

/// A cursor over a single, already uppercased line.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Skip any whitespace.
    pub(crate) fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Consume `token` if the remaining input starts with it.
    pub(crate) fn eat(&mut self, token: &str) -> bool {
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Skip whitespace, then consume `token`.
    pub(crate) fn eat_ws(&mut self, token: &str) -> bool {
        self.skip_ws();
        self.eat(token)
    }

    /// Consume the longest prefix whose characters satisfy `pred`.
    pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    /// Consume a register name: one of `X`, `Y`, `Z` followed by digits.
    pub(crate) fn register(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let start = self.rest;
        if !self.rest.starts_with(|c: char| matches!(c, 'X' | 'Y' | 'Z')) {
            return None;
        }
        self.rest = &self.rest[1..];
        let digits = self.take_while(|c| c.is_ascii_digit());
        Some(&start[..1 + digits.len()])
    }

    /// Consume a label name: one or more ASCII letters or digits.
    pub(crate) fn label(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let name = self.take_while(|c| c.is_ascii_alphanumeric());
        (!name.is_empty()).then_some(name)
    }

    /// Returns true if only whitespace remains.
    pub(crate) fn at_end(&mut self) -> bool {
        self.skip_ws();
        self.rest.is_empty()
    }

    /// The unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        self.rest
    }
}

/// Returns true for lines the parser ignores entirely.
///
/// `line` must already be trimmed. Comments start with `#` and run to the
/// end of the line.
pub(crate) fn is_blank_or_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Split an optional leading `[NAME]` label from a trimmed, uppercased line.
///
/// Returns the label name (if any) and the remaining instruction text,
/// trimmed. Whitespace inside the brackets is allowed. A bracketed run
/// that is not a well-formed label is left in place as instruction text.
pub(crate) fn split_label(line: &str) -> (Option<&str>, &str) {
    let mut cursor = Cursor::new(line);
    if !cursor.eat("[") {
        return (None, line);
    }
    let Some(name) = cursor.label() else {
        return (None, line);
    };
    if !cursor.eat_ws("]") {
        return (None, line);
    }
    (Some(name), cursor.rest().trim())
}
