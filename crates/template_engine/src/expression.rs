//! Property path expressions.
//!
//! A placeholder's inner text is parsed into a [`PropertyPath`]: a sequence of
//! lookups into nested mappings and lists.
//!
//! ```text
//! error.message        key `error`, then key `message`
//! errors[0].code       key `errors`, element 0, key `code`
//! headers['x-trace']   key `headers`, then key `x-trace`
//! labels.${kind}       key `labels`, then the key that `${kind}` evaluates to
//! ```
//!
//! Paths never fail to evaluate. A lookup that finds nothing yields `None`.

use serde_json::{Map, Value};

use crate::errors::Error;
use crate::scanner::PlaceholderScanner;

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;

/// One step of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Key lookup, written `name` or `['name']`.
    Property(String),
    /// Position lookup, written `[0]`.
    Index(usize),
    /// Key computed by evaluating a nested placeholder.
    Nested(PropertyPath),
}

/// A parsed placeholder expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPath {
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// Parse the inner text of a placeholder.
    ///
    /// Leading and trailing whitespace is ignored. Blank text parses to an
    /// empty path, which always evaluates to `None`.
    pub fn parse(text: &str, scanner: &PlaceholderScanner) -> Result<Self, Error> {
        PathParser::new(text, scanner).parse()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walk the path from `root`.
    pub fn resolve<'v>(&self, root: &'v Map<String, Value>) -> Option<&'v Value> {
        let (first, rest) = self.segments.split_first()?;

        let mut current = match first {
            Segment::Property(name) => root.get(name)?,
            Segment::Nested(path) => root.get(path.resolve_key(root)?.as_str())?,
            Segment::Index(_) => return None,
        };

        for segment in rest {
            current = match segment {
                Segment::Property(name) => member(current, name)?,
                Segment::Index(index) => element(current, *index)?,
                Segment::Nested(path) => member(current, &path.resolve_key(root)?)?,
            };
        }

        Some(current)
    }

    /// Evaluate this path for use as a key inside another path.
    fn resolve_key(&self, root: &Map<String, Value>) -> Option<String> {
        match self.resolve(root)? {
            Value::String(key) => Some(key.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}

fn member<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => items.get(key.parse::<usize>().ok()?),
        _ => None,
    }
}

fn element(value: &Value, index: usize) -> Option<&Value> {
    match value {
        Value::Array(items) => items.get(index),
        Value::Object(map) => map.get(&index.to_string()),
        _ => None,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

struct PathParser<'a> {
    source: &'a str,
    text: &'a str,
    pos: usize,
    scanner: &'a PlaceholderScanner,
}

impl<'a> PathParser<'a> {
    fn new(source: &'a str, scanner: &'a PlaceholderScanner) -> Self {
        Self {
            source,
            text: source.trim(),
            pos: 0,
            scanner,
        }
    }

    fn parse(mut self) -> Result<PropertyPath, Error> {
        let mut segments = Vec::new();
        if self.text.is_empty() {
            return Ok(PropertyPath { segments });
        }

        loop {
            // A path may open with a bracket (`['key']`); after a dot it may not.
            if !(segments.is_empty() && self.rest().starts_with('[')) {
                segments.push(self.member()?);
            }

            while self.rest().starts_with('[') {
                segments.push(self.bracket()?);
            }

            if self.at_end() {
                break;
            }

            if self.rest().starts_with('.') {
                self.pos += 1;
                if self.at_end() {
                    return Err(self.error("empty path segment"));
                }
                continue;
            }

            if self.rest().starts_with(self.prefix()) {
                return Err(self.error("nested placeholder must form a whole path segment"));
            }
            return Err(self.unexpected());
        }

        Ok(PropertyPath { segments })
    }

    fn member(&mut self) -> Result<Segment, Error> {
        if self.rest().starts_with(self.prefix()) {
            return self.nested().map(Segment::Nested);
        }

        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_identifier_char(c) || self.rest().starts_with(self.prefix()) {
                break;
            }
            self.pos += c.len_utf8();
        }

        let name = &self.text[start..self.pos];
        match name.chars().next() {
            None if self.rest().starts_with('.') || self.at_end() => {
                Err(self.error("empty path segment"))
            }
            None if self.rest().starts_with(self.prefix()) => {
                Err(self.error("nested placeholder must form a whole path segment"))
            }
            None => Err(self.unexpected()),
            Some(c) if c.is_ascii_digit() => Err(Error::expression_syntax(
                self.source,
                format!("property name '{name}' must not start with a digit"),
            )),
            Some(_) if self.rest().starts_with(self.prefix()) => {
                Err(self.error("nested placeholder must form a whole path segment"))
            }
            Some(_) => Ok(Segment::Property(name.to_string())),
        }
    }

    fn nested(&mut self) -> Result<PropertyPath, Error> {
        let prefix_len = self.prefix().len();
        let end = self
            .scanner
            .find_placeholder_end(self.text, self.pos)
            .ok_or_else(|| self.error("unterminated nested placeholder"))?;

        let inner = &self.text[self.pos + prefix_len..end];
        let path = PathParser::new(inner, self.scanner).parse()?;
        if path.is_empty() {
            return Err(self.error("empty nested placeholder"));
        }

        self.pos = end + self.scanner.syntax().suffix().len();
        Ok(path)
    }

    fn bracket(&mut self) -> Result<Segment, Error> {
        let open = self.pos;
        self.pos += 1;
        self.skip_whitespace();

        let segment = match self.peek() {
            Some(quote @ ('\'' | '"')) => {
                self.pos += 1;
                let start = self.pos;
                let len = self.rest().find(quote).ok_or_else(|| {
                    Error::expression_syntax(
                        self.source,
                        format!("unterminated string key starting at position {open}"),
                    )
                })?;
                self.pos += len + 1;
                Segment::Property(self.text[start..start + len].to_string())
            }
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
                let digits = &self.text[start..self.pos];
                let index = digits.parse::<usize>().map_err(|_| {
                    Error::expression_syntax(self.source, format!("index '{digits}' is out of range"))
                })?;
                Segment::Index(index)
            }
            Some(_) if self.rest().starts_with(self.prefix()) => {
                Segment::Nested(self.nested()?)
            }
            Some(']') => return Err(self.error("empty brackets")),
            None => {
                return Err(Error::expression_syntax(
                    self.source,
                    format!("unterminated bracket at position {open}"),
                ))
            }
            Some(_) => return Err(self.unexpected()),
        };

        self.skip_whitespace();
        match self.peek() {
            Some(']') => {
                self.pos += 1;
                Ok(segment)
            }
            None => Err(Error::expression_syntax(
                self.source,
                format!("unterminated bracket at position {open}"),
            )),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn prefix(&self) -> &'a str {
        self.scanner.syntax().prefix()
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn unexpected(&self) -> Error {
        match self.peek() {
            Some(c) => self.error(&format!("unexpected character '{c}'")),
            None => self.error("unexpected end of expression"),
        }
    }

    fn error(&self, reason: &str) -> Error {
        Error::expression_syntax(self.source, format!("{reason} at position {}", self.pos))
    }
}
