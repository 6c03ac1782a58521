//! Placeholder scanning.
//!
//! The scanner walks a template left to right looking for `prefix ... suffix`
//! tokens. Matching suffixes are found by counting nested openers rather than
//! with a regular expression, so `${outer.${inner}}` is a single token whose
//! inner text contains another token. Inner tokens are resolved before the
//! token that encloses them.

use crate::errors::Error;

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;

/// Default placeholder prefix.
pub const DEFAULT_PREFIX: &str = "${";

/// Default placeholder suffix.
pub const DEFAULT_SUFFIX: &str = "}";

/// Suffixes whose opening counterpart is tracked as a nesting opener when the
/// prefix ends with it.
const WELL_KNOWN_OPENERS: [(&str, &str); 3] = [("}", "{"), ("]", "["), (")", "(")];

/// The delimiter pair that marks a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSyntax {
    prefix: String,
    suffix: String,
}

impl PlaceholderSyntax {
    /// Create a delimiter pair. Both delimiters must be non-empty.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Result<Self, Error> {
        let prefix = prefix.into();
        let suffix = suffix.into();

        if prefix.is_empty() {
            return Err(Error::InvalidSyntax("prefix must not be empty".to_string()));
        }
        if suffix.is_empty() {
            return Err(Error::InvalidSyntax("suffix must not be empty".to_string()));
        }

        Ok(Self { prefix, suffix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Wrap `text` back into the delimiters.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix, text, self.suffix)
    }

    /// The marker that opens a nesting level inside a placeholder.
    ///
    /// For `${` / `}` this is `{`, which keeps bare braces inside a placeholder
    /// balanced. Otherwise the full prefix is used.
    fn nesting_opener(&self) -> &str {
        WELL_KNOWN_OPENERS
            .iter()
            .find(|(suffix, opener)| self.suffix == *suffix && self.prefix.ends_with(opener))
            .map(|(_, opener)| *opener)
            .unwrap_or(self.prefix.as_str())
    }
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// A placeholder found by the scanner and handed to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    raw: &'a str,
    text: &'a str,
}

impl<'a> Placeholder<'a> {
    /// Inner text exactly as written in the template, nested tokens included.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Inner text after nested tokens have been substituted.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// Finds placeholders in a template and rebuilds the text with the values a
/// resolver returns for them.
///
/// Substituted values are emitted as-is and never scanned again, so a value
/// that happens to contain `${...}` cannot inject further placeholders.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderScanner {
    syntax: PlaceholderSyntax,
}

impl PlaceholderScanner {
    pub fn new(syntax: PlaceholderSyntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &PlaceholderSyntax {
        &self.syntax
    }

    /// Rebuild `template`, replacing each placeholder with what `resolve`
    /// returns for it.
    ///
    /// `resolve` is called innermost-first, depth-first, left to right.
    /// Returning `None` emits nothing for that placeholder. A prefix without a
    /// matching suffix, and everything after it, is copied verbatim.
    ///
    /// ```rust
    /// use template_engine::PlaceholderScanner;
    ///
    /// let scanner = PlaceholderScanner::default();
    /// let output = scanner.scan("Hello ${name}!", |p| Some(p.text().to_uppercase()));
    /// assert_eq!(output, "Hello NAME!");
    /// ```
    pub fn scan<F>(&self, template: &str, mut resolve: F) -> String
    where
        F: FnMut(&Placeholder<'_>) -> Option<String>,
    {
        self.scan_with(template, &mut resolve)
    }

    fn scan_with<F>(&self, text: &str, resolve: &mut F) -> String
    where
        F: FnMut(&Placeholder<'_>) -> Option<String>,
    {
        let prefix = self.syntax.prefix();
        let suffix = self.syntax.suffix();

        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;

        while let Some(offset) = text[cursor..].find(prefix) {
            let start = cursor + offset;
            let Some(end) = self.find_placeholder_end(text, start) else {
                break;
            };

            output.push_str(&text[cursor..start]);

            let raw = &text[start + prefix.len()..end];
            let substituted = self.scan_with(raw, resolve);
            let placeholder = Placeholder {
                raw,
                text: &substituted,
            };
            if let Some(value) = resolve(&placeholder) {
                output.push_str(&value);
            }

            cursor = end + suffix.len();
        }

        output.push_str(&text[cursor..]);
        output
    }

    /// Byte index of the suffix closing the placeholder whose prefix starts at
    /// `start`, or `None` if it is never closed.
    pub fn find_placeholder_end(&self, text: &str, start: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let suffix = self.syntax.suffix().as_bytes();
        let opener = self.syntax.nesting_opener().as_bytes();

        let mut index = start + self.syntax.prefix().len();
        let mut depth = 0usize;

        while index < bytes.len() {
            if bytes[index..].starts_with(suffix) {
                if depth == 0 {
                    return Some(index);
                }
                depth -= 1;
                index += suffix.len();
            } else if bytes[index..].starts_with(opener) {
                depth += 1;
                index += opener.len();
            } else {
                index += 1;
            }
        }

        None
    }
}
