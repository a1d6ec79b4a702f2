use std::borrow::Cow;

use super::{DEFAULT_ATTRIBUTE, tokenize};

/// Tokens starting with one of these are already selector syntax
/// (alias, id, class, child combinator, pseudo, attribute, group).
const RESERVED_LEADS: [char; 8] = ['@', '#', '.', '>', ':', '[', '(', '{'];

/// Anything after one of these inside a token is left as written.
const COMBINATORS: [char; 3] = [':', '>', '~'];

/// Compiles shorthand selectors against a configurable test attribute.
#[derive(Clone, Debug)]
pub struct SelectorCompiler {
    attribute: String,
}

impl Default for SelectorCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE)
    }
}

impl SelectorCompiler {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Compile a shorthand path into a descendant-combinator selector.
    pub fn compile(&self, shorthand: &str) -> String {
        tokenize(shorthand)
            .into_iter()
            .map(|token| self.compile_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Attribute-equality fragment for a single name: `[data-test='name']`.
    pub fn attribute_selector(&self, name: &str) -> String {
        format!("[{}='{}']", self.attribute, name)
    }

    fn compile_token<'t>(&self, token: &'t str) -> Cow<'t, str> {
        if token.starts_with(RESERVED_LEADS) {
            return Cow::Borrowed(token);
        }

        let split = token.find(COMBINATORS).unwrap_or(token.len());
        let (name, rest) = token.split_at(split);
        if name.is_empty() {
            return Cow::Borrowed(token);
        }
        Cow::Owned(format!("{}{rest}", self.attribute_selector(name)))
    }
}

/// Compile with the default `data-test` attribute.
pub fn compile(shorthand: &str) -> String {
    SelectorCompiler::default().compile(shorthand)
}

/// Escape text for a single-quoted selector string such as `:contains('...')`.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if matches!(c, '\\' | '\'') {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}
